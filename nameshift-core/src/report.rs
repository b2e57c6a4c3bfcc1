use crate::error::Error;
use crate::plan::{RenameStep, Verb};
use nu_ansi_term::Color;
use std::ffi::OsStr;
use std::path::Path;

/// Console reporting for both pipelines: one line per attempted action,
/// single-line warnings for skip conditions.
///
/// Action lines are shown when verbose or dry-run; `unchanged` warnings only
/// when verbose; collision and action-failure warnings always.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
    trace_actions: bool,
    use_color: bool,
}

impl Reporter {
    pub fn new(verbose: bool, dry_run: bool, use_color: bool) -> Self {
        Self {
            verbose,
            trace_actions: verbose || dry_run,
            use_color,
        }
    }

    /// Report one attempted (real or simulated) step. Called exactly once
    /// per attempt, before the executor runs.
    pub fn action(&self, verb: Verb, step: &RenameStep) {
        if self.trace_actions {
            println!(
                "{verb} '{}' '{}'",
                step.source.display(),
                step.dest.display()
            );
        }
    }

    pub fn unchanged(&self, name: &OsStr) {
        if self.verbose {
            self.warn(&format!("'{}' unchanged", Path::new(name).display()));
        }
    }

    pub fn collision(&self, source: &Path, dest: &Path) {
        self.warn(&format!(
            "'{}' not renamed: '{}' already exists",
            source.display(),
            dest.display()
        ));
    }

    pub fn action_failed(&self, err: &Error) {
        self.warn(&err.to_string());
    }

    fn warn(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {message}", Color::Yellow.paint("warning:"));
        } else {
            eprintln!("warning: {message}");
        }
    }
}
