use crate::error::Result;
use crate::executor::Executor;
use crate::plan::{RenameStep, Verb};
use crate::report::Reporter;
use crate::transform::{Outcome, TransformPipeline};
use std::ffi::OsString;

/// Options for a transform-mode run.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
    /// Move or copy each renamed file.
    pub verb: Verb,
    /// Overwrite an existing destination instead of skipping.
    pub force: bool,
    /// Report intended actions without touching the filesystem.
    pub dry_run: bool,
}

/// Result of a transform run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Actions performed (or simulated in dry-run).
    pub renamed: usize,
    /// Names the transform left byte-identical.
    pub unchanged: usize,
    /// Skipped because the destination already exists and force is unset.
    pub skipped: usize,
    /// OS-level action failures (warned, processing continued).
    pub failed: usize,
}

/// Run the transform pipeline over every input in order.
///
/// Pipeline errors (broken expression, codec rejection) abort the run;
/// per-item conditions never do. The destination-collision probe happens
/// here, before dry-run short-circuiting, so a collision is skipped whether
/// or not the action would have been simulated.
pub fn transform_operation(
    inputs: &[OsString],
    pipeline: &mut TransformPipeline,
    options: &TransformOptions,
    reporter: &Reporter,
) -> Result<TransformSummary> {
    let executor = Executor::new(options.dry_run);
    let mut summary = TransformSummary::default();

    for input in inputs {
        match pipeline.process(input)? {
            Outcome::Unchanged => {
                reporter.unchanged(input);
                summary.unchanged += 1;
            },
            Outcome::Renamed { source, dest } => {
                if !options.force && dest.exists() {
                    reporter.collision(&source, &dest);
                    summary.skipped += 1;
                    continue;
                }

                let step = RenameStep { source, dest };
                reporter.action(options.verb, &step);
                match executor.apply(options.verb, &step) {
                    Ok(()) => summary.renamed += 1,
                    Err(err) => {
                        reporter.action_failed(&err);
                        summary.failed += 1;
                    },
                }
            },
        }
    }

    Ok(summary)
}
