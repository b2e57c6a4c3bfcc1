use crate::error::{Error, Result};
use crate::plan::{RenameStep, Verb};
use std::fs;

/// Shared output primitive for both pipelines: performs or simulates one
/// move/copy/rename step.
#[derive(Debug, Clone, Copy)]
pub struct Executor {
    dry_run: bool,
}

impl Executor {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Apply one step. Dry-run always succeeds without touching the
    /// filesystem. Move and rename both map to the OS rename primitive,
    /// which is atomic only within one volume; cross-volume failures
    /// surface as ordinary action errors.
    pub fn apply(&self, verb: Verb, step: &RenameStep) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        let result = match verb {
            Verb::Move | Verb::Rename => fs::rename(&step.source, &step.dest),
            Verb::Copy => fs::copy(&step.source, &step.dest).map(|_| ()),
        };

        result.map_err(|source| Error::Action {
            verb,
            from: step.source.clone(),
            to: step.dest.clone(),
            source,
        })
    }
}
