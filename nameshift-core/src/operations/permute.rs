use crate::error::Result;
use crate::executor::Executor;
use crate::permute::plan_permutation;
use crate::plan::{PermutationMode, Verb};
use crate::report::Reporter;
use std::path::PathBuf;

/// Result of a permutation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermuteSummary {
    /// Rename steps performed (or simulated), including the placeholder hops.
    pub steps: usize,
}

/// Plan and execute one cyclic permutation.
///
/// Any step failure is fatal: a partially applied cycle leaves the
/// filesystem in an inconsistent intermediate state that must be surfaced,
/// not masked by continuing to scramble the remaining pairs.
pub fn permute_operation(
    paths: &[PathBuf],
    mode: PermutationMode,
    dry_run: bool,
    reporter: &Reporter,
) -> Result<PermuteSummary> {
    let steps = plan_permutation(paths, mode)?;
    let executor = Executor::new(dry_run);

    for step in &steps {
        reporter.action(Verb::Rename, step);
        executor.apply(Verb::Rename, step)?;
    }

    Ok(PermuteSummary { steps: steps.len() })
}
