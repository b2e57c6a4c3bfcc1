use crate::error::{Error, Result};
use crate::plan::{PermutationMode, RenameStep};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Plan a cyclic permutation of `paths` as an ordered list of two-argument
/// renames through a single placeholder name.
///
/// All preconditions are checked here, before any step is produced: every
/// path must exist, paths must be distinct, swap/flip need an even-length
/// list, and the placeholder must not collide with an existing entry. The
/// returned steps must be applied strictly in order; the first step vacates
/// into the free placeholder slot and every later destination was vacated by
/// the step immediately before it.
pub fn plan_permutation(paths: &[PathBuf], mode: PermutationMode) -> Result<Vec<RenameStep>> {
    if paths.is_empty() {
        return Err(Error::invalid_input("at least one path is required"));
    }
    if mode.requires_pairs() && paths.len() % 2 != 0 {
        return Err(Error::invalid_input(format!(
            "{mode} requires an even number of paths, got {}",
            paths.len()
        )));
    }

    let mut seen = HashSet::new();
    for path in paths {
        // symlink-aware: a dangling link still occupies its name
        if path.symlink_metadata().is_err() {
            return Err(Error::MissingPath(path.clone()));
        }
        if !seen.insert(path) {
            return Err(Error::invalid_input(format!(
                "duplicate path '{}'",
                path.display()
            )));
        }
    }

    let placeholder = placeholder_name(&paths[0])?;
    let chain = build_chain(paths, mode, &placeholder);

    Ok(chain
        .windows(2)
        .map(|pair| RenameStep::new(pair[1].clone(), pair[0].clone()))
        .collect())
}

/// Synthesize the temporary name used to break the cycle: a process-unique
/// dotfile next to the first path, existence-checked exactly once so that
/// planning stays free of side effects.
fn placeholder_name(first: &Path) -> Result<PathBuf> {
    let dir = first.parent().unwrap_or_else(|| Path::new(""));
    let candidate = dir.join(format!(".nameshift-{}.tmp", std::process::id()));
    if candidate.symlink_metadata().is_ok() {
        return Err(Error::invalid_input(format!(
            "placeholder '{}' already exists",
            candidate.display()
        )));
    }
    Ok(candidate)
}

/// Logical slot chain for a mode. Walking the chain front to back and
/// renaming each element onto its predecessor realizes the permutation.
fn build_chain(paths: &[PathBuf], mode: PermutationMode, placeholder: &Path) -> Vec<PathBuf> {
    let tmp = placeholder.to_path_buf();
    let mut chain = Vec::with_capacity(paths.len() + paths.len() / 2 + 2);
    chain.push(tmp.clone());

    match mode {
        PermutationMode::RotateLeft => {
            chain.extend(paths.iter().cloned());
            chain.push(tmp);
        },
        PermutationMode::RotateRight => {
            chain.extend(paths.iter().rev().cloned());
            chain.push(tmp);
        },
        PermutationMode::Swap => {
            for pair in paths.chunks(2) {
                chain.push(pair[0].clone());
                chain.push(pair[1].clone());
                chain.push(tmp.clone());
            }
        },
        PermutationMode::Flip => {
            let n = paths.len();
            for i in 0..n / 2 {
                chain.push(paths[n - 1 - i].clone());
                chain.push(paths[i].clone());
                chain.push(tmp.clone());
            }
        },
    }

    chain
}
