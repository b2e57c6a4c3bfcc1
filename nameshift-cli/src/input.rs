use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::Read;

/// Ordered input names for a run: command-line arguments as given, or names
/// read from standard input when no arguments were supplied.
///
/// Argument names arrive already shell-expanded; stdin-sourced names get
/// wildcard expansion here, since no shell has seen them.
pub fn collect_inputs(args: &[OsString], null_delimited: bool) -> Result<Vec<OsString>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context("failed to read names from stdin")?;

    let delimiter = if null_delimited { b'\0' } else { b'\n' };
    let mut inputs = Vec::new();
    for piece in buf.split(|byte| *byte == delimiter) {
        let piece = if null_delimited {
            piece
        } else {
            // tolerate CRLF input
            piece.strip_suffix(b"\r").unwrap_or(piece)
        };
        if piece.is_empty() {
            continue;
        }
        expand_into(piece, &mut inputs)?;
    }

    Ok(inputs)
}

/// Append one stdin-sourced name, expanding shell-style wildcards when the
/// pattern matches at least one entry; a non-matching or non-UTF-8 name is
/// kept literal.
fn expand_into(piece: &[u8], inputs: &mut Vec<OsString>) -> Result<()> {
    if let Ok(pattern) = std::str::from_utf8(piece) {
        if pattern.contains(['*', '?', '[']) {
            let matches: Vec<OsString> = glob::glob(pattern)
                .with_context(|| format!("invalid wildcard pattern '{pattern}'"))?
                .filter_map(std::result::Result::ok)
                .map(std::path::PathBuf::into_os_string)
                .collect();
            if !matches.is_empty() {
                inputs.extend(matches);
                return Ok(());
            }
        }
    }

    inputs.push(bytes_to_os_string(piece));
    Ok(())
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes.to_vec())
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}
