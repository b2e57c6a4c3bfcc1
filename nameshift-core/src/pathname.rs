use crate::error::Result;
#[cfg(not(unix))]
use crate::error::Error;
use std::ffi::{OsStr, OsString};

/// Split a textual path into its directory prefix (including the trailing
/// separator) and base name. The two halves always concatenate back to the
/// input, so `join_name(split_name(s)) == s`.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind(is_separator) {
        Some(idx) => name.split_at(idx + 1),
        None => ("", name),
    }
}

/// Inverse of `split_name`.
pub fn join_name(prefix: &str, base: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + base.len());
    joined.push_str(prefix);
    joined.push_str(base);
    joined
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Raw bytes of a name as the filesystem stores them. On non-Unix platforms
/// names must already be valid UTF-8.
#[cfg(unix)]
pub fn name_to_bytes(name: &OsStr) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(name.as_bytes().to_vec())
}

#[cfg(not(unix))]
pub fn name_to_bytes(name: &OsStr) -> Result<Vec<u8>> {
    name.to_str()
        .map(|s| s.as_bytes().to_vec())
        .ok_or_else(|| {
            Error::transcode(
                name.to_string_lossy(),
                "name is not valid UTF-8",
            )
        })
}

/// Rebuild a filesystem name from raw bytes produced by the encode step.
#[cfg(unix)]
pub fn name_from_bytes(bytes: Vec<u8>) -> Result<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Ok(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
pub fn name_from_bytes(bytes: Vec<u8>) -> Result<OsString> {
    String::from_utf8(bytes)
        .map(OsString::from)
        .map_err(|err| {
            Error::transcode(
                String::from_utf8_lossy(err.as_bytes()),
                "encoded name is not valid UTF-8",
            )
        })
}
