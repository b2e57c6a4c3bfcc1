use crate::codec::CodecPair;
use crate::error::{Error, Result};
use crate::pathname::{join_name, name_from_bytes, name_to_bytes, split_name};
use std::ffi::OsStr;
use std::path::PathBuf;

/// User-supplied per-name rewriting rule.
///
/// Called exactly once per input name, in input order. `seq` starts at 1 and
/// increments once per input whether or not the name changes. Failures abort
/// the whole run: a broken rule is a configuration error, not a per-file
/// condition.
pub trait NameTransform {
    fn transform(&mut self, seq: u64, name: &str) -> Result<String>;
}

impl<F> NameTransform for F
where
    F: FnMut(u64, &str) -> Result<String>,
{
    fn transform(&mut self, seq: u64, name: &str) -> Result<String> {
        self(seq, name)
    }
}

/// Result of processing one input name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The transform produced a different name.
    Renamed { source: PathBuf, dest: PathBuf },
    /// Output bytes equal the input bytes; nothing to do.
    Unchanged,
}

/// Per-name transformation pipeline: decode, scope, transform, encode.
///
/// The pipeline never touches the filesystem; collision probing and action
/// execution belong to the caller.
pub struct TransformPipeline {
    transform: Box<dyn NameTransform>,
    codec: Option<CodecPair>,
    filename_only: bool,
    seq: u64,
}

impl TransformPipeline {
    pub fn new(
        transform: Box<dyn NameTransform>,
        codec: Option<CodecPair>,
        filename_only: bool,
    ) -> Self {
        Self {
            transform,
            codec,
            filename_only,
            seq: 0,
        }
    }

    /// Sequence number of the most recently processed input (0 before the
    /// first call).
    pub fn sequence(&self) -> u64 {
        self.seq
    }

    /// Produce the output name for one input, advancing the counter.
    ///
    /// The result is compared byte-for-byte against the original input, so a
    /// decode/encode round trip that happens to reproduce the input reports
    /// `Unchanged` rather than a no-op rename.
    pub fn process(&mut self, input: &OsStr) -> Result<Outcome> {
        self.seq += 1;

        let raw = name_to_bytes(input)?;
        let decoded = match &self.codec {
            Some(codec) => codec.decode(&raw)?,
            None => String::from_utf8(raw.clone()).map_err(|_| {
                Error::transcode(input.to_string_lossy(), "name is not valid UTF-8")
            })?,
        };

        let rewritten = if self.filename_only {
            let (prefix, base) = split_name(&decoded);
            let new_base = self.transform.transform(self.seq, base)?;
            join_name(prefix, &new_base)
        } else {
            self.transform.transform(self.seq, &decoded)?
        };

        let encoded = match &self.codec {
            Some(codec) => codec.encode(&rewritten)?,
            None => rewritten.into_bytes(),
        };

        if encoded == raw {
            return Ok(Outcome::Unchanged);
        }

        Ok(Outcome::Renamed {
            source: PathBuf::from(input),
            dest: PathBuf::from(name_from_bytes(encoded)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn pipeline_with<F>(transform: F, filename_only: bool) -> TransformPipeline
    where
        F: FnMut(u64, &str) -> Result<String> + 'static,
    {
        TransformPipeline::new(Box::new(transform), None, filename_only)
    }

    #[test]
    fn test_identity_transform_reports_unchanged() {
        let mut pipeline = pipeline_with(|_, name: &str| Ok(name.to_string()), false);
        let outcome = pipeline.process(OsStr::new("file.txt")).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_changed_name_reports_both_paths() {
        let mut pipeline = pipeline_with(|_, name: &str| Ok(name.replace(".tmp", ".txt")), false);
        let outcome = pipeline.process(OsStr::new("draft.tmp")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Renamed {
                source: PathBuf::from("draft.tmp"),
                dest: PathBuf::from("draft.txt"),
            }
        );
    }

    #[test]
    fn test_counter_increments_once_per_input_regardless_of_outcome() {
        let mut pipeline = pipeline_with(
            |seq, name: &str| {
                if seq == 2 {
                    Ok(name.to_string())
                } else {
                    Ok(format!("{seq}-{name}"))
                }
            },
            false,
        );

        assert!(matches!(
            pipeline.process(OsStr::new("a")).unwrap(),
            Outcome::Renamed { dest, .. } if dest == PathBuf::from("1-a")
        ));
        assert_eq!(pipeline.process(OsStr::new("b")).unwrap(), Outcome::Unchanged);
        assert!(matches!(
            pipeline.process(OsStr::new("c")).unwrap(),
            Outcome::Renamed { dest, .. } if dest == PathBuf::from("3-c")
        ));
        assert_eq!(pipeline.sequence(), 3);
    }

    #[test]
    fn test_filename_only_scopes_transform_to_base_name() {
        let mut pipeline = pipeline_with(|_, name: &str| Ok(name.to_uppercase()), true);
        let outcome = pipeline.process(OsStr::new("some/dir/file.txt")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Renamed {
                source: PathBuf::from("some/dir/file.txt"),
                dest: PathBuf::from("some/dir/FILE.TXT"),
            }
        );
    }

    #[test]
    fn test_whole_path_transformed_without_scoping() {
        let mut pipeline = pipeline_with(|_, name: &str| Ok(name.to_uppercase()), false);
        let outcome = pipeline.process(OsStr::new("some/dir/file.txt")).unwrap();
        assert!(matches!(
            outcome,
            Outcome::Renamed { dest, .. } if dest == PathBuf::from("SOME/DIR/FILE.TXT")
        ));
    }

    #[test]
    fn test_transform_failure_propagates() {
        let mut pipeline = pipeline_with(
            |_, _: &str| Err(Error::invalid_input("boom")),
            false,
        );
        assert!(pipeline.process(OsStr::new("a")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_without_codec_is_fatal() {
        use std::os::unix::ffi::OsStringExt;
        let name = OsString::from_vec(vec![0x66, 0xE9]);
        let mut pipeline = pipeline_with(|_, name: &str| Ok(name.to_string()), false);
        assert!(matches!(
            pipeline.process(&name).unwrap_err(),
            Error::Transcode { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_codec_bridges_non_utf8_names() {
        use std::os::unix::ffi::OsStringExt;
        // "fé.txt" in latin1 bytes; identity transform, re-encoded as UTF-8
        let name = OsString::from_vec(vec![0x66, 0xE9, 0x2E, 0x74, 0x78, 0x74]);
        let codec = CodecPair::from_spec("latin1,utf-8").unwrap();
        let mut pipeline = TransformPipeline::new(
            Box::new(|_, name: &str| -> Result<String> { Ok(name.to_string()) }),
            Some(codec),
            false,
        );
        let outcome = pipeline.process(&name).unwrap();
        assert!(matches!(
            outcome,
            Outcome::Renamed { dest, .. } if dest == PathBuf::from("f\u{e9}.txt")
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_codec_round_trip_is_unchanged() {
        use std::os::unix::ffi::OsStringExt;
        let name = OsString::from_vec(vec![0x66, 0xE9, 0x2E, 0x74, 0x78, 0x74]);
        let codec = CodecPair::from_spec("latin1").unwrap();
        let mut pipeline = TransformPipeline::new(
            Box::new(|_, name: &str| -> Result<String> { Ok(name.to_string()) }),
            Some(codec),
            false,
        );
        assert_eq!(pipeline.process(&name).unwrap(), Outcome::Unchanged);
    }
}
