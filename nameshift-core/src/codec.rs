use crate::error::{Error, Result};
use encoding_rs::Encoding;

/// Decode/encode pair applied around the name transform.
///
/// Decode runs on the raw name bytes before the transform, encode on the
/// transformed text after; the pair never sees the path decomposition.
/// Both directions are strict: malformed input bytes and unmappable output
/// characters are errors, not replacement characters.
#[derive(Debug, Clone, Copy)]
pub struct CodecPair {
    decoder: &'static Encoding,
    encoder: &'static Encoding,
}

impl CodecPair {
    pub fn new(decoder: &'static Encoding, encoder: &'static Encoding) -> Self {
        Self { decoder, encoder }
    }

    /// Parse a `DECODE[,ENCODE]` specification. With a single codec name the
    /// same codec is used for both directions.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let mut labels = spec.splitn(2, ',');
        let decode_label = labels.next().unwrap_or("").trim();
        let decoder = lookup(decode_label)?;
        let encoder = match labels.next() {
            Some(label) => lookup(label.trim())?,
            None => decoder,
        };
        Ok(Self::new(decoder, encoder))
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let (text, _, had_errors) = self.decoder.decode(bytes);
        if had_errors {
            return Err(Error::transcode(
                String::from_utf8_lossy(bytes),
                format!("invalid {} byte sequence", self.decoder.name()),
            ));
        }
        Ok(text.into_owned())
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let (bytes, _, had_errors) = self.encoder.encode(text);
        if had_errors {
            return Err(Error::transcode(
                text,
                format!("name cannot be represented in {}", self.encoder.name()),
            ));
        }
        Ok(bytes.into_owned())
    }
}

fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnknownCodec(label.to_string()))
}
