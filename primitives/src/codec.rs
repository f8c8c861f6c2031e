//! Deterministic JSON encoding for stored `Handler` records.
//!
//! Records are written as a compact JSON object with a single `value` key,
//! e.g. `{"value":"set value"}`. External tooling reads these bytes straight
//! out of world state, so the output must be byte-stable:
//!
//! - No whitespace between tokens
//! - `<`, `>` and `&` are written as `\u003c`, `\u003e`, `\u0026`
//! - U+2028 and U+2029 are written as `\u2028`, `\u2029`
//!
//! The escaping rules match the platform's reference JSON encoder, so a
//! record written by this chaincode is identical to one written by any
//! other chaincode on the same channel.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::handler::Handler;

/// Compact formatter that additionally escapes HTML-significant characters
/// and the JavaScript line terminators.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            let escape: &[u8] = match ch {
                '<' => b"\\u003c",
                '>' => b"\\u003e",
                '&' => b"\\u0026",
                '\u{2028}' => b"\\u2028",
                '\u{2029}' => b"\\u2029",
                _ => continue,
            };
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            writer.write_all(escape)?;
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serialize any value with the stored-record formatting rules.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Encode a `Handler` into the bytes stored in world state.
pub fn encode_handler(handler: &Handler) -> Result<Vec<u8>, serde_json::Error> {
    to_vec(handler)
}

/// Decode world state bytes into a `Handler`.
///
/// Fails unless the bytes are a JSON object (or `null`) whose `value`
/// field, when present, is a string.
pub fn decode_handler(bytes: &[u8]) -> Result<Handler, serde_json::Error> {
    serde_json::from_slice(bytes)
}
