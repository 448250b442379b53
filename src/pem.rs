//! PEM armor decoding.
//!
//! This is deliberately laxer than RFC 7468: the label is not checked
//! beyond ending in `KEY`, line width is ignored, and input without any
//! armor at all is treated as a raw base64 body. Keys copy-pasted out of
//! configuration files rarely survive with their formatting intact.

use alloc::vec::Vec;

use base64ct::{Base64, Encoding};

use crate::errors::{Error, Result};

const BEGIN_MARKER: &str = "-----BEGIN";
const LABEL_END_MARKER: &str = "KEY-----";
const END_MARKER: &str = "-----END";

/// Decode a PEM-armored (or bare base64) key into raw DER bytes.
///
/// When a `-----BEGIN ... KEY-----` boundary is present, the body up to
/// the matching `-----END` is decoded; otherwise the whole input is taken
/// as base64. Whitespace and any other byte outside the base64 alphabet
/// are ignored wherever they occur in the body.
///
/// The output may still carry an X.509 wrapper; chain into
/// [`crate::x509::strip_x509_header`] before handing it to a PKCS#1
/// parser.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let text = core::str::from_utf8(input).map_err(|_| Error::NotTextDecodable)?;

    let body = match text.find(BEGIN_MARKER) {
        None => text,
        Some(begin) => {
            let after_begin = &text[begin + BEGIN_MARKER.len()..];
            let label_end = after_begin
                .find(LABEL_END_MARKER)
                .ok_or(Error::MalformedArmor)?;
            let after_label = &after_begin[label_end + LABEL_END_MARKER.len()..];
            let end = after_label.find(END_MARKER).ok_or(Error::MalformedArmor)?;
            after_label[..end].trim()
        }
    };

    let filtered: Vec<u8> = body
        .bytes()
        .filter(|&byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'='))
        .collect();
    let filtered = core::str::from_utf8(&filtered).map_err(|_| Error::NotBase64Decodable)?;

    Base64::decode_vec(filtered).map_err(|_| Error::NotBase64Decodable)
}
