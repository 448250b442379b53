//! Minimal DER support for the PKCS#1 `RSAPublicKey` structure.
//!
//! This module covers exactly the two pieces of ASN.1 an RSA-signing JWT
//! implementation cannot delegate: definite-length octets and the
//! `SEQUENCE { INTEGER n, INTEGER e }` layout described in
//! [RFC 8017 Appendix A.1.1].
//!
//! [RFC 8017 Appendix A.1.1]: https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1.1

use alloc::vec::Vec;

use crate::errors::{Error, Result};

/// ASN.1 SEQUENCE tag.
pub(crate) const TAG_SEQUENCE: u8 = 0x30;

/// ASN.1 INTEGER tag.
pub(crate) const TAG_INTEGER: u8 = 0x02;

/// Encode `n` as DER definite-length octets.
///
/// Values below 128 use the short form (the single byte `n`); anything
/// larger uses the long form: `0x80 | k` followed by the `k` minimal
/// big-endian bytes of `n`.
pub fn encode_length(n: usize) -> Vec<u8> {
    if n < 0x80 {
        return alloc::vec![n as u8];
    }

    let be = n.to_be_bytes();
    let skip = be.iter().take_while(|&&byte| byte == 0).count();
    let digits = &be[skip..];

    let mut out = Vec::with_capacity(1 + digits.len());
    out.push(0x80 | digits.len() as u8);
    out.extend_from_slice(digits);
    out
}

/// Decode DER definite-length octets at `cursor`, returning the decoded
/// value and the cursor position past the length field.
///
/// Fails with [`Error::TruncatedInput`] when the declared count of length
/// bytes exceeds what remains, and with [`Error::UnsupportedLengthForm`]
/// for the indefinite-length marker (`0x80`), which BER allows but DER
/// does not.
pub fn decode_length(input: &[u8], cursor: usize) -> Result<(usize, usize)> {
    let first = *input.get(cursor).ok_or(Error::TruncatedInput)?;
    if first < 0x80 {
        return Ok((usize::from(first), cursor + 1));
    }

    let count = usize::from(first & 0x7f);
    if count == 0 || count > core::mem::size_of::<usize>() {
        return Err(Error::UnsupportedLengthForm);
    }

    let digits = input
        .get(cursor + 1..cursor + 1 + count)
        .ok_or(Error::TruncatedInput)?;
    let mut value = 0usize;
    for &byte in digits {
        value = (value << 8) | usize::from(byte);
    }
    Ok((value, cursor + 1 + count))
}

/// Encode a modulus/exponent pair as a PKCS#1 `RSAPublicKey` DER document.
///
/// DER INTEGERs are two's complement, so a modulus whose leading byte has
/// the high bit set gets a `0x00` sign guard prepended; a modulus already
/// starting below `0x80` is emitted untouched. The exponent is assumed
/// minimal and positive and is emitted as-is.
///
/// The output is byte-for-byte deterministic for a given input pair.
pub fn encode_rsa_public_key(modulus: &[u8], exponent: &[u8]) -> Vec<u8> {
    let mut modulus_int = Vec::with_capacity(modulus.len() + 1);
    if modulus.first().is_some_and(|&byte| byte >= 0x80) {
        modulus_int.push(0x00);
    }
    modulus_int.extend_from_slice(modulus);

    let modulus_len = encode_length(modulus_int.len());
    let exponent_len = encode_length(exponent.len());

    // Two tag bytes plus both length fields and both integer bodies.
    let content_len =
        2 + modulus_len.len() + modulus_int.len() + exponent_len.len() + exponent.len();
    let header_len = encode_length(content_len);

    let mut out = Vec::with_capacity(1 + header_len.len() + content_len);
    out.push(TAG_SEQUENCE);
    out.extend_from_slice(&header_len);
    out.push(TAG_INTEGER);
    out.extend_from_slice(&modulus_len);
    out.extend_from_slice(&modulus_int);
    out.push(TAG_INTEGER);
    out.extend_from_slice(&exponent_len);
    out.extend_from_slice(exponent);
    out
}
