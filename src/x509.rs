//! X.509 `SubjectPublicKeyInfo` header stripping.

use crate::der;
use crate::errors::Result;

/// DER `AlgorithmIdentifier` for `rsaEncryption` (OID 1.2.840.113549.1.1.1
/// with NULL parameters), as it appears inside a `SubjectPublicKeyInfo`.
const RSA_ALGORITHM_IDENTIFIER: [u8; 15] = [
    0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00,
];

/// Strip an X.509 `SubjectPublicKeyInfo` wrapper, returning the bare
/// PKCS#1 key bits it carries.
///
/// Input that does not look like an RSA `SubjectPublicKeyInfo` (wrong
/// outer tag, a different algorithm identifier, no BIT STRING, a nonzero
/// unused-bits byte) is returned unchanged rather than rejected, so that
/// callers can feed the result to a PKCS#1 parser without knowing up
/// front whether the key was wrapped. A bare key too short to even hold
/// an algorithm identifier falls under the same rule; only length octets
/// running past the end of the input are an error.
pub fn strip_x509_header(input: &[u8]) -> Result<&[u8]> {
    if input.first() != Some(&der::TAG_SEQUENCE) {
        return Ok(input);
    }
    let (_, mut offset) = der::decode_length(input, 1)?;

    let Some(algorithm) = input.get(offset..offset + RSA_ALGORITHM_IDENTIFIER.len()) else {
        return Ok(input);
    };
    if algorithm != RSA_ALGORITHM_IDENTIFIER {
        return Ok(input);
    }
    offset += RSA_ALGORITHM_IDENTIFIER.len();

    // BIT STRING holding the embedded key.
    if input.get(offset) != Some(&0x03) {
        return Ok(input);
    }
    let (_, offset) = der::decode_length(input, offset + 1)?;

    // DER separates the bit string contents from its header with a count
    // of unused trailing bits, always zero for key material.
    if input.get(offset) != Some(&0x00) {
        return Ok(input);
    }
    Ok(&input[offset + 1..])
}
