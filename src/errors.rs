//! Error types.

/// Alias for [`core::result::Result`] with the `jwt-rsa` [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced while decoding key material or signing.
///
/// Signature *verification* never produces an error: a signature that does
/// not check out, whatever the reason, verifies as `false`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An ASN.1 length field declared more octets than the input holds.
    #[error("length octets ran past the end of the input")]
    TruncatedInput,

    /// An ASN.1 indefinite-length marker (or a length wider than this
    /// platform can address) was encountered. DER forbids the former and
    /// no realistic key produces the latter.
    #[error("unsupported ASN.1 length form")]
    UnsupportedLengthForm,

    /// PEM input is not valid UTF-8 text.
    #[error("PEM input is not decodable as text")]
    NotTextDecodable,

    /// A `-----BEGIN` marker without a matching label or `-----END`.
    #[error("malformed PEM armor")]
    MalformedArmor,

    /// The armor body (or the unarmored input) is not valid base64 even
    /// after non-alphabet characters are dropped.
    #[error("PEM body is not decodable as base64")]
    NotBase64Decodable,

    /// The cryptographic backend rejected the DER bytes as an RSA key.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(rsa::pkcs1::Error),

    /// Opaque failure from the cryptographic backend.
    #[error("backend failure: {0}")]
    Backend(#[from] rsa::Error),
}
