#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! RSA `PKCS#1 v1.5` signing and key decoding support for JSON Web Tokens.
//!
//! This crate covers the binary-format plumbing every RSA-signing JWT
//! implementation needs, independent of which cryptographic backend does
//! the arithmetic:
//!
//! - encoding a modulus/exponent pair into the PKCS#1 `RSAPublicKey` DER
//!   structure ([`der`]);
//! - decoding PEM armor down to raw key bytes ([`pem`]);
//! - stripping the X.509 `SubjectPublicKeyInfo` wrapper off a public key
//!   ([`x509`]);
//! - the [`TokenSigner`] / [`TokenVerifier`] capabilities a JWT layer
//!   dispatches on, implemented for `RSASSA-PKCS1-v1_5` with SHA-256/384/512
//!   ([`Pkcs1v15Signer`], [`Pkcs1v15Verifier`]).
//!
//! RSA arithmetic and digest computation are delegated to the [`rsa`] and
//! [`sha2`] crates.
//!
//! # Verifying
//!
//! ```
//! use jwt_rsa::{HashFunction, Pkcs1v15Verifier, RsaPublicKey, SignatureAlgorithm, TokenVerifier};
//!
//! # fn main() -> jwt_rsa::Result<()> {
//! let pem = "-----BEGIN PUBLIC KEY-----
//! MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAtsQsUV8QpqrygsY+2+JC
//! Q6Fw8/omM71IM2N/R8pPbzbgOl0p78MZGsgPOQ2HSznjD0FPzsH8oO2B5Uftws04
//! LHb2HJAYlz25+lN5cqfHAfa3fgmC38FfwBkn7l582UtPWZ/wcBOnyCgb3yLcvJrX
//! yrt8QxHJgvWO23ITrUVYszImbXQ67YGS0YhMrbixRzmo2tpm3JcIBtnHrEUMsT0N
//! fFdfsZhTT8YbxBvA8FdODgEwx7u/vf3J9qbi4+Kv8cvqyJuleIRSjVXPsIMnoejI
//! n04APPKIjpMyQdnWlby7rNyQtE4+CV+jcFjqJbE/Xilcvqxt6DirjFCvYeKYl1uH
//! LwIDAQAB
//! -----END PUBLIC KEY-----";
//!
//! let key = RsaPublicKey::from_pem(pem.as_bytes())?;
//! let verifier = Pkcs1v15Verifier::new(key, HashFunction::Sha256);
//!
//! let algorithm = SignatureAlgorithm::from_jwt_identifier("RS256").unwrap();
//! assert!(verifier.supports(algorithm));
//! assert!(!verifier.verify(b"signing input", b"not a signature"));
//! # Ok(())
//! # }
//! ```
//!
//! # Building a key from raw components
//!
//! A JWK delivers RSA public keys as raw base64url modulus/exponent
//! values; [`RsaPublicKey::from_components`] assembles the PKCS#1
//! document the backend expects:
//!
//! ```
//! use jwt_rsa::der;
//!
//! let document = der::encode_rsa_public_key(&[0xff, 0x01], &[0x01, 0x00, 0x01]);
//! // SEQUENCE { INTEGER 0x00ff01, INTEGER 65537 }; the leading 0x00 keeps
//! // the high-bit modulus positive.
//! assert_eq!(document[..6], [0x30, 0x0a, 0x02, 0x03, 0x00, 0xff]);
//! ```

extern crate alloc;

pub mod der;
pub mod pem;
pub mod x509;

mod algorithm;
mod errors;
mod key;
mod pkcs1v15;
mod traits;

pub use crate::algorithm::{HashFunction, SignatureAlgorithm};
pub use crate::errors::{Error, Result};
pub use crate::key::{RsaPrivateKey, RsaPublicKey};
pub use crate::pkcs1v15::{Pkcs1v15Signer, Pkcs1v15Verifier};
pub use crate::traits::{TokenSigner, TokenVerifier};
