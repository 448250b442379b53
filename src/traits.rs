//! Capability traits connecting the JWT layer to signature backends.
//!
//! A token consumer holds a set of [`TokenVerifier`]s and picks the one
//! whose [`supports`][TokenVerifier::supports] accepts the algorithm
//! declared in the token header; a producer holds one [`TokenSigner`] and
//! writes its [`algorithm`][TokenSigner::algorithm] into the header. How
//! ambiguous or absent matches are handled is the consumer's policy, not
//! this crate's.

use alloc::vec::Vec;

use crate::algorithm::SignatureAlgorithm;
use crate::errors::Result;

/// A capability to check signatures produced under some algorithm.
pub trait TokenVerifier {
    /// Whether this verifier can check signatures produced under
    /// `algorithm`.
    fn supports(&self, algorithm: SignatureAlgorithm) -> bool;

    /// Check `signature` over `data`.
    ///
    /// A malformed or incorrect signature verifies as `false`; this never
    /// errors. Bad key material is rejected when the verifier is
    /// constructed, not here.
    fn verify(&self, data: &[u8], signature: &[u8]) -> bool;
}

/// A capability to produce signatures under a fixed algorithm.
pub trait TokenSigner {
    /// The algorithm signatures are produced under.
    fn algorithm(&self) -> SignatureAlgorithm;

    /// Sign `data`, returning the raw signature bytes.
    ///
    /// Fails only when the cryptographic backend rejects the key or the
    /// input.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;
}
