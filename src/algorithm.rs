//! Signature algorithm identifiers.

use alloc::vec::Vec;

use sha2::{Digest, Sha256, Sha384, Sha512};

/// Hash functions usable with the RSASSA-PKCS1-v1_5 scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashFunction {
    /// Digest `data` with this hash function.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashFunction::Sha256 => Sha256::digest(data).to_vec(),
            HashFunction::Sha384 => Sha384::digest(data).to_vec(),
            HashFunction::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// A JWT signature algorithm: a hash function choice under a fixed
/// signature scheme.
///
/// Compared structurally; two algorithms are the same exactly when both
/// the scheme and the hash function match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// RSASSA-PKCS1-v1_5 over the given hash function.
    RsassaPkcs1v15(HashFunction),
}

impl SignatureAlgorithm {
    /// The `alg` value naming this algorithm in a JOSE header.
    pub fn jwt_identifier(self) -> &'static str {
        match self {
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha256) => "RS256",
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha384) => "RS384",
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha512) => "RS512",
        }
    }

    /// Parse a JOSE header `alg` value, if it names a supported algorithm.
    pub fn from_jwt_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "RS256" => Some(SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha256)),
            "RS384" => Some(SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha384)),
            "RS512" => Some(SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha512)),
            _ => None,
        }
    }

    /// The hash function this algorithm digests with.
    pub fn hash_function(self) -> HashFunction {
        match self {
            SignatureAlgorithm::RsassaPkcs1v15(hash) => hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_sizes() {
        assert_eq!(HashFunction::Sha256.digest(b"abc").len(), 32);
        assert_eq!(HashFunction::Sha384.digest(b"abc").len(), 48);
        assert_eq!(HashFunction::Sha512.digest(b"abc").len(), 64);
    }

    #[test]
    fn sha256_known_answer() {
        assert_eq!(
            HashFunction::Sha256.digest(b"abc"),
            hex_literal::hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn jwt_identifiers_round_trip() {
        for hash in [HashFunction::Sha256, HashFunction::Sha384, HashFunction::Sha512] {
            let algorithm = SignatureAlgorithm::RsassaPkcs1v15(hash);
            assert_eq!(
                SignatureAlgorithm::from_jwt_identifier(algorithm.jwt_identifier()),
                Some(algorithm)
            );
        }
        assert_eq!(SignatureAlgorithm::from_jwt_identifier("HS256"), None);
        assert_eq!(SignatureAlgorithm::from_jwt_identifier("rs256"), None);
    }

    #[test]
    fn hash_function_recovered_from_parsed_identifier() {
        // A consumer dispatching on the header `alg` digests with the hash
        // the parsed algorithm reports.
        let algorithm = SignatureAlgorithm::from_jwt_identifier("RS384").unwrap();
        assert_eq!(algorithm.hash_function(), HashFunction::Sha384);
        assert_eq!(algorithm.hash_function().digest(b"abc").len(), 48);
    }

    #[test]
    fn structural_equality() {
        assert_eq!(
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha256),
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha256)
        );
        assert_ne!(
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha256),
            SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha384)
        );
    }
}
