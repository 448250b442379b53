//! `RSASSA-PKCS1-v1_5` signer and verifier capabilities.

use alloc::vec::Vec;

use rsa::Pkcs1v15Sign;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::{HashFunction, SignatureAlgorithm};
use crate::errors::Result;
use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::traits::{TokenSigner, TokenVerifier};

fn padding(hash: HashFunction) -> Pkcs1v15Sign {
    match hash {
        HashFunction::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashFunction::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashFunction::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

/// Verifies `RSASSA-PKCS1-v1_5` signatures under one hash function.
#[derive(Clone, Debug)]
pub struct Pkcs1v15Verifier {
    key: RsaPublicKey,
    hash: HashFunction,
}

impl Pkcs1v15Verifier {
    /// Build a verifier for signatures under `hash`.
    pub fn new(key: RsaPublicKey, hash: HashFunction) -> Self {
        Self { key, hash }
    }
}

impl TokenVerifier for Pkcs1v15Verifier {
    fn supports(&self, algorithm: SignatureAlgorithm) -> bool {
        algorithm == SignatureAlgorithm::RsassaPkcs1v15(self.hash)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let hashed = self.hash.digest(data);
        self.key
            .inner
            .verify(padding(self.hash), &hashed, signature)
            .is_ok()
    }
}

/// Produces `RSASSA-PKCS1-v1_5` signatures under one hash function.
#[derive(Clone)]
pub struct Pkcs1v15Signer {
    key: RsaPrivateKey,
    hash: HashFunction,
}

impl Pkcs1v15Signer {
    /// Build a signer producing signatures under `hash`.
    pub fn new(key: RsaPrivateKey, hash: HashFunction) -> Self {
        Self { key, hash }
    }

    /// A verifier for the signatures this signer produces.
    pub fn verifier(&self) -> Pkcs1v15Verifier {
        Pkcs1v15Verifier::new(self.key.to_public_key(), self.hash)
    }
}

impl TokenSigner for Pkcs1v15Signer {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::RsassaPkcs1v15(self.hash)
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let hashed = self.hash.digest(data);
        Ok(self.key.inner.sign(padding(self.hash), &hashed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_exact_pair_only() {
        let key = RsaPublicKey::from_components(
            &hex_literal::hex!("ab240c3361d02e37"),
            &hex_literal::hex!("010001"),
        )
        .unwrap();
        let verifier = Pkcs1v15Verifier::new(key, HashFunction::Sha256);

        assert!(verifier.supports(SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha256)));
        assert!(!verifier.supports(SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha384)));
        assert!(!verifier.supports(SignatureAlgorithm::RsassaPkcs1v15(HashFunction::Sha512)));
    }

    #[test]
    fn signer_reports_its_algorithm() {
        let key = RsaPrivateKey::from_pem(
            b"MEACAQACCQCrJAwzYdAuNwIDAQABAggR5UoVJZ0i+QIFAM7/XPMCBQDTp6qt\
              AgUAzK3fFwIFAMtSnT0CBQC7Um1v" as &[u8],
        )
        .unwrap();
        for (hash, identifier) in [
            (HashFunction::Sha256, "RS256"),
            (HashFunction::Sha384, "RS384"),
            (HashFunction::Sha512, "RS512"),
        ] {
            let signer = Pkcs1v15Signer::new(key.clone(), hash);
            assert_eq!(signer.algorithm(), SignatureAlgorithm::RsassaPkcs1v15(hash));
            assert_eq!(signer.algorithm().jwt_identifier(), identifier);
        }
    }
}
