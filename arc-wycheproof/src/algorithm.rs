//! Signature algorithm names.
//!
//! Digest names carry a dash (`"SHA-256"`) while the matching signature
//! algorithm names drop it (`"SHA256WITHECDSA"`). Only the digests the
//! Wycheproof signature files use are mapped; everything else has no
//! combined name.

/// Digests that have a combined signature algorithm name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureHash {
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
}

impl SignatureHash {
    /// Parses a dashed digest name. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_digest_name(md: &str) -> Option<Self> {
        match md {
            "SHA-256" => Some(Self::Sha256),
            "SHA-512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Token used inside signature algorithm names.
    #[must_use]
    pub const fn signature_token(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

/// Returns the signature algorithm name for `signature_algorithm` over the
/// digest `md`, e.g. `("SHA-256", "ECDSA")` gives `"SHA256WITHECDSA"`.
///
/// Unsupported digests yield an empty string; callers treat `""` as "no
/// applicable algorithm". `signature_algorithm` is used verbatim.
#[must_use]
pub fn signature_algorithm_name(md: &str, signature_algorithm: &str) -> String {
    match SignatureHash::from_digest_name(md) {
        Some(hash) => format!("{}WITH{}", hash.signature_token(), signature_algorithm),
        None => String::new(),
    }
}
