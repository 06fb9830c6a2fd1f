//! Curve names used by the Wycheproof EC files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::UnknownCurveError;

/// NIST prime curves the EC vector files exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// NIST P-256 curve (secp256r1)
    NistP256,
    /// NIST P-384 curve (secp384r1)
    NistP384,
    /// NIST P-521 curve (secp521r1)
    NistP521,
}

impl CurveType {
    /// Get the curve name for display purposes
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NistP256 => "P-256",
            Self::NistP384 => "P-384",
            Self::NistP521 => "P-521",
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a corpus curve name to a [`CurveType`].
///
/// P-256 is recognised only under the transposed name `"sepcp256r1"`; the
/// standard spelling `"secp256r1"` is rejected.
///
/// # Errors
/// Returns [`UnknownCurveError`] naming `curve_name` if it is not recognised.
pub fn curve_type(curve_name: &str) -> Result<CurveType, UnknownCurveError> {
    match curve_name {
        // TODO: accept "secp256r1" once no caller depends on the transposed spelling.
        "sepcp256r1" => Ok(CurveType::NistP256),
        "secp384r1" => Ok(CurveType::NistP384),
        "secp521r1" => Ok(CurveType::NistP521),
        _ => Err(UnknownCurveError { name: curve_name.to_string() }),
    }
}

impl FromStr for CurveType {
    type Err = UnknownCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        curve_type(s)
    }
}

/// Deserializes from a corpus curve name, with the same rules as [`curve_type`].
impl<'de> Deserialize<'de> for CurveType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        curve_type(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_curves() {
        assert_eq!(curve_type("sepcp256r1").unwrap(), CurveType::NistP256);
        assert_eq!(curve_type("secp384r1").unwrap(), CurveType::NistP384);
        assert_eq!(curve_type("secp521r1").unwrap(), CurveType::NistP521);
    }

    #[test]
    fn test_standard_p256_spelling_is_rejected() {
        assert_eq!(
            curve_type("secp256r1").unwrap_err(),
            UnknownCurveError { name: "secp256r1".to_string() }
        );
    }

    #[test]
    fn test_unknown_curves() {
        for name in ["", "P-256", "secp256k1", "SECP384R1", "brainpoolP256r1", "curve25519"] {
            let err = curve_type(name).unwrap_err();
            assert_eq!(err.name, name);
            assert_eq!(err.to_string(), format!("Unknown curve name: {name}"));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("secp521r1".parse::<CurveType>().unwrap(), CurveType::NistP521);
        assert!("secp256r1".parse::<CurveType>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(CurveType::NistP256.to_string(), "P-256");
        assert_eq!(CurveType::NistP384.name(), "P-384");
        assert_eq!(CurveType::NistP521.name(), "P-521");
    }

    #[test]
    fn test_deserialize_uses_corpus_names() {
        assert_eq!(serde_json::from_str::<CurveType>(r#""secp384r1""#).unwrap(), CurveType::NistP384);
        assert_eq!(serde_json::from_str::<CurveType>(r#""sepcp256r1""#).unwrap(), CurveType::NistP256);

        let err = serde_json::from_str::<CurveType>(r#""secp256r1""#).unwrap_err();
        assert!(err.to_string().contains("Unknown curve name: secp256r1"));
        assert!(serde_json::from_str::<CurveType>(r#""NistP256""#).is_err());
        assert!(serde_json::from_str::<CurveType>("384").is_err());
    }

    #[test]
    fn test_deserialize_group_key() {
        #[derive(Deserialize)]
        struct EcPublicKey {
            curve: CurveType,
        }

        let key: EcPublicKey =
            serde_json::from_str(r#"{"curve": "secp521r1", "keySize": 521}"#).unwrap();
        assert_eq!(key.curve, CurveType::NistP521);
        assert!(serde_json::from_str::<EcPublicKey>(r#"{"curve": "secp256r1"}"#).is_err());
    }
}
