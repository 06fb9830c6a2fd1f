//! Algorithm and generator version checks.
//!
//! The imported corpus drifts over time. A mismatch is logged for a human
//! to notice and the test carries on, so the cryptographic assertions still
//! run.

use tracing::warn;

use crate::document::VectorDocument;
use crate::error::DocumentError;

/// Which declared fields matched the caller's expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conformance {
    /// `algorithm` equals the expected algorithm
    pub algorithm_matches: bool,
    /// `generatorVersion` equals the expected version
    pub version_matches: bool,
}

impl Conformance {
    /// True when both fields matched.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.algorithm_matches && self.version_matches
    }
}

/// Checks that `testvector` declares `expected_algorithm` and
/// `expected_version`, logging a warning for each mismatch.
///
/// # Errors
/// Returns an error only if `algorithm` or `generatorVersion` is absent or
/// not a string. Mismatched values are reported in the returned
/// [`Conformance`].
pub fn check_alg_and_version<D: VectorDocument + ?Sized>(
    testvector: &D,
    expected_algorithm: &str,
    expected_version: &str,
) -> Result<Conformance, DocumentError> {
    let algorithm = testvector.algorithm()?;
    let algorithm_matches = algorithm == expected_algorithm;
    if !algorithm_matches {
        warn!("Expecting algorithm {expected_algorithm}, got {algorithm}.");
    }

    let generator_version = testvector.generator_version()?;
    let version_matches = generator_version == expected_version;
    if !version_matches {
        warn!(
            "Expecting test vectors with version {expected_version}, got vectors with version \
             {generator_version} for {expected_algorithm}."
        );
    }

    Ok(Conformance { algorithm_matches, version_matches })
}
