//! # arc-wycheproof
//!
//! Helpers the LatticeArc test suites use to consume Google's Wycheproof
//! test-vector corpus:
//!
//! - **Algorithm names**: combine a digest and a signature scheme into the
//!   conventional `SHA256WITHECDSA` form ([`signature_algorithm_name`])
//! - **Loading**: read a JSON vector file, honouring the Android runfiles
//!   layout ([`load_json`], [`VectorLoader`])
//! - **Conformance**: warn when a file's algorithm or generator version
//!   drifts from what the test expects ([`check_alg_and_version`])
//! - **Curves**: map corpus curve names to [`CurveType`] ([`curve_type`])
//!
//! ## Example
//!
//! ```no_run
//! use arc_wycheproof::{
//!     HostPlatform, VectorDocument, check_alg_and_version, curve_type, load_json,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = load_json("third_party/wycheproof/testvectors/ecdsa_test.json", &HostPlatform)?;
//! check_alg_and_version(&doc, "ECDSA", "0.4.12")?;
//! for group in doc.test_groups()? {
//!     let curve = curve_type(group.get_object("key")?.get_str("curve")?)?;
//!     println!("{} tests on {}", group.tests()?.len(), curve.name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See: <https://github.com/google/wycheproof>

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

pub mod algorithm;
pub mod config;
pub mod conformance;
pub mod curve;
pub mod document;
pub mod error;
pub mod loader;
pub mod logging;
pub mod platform;
pub mod results;

pub use algorithm::{SignatureHash, signature_algorithm_name};
pub use config::{ANDROID_RUNFILES_PREFIX, LoaderConfig};
pub use conformance::{Conformance, check_alg_and_version};
pub use curve::{CurveType, curve_type};
pub use document::{JsonDocument, VectorDocument};
pub use error::{DocumentError, LoadError, UnknownCurveError};
pub use loader::{VectorLoader, load_json, resolve_path};
pub use platform::{FixedPlatform, HostPlatform, Platform};
pub use results::{ExpectedResult, VectorTally};
