//! Test-vector file loading.
//!
//! Paths are taken relative to the working directory, except on Android
//! where the test runner places data under
//! [`ANDROID_RUNFILES_PREFIX`](crate::config::ANDROID_RUNFILES_PREFIX).
//! Files are read whole and re-parsed on every call; nothing is cached.

use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::document::{JsonDocument, VectorDocument};
use crate::error::LoadError;
use crate::platform::{HostPlatform, Platform};

fn prefixed(prefix: &str, path: &Path) -> PathBuf {
    let mut joined = OsString::from(prefix);
    joined.push(path.as_os_str());
    PathBuf::from(joined)
}

/// Returns the path a vector file is read from on `platform`.
///
/// On Android the path is appended to
/// [`ANDROID_RUNFILES_PREFIX`](crate::config::ANDROID_RUNFILES_PREFIX) as a
/// string; elsewhere it is returned unchanged.
#[must_use]
pub fn resolve_path(path: impl AsRef<Path>, platform: &impl Platform) -> PathBuf {
    VectorLoader::with_config(LoaderConfig::default(), platform).resolve(path)
}

/// Loads the JSON document at `path` with the default configuration.
///
/// # Errors
/// Returns an error if the file is missing, unreadable, too large, not
/// UTF-8, not JSON, or not a JSON object.
pub fn load_json(
    path: impl AsRef<Path>,
    platform: &impl Platform,
) -> Result<JsonDocument, LoadError> {
    VectorLoader::with_config(LoaderConfig::default(), platform).load(path)
}

/// Reads test-vector files according to a [`LoaderConfig`].
#[derive(Debug, Clone)]
pub struct VectorLoader<P = HostPlatform> {
    config: LoaderConfig,
    platform: P,
}

impl VectorLoader<HostPlatform> {
    /// Loader for the current platform with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default(), HostPlatform)
    }
}

impl Default for VectorLoader<HostPlatform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> VectorLoader<P> {
    /// Loader with explicit settings and platform.
    #[must_use]
    pub fn with_config(config: LoaderConfig, platform: P) -> Self {
        Self { config, platform }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Path `path` resolves to under this loader's platform and prefix.
    #[must_use]
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if self.platform.is_android() {
            prefixed(&self.config.runfiles_prefix, path)
        } else {
            path.to_path_buf()
        }
    }

    /// Reads and parses the vector file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, larger than
    /// `max_file_size`, not UTF-8, not JSON, or not a JSON object.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<JsonDocument, LoadError> {
        let path = self.resolve(path);
        debug!(path = %path.display(), "Loading test vectors");

        let io_error = |source| LoadError::Io { path: path.clone(), source };
        let file = File::open(&path).map_err(io_error)?;
        let size = file.metadata().map_err(io_error)?.len();
        let limit = self.config.max_file_size;
        if !usize::try_from(size).is_ok_and(|size| size <= limit) {
            return Err(LoadError::FileTooLarge { path, size, limit });
        }

        // Metadata length is 0 for pipes and devices, and files can grow after
        // the check, so the read itself is bounded too.
        let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
        file.take(cap).read_to_end(&mut bytes).map_err(io_error)?;
        if bytes.len() > limit {
            let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
            return Err(LoadError::FileTooLarge { path, size, limit });
        }

        let text = String::from_utf8(bytes)
            .map_err(|source| LoadError::InvalidUtf8 { path: path.clone(), source })?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|source| LoadError::Parse { path: path.clone(), source })?;
        let document = JsonDocument::from_value(value)
            .ok_or_else(|| LoadError::NotAnObject { path: path.clone() })?;

        info!(
            path = %path.display(),
            algorithm = document.opt_str("algorithm").unwrap_or("unknown"),
            tests = document.number_of_tests().ok(),
            "Loaded test vectors"
        );
        Ok(document)
    }
}
