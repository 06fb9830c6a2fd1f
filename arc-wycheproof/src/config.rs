//! Loader configuration.

/// Directory holding test runfiles on Android devices.
pub const ANDROID_RUNFILES_PREFIX: &str = "/sdcard/googletest/test_runfiles/google3/";

/// Default upper bound on the size of a vector file.
pub const DEFAULT_MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Settings for [`VectorLoader`](crate::loader::VectorLoader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Prepended to every path on Android. Concatenated as a string, so it
    /// must end with a separator.
    pub runfiles_prefix: String,
    /// Files larger than this are rejected before being read.
    pub max_file_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            runfiles_prefix: ANDROID_RUNFILES_PREFIX.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LoaderConfig {
    /// Use a different Android runfiles directory
    #[must_use]
    pub fn with_runfiles_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.runfiles_prefix = prefix.into();
        self
    }

    /// Use a different size limit
    #[must_use]
    pub fn with_max_file_size(mut self, limit: usize) -> Self {
        self.max_file_size = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.runfiles_prefix, "/sdcard/googletest/test_runfiles/google3/");
        assert_eq!(config.max_file_size, 50 * 1024 * 1024);
    }

    #[test]
    fn test_builders() {
        let config = LoaderConfig::default()
            .with_runfiles_prefix("/data/local/tmp/")
            .with_max_file_size(1024);
        assert_eq!(config.runfiles_prefix, "/data/local/tmp/");
        assert_eq!(config.max_file_size, 1024);
    }
}
