//! Execution environment detection.
//!
//! The loader asks a [`Platform`] whether it runs on Android, where test
//! data lives under the device runfiles directory instead of the working
//! directory.

/// Answers whether test data uses the Android on-device layout.
pub trait Platform {
    /// True when running on an Android device.
    fn is_android(&self) -> bool;
}

/// The platform this binary was compiled for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn is_android(&self) -> bool {
        cfg!(target_os = "android")
    }
}

/// A platform with a fixed answer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatform {
    /// Value returned by [`Platform::is_android`]
    pub android: bool,
}

impl FixedPlatform {
    /// Desktop or server layout.
    pub const HOST: Self = Self { android: false };
    /// Android on-device layout.
    pub const ANDROID: Self = Self { android: true };
}

impl Platform for FixedPlatform {
    fn is_android(&self) -> bool {
        self.android
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    fn is_android(&self) -> bool {
        (**self).is_android()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_platform_matches_target() {
        assert_eq!(HostPlatform.is_android(), cfg!(target_os = "android"));
    }

    #[test]
    fn test_fixed_platform() {
        assert!(FixedPlatform::ANDROID.is_android());
        assert!(!FixedPlatform::HOST.is_android());
        assert!(!FixedPlatform::default().is_android());
    }

    #[test]
    fn test_reference_delegates() {
        fn ask<P: Platform>(platform: P) -> bool {
            platform.is_android()
        }
        let platform: &dyn Platform = &FixedPlatform::ANDROID;
        assert!(ask(platform));
        assert!(!ask(&HostPlatform) || cfg!(target_os = "android"));
    }
}
