//! User-facing notice strings.
//!
//! Every failure the app can show to a user has a key here together with its
//! title and message, so screens never hard-code error text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Failure keys shown to the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Notice {
    PermissionDenied,
    NoImageSelected,
    UploadFailed,
    ImageTooLarge,
    UnsupportedFormat,
    NetworkUnavailable,
    GenerationFailed,
    GenerationTimeout,
    QuotaExceeded,
    SessionExpired,
    PresetUnavailable,
    Unknown,
}

impl Notice {
    /// Parses a snake_case key. Unknown keys map to `Notice::Unknown`.
    pub fn from_key(key: &str) -> Self {
        Self::from_str(key.trim()).unwrap_or(Self::Unknown)
    }

    /// The snake_case key of this notice.
    pub fn key(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> impl Iterator<Item = Notice> {
        Self::iter()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "Photo access needed",
            Self::NoImageSelected => "No photo selected",
            Self::UploadFailed => "Upload failed",
            Self::ImageTooLarge => "Photo too large",
            Self::UnsupportedFormat => "Unsupported photo",
            Self::NetworkUnavailable => "You're offline",
            Self::GenerationFailed => "Generation failed",
            Self::GenerationTimeout => "Taking too long",
            Self::QuotaExceeded => "Out of credits",
            Self::SessionExpired => "Session expired",
            Self::PresetUnavailable => "Style unavailable",
            Self::Unknown => "Something went wrong",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Allow access to your photo library in Settings to pick a picture."
            }
            Self::NoImageSelected => "Pick a photo first. This style needs a picture to start from.",
            Self::UploadFailed => "We couldn't upload your photo. Check your connection and try again.",
            Self::ImageTooLarge => "Choose a photo under 10 MB, or crop it before uploading.",
            Self::UnsupportedFormat => "Use a JPEG, PNG or HEIC photo.",
            Self::NetworkUnavailable => "Reconnect to the internet to create new images.",
            Self::GenerationFailed => "The image couldn't be created. Please try again in a moment.",
            Self::GenerationTimeout => {
                "The server is busy. We'll keep trying, or you can come back later."
            }
            Self::QuotaExceeded => "You've used all your credits. Get more to keep creating.",
            Self::SessionExpired => "Please sign in again to continue.",
            Self::PresetUnavailable => {
                "This style is no longer available. Pick another one from the list."
            }
            Self::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for notice in Notice::all() {
            assert_eq!(Notice::from_key(notice.key()), notice);
        }
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(Notice::from_key("disk_on_fire"), Notice::Unknown);
        assert_eq!(Notice::from_key(""), Notice::Unknown);
    }

    #[test]
    fn test_key_format() {
        assert_eq!(Notice::PermissionDenied.key(), "permission_denied");
        assert_eq!(Notice::from_key("quota_exceeded"), Notice::QuotaExceeded);
    }

    #[test]
    fn test_every_notice_has_text() {
        for notice in Notice::all() {
            assert!(!notice.title().is_empty());
            assert!(!notice.message().is_empty());
        }
    }
}
