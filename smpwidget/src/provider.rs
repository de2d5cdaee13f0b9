//! Supported streaming providers
//!
//! The widget dispatches over exactly five providers. The enumeration is
//! closed on purpose, so every dispatch in the crate is exhaustive and a
//! new provider cannot be added without visiting each rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A streaming provider the widget can embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Spotify artist embed
    Spotify,
    /// Apple Music artist, album or track embed
    Apple,
    /// YouTube video or playlist embed, on the privacy-enhanced host
    YouTube,
    /// Deezer widget embed
    Deezer,
    /// SoundCloud player embed
    SoundCloud,
}

impl Provider {
    /// All providers, in selection priority order
    ///
    /// This is both the order the default-provider choice walks and the
    /// tab order of the selector strip.
    pub const ALL: [Provider; 5] = [
        Provider::Spotify,
        Provider::Apple,
        Provider::YouTube,
        Provider::Deezer,
        Provider::SoundCloud,
    ];

    /// Lowercase wire name, also the tab identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Spotify => "spotify",
            Provider::Apple => "apple",
            Provider::YouTube => "youtube",
            Provider::Deezer => "deezer",
            Provider::SoundCloud => "soundcloud",
        }
    }

    /// Human-readable label for the selector tab
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Spotify => "Spotify",
            Provider::Apple => "Apple Music",
            Provider::YouTube => "YouTube",
            Provider::Deezer => "Deezer",
            Provider::SoundCloud => "SoundCloud",
        }
    }

    /// Parse a provider name, ASCII-case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "spotify" => Some(Provider::Spotify),
            "apple" => Some(Provider::Apple),
            "youtube" => Some(Provider::YouTube),
            "deezer" => Some(Provider::Deezer),
            "soundcloud" => Some(Provider::SoundCloud),
            _ => None,
        }
    }

    /// Origins worth preconnecting to once this provider may load
    ///
    /// Handed to the presentation layer after consent, when the provider
    /// becomes active.
    pub fn preconnect_hosts(&self) -> &'static [&'static str] {
        match self {
            Provider::Spotify => &["https://open.spotify.com"],
            Provider::Apple => &["https://embed.music.apple.com"],
            Provider::YouTube => &["https://www.youtube.com", "https://i.ytimg.com"],
            Provider::Deezer => &["https://widget.deezer.com", "https://e-cdns-files.dzcdn.net"],
            Provider::SoundCloud => &["https://w.soundcloud.com", "https://api.soundcloud.com"],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
