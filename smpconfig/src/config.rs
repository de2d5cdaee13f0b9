//! Resolved widget configuration
//!
//! [`PlayerConfig`] is the typed, fully-defaulted form of the host
//! attributes. It is built once, before any session state exists, and
//! never mutated afterwards; every later derivation (embed URLs, frame
//! heights, provider availability) is a pure function of this record.
//!
//! Resolution never fails: absent attributes take their documented
//! default silently, malformed values log a warning and take the default.

use crate::attrs::Attributes;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ============================================================================
// Defaults
// ============================================================================

/// Default Apple Music storefront country
pub const DEFAULT_APPLE_STORE: &str = "de";

/// Default fixed YouTube frame height in pixels, used when the 16:9 mode
/// is disabled and no explicit height was given
pub const DEFAULT_YOUTUBE_HEIGHT_PX: u32 = 240;

// ============================================================================
// Deezer object kind
// ============================================================================

/// Kind of Deezer object the widget embeds
///
/// Selects both the widget URL path segment and the frame height rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeezerType {
    /// Single track
    Track,
    /// Full album
    Album,
    /// Playlist (the default)
    #[default]
    Playlist,
    /// Artist page
    Artist,
}

impl DeezerType {
    /// Path segment used in the Deezer widget URL
    pub fn as_str(&self) -> &'static str {
        match self {
            DeezerType::Track => "track",
            DeezerType::Album => "album",
            DeezerType::Playlist => "playlist",
            DeezerType::Artist => "artist",
        }
    }

    /// Parse a kind name, ASCII-case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "track" => Some(DeezerType::Track),
            "album" => Some(DeezerType::Album),
            "playlist" => Some(DeezerType::Playlist),
            "artist" => Some(DeezerType::Artist),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeezerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Player configuration
// ============================================================================

/// Fully-defaulted widget configuration
///
/// Identifier fields are `None` when the attribute was absent or empty;
/// everything else carries its documented default. The serde
/// representation uses the same snake_case field names, with defaults
/// filled in for missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Multi-platform landing page shown as an "all platforms" link
    pub smart_link: Option<String>,

    /// Spotify artist id
    pub spotify_artist_id: Option<String>,

    /// Apple Music artist id
    pub apple_artist_id: Option<String>,
    /// Apple Music album id
    pub apple_album_id: Option<String>,
    /// Apple Music track id
    pub apple_track_id: Option<String>,
    /// Apple Music storefront country
    pub apple_store: String,

    /// Poster image shown over the YouTube frame until an explicit play
    pub youtube_poster: Option<String>,
    /// YouTube playlist id, wins over the video id
    pub youtube_playlist_id: Option<String>,
    /// YouTube video id
    pub youtube_video_id: Option<String>,
    /// Fixed YouTube frame height in pixels, only used with 16:9 disabled
    pub youtube_height_px: u32,
    /// Derive the YouTube frame height from the host width (16:9)
    pub youtube_force_aspect: bool,

    /// Full SoundCloud track or playlist URL
    pub soundcloud_url: Option<String>,
    /// Large visual SoundCloud player instead of the compact one
    pub soundcloud_visual: bool,

    /// Deezer object id
    pub deezer_id: Option<String>,
    /// Kind of Deezer object
    pub deezer_type: DeezerType,
    /// Show the tracklist in the Deezer widget
    pub deezer_tracklist: bool,
    /// Request the fully-listenable Deezer mode (accepted and kept, but
    /// not consumed by any current URL rule)
    pub deezer_force_free: bool,

    /// Force one frame height for every provider
    pub uniform_tabs: bool,
    /// Height for the uniform mode, in pixels
    pub uniform_height_px: Option<u32>,

    /// Requested initial provider, verbatim; validated by the controller
    pub default_provider: Option<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            smart_link: None,
            spotify_artist_id: None,
            apple_artist_id: None,
            apple_album_id: None,
            apple_track_id: None,
            apple_store: DEFAULT_APPLE_STORE.to_string(),
            youtube_poster: None,
            youtube_playlist_id: None,
            youtube_video_id: None,
            youtube_height_px: DEFAULT_YOUTUBE_HEIGHT_PX,
            youtube_force_aspect: true,
            soundcloud_url: None,
            soundcloud_visual: true,
            deezer_id: None,
            deezer_type: DeezerType::Playlist,
            deezer_tracklist: true,
            deezer_force_free: false,
            uniform_tabs: false,
            uniform_height_px: None,
            default_provider: None,
        }
    }
}

impl PlayerConfig {
    /// Resolve host attributes into a configuration
    ///
    /// # Arguments
    ///
    /// * `attrs` - Raw attributes of the widget element
    ///
    /// # Returns
    ///
    /// The fully-defaulted configuration. Resolution is infallible:
    /// malformed numeric or enumerated values log a warning and fall
    /// back to their default.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            smart_link: string_attr(attrs, "smartlink-url"),
            spotify_artist_id: string_attr(attrs, "spotify-artist-id"),
            apple_artist_id: string_attr(attrs, "apple-artist-id"),
            apple_album_id: string_attr(attrs, "apple-album-id"),
            apple_track_id: string_attr(attrs, "apple-track-id"),
            apple_store: string_attr(attrs, "apple-store")
                .unwrap_or_else(|| DEFAULT_APPLE_STORE.to_string()),
            youtube_poster: string_attr(attrs, "yt-poster"),
            youtube_playlist_id: string_attr(attrs, "yt-playlist-id"),
            youtube_video_id: string_attr(attrs, "yt-video-id"),
            youtube_height_px: px_attr(attrs, "yt-height").unwrap_or(DEFAULT_YOUTUBE_HEIGHT_PX),
            youtube_force_aspect: opt_out_flag(attrs, "yt-aspect"),
            soundcloud_url: string_attr(attrs, "soundcloud-url"),
            soundcloud_visual: opt_out_flag(attrs, "sc-visual"),
            deezer_id: string_attr(attrs, "deezer-id"),
            deezer_type: deezer_type_attr(attrs),
            deezer_tracklist: opt_out_flag(attrs, "deezer-tracklist"),
            deezer_force_free: attrs.get("deezer-free") == Some("true"),
            uniform_tabs: attrs.contains("uniform-tabs"),
            uniform_height_px: px_attr(attrs, "uniform-height"),
            default_provider: string_attr(attrs, "default-provider"),
        }
    }
}

// ============================================================================
// Attribute readers
// ============================================================================

/// Non-empty attribute value, or `None`
fn string_attr(attrs: &Attributes, key: &str) -> Option<String> {
    attrs.get(key).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Flag that stays on unless the value is the literal `"false"`
fn opt_out_flag(attrs: &Attributes, key: &str) -> bool {
    attrs.get(key) != Some("false")
}

/// Positive pixel value; zero counts as unset, malformed input warns
fn px_attr(attrs: &Attributes, key: &str) -> Option<u32> {
    let raw = attrs.get(key)?;
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(0) => None,
        Ok(px) => Some(px),
        Err(_) => {
            warn!("Invalid pixel value '{}' for '{}', using default", raw, key);
            None
        }
    }
}

/// Deezer kind attribute; unknown kinds warn and fall back to playlist
fn deezer_type_attr(attrs: &Attributes) -> DeezerType {
    match attrs.get("deezer-type") {
        None | Some("") => DeezerType::default(),
        Some(raw) => DeezerType::parse(raw).unwrap_or_else(|| {
            warn!("Unknown deezer type '{}', using 'playlist'", raw);
            DeezerType::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attributes_give_documented_defaults() {
        let config = PlayerConfig::from_attributes(&Attributes::new());
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.apple_store, "de");
        assert_eq!(config.youtube_height_px, 240);
        assert!(config.youtube_force_aspect);
        assert!(config.soundcloud_visual);
        assert_eq!(config.deezer_type, DeezerType::Playlist);
        assert!(config.deezer_tracklist);
        assert!(!config.deezer_force_free);
        assert!(!config.uniform_tabs);
        assert_eq!(config.uniform_height_px, None);
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let attrs = Attributes::new()
            .with("spotify-artist-id", "")
            .with("apple-store", "")
            .with("default-provider", "");
        let config = PlayerConfig::from_attributes(&attrs);
        assert_eq!(config.spotify_artist_id, None);
        assert_eq!(config.apple_store, "de");
        assert_eq!(config.default_provider, None);
    }

    #[test]
    fn test_identifier_values_kept_verbatim() {
        let attrs = Attributes::new()
            .with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU")
            .with("apple-store", "us")
            .with("smartlink-url", "https://push.fm/x")
            .with("yt-poster", "poster.jpg");
        let config = PlayerConfig::from_attributes(&attrs);
        assert_eq!(config.spotify_artist_id.as_deref(), Some("4gzpq5DPGxSnKTe4SA8HAU"));
        assert_eq!(config.apple_store, "us");
        assert_eq!(config.smart_link.as_deref(), Some("https://push.fm/x"));
        assert_eq!(config.youtube_poster.as_deref(), Some("poster.jpg"));
    }

    #[test]
    fn test_opt_out_flags_only_honor_literal_false() {
        let attrs = Attributes::new()
            .with("yt-aspect", "false")
            .with("sc-visual", "FALSE")
            .with("deezer-tracklist", "no");
        let config = PlayerConfig::from_attributes(&attrs);
        assert!(!config.youtube_force_aspect);
        assert!(config.soundcloud_visual);
        assert!(config.deezer_tracklist);
    }

    #[test]
    fn test_deezer_free_is_opt_in() {
        let on = Attributes::new().with("deezer-free", "true");
        let off = Attributes::new().with("deezer-free", "yes");
        assert!(PlayerConfig::from_attributes(&on).deezer_force_free);
        assert!(!PlayerConfig::from_attributes(&off).deezer_force_free);
    }

    #[test]
    fn test_uniform_tabs_is_presence_based() {
        let attrs = Attributes::new().with("uniform-tabs", "");
        assert!(PlayerConfig::from_attributes(&attrs).uniform_tabs);

        let attrs = Attributes::new().with("uniform-tabs", "false");
        assert!(PlayerConfig::from_attributes(&attrs).uniform_tabs);
    }

    #[test]
    fn test_pixel_values_parse_strictly() {
        let attrs = Attributes::new()
            .with("yt-height", "360")
            .with("uniform-height", "450");
        let config = PlayerConfig::from_attributes(&attrs);
        assert_eq!(config.youtube_height_px, 360);
        assert_eq!(config.uniform_height_px, Some(450));
    }

    #[test]
    fn test_zero_and_malformed_pixel_values_fall_back() {
        let attrs = Attributes::new()
            .with("yt-height", "0")
            .with("uniform-height", "tall");
        let config = PlayerConfig::from_attributes(&attrs);
        assert_eq!(config.youtube_height_px, 240);
        assert_eq!(config.uniform_height_px, None);

        let attrs = Attributes::new().with("yt-height", "240px");
        assert_eq!(PlayerConfig::from_attributes(&attrs).youtube_height_px, 240);
    }

    #[test]
    fn test_deezer_type_is_case_insensitive() {
        let attrs = Attributes::new().with("deezer-type", "Album");
        assert_eq!(PlayerConfig::from_attributes(&attrs).deezer_type, DeezerType::Album);

        let attrs = Attributes::new().with("deezer-type", "TRACK");
        assert_eq!(PlayerConfig::from_attributes(&attrs).deezer_type, DeezerType::Track);
    }

    #[test]
    fn test_unknown_deezer_type_falls_back_to_playlist() {
        let attrs = Attributes::new().with("deezer-type", "podcast");
        assert_eq!(PlayerConfig::from_attributes(&attrs).deezer_type, DeezerType::Playlist);
    }

    #[test]
    fn test_default_provider_kept_verbatim() {
        let attrs = Attributes::new().with("default-provider", "Deezer");
        let config = PlayerConfig::from_attributes(&attrs);
        assert_eq!(config.default_provider.as_deref(), Some("Deezer"));
    }

    #[test]
    fn test_deezer_type_display() {
        assert_eq!(DeezerType::Track.to_string(), "track");
        assert_eq!(DeezerType::Playlist.to_string(), "playlist");
    }

    #[test]
    fn test_config_serde_round_trip() {
        let attrs = Attributes::new()
            .with("deezer-id", "987")
            .with("deezer-type", "track")
            .with("uniform-tabs", "")
            .with("uniform-height", "400");
        let config = PlayerConfig::from_attributes(&attrs);

        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: PlayerConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_deserializes_with_partial_keys() {
        let config: PlayerConfig =
            serde_yaml::from_str("spotify_artist_id: abc\ndeezer_type: album\n").unwrap();
        assert_eq!(config.spotify_artist_id.as_deref(), Some("abc"));
        assert_eq!(config.deezer_type, DeezerType::Album);
        assert_eq!(config.apple_store, "de");
        assert_eq!(config.youtube_height_px, 240);
    }
}
