//! Embed URL and frame height derivation
//!
//! Everything in this module is a pure function of the resolved
//! [`PlayerConfig`]: no session state, no IO. A `None` URL means the
//! provider is not constructible from this configuration; the controller
//! then hides its tab and keeps the frame inert.

use crate::provider::Provider;
use smpconfig::{DeezerType, PlayerConfig};
use url::Url;

// ============================================================================
// Embed endpoints
// ============================================================================

/// Spotify artist embed base URL
pub const SPOTIFY_EMBED_BASE: &str = "https://open.spotify.com/embed/artist";

/// Apple Music embed base URL
pub const APPLE_EMBED_BASE: &str = "https://embed.music.apple.com";

/// Privacy-enhanced YouTube embed base URL
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";

/// Deezer dark widget base URL
pub const DEEZER_WIDGET_BASE: &str = "https://widget.deezer.com/widget/dark";

/// SoundCloud player base URL
pub const SOUNDCLOUD_PLAYER_BASE: &str = "https://w.soundcloud.com/player/";

/// Fixed query parameters of every YouTube embed URL, in order
const YOUTUBE_EMBED_PARAMS: [(&str, &str); 5] = [
    ("rel", "0"),
    ("modestbranding", "1"),
    ("iv_load_policy", "3"),
    ("playsinline", "1"),
    ("color", "white"),
];

// ============================================================================
// Frame heights
// ============================================================================

/// Host width assumed for the 16:9 height when none was reported
pub const DEFAULT_HOST_WIDTH: u32 = 720;

/// Height of the compact Spotify artist embed
pub const SPOTIFY_HEIGHT: u32 = 152;
/// Height of a single-track Apple Music embed
pub const APPLE_TRACK_HEIGHT: u32 = 180;
/// Height of an album Apple Music embed
pub const APPLE_ALBUM_HEIGHT: u32 = 460;
/// Height of an artist Apple Music embed
pub const APPLE_ARTIST_HEIGHT: u32 = 300;
/// Height of a single-track Deezer widget
pub const DEEZER_TRACK_HEIGHT: u32 = 180;
/// Height of album, playlist and artist Deezer widgets
pub const DEEZER_LIST_HEIGHT: u32 = 300;
/// Height of the large visual SoundCloud player
pub const SOUNDCLOUD_VISUAL_HEIGHT: u32 = 420;
/// Height of the compact SoundCloud player
pub const SOUNDCLOUD_COMPACT_HEIGHT: u32 = 166;

// ============================================================================
// URL derivation
// ============================================================================

/// Derive the embed URL for a provider
///
/// # Arguments
///
/// * `config` - Resolved widget configuration
/// * `provider` - Provider to build the URL for
///
/// # Returns
///
/// The embed URL, or `None` when the configuration does not carry the
/// identifiers the provider needs.
pub fn embed_url(config: &PlayerConfig, provider: Provider) -> Option<String> {
    match provider {
        Provider::Spotify => spotify_url(config),
        Provider::Apple => apple_url(config),
        Provider::YouTube => youtube_url(config),
        Provider::Deezer => deezer_url(config),
        Provider::SoundCloud => soundcloud_url(config),
    }
}

/// Append the autoplay parameter to an already derived embed URL
///
/// Used by the poster-click override, which must start playback in the
/// same gesture that removed the poster.
pub fn with_autoplay(url: &str) -> String {
    if url.contains('?') {
        format!("{}&autoplay=1", url)
    } else {
        format!("{}?autoplay=1", url)
    }
}

fn spotify_url(config: &PlayerConfig) -> Option<String> {
    config
        .spotify_artist_id
        .as_deref()
        .map(|id| format!("{}/{}", SPOTIFY_EMBED_BASE, id))
}

/// Apple embed: track wins over album, album over artist
fn apple_url(config: &PlayerConfig) -> Option<String> {
    let store = &config.apple_store;
    if let Some(track_id) = config.apple_track_id.as_deref() {
        return Some(format!("{}/{}/song/{}", APPLE_EMBED_BASE, store, track_id));
    }
    if let Some(album_id) = config.apple_album_id.as_deref() {
        return Some(format!("{}/{}/album/{}", APPLE_EMBED_BASE, store, album_id));
    }
    config
        .apple_artist_id
        .as_deref()
        .map(|artist_id| format!("{}/{}/artist/{}", APPLE_EMBED_BASE, store, artist_id))
}

/// YouTube embed: a playlist id wins over a video id
fn youtube_url(config: &PlayerConfig) -> Option<String> {
    let mut url = Url::parse(YOUTUBE_EMBED_BASE).ok()?;

    if let Some(playlist_id) = config.youtube_playlist_id.as_deref() {
        url.path_segments_mut().ok()?.push("videoseries");
        append_youtube_params(&mut url);
        url.query_pairs_mut().append_pair("list", playlist_id);
        return Some(url.into());
    }

    let video_id = config.youtube_video_id.as_deref()?;
    url.path_segments_mut().ok()?.push(video_id);
    append_youtube_params(&mut url);
    Some(url.into())
}

fn append_youtube_params(url: &mut Url) {
    let mut pairs = url.query_pairs_mut();
    for (key, value) in YOUTUBE_EMBED_PARAMS {
        pairs.append_pair(key, value);
    }
}

fn deezer_url(config: &PlayerConfig) -> Option<String> {
    let id = config.deezer_id.as_deref()?;
    let mut url = Url::parse(DEEZER_WIDGET_BASE).ok()?;
    url.path_segments_mut()
        .ok()?
        .push(config.deezer_type.as_str())
        .push(id);
    url.query_pairs_mut()
        .append_pair("tracklist", bool_str(config.deezer_tracklist));
    Some(url.into())
}

fn soundcloud_url(config: &PlayerConfig) -> Option<String> {
    let track_url = config.soundcloud_url.as_deref()?;
    let mut url = Url::parse(SOUNDCLOUD_PLAYER_BASE).ok()?;
    url.query_pairs_mut()
        .append_pair("url", track_url)
        .append_pair("auto_play", "false")
        .append_pair("show_teaser", "true")
        .append_pair("visual", bool_str(config.soundcloud_visual));
    Some(url.into())
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ============================================================================
// Height derivation
// ============================================================================

/// Derive the frame height for a provider, in pixels
///
/// The uniform override (`uniform_tabs` with a height set) wins for every
/// provider. Otherwise each provider has its own rule; only YouTube's
/// 16:9 mode looks at the host width, falling back to
/// [`DEFAULT_HOST_WIDTH`] when the width is unknown or zero.
pub fn frame_height(config: &PlayerConfig, provider: Provider, host_width: Option<u32>) -> u32 {
    if config.uniform_tabs {
        if let Some(height) = config.uniform_height_px {
            return height;
        }
    }

    match provider {
        Provider::Spotify => SPOTIFY_HEIGHT,
        Provider::Apple => {
            if config.apple_track_id.is_some() {
                APPLE_TRACK_HEIGHT
            } else if config.apple_album_id.is_some() {
                APPLE_ALBUM_HEIGHT
            } else {
                APPLE_ARTIST_HEIGHT
            }
        }
        Provider::YouTube => {
            if config.youtube_force_aspect {
                let width = host_width.filter(|w| *w > 0).unwrap_or(DEFAULT_HOST_WIDTH);
                aspect_height(width)
            } else {
                config.youtube_height_px
            }
        }
        Provider::Deezer => {
            if config.deezer_type == DeezerType::Track {
                DEEZER_TRACK_HEIGHT
            } else {
                DEEZER_LIST_HEIGHT
            }
        }
        Provider::SoundCloud => {
            if config.soundcloud_visual {
                SOUNDCLOUD_VISUAL_HEIGHT
            } else {
                SOUNDCLOUD_COMPACT_HEIGHT
            }
        }
    }
}

/// 16:9 height for a host width, rounded to the nearest pixel
fn aspect_height(width: u32) -> u32 {
    (f64::from(width) * 9.0 / 16.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use smpconfig::Attributes;

    fn config(pairs: &[(&str, &str)]) -> PlayerConfig {
        let attrs: Attributes = pairs.iter().copied().collect();
        PlayerConfig::from_attributes(&attrs)
    }

    // ------------------------------------------------------------------
    // URLs
    // ------------------------------------------------------------------

    #[test]
    fn test_spotify_url() {
        let cfg = config(&[("spotify-artist-id", "abc")]);
        assert_eq!(
            embed_url(&cfg, Provider::Spotify).as_deref(),
            Some("https://open.spotify.com/embed/artist/abc")
        );
    }

    #[test]
    fn test_spotify_url_requires_artist_id() {
        assert_eq!(embed_url(&config(&[]), Provider::Spotify), None);
    }

    #[test]
    fn test_apple_url_track_wins_over_album_and_artist() {
        let cfg = config(&[
            ("apple-artist-id", "1"),
            ("apple-album-id", "2"),
            ("apple-track-id", "3"),
            ("apple-store", "us"),
        ]);
        assert_eq!(
            embed_url(&cfg, Provider::Apple).as_deref(),
            Some("https://embed.music.apple.com/us/song/3")
        );
    }

    #[test]
    fn test_apple_url_album_wins_over_artist() {
        let cfg = config(&[("apple-artist-id", "1"), ("apple-album-id", "2")]);
        assert_eq!(
            embed_url(&cfg, Provider::Apple).as_deref(),
            Some("https://embed.music.apple.com/de/album/2")
        );
    }

    #[test]
    fn test_apple_url_artist_with_default_store() {
        let cfg = config(&[("apple-artist-id", "159260351")]);
        assert_eq!(
            embed_url(&cfg, Provider::Apple).as_deref(),
            Some("https://embed.music.apple.com/de/artist/159260351")
        );
    }

    #[test]
    fn test_apple_url_requires_some_identifier() {
        let cfg = config(&[("apple-store", "us")]);
        assert_eq!(embed_url(&cfg, Provider::Apple), None);
    }

    #[test]
    fn test_youtube_video_url_carries_fixed_params() {
        let cfg = config(&[("yt-video-id", "dQw4w9WgXcQ")]);
        assert_eq!(
            embed_url(&cfg, Provider::YouTube).as_deref(),
            Some(
                "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ\
                 ?rel=0&modestbranding=1&iv_load_policy=3&playsinline=1&color=white"
            )
        );
    }

    #[test]
    fn test_youtube_playlist_wins_over_video() {
        let cfg = config(&[("yt-video-id", "vid"), ("yt-playlist-id", "PL123")]);
        assert_eq!(
            embed_url(&cfg, Provider::YouTube).as_deref(),
            Some(
                "https://www.youtube-nocookie.com/embed/videoseries\
                 ?rel=0&modestbranding=1&iv_load_policy=3&playsinline=1&color=white&list=PL123"
            )
        );
    }

    #[test]
    fn test_youtube_requires_video_or_playlist() {
        assert_eq!(embed_url(&config(&[]), Provider::YouTube), None);
    }

    #[test]
    fn test_deezer_url_pins_type_id_and_tracklist() {
        let cfg = config(&[("deezer-id", "555"), ("deezer-type", "track")]);
        assert_eq!(
            embed_url(&cfg, Provider::Deezer).as_deref(),
            Some("https://widget.deezer.com/widget/dark/track/555?tracklist=true")
        );
    }

    #[test]
    fn test_deezer_url_with_tracklist_off() {
        let cfg = config(&[("deezer-id", "9"), ("deezer-tracklist", "false")]);
        assert_eq!(
            embed_url(&cfg, Provider::Deezer).as_deref(),
            Some("https://widget.deezer.com/widget/dark/playlist/9?tracklist=false")
        );
    }

    #[test]
    fn test_soundcloud_url_encodes_query() {
        let cfg = config(&[("soundcloud-url", "https://soundcloud.com/forss/flickermood")]);
        assert_eq!(
            embed_url(&cfg, Provider::SoundCloud).as_deref(),
            Some(
                "https://w.soundcloud.com/player/\
                 ?url=https%3A%2F%2Fsoundcloud.com%2Fforss%2Fflickermood\
                 &auto_play=false&show_teaser=true&visual=true"
            )
        );
    }

    #[test]
    fn test_soundcloud_compact_sets_visual_false() {
        let cfg = config(&[("soundcloud-url", "u"), ("sc-visual", "false")]);
        let url = embed_url(&cfg, Provider::SoundCloud).unwrap();
        assert!(url.ends_with("&visual=false"));
    }

    #[test]
    fn test_with_autoplay() {
        assert_eq!(
            with_autoplay("https://example.com/embed?rel=0"),
            "https://example.com/embed?rel=0&autoplay=1"
        );
        assert_eq!(
            with_autoplay("https://example.com/embed"),
            "https://example.com/embed?autoplay=1"
        );
    }

    // ------------------------------------------------------------------
    // Heights
    // ------------------------------------------------------------------

    #[test]
    fn test_spotify_height_is_compact() {
        assert_eq!(frame_height(&config(&[]), Provider::Spotify, None), 152);
    }

    #[test]
    fn test_apple_heights_follow_identifier_precedence() {
        let track = config(&[("apple-track-id", "3"), ("apple-album-id", "2")]);
        assert_eq!(frame_height(&track, Provider::Apple, None), 180);

        let album = config(&[("apple-album-id", "2")]);
        assert_eq!(frame_height(&album, Provider::Apple, None), 460);

        let artist = config(&[("apple-artist-id", "1")]);
        assert_eq!(frame_height(&artist, Provider::Apple, None), 300);
    }

    #[test]
    fn test_deezer_height_depends_on_type() {
        let track = config(&[("deezer-id", "5"), ("deezer-type", "track")]);
        assert_eq!(frame_height(&track, Provider::Deezer, None), 180);

        let album = config(&[("deezer-id", "5"), ("deezer-type", "album")]);
        assert_eq!(frame_height(&album, Provider::Deezer, None), 300);
    }

    #[test]
    fn test_soundcloud_height_depends_on_visual_flag() {
        let visual = config(&[("soundcloud-url", "u")]);
        assert_eq!(frame_height(&visual, Provider::SoundCloud, None), 420);

        let compact = config(&[("soundcloud-url", "u"), ("sc-visual", "false")]);
        assert_eq!(frame_height(&compact, Provider::SoundCloud, None), 166);
    }

    #[test]
    fn test_youtube_aspect_height_from_width() {
        let cfg = config(&[("yt-video-id", "v")]);
        assert_eq!(frame_height(&cfg, Provider::YouTube, Some(720)), 405);
        assert_eq!(frame_height(&cfg, Provider::YouTube, Some(1000)), 563);
        assert_eq!(frame_height(&cfg, Provider::YouTube, None), 405);
        assert_eq!(frame_height(&cfg, Provider::YouTube, Some(0)), 405);
    }

    #[test]
    fn test_youtube_fixed_height_when_aspect_off() {
        let cfg = config(&[("yt-video-id", "v"), ("yt-aspect", "false")]);
        assert_eq!(frame_height(&cfg, Provider::YouTube, Some(1000)), 240);

        let tall = config(&[
            ("yt-video-id", "v"),
            ("yt-aspect", "false"),
            ("yt-height", "360"),
        ]);
        assert_eq!(frame_height(&tall, Provider::YouTube, Some(1000)), 360);
    }

    #[test]
    fn test_uniform_height_overrides_every_provider() {
        let cfg = config(&[
            ("uniform-tabs", ""),
            ("uniform-height", "222"),
            ("apple-track-id", "3"),
            ("yt-video-id", "v"),
        ]);
        for provider in Provider::ALL {
            assert_eq!(frame_height(&cfg, provider, Some(720)), 222);
        }
    }

    #[test]
    fn test_uniform_tabs_without_height_uses_provider_rules() {
        let cfg = config(&[("uniform-tabs", ""), ("soundcloud-url", "u")]);
        assert_eq!(frame_height(&cfg, Provider::SoundCloud, None), 420);
        assert_eq!(frame_height(&cfg, Provider::Spotify, None), 152);
    }
}
