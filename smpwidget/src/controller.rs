//! Widget controller
//!
//! [`PlayerController`] owns the session state of one widget instance:
//! the selected provider, the consent flag and the last reported host
//! width. It derives embed URLs and frame heights from the resolved
//! configuration and keeps the presentation layer in sync through a
//! [`PresentationPort`].
//!
//! # Example
//!
//! ```
//! use smpconfig::{Attributes, PlayerConfig};
//! use smpwidget::{MemoryStore, NullPort, PlayerController, Provider};
//! use std::sync::Arc;
//!
//! let attrs = Attributes::new().with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU");
//! let config = PlayerConfig::from_attributes(&attrs);
//!
//! let mut player =
//!     PlayerController::new(config, Arc::new(MemoryStore::new()), Box::new(NullPort));
//! player.initialize();
//!
//! assert_eq!(player.selected_provider(), Provider::Spotify);
//! assert!(!player.consent_granted());
//!
//! player.grant_consent();
//! assert!(player.current_embed_url().is_some());
//! ```

use crate::embed::{embed_url, frame_height, with_autoplay};
use crate::port::PresentationPort;
use crate::provider::Provider;
use crate::store::{self, KeyValueStore};
use smpconfig::PlayerConfig;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// First provider in priority order whose basic identifiers are present
///
/// Spotify qualifies with an artist id, Apple with an artist id (a track
/// or album id alone does not qualify it here, even though it makes the
/// embed URL constructible), YouTube with a playlist or video id, Deezer
/// with an id, SoundCloud with a URL. Falls back to Spotify when nothing
/// qualifies; the selected tab may then be unavailable.
pub fn choose_default_provider(config: &PlayerConfig) -> Provider {
    for provider in Provider::ALL {
        let qualified = match provider {
            Provider::Spotify => config.spotify_artist_id.is_some(),
            Provider::Apple => config.apple_artist_id.is_some(),
            Provider::YouTube => {
                config.youtube_playlist_id.is_some() || config.youtube_video_id.is_some()
            }
            Provider::Deezer => config.deezer_id.is_some(),
            Provider::SoundCloud => config.soundcloud_url.is_some(),
        };
        if qualified {
            return provider;
        }
    }
    Provider::Spotify
}

/// Initial provider: a valid explicit request wins, else the computed default
fn initial_provider(config: &PlayerConfig) -> Provider {
    if let Some(name) = config.default_provider.as_deref() {
        match Provider::from_name(name) {
            Some(provider) => return provider,
            None => warn!(
                "Unknown default provider '{}', falling back to priority order",
                name
            ),
        }
    }
    choose_default_provider(config)
}

/// Controller for one widget instance
///
/// The configuration is immutable for the controller's whole life; only
/// the session state changes. The consent flag is read from the injected
/// store once, at construction, and written back exactly when
/// [`grant_consent`](Self::grant_consent) runs.
pub struct PlayerController {
    config: PlayerConfig,
    store: Arc<dyn KeyValueStore>,
    port: Box<dyn PresentationPort>,
    provider: Provider,
    consented: bool,
    host_width: Option<u32>,
}

impl PlayerController {
    /// Create a controller
    ///
    /// # Arguments
    ///
    /// * `config` - Resolved widget configuration
    /// * `store` - Flag store shared by all widget instances
    /// * `port` - Presentation adapter for this instance
    ///
    /// The initial provider is the `default-provider` attribute when it
    /// names a known provider, otherwise [`choose_default_provider`].
    /// No port calls happen here; call [`initialize`](Self::initialize)
    /// once to push the initial state.
    pub fn new(
        config: PlayerConfig,
        store: Arc<dyn KeyValueStore>,
        port: Box<dyn PresentationPort>,
    ) -> Self {
        let consented = store::consent_granted(store.as_ref());
        let provider = initial_provider(&config);

        debug!(provider = %provider, consented, "player controller created");

        Self {
            config,
            store,
            port,
            provider,
            consented,
            host_width: None,
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Push the initial state through the port
    ///
    /// Tab highlights, tab visibility and the frame are synchronized in
    /// one pass.
    pub fn initialize(&mut self) {
        self.sync_tabs();
        self.sync_tab_visibility();
        self.sync_frame();
    }

    /// Select a provider tab
    ///
    /// Selecting the already selected provider re-emits the same state;
    /// the operation is idempotent.
    pub fn select_provider(&mut self, provider: Provider) {
        debug!(provider = %provider, "provider selected");
        self.provider = provider;
        self.sync_tabs();
        self.sync_frame();
    }

    /// Grant consent to load third-party content
    ///
    /// Consent is monotonic within a session: a failing store write only
    /// loses durability, never the in-session grant.
    pub fn grant_consent(&mut self) {
        self.consented = true;
        if let Err(err) = store::record_consent(self.store.as_ref()) {
            warn!(error = %err, "failed to persist consent flag");
        }
        info!("embed consent granted");
        self.sync_frame();
    }

    /// Report the rendered host width in pixels
    ///
    /// Only the uniform mode and YouTube's 16:9 mode derive their height
    /// from the width, so the frame height is re-pushed just for those,
    /// and only once consented.
    pub fn handle_resize(&mut self, width: u32) {
        self.host_width = Some(width);
        if !self.consented {
            return;
        }
        if self.config.uniform_tabs || self.provider == Provider::YouTube {
            let height = self.current_frame_height();
            self.port.set_frame_height(height);
        }
    }

    /// Explicit play gesture on the YouTube poster overlay
    ///
    /// Loads the embed with `autoplay=1`, unblocks the frame and hides
    /// the poster. Ignored unless consent was granted, YouTube is the
    /// selected provider and a poster is configured. The next frame
    /// synchronization restores the poster-covered state.
    pub fn activate_poster(&mut self) {
        if !self.consented
            || self.provider != Provider::YouTube
            || self.config.youtube_poster.is_none()
        {
            return;
        }

        if let Some(url) = embed_url(&self.config, Provider::YouTube) {
            let autoplay_url = with_autoplay(&url);
            debug!(url = %autoplay_url, "poster activated");
            self.port.set_frame_source(Some(&autoplay_url));
        }
        self.port.set_frame_interactive(true);
        self.port.show_poster(false);
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Embed URL of the selected provider, when constructible
    pub fn current_embed_url(&self) -> Option<String> {
        embed_url(&self.config, self.provider)
    }

    /// Frame height of the selected provider, in pixels
    pub fn current_frame_height(&self) -> u32 {
        frame_height(&self.config, self.provider, self.host_width)
    }

    /// Whether an embed URL can be constructed for a provider
    pub fn is_provider_available(&self, provider: Provider) -> bool {
        embed_url(&self.config, provider).is_some()
    }

    /// Currently selected provider
    pub fn selected_provider(&self) -> Provider {
        self.provider
    }

    /// Whether consent was granted, persisted or in this session
    pub fn consent_granted(&self) -> bool {
        self.consented
    }

    /// Multi-platform landing page link, when configured
    pub fn smart_link(&self) -> Option<&str> {
        self.config.smart_link.as_deref()
    }

    /// Resolved configuration this controller runs on
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    // ========================================================================
    // Port synchronization
    // ========================================================================

    fn sync_tabs(&mut self) {
        for provider in Provider::ALL {
            self.port.set_tab_active(provider, provider == self.provider);
        }
    }

    fn sync_tab_visibility(&mut self) {
        for provider in Provider::ALL {
            let available = embed_url(&self.config, provider).is_some();
            self.port.set_tab_visible(provider, available);
        }
    }

    /// Push the frame state for the current provider and consent flag
    ///
    /// Before consent the frame is inert and hidden behind the prompt.
    /// After consent the prompt goes away and the frame gets its height,
    /// preconnect hints and source; with a YouTube poster configured the
    /// source stays unset until the poster is activated.
    fn sync_frame(&mut self) {
        if !self.consented {
            self.port.set_frame_source(None);
            self.port.show_consent_prompt(true);
            self.port.set_frame_visible(false);
            return;
        }

        self.port.show_consent_prompt(false);
        self.port.set_frame_visible(true);

        let height = frame_height(&self.config, self.provider, self.host_width);
        self.port.set_frame_height(height);

        for host in self.provider.preconnect_hosts() {
            self.port.preconnect(host);
        }

        if self.provider == Provider::YouTube && self.config.youtube_poster.is_some() {
            self.port.show_poster(true);
            self.port.set_frame_source(None);
            self.port.set_frame_interactive(false);
        } else {
            self.port.show_poster(false);
            self.port.set_frame_interactive(true);
            let url = embed_url(&self.config, self.provider);
            self.port.set_frame_source(url.as_deref());
        }
    }
}

impl std::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("provider", &self.provider)
            .field("consented", &self.consented)
            .field("host_width", &self.host_width)
            .finish()
    }
}
