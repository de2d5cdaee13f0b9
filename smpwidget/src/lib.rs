//! # SmartPlayer Widget Core
//!
//! Embeddable music-player widget logic, independent of any rendering
//! surface:
//! - **Providers**: Spotify, Apple Music, YouTube, Deezer, SoundCloud
//!   as a closed enumeration ([`Provider`])
//! - **Embed URLs**: derived per provider from the resolved
//!   configuration ([`embed_url`])
//! - **Frame heights**: fixed per-provider heights, a 16:9 mode for
//!   YouTube and a uniform override ([`frame_height`])
//! - **Consent gating**: third-party content stays unloaded until a
//!   one-time consent, persisted through a [`KeyValueStore`]
//! - **Presentation port**: the controller drives a small trait
//!   ([`PresentationPort`]) instead of a concrete UI
//!
//! # Example
//!
//! ```
//! use smpconfig::{Attributes, PlayerConfig};
//! use smpwidget::{MemoryStore, NullPort, PlayerController, Provider};
//! use std::sync::Arc;
//!
//! let attrs = Attributes::new()
//!     .with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU")
//!     .with("deezer-id", "987");
//! let config = PlayerConfig::from_attributes(&attrs);
//!
//! let mut player =
//!     PlayerController::new(config, Arc::new(MemoryStore::new()), Box::new(NullPort));
//! player.initialize();
//!
//! // Nothing loads before consent.
//! assert!(!player.consent_granted());
//! player.grant_consent();
//!
//! player.select_provider(Provider::Deezer);
//! assert_eq!(
//!     player.current_embed_url().as_deref(),
//!     Some("https://widget.deezer.com/widget/dark/playlist/987?tracklist=true")
//! );
//! ```

pub mod controller;
pub mod embed;
pub mod error;
pub mod port;
pub mod provider;
pub mod store;

pub use controller::{choose_default_provider, PlayerController};
pub use embed::{embed_url, frame_height, with_autoplay};
pub use error::{Error, Result};
pub use port::{NullPort, PresentationPort};
pub use provider::Provider;
pub use store::{
    consent_granted, record_consent, FileStore, KeyValueStore, MemoryStore, CONSENT_GRANTED,
    CONSENT_KEY,
};

// Re-export the configuration crate for one-stop embedding
pub use smpconfig;
