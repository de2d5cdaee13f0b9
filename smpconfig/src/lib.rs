//! # SmartPlayer Configuration Module
//!
//! This crate turns the flat string attributes a host page puts on the
//! SmartPlayer widget into a fully-defaulted, typed configuration:
//! - Raw attribute capture with verbatim values ([`Attributes`])
//! - One-shot resolution into an immutable record ([`PlayerConfig`])
//! - Documented defaults for every optional knob
//! - Warn-and-default handling of malformed values, never a hard failure
//!
//! ## Usage
//!
//! ```
//! use smpconfig::{Attributes, PlayerConfig};
//!
//! let attrs = Attributes::new()
//!     .with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU")
//!     .with("deezer-id", "987")
//!     .with("deezer-type", "album");
//!
//! let config = PlayerConfig::from_attributes(&attrs);
//! assert_eq!(config.spotify_artist_id.as_deref(), Some("4gzpq5DPGxSnKTe4SA8HAU"));
//! assert_eq!(config.apple_store, "de");
//! assert!(config.deezer_tracklist);
//! ```

pub mod attrs;
pub mod config;

pub use attrs::Attributes;
pub use config::{DeezerType, PlayerConfig, DEFAULT_APPLE_STORE, DEFAULT_YOUTUBE_HEIGHT_PX};
