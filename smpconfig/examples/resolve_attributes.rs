//! Example: resolve host attributes into a typed configuration
//!
//! Run with: cargo run -p smpconfig --example resolve_attributes

use smpconfig::{Attributes, PlayerConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let attrs = Attributes::new()
        .with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU")
        .with("apple-artist-id", "159260351")
        .with("yt-video-id", "dQw4w9WgXcQ")
        .with("yt-height", "not-a-number") // warns and keeps the default
        .with("deezer-id", "987")
        .with("deezer-type", "Album")
        .with("uniform-tabs", "");

    let config = PlayerConfig::from_attributes(&attrs);
    println!("{:#?}", config);
}
