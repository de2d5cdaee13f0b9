//! Example: derived embed URLs and frame heights for every provider
//!
//! Run with: cargo run -p smpwidget --example embed_urls

use smpconfig::{Attributes, PlayerConfig};
use smpwidget::{choose_default_provider, embed_url, frame_height, Provider};

fn main() {
    tracing_subscriber::fmt::init();

    let attrs = Attributes::new()
        .with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU")
        .with("apple-album-id", "1713845538")
        .with("yt-playlist-id", "PLx65qkgCWNJIs3FPVnDKYfRyDdTBZopNr")
        .with("soundcloud-url", "https://soundcloud.com/forss/flickermood");
    let config = PlayerConfig::from_attributes(&attrs);

    println!("default provider: {}", choose_default_provider(&config));
    println!();

    for provider in Provider::ALL {
        match embed_url(&config, provider) {
            Some(url) => println!(
                "{:<12} {:>4} px  {}",
                provider.display_name(),
                frame_height(&config, provider, None),
                url
            ),
            None => println!("{:<12} (not configured)", provider.display_name()),
        }
    }
}
