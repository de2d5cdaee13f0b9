//! Example: drive the widget controller with a console presentation layer
//!
//! The consent flag lands in `.smartplayer_flags.yaml` next to the
//! working directory, so a second run starts already consented.
//!
//! Run with: cargo run -p smpwidget --example console_widget

use smpconfig::{Attributes, PlayerConfig};
use smpwidget::{FileStore, PlayerController, PresentationPort, Provider};
use std::sync::Arc;

struct ConsolePort;

impl PresentationPort for ConsolePort {
    fn set_tab_active(&mut self, provider: Provider, active: bool) {
        if active {
            println!("[tabs]    {} is now active", provider.display_name());
        }
    }

    fn set_tab_visible(&mut self, provider: Provider, visible: bool) {
        if !visible {
            println!("[tabs]    {} hidden, not configured", provider.display_name());
        }
    }

    fn show_consent_prompt(&mut self, visible: bool) {
        println!("[consent] prompt {}", if visible { "shown" } else { "hidden" });
    }

    fn set_frame_visible(&mut self, visible: bool) {
        println!("[frame]   {}", if visible { "visible" } else { "hidden" });
    }

    fn set_frame_source(&mut self, url: Option<&str>) {
        match url {
            Some(url) => println!("[frame]   src = {}", url),
            None => println!("[frame]   src removed"),
        }
    }

    fn set_frame_height(&mut self, height_px: u32) {
        println!("[frame]   height = {} px", height_px);
    }

    fn preconnect(&mut self, host: &str) {
        println!("[hint]    preconnect {}", host);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let attrs = Attributes::new()
        .with("spotify-artist-id", "4gzpq5DPGxSnKTe4SA8HAU")
        .with("deezer-id", "987")
        .with("smartlink-url", "https://push.fm/example");
    let config = PlayerConfig::from_attributes(&attrs);

    let store = Arc::new(FileStore::open(".smartplayer_flags.yaml")?);
    let mut player = PlayerController::new(config, store, Box::new(ConsolePort));
    player.initialize();

    if let Some(link) = player.smart_link() {
        println!("[link]    all platforms: {}", link);
    }

    if player.consent_granted() {
        println!("-- consent remembered from an earlier run --");
    } else {
        println!("-- visitor accepts the consent prompt --");
        player.grant_consent();
    }

    println!("-- visitor picks the Deezer tab --");
    player.select_provider(Provider::Deezer);

    Ok(())
}
