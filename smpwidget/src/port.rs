//! Presentation port
//!
//! The controller never renders anything itself: it drives this narrow
//! port, and the embedding layer maps the calls onto its own surface (a
//! DOM, a server-side template, a test recorder). Keeping the port this
//! small keeps every derivation rule testable without a UI.

use crate::provider::Provider;

/// UI operations the controller drives
///
/// One adapter serves one widget instance. Methods with a default body
/// cover optional concerns (poster overlay, pointer blocking, preconnect
/// hints) that plain adapters are free to ignore.
///
/// # Example
///
/// ```
/// use smpwidget::{PresentationPort, Provider};
///
/// struct ConsolePort;
///
/// impl PresentationPort for ConsolePort {
///     fn set_tab_active(&mut self, provider: Provider, active: bool) {
///         if active {
///             println!("active tab: {}", provider);
///         }
///     }
///
///     fn set_tab_visible(&mut self, provider: Provider, visible: bool) {
///         println!("tab {}: visible={}", provider, visible);
///     }
///
///     fn show_consent_prompt(&mut self, visible: bool) {
///         println!("consent prompt: {}", visible);
///     }
///
///     fn set_frame_visible(&mut self, visible: bool) {
///         println!("frame visible: {}", visible);
///     }
///
///     fn set_frame_source(&mut self, url: Option<&str>) {
///         println!("frame source: {:?}", url);
///     }
///
///     fn set_frame_height(&mut self, height_px: u32) {
///         println!("frame height: {} px", height_px);
///     }
/// }
/// ```
pub trait PresentationPort {
    /// Highlight or unhighlight a provider tab
    fn set_tab_active(&mut self, provider: Provider, active: bool);

    /// Show or hide a provider tab entirely
    ///
    /// Hidden tabs are the providers whose embed URL cannot be
    /// constructed from the configuration.
    fn set_tab_visible(&mut self, provider: Provider, visible: bool);

    /// Show or hide the consent prompt
    fn show_consent_prompt(&mut self, visible: bool);

    /// Show or hide the embed frame
    fn set_frame_visible(&mut self, visible: bool);

    /// Point the embed frame at a URL, or make it inert with `None`
    fn set_frame_source(&mut self, url: Option<&str>);

    /// Set the embed frame height in pixels
    fn set_frame_height(&mut self, height_px: u32);

    /// Show or hide the poster overlay covering the frame
    fn show_poster(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Allow or block pointer interaction with the frame
    ///
    /// Blocked while the poster overlay must receive the play gesture.
    fn set_frame_interactive(&mut self, interactive: bool) {
        let _ = interactive;
    }

    /// Hint that a connection to `host` will be needed shortly
    fn preconnect(&mut self, host: &str) {
        let _ = host;
    }
}

/// Port that ignores every call
///
/// Useful when only the derived values are of interest.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPort;

impl PresentationPort for NullPort {
    fn set_tab_active(&mut self, _provider: Provider, _active: bool) {}

    fn set_tab_visible(&mut self, _provider: Provider, _visible: bool) {}

    fn show_consent_prompt(&mut self, _visible: bool) {}

    fn set_frame_visible(&mut self, _visible: bool) {}

    fn set_frame_source(&mut self, _url: Option<&str>) {}

    fn set_frame_height(&mut self, _height_px: u32) {}
}
