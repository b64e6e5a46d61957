//! Browser implementations of the page's host traits.

use portfolio::{DispatchError, MailDispatcher, ScrollHost, ScrollOutcome};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Scrolls elements of the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentScroller;

impl ScrollHost for DocumentScroller {
    fn scroll_into_view(&self, id: &str) -> ScrollOutcome {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return ScrollOutcome::Missing;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        ScrollOutcome::Scrolled
    }
}

/// Opens `mailto:` links by navigating the current window to them; the
/// browser passes them on to the registered mail client.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationMailer;

impl MailDispatcher for LocationMailer {
    fn open(&self, uri: &str) -> Result<(), DispatchError> {
        let window = web_sys::window().ok_or_else(|| DispatchError::new("no window"))?;
        window
            .location()
            .set_href(uri)
            .map_err(|e| DispatchError::new(format!("{:?}", e)))
    }
}
