//! In-page section navigation.
//!
//! Nav links never change the URL. A click asks the host to smooth-scroll the
//! matching section into view and then records the clicked section as
//! active. The host reports whether the element existed; the active section
//! is updated either way (see [`navigate`]).

use std::fmt;

/// Scroll targets of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// Top of the page; active before any nav click. Not a nav item.
    #[default]
    Home,
    /// Expertise grid.
    Expertise,
    /// Career timeline.
    History,
    /// Project grid.
    Projects,
    /// Contact form.
    Contact,
}

/// Nav bar entries, left to right.
pub const NAV_ITEMS: [Section; 4] = [
    Section::Expertise,
    Section::History,
    Section::Projects,
    Section::Contact,
];

impl Section {
    /// Text shown in the nav bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Expertise => "Expertise",
            Section::History => "History",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Lowercased label: the section element's `id` and the link's `#` target.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Expertise => "expertise",
            Section::History => "history",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// `#anchor` for the link's `href`.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Result of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The element existed and was scrolled into view.
    Scrolled,
    /// No element carries the requested id.
    Missing,
}

/// Viewport the page lives in.
pub trait ScrollHost {
    /// Smooth-scroll the element with `id` so its top edge meets the top of
    /// the viewport.
    fn scroll_into_view(&self, id: &str) -> ScrollOutcome;
}

/// What a nav click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    /// Section to record as active. Always the clicked section.
    pub active: Section,
    /// Whether the host found something to scroll to.
    pub scroll: ScrollOutcome,
}

impl NavOutcome {
    /// True when the viewport actually moved.
    pub fn scrolled(&self) -> bool {
        self.scroll == ScrollOutcome::Scrolled
    }
}

/// Handle a nav click: one scroll request for `section.anchor()`, then
/// report `section` as active.
///
/// A missing target still yields `section` as active, so the highlighted link
/// can disagree with what is on screen. Callers apply `active` unconditionally.
pub fn navigate<H: ScrollHost + ?Sized>(host: &H, section: Section) -> NavOutcome {
    let scroll = host.scroll_into_view(section.anchor());
    match scroll {
        ScrollOutcome::Scrolled => tracing::debug!("scrolled to #{}", section),
        ScrollOutcome::Missing => {
            tracing::warn!("no element with id `{}`, marking it active anyway", section)
        }
    }
    NavOutcome {
        active: section,
        scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Page with a fixed set of element ids that records scroll requests.
    struct FakePage {
        ids: Vec<&'static str>,
        requests: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn scrolled_to(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl ScrollHost for FakePage {
        fn scroll_into_view(&self, id: &str) -> ScrollOutcome {
            if self.ids.contains(&id) {
                self.requests.borrow_mut().push(id.to_string());
                ScrollOutcome::Scrolled
            } else {
                ScrollOutcome::Missing
            }
        }
    }

    #[test]
    fn nav_items_are_fixed_and_ordered() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Expertise", "History", "Projects", "Contact"]);
    }

    #[test]
    fn anchor_is_lowercased_label() {
        for section in NAV_ITEMS {
            assert_eq!(section.anchor(), section.label().to_lowercase());
            assert_eq!(section.href(), format!("#{}", section.anchor()));
        }
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn click_on_existing_section_scrolls_once_and_activates() {
        let page = FakePage::with_ids(&["expertise", "history", "projects", "contact"]);

        let outcome = navigate(&page, Section::Projects);

        assert_eq!(outcome.active, Section::Projects);
        assert_eq!(outcome.active.anchor(), "projects");
        assert!(outcome.scrolled());
        assert_eq!(page.scrolled_to(), vec!["projects".to_string()]);
    }

    #[test]
    fn repeated_clicks_scroll_once_per_click() {
        let page = FakePage::with_ids(&["contact"]);
        navigate(&page, Section::Contact);
        navigate(&page, Section::Contact);
        assert_eq!(page.scrolled_to().len(), 2);
    }

    /// A missing target still moves the highlight while the viewport stays
    /// put. Kept as-is; this pins the behaviour until product decides
    /// otherwise.
    #[test]
    fn click_on_missing_section_still_activates_without_scrolling() {
        let page = FakePage::with_ids(&["expertise"]);

        let outcome = navigate(&page, Section::History);

        assert_eq!(outcome.active, Section::History);
        assert_eq!(outcome.scroll, ScrollOutcome::Missing);
        assert!(page.scrolled_to().is_empty());
    }
}
