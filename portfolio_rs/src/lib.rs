//! # portfolio
//!
//! Everything the portfolio landing page does that does not need a browser.
//!
//! The page itself is a Leptos CSR app (see the `landing` crate). It owns the
//! reactive state and renders it; this crate owns the rules behind it:
//!
//! - [`content`] - the static expertise, career and project tables
//! - [`theme`] - dark/light flag and the classes derived from it
//! - [`navigation`] - in-page section navigation behind a [`navigation::ScrollHost`]
//! - [`contact`] - the contact form state machine behind a [`contact::MailDispatcher`]
//! - [`mailto`] - `mailto:` deep link construction
//! - [`config`] - site configuration embedded at build time
//! - [`error`] - error types
//!
//! Host capabilities enter through traits, so every transition here is
//! testable without a DOM.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::contact::{ContactForm, Field, MailDispatcher};
//! use portfolio::error::DispatchError;
//!
//! struct Noop;
//! impl MailDispatcher for Noop {
//!     fn open(&self, _uri: &str) -> Result<(), DispatchError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut form = ContactForm::new("me@example.com");
//! form.set_field(Field::Name, "Ada".into());
//! form.set_field(Field::Contact, "ada@example.com".into());
//! form.set_field(Field::Message, "Hi there!".into());
//!
//! let link = form.submit(&Noop).unwrap();
//! assert!(link.to_uri().starts_with("mailto:me@example.com?subject="));
//! assert!(form.data().is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod mailto;
pub mod navigation;
pub mod theme;

pub use config::SiteConfig;
pub use contact::{ContactForm, Field, FormData, FormStatus, MailDispatcher, StatusKind};
pub use error::{ConfigError, ContactError, DispatchError};
pub use mailto::MailtoLink;
pub use navigation::{NAV_ITEMS, NavOutcome, ScrollHost, ScrollOutcome, Section, navigate};
pub use theme::Theme;
