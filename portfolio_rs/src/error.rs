//! Error types for the contact flow and site configuration.

use thiserror::Error;

/// The host refused to navigate to a mail link.
///
/// Produced by [`crate::contact::MailDispatcher`] implementations; the browser
/// adapter wraps whatever the `Location` API threw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("mail dispatch failed: {reason}")]
pub struct DispatchError {
    /// Host-provided description of the failure.
    pub reason: String,
}

impl DispatchError {
    /// Create a dispatch error from any printable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Why a contact form submission did not go through.
///
/// Both variants are recovered locally by the form: the status banner shows a
/// fixed message and the form stays usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One or more required fields were empty at submit time.
    #[error("required field is empty: {0}")]
    Validation(&'static str),

    /// The mail link could not be handed to the host.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Invalid embedded site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document did not parse.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required value was present but empty.
    #[error("site config field `{0}` must not be empty")]
    MissingField(&'static str),

    /// The contact recipient is not a usable mail address.
    #[error("invalid contact recipient `{0}`")]
    InvalidRecipient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_error_converts_into_contact_error() {
        let err: ContactError = DispatchError::new("blocked by host").into();
        assert_eq!(err, ContactError::Dispatch(DispatchError::new("blocked by host")));
        assert_eq!(err.to_string(), "mail dispatch failed: blocked by host");
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = ContactError::Validation("contact");
        assert_eq!(err.to_string(), "required field is empty: contact");
    }
}
