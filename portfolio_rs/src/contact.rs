//! Contact form state machine.
//!
//! ```text
//!            empty field
//!   idle ─────────────────────────────▶ error (validation)
//!     │
//!     │ all fields set: begin()
//!     ▼
//!   submitting ── dispatch ok ────────▶ success (fields cleared)
//!     │
//!     └────────── dispatch failed ────▶ error (fields kept)
//! ```
//!
//! Every submission is one independent attempt: no retry, no queue. The
//! `submitting` flag is what the submit button binds `disabled` to.

use crate::error::{ContactError, DispatchError};
use crate::mailto::MailtoLink;

/// Shown when a required field is empty.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Shown once the mail client has been asked to open.
pub const SUCCESS_MESSAGE: &str =
    "Email client opened! Please send the email to complete your message.";

/// Shown when the host refused the mail link.
pub const DISPATCH_MESSAGE: &str = "Something went wrong. Please try again or email directly.";

/// Hands a `mailto:` URI to whatever opens mail clients.
pub trait MailDispatcher {
    /// Navigate to `uri`. Success only means the host accepted the request;
    /// nothing confirms that mail was sent.
    fn open(&self, uri: &str) -> Result<(), DispatchError>;
}

/// Form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender's name.
    Name,
    /// Email address or phone number.
    Contact,
    /// Free text.
    Message,
}

impl Field {
    /// All inputs, in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Contact, Field::Message];

    /// Value of the input's `name` attribute.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Contact => "contact",
            Field::Message => "message",
        }
    }

    /// Placeholder text of the input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name *",
            Field::Contact => "Email / Phone *",
            Field::Message => "Message *",
        }
    }
}

/// Current field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    /// Sender's name.
    pub name: String,
    /// Email address or phone number.
    pub contact: String,
    /// Free text.
    pub message: String,
}

impl FormData {
    /// Value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Contact => &self.contact,
            Field::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others alone.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Contact => self.contact = value,
            Field::Message => self.message = value,
        }
    }

    /// First empty field, if any. Whitespace counts as content.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    /// All three fields empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Kind of banner under the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    /// No banner.
    #[default]
    None,
    /// Green banner.
    Success,
    /// Red banner.
    Error,
}

/// Banner under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    /// Banner style.
    pub kind: StatusKind,
    /// Banner text; empty when there is no banner.
    pub message: String,
}

impl FormStatus {
    fn success(message: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    fn error(message: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    /// Whether a banner should render.
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

/// Contact form state: values, banner and in-flight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    recipient: String,
    data: FormData,
    status: FormStatus,
    submitting: bool,
}

impl ContactForm {
    /// Empty form addressed to `recipient`.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            data: FormData::default(),
            status: FormStatus::default(),
            submitting: false,
        }
    }

    /// Current values.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Current banner.
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// A dispatch is in progress; the submit button is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Address the form writes to.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Input change: replace one field. The banner is left as-is.
    pub fn set_field(&mut self, field: Field, value: String) {
        tracing::trace!("contact field `{}` changed", field.input_name());
        self.data.set(field, value);
    }

    /// Validate and enter the submitting state.
    ///
    /// On an empty field the banner switches to [`VALIDATION_MESSAGE`] and
    /// nothing else changes. Otherwise the banner is cleared, `submitting` is
    /// set and the link to dispatch is returned.
    pub fn begin(&mut self) -> Result<MailtoLink, ContactError> {
        if let Some(field) = self.data.first_missing() {
            tracing::warn!("contact form rejected: `{}` is empty", field.input_name());
            self.status = FormStatus::error(VALIDATION_MESSAGE);
            return Err(ContactError::Validation(field.input_name()));
        }

        self.status = FormStatus::default();
        self.submitting = true;
        Ok(MailtoLink::for_message(&self.recipient, &self.data))
    }

    /// Leave the submitting state with the dispatch result.
    ///
    /// Success clears all fields; failure keeps them so the visitor can retry.
    /// `submitting` is false afterwards in both cases.
    pub fn complete(&mut self, outcome: Result<(), DispatchError>) -> Result<(), ContactError> {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                tracing::info!("mail client handoff accepted");
                self.status = FormStatus::success(SUCCESS_MESSAGE);
                self.data = FormData::default();
                Ok(())
            }
            Err(e) => {
                tracing::error!("mail client handoff failed: {}", e);
                self.status = FormStatus::error(DISPATCH_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Full submission: [`begin`](Self::begin), hand the link to
    /// `dispatcher`, then [`complete`](Self::complete).
    pub fn submit<D: MailDispatcher + ?Sized>(
        &mut self,
        dispatcher: &D,
    ) -> Result<MailtoLink, ContactError> {
        let link = self.begin()?;
        tracing::info!("opening mail client for {}", self.recipient);
        let outcome = dispatcher.open(&link.to_uri());
        self.complete(outcome)?;
        Ok(link)
    }
}
