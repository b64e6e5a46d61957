//! `mailto:` deep links.
//!
//! The contact form has no backend: it builds a link like
//! `mailto:me@example.com?subject=...&body=...` and asks the host to navigate
//! to it, which opens the visitor's mail client with the message prefilled.
//! Subject and body are percent-encoded with [`urlencoding`]; everything but
//! the unreserved set (`A-Z a-z 0-9 - _ . ~`) is escaped, so spaces,
//! newlines, `&` and `=` cannot leak into the query structure.

use std::fmt;

use crate::contact::FormData;

/// Subject prefix; the sender's name follows.
pub const SUBJECT_PREFIX: &str = "Portfolio Contact from ";

/// A prefilled message, ready to render as a `mailto:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    /// Address in the URI path. Not encoded; the config layer validates it.
    pub recipient: String,
    /// Plain-text subject.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl MailtoLink {
    /// Link carrying a contact form message.
    pub fn for_message(recipient: &str, data: &FormData) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("{SUBJECT_PREFIX}{}", data.name),
            body: message_body(data),
        }
    }

    /// `mailto:<recipient>?subject=<pct>&body=<pct>`
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

/// Plain-text body: labelled name and contact lines, a blank line, then the
/// message.
pub fn message_body(data: &FormData) -> String {
    format!(
        "Name: {}\nContact: {}\n\nMessage:\n{}",
        data.name, data.contact, data.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: &str, contact: &str, message: &str) -> FormData {
        FormData {
            name: name.into(),
            contact: contact.into(),
            message: message.into(),
        }
    }

    /// Split a rendered URI back into recipient and decoded query values.
    fn parse(uri: &str) -> (String, String, String) {
        let rest = uri.strip_prefix("mailto:").expect("mailto scheme");
        let (recipient, query) = rest.split_once('?').expect("query");
        let mut subject = None;
        let mut body = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').expect("key=value");
            let decoded = urlencoding::decode(value).expect("utf-8").into_owned();
            match key {
                "subject" => subject = Some(decoded),
                "body" => body = Some(decoded),
                other => panic!("unexpected query key {other}"),
            }
        }
        (
            recipient.to_string(),
            subject.expect("subject"),
            body.expect("body"),
        )
    }

    #[test]
    fn body_matches_expected_layout() {
        let link = MailtoLink::for_message(
            "me@example.com",
            &form("Ada", "ada@example.com", "Hi there!"),
        );
        let (recipient, subject, body) = parse(&link.to_uri());

        assert_eq!(recipient, "me@example.com");
        assert_eq!(subject, "Portfolio Contact from Ada");
        assert_eq!(
            body,
            "Name: Ada\nContact: ada@example.com\n\nMessage:\nHi there!"
        );
    }

    #[test]
    fn reserved_characters_are_escaped_and_round_trip() {
        let data = form(
            "Tom & Jerry",
            "a=b&c=d",
            "line one\nline two\n\n50% off? #deal + more",
        );
        let uri = MailtoLink::for_message("me@example.com", &data).to_uri();

        // only the two structural separators survive unescaped
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('=').count(), 2);
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains('#'));

        let (_, subject, body) = parse(&uri);
        assert_eq!(subject, format!("{SUBJECT_PREFIX}{}", data.name));
        assert_eq!(body, message_body(&data));
        assert!(body.contains("Tom & Jerry"));
        assert!(body.contains("a=b&c=d"));
        assert!(body.contains("line one\nline two"));
    }

    #[test]
    fn non_ascii_survives_encoding() {
        let data = form("Zoë Łukasz", "+48 600 000 000", "Cześć 👋");
        let (_, subject, body) = parse(&MailtoLink::for_message("me@example.com", &data).to_uri());
        assert_eq!(subject, "Portfolio Contact from Zoë Łukasz");
        assert!(body.ends_with("Message:\nCześć 👋"));
    }

    #[test]
    fn display_matches_to_uri() {
        let link = MailtoLink::for_message("me@example.com", &form("A", "B", "C"));
        assert_eq!(link.to_string(), link.to_uri());
        assert_eq!(
            link.to_uri(),
            "mailto:me@example.com?subject=Portfolio%20Contact%20from%20A&body=Name%3A%20A%0AContact%3A%20B%0A%0AMessage%3A%0AC"
        );
    }
}
