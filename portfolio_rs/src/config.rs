//! Site configuration.
//!
//! The landing crate embeds `site.toml` at build time and hands its text to
//! [`SiteConfig::load_embedded`]. Every section is optional; missing values
//! fall back to the defaults below.

use serde::Deserialize;

use crate::content::live_link;
use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Who the page is about.
    pub owner: OwnerConfig,
    /// Contact form settings.
    pub contact: ContactConfig,
    /// Social profile links shown in the hero and footer.
    pub social: SocialConfig,
    /// Footer copy.
    pub footer: FooterConfig,
}

/// Hero identity block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    /// Full name, used in the hero heading and footer.
    pub name: String,
    /// Role line under the name.
    pub role: String,
    /// Glyph shown in the avatar circle.
    pub avatar: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Sanjid Islam Joy".into(),
            role: "Front End Developer".into(),
            avatar: "👤".into(),
        }
    }
}

/// Contact form settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address the generated `mailto:` link is addressed to.
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "your.email@example.com".into(),
        }
    }
}

/// Social profile links. `#` or an empty value keeps the icon visible
/// without a destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// GitHub profile URL.
    pub github: String,
    /// LinkedIn profile URL.
    pub linkedin: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            github: "#".into(),
            linkedin: "#".into(),
        }
    }
}

impl SocialConfig {
    /// GitHub profile to link the icon to, if one is configured.
    pub fn github_url(&self) -> Option<&str> {
        live_link(&self.github)
    }

    /// LinkedIn profile to link the icon to, if one is configured.
    pub fn linkedin_url(&self) -> Option<&str> {
        live_link(&self.linkedin)
    }
}

/// Footer copy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Copyright year.
    pub year: u16,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self { year: 2024 }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the embedded config, falling back to defaults when it is invalid.
    pub fn load_embedded(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring embedded site config: {}", e);
                Self::default()
            }
        }
    }

    /// Check the values the page cannot render sensibly without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.name.trim().is_empty() {
            return Err(ConfigError::MissingField("owner.name"));
        }
        if self.contact.recipient.trim().is_empty() {
            return Err(ConfigError::MissingField("contact.recipient"));
        }
        if !is_plausible_address(&self.contact.recipient) {
            return Err(ConfigError::InvalidRecipient(self.contact.recipient.clone()));
        }
        Ok(())
    }

    /// Mail address the contact form writes to.
    pub fn recipient(&self) -> &str {
        &self.contact.recipient
    }
}

/// `local@domain`, one `@`, no whitespace, nothing that would break out of
/// the `mailto:` path.
fn is_plausible_address(address: &str) -> bool {
    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !address
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '&' | '#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.owner.name, "Sanjid Islam Joy");
        assert_eq!(config.owner.role, "Front End Developer");
        assert_eq!(config.recipient(), "your.email@example.com");
        assert_eq!(config.footer.year, 2024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_social_icons_have_no_destination() {
        let social = SiteConfig::default().social;
        assert_eq!(social.github_url(), None);
        assert_eq!(social.linkedin_url(), None);
    }

    #[test]
    fn test_load_valid_config() {
        let config = SiteConfig::from_toml_str(
            r#"
[owner]
name = "Ada Lovelace"
role = "Analyst"

[contact]
recipient = "ada@example.com"

[social]
github = "https://github.com/ada"
"#,
        )
        .expect("valid config");

        assert_eq!(config.owner.name, "Ada Lovelace");
        assert_eq!(config.owner.role, "Analyst");
        // unspecified keys keep their defaults
        assert_eq!(config.owner.avatar, "👤");
        assert_eq!(config.recipient(), "ada@example.com");
        assert_eq!(config.social.github_url(), Some("https://github.com/ada"));
        assert_eq!(config.social.linkedin_url(), None);
    }

    #[test]
    fn test_load_empty_config() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SiteConfig::from_toml_str("[owner\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_recipients() {
        for recipient in ["", "no-at-sign", "a@b@c", "@example.com", "me@", "me@x.com?cc=y"] {
            let toml = format!("[contact]\nrecipient = \"{recipient}\"\n");
            let err = SiteConfig::from_toml_str(&toml).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::InvalidRecipient(_) | ConfigError::MissingField(_)
                ),
                "{recipient} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_blank_owner_name() {
        let err = SiteConfig::from_toml_str("[owner]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("owner.name")));
    }

    #[test]
    fn test_load_embedded_falls_back_to_defaults() {
        let config = SiteConfig::load_embedded("[contact]\nrecipient = \"nobody\"\n");
        assert_eq!(config, SiteConfig::default());
    }
}
