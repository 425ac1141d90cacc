//! `[site]` section configuration.
//!
//! Contains the site/author identity and homepage display counts.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "syahidfrd"
//! email = "syahidfrd@gmail.com"
//! posts_on_homepage = 5
//! projects_on_homepage = 3
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site identity record.
///
/// The display counts control how many recent posts/projects a homepage
/// renderer shows; `0` means "show none". They are `usize`, so a negative
/// count is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Human-readable site/author identifier.
    pub name: String,

    /// Contact address. Only checked for presence at this layer, not for
    /// email syntax.
    pub email: String,

    /// Number of recent posts shown on the homepage.
    pub posts_on_homepage: usize,

    /// Number of projects shown on the homepage.
    pub projects_on_homepage: usize,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "syahidfrd".into(),
            email: "syahidfrd@gmail.com".into(),
            posts_on_homepage: 5,
            projects_on_homepage: 3,
        }
    }
}

/// Field paths for diagnostic messages.
pub struct SiteInfoFields {
    pub name: FieldPath,
    pub email: FieldPath,
    pub posts_on_homepage: FieldPath,
    pub projects_on_homepage: FieldPath,
}

impl SiteInfoConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        name: FieldPath::new("site.name"),
        email: FieldPath::new("site.email"),
        posts_on_homepage: FieldPath::new("site.posts_on_homepage"),
        projects_on_homepage: FieldPath::new("site.projects_on_homepage"),
    };

    /// Validate the site section.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `email` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "must not be empty",
                "set the site/author display name",
            );
        }

        if self.email.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.email,
                "must not be empty",
                "set a contact address, e.g.: \"you@example.com\"",
            );
        }
    }

    /// Generate a commented TOML template for this section.
    pub fn template_with_header() -> String {
        let default = Self::default();
        format!(
            "# Site identity and homepage display counts.\n\
             [site]\n\
             name = {:?}\n\
             email = {:?}\n\
             posts_on_homepage = {}  # 0 means show none\n\
             projects_on_homepage = {}  # 0 means show none\n",
            default.name, default.email, default.posts_on_homepage, default.projects_on_homepage
        )
    }
}
