//! `[pages]` section configuration.
//!
//! Per-page title/description records for the closed set of logical pages.
//! Each record is used for display and for document head metadata.
//!
//! # Example
//!
//! ```toml
//! [pages.home]
//! title = "Home"
//! description = "Syahidfrd is a minimal and lightweight blog and portfolio."
//!
//! [pages.blog]
//! title = "Blog"
//! description = "A collection of articles on topics I am passionate about."
//! ```

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// ============================================================================
// Page
// ============================================================================

/// Closed enumeration of logical pages.
///
/// Adding a page means adding a variant here plus a metadata record in
/// [`PagesSectionConfig`]; every `match` on `Page` is exhaustive, so a
/// missing record fails to compile instead of failing at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Blog,
    Projects,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Blog, Self::Projects];

    /// Lowercase page identifier, as used for TOML keys and routes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Blog => "blog",
            Self::Projects => "projects",
        }
    }

    /// Field paths of this page's metadata record, for diagnostics.
    pub const fn fields(self) -> PageMetaFields {
        match self {
            Self::Home => PageMetaFields {
                title: FieldPath::new("pages.home.title"),
                description: FieldPath::new("pages.home.description"),
            },
            Self::Blog => PageMetaFields {
                title: FieldPath::new("pages.blog.title"),
                description: FieldPath::new("pages.blog.description"),
            },
            Self::Projects => PageMetaFields {
                title: FieldPath::new("pages.projects.title"),
                description: FieldPath::new("pages.projects.description"),
            },
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ConfigError;

    /// Parse a page identifier at the string boundary.
    ///
    /// Unrecognized identifiers surface immediately as
    /// [`ConfigError::UnknownPage`] rather than falling back to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "blog" => Ok(Self::Blog),
            "projects" => Ok(Self::Projects),
            _ => Err(ConfigError::UnknownPage(s.to_string())),
        }
    }
}

// ============================================================================
// PageMetaConfig
// ============================================================================

/// Per-page descriptive record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageMetaConfig {
    /// Short text label.
    pub title: String,

    /// Longer summary for display and `<head>` metadata.
    pub description: String,
}

/// Field paths for one page's metadata record.
pub struct PageMetaFields {
    pub title: FieldPath,
    pub description: FieldPath,
}

// ============================================================================
// PagesSectionConfig
// ============================================================================

fn default_home() -> PageMetaConfig {
    PageMetaConfig {
        title: "Home".into(),
        description: "Syahidfrd is a minimal and lightweight blog and portfolio.".into(),
    }
}

fn default_blog() -> PageMetaConfig {
    PageMetaConfig {
        title: "Blog".into(),
        description: "A collection of articles on topics I am passionate about.".into(),
    }
}

fn default_projects() -> PageMetaConfig {
    PageMetaConfig {
        title: "Projects".into(),
        description: "A collection of my projects, with links to repositories and demos.".into(),
    }
}

/// Pages section containing one metadata record per logical page.
///
/// An omitted `[pages.<page>]` table keeps the canonical record. An
/// overriding table replaces the record wholesale, so both `title` and
/// `description` must be given; a half-written record is caught by
/// `validate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagesSectionConfig {
    #[serde(default = "default_home")]
    pub home: PageMetaConfig,

    #[serde(default = "default_blog")]
    pub blog: PageMetaConfig,

    #[serde(default = "default_projects")]
    pub projects: PageMetaConfig,
}

impl Default for PagesSectionConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            blog: default_blog(),
            projects: default_projects(),
        }
    }
}

impl PagesSectionConfig {
    /// Metadata record for the requested page.
    pub fn get(&self, page: Page) -> &PageMetaConfig {
        match page {
            Page::Home => &self.home,
            Page::Blog => &self.blog,
            Page::Projects => &self.projects,
        }
    }

    /// Validate every page record.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `description` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for page in Page::ALL {
            let meta = self.get(page);
            let fields = page.fields();

            if meta.title.trim().is_empty() {
                diag.error_with_hint(
                    fields.title,
                    "must not be empty",
                    "overriding a page replaces its whole record; set both title and description",
                );
            }

            if meta.description.trim().is_empty() {
                diag.error_with_hint(
                    fields.description,
                    "must not be empty",
                    "overriding a page replaces its whole record; set both title and description",
                );
            }
        }
    }

    /// Generate a commented TOML template for this section.
    pub fn template_with_header() -> String {
        let default = Self::default();
        let mut out = String::from("# Per-page title and description, used for display and <head> metadata.\n");
        for page in Page::ALL {
            let meta = default.get(page);
            out.push_str(&format!(
                "[pages.{}]\ntitle = {:?}\ndescription = {:?}\n",
                page, meta.title, meta.description
            ));
            if page != Page::Projects {
                out.push('\n');
            }
        }
        out
    }
}
