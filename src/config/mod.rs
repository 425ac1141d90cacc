//! The site configuration table and its `sitemeta.toml` override layer.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── pages      # [pages.home], [pages.blog], [pages.projects]
//! │   └── socials    # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global table handle
//! └── mod.rs         # SiteConstants (this file)
//! ```
//!
//! The canonical table is [`SiteConstants::default`]; loading a TOML file
//! deserializes over those defaults, so an absent file or key means the
//! canonical value. The table never changes after [`init`].

pub mod section;
pub mod types;

// Re-export from section/
pub use section::{Page, PageMetaConfig, PageMetaFields, PagesSectionConfig, SiteInfoConfig, SocialLink};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, constants, init, page_meta, site,
    socials,
};

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// The whole configuration table: site identity, per-page metadata and
/// social links.
///
/// Constructed once (defaults, or defaults plus a TOML override) and
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConstants {
    /// Site identity and homepage display counts
    pub site: SiteInfoConfig,

    /// Per-page metadata records
    pub pages: PagesSectionConfig,

    /// Outbound profile links, in display order
    #[serde(default = "section::socials::default_socials")]
    pub socials: Vec<SocialLink>,
}

impl Default for SiteConstants {
    fn default() -> Self {
        Self {
            site: SiteInfoConfig::default(),
            pages: PagesSectionConfig::default(),
            socials: section::socials::default_socials(),
        }
    }
}

impl SiteConstants {
    /// Load the table for process startup.
    ///
    /// Reads and validates `path` when it exists; otherwise returns the
    /// canonical defaults (which always validate).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let constants = Self::from_path(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse the table from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let constants: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(constants)
    }

    /// Load the table from a file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (constants, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(constants)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let constants = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((constants, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Metadata record for the requested page.
    pub fn page_meta(&self, page: Page) -> &PageMetaConfig {
        self.pages.get(page)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the table.
    ///
    /// Collects all validation errors and returns them at once. The
    /// canonical defaults always pass; this exists for TOML overrides,
    /// which can carry empty fields or malformed links.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.pages.validate(&mut diag);
        section::socials::validate(&self.socials, &mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// template generation
// ============================================================================

/// Generate a commented `sitemeta.toml` with the canonical values.
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# sitemeta configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [pages.*] sections
    out.push_str(&PagesSectionConfig::template_with_header());
    out.push('\n');

    // [[socials]] section
    out.push_str(&section::socials::template_with_header());

    out
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse`)
// ============================================================================

/// Parse a config override on top of the canonical defaults.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse(content: &str) -> SiteConstants {
    let (parsed, ignored) = SiteConstants::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
