//! Static configuration table for a minimal blog/portfolio site.
//!
//! The table holds site identity (`[site]`), per-page metadata for the
//! closed set of pages (`[pages.home]`, `[pages.blog]`, `[pages.projects]`)
//! and an ordered list of outbound social links (`[[socials]]`).
//!
//! The canonical values are baked in as defaults; an optional `sitemeta.toml`
//! can override any of them at load time. After [`config::init`] the table is
//! process-wide immutable state, readable from any thread without locking.
//!
//! # Example
//!
//! ```
//! use sitemeta::config::{self, Page};
//!
//! let site = config::site();
//! assert_eq!(site.posts_on_homepage, 5);
//!
//! let home = config::page_meta(Page::Home);
//! assert_eq!(home.title, "Home");
//!
//! for link in config::socials() {
//!     assert!(link.href.starts_with("https://"));
//! }
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostics, ConfigError, FieldPath, Page, PageMetaConfig, SiteConstants,
    SiteInfoConfig, SocialLink,
};
