//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemeta.toml`:
//!
//! | Module    | TOML Section    | Purpose                              |
//! |-----------|-----------------|--------------------------------------|
//! | `site`    | `[site]`        | Identity, homepage display counts    |
//! | `pages`   | `[pages.*]`     | Per-page title/description           |
//! | `socials` | `[[socials]]`   | Outbound profile links               |

pub mod pages;
pub mod site;
pub mod socials;

// Re-export section configs
pub use pages::{Page, PageMetaConfig, PageMetaFields, PagesSectionConfig};
pub use site::SiteInfoConfig;
pub use socials::SocialLink;
