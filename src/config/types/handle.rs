//! Global config handle.
//!
//! The table is process-wide immutable state: installed once at startup,
//! never mutated, discarded on process exit. A `OnceLock` gives lock-free
//! reads from any number of threads; there is no reload path.

use crate::config::{Page, PageMetaConfig, SiteConstants, SiteInfoConfig, SocialLink};
use std::sync::OnceLock;

/// Global table storage.
static CONSTANTS: OnceLock<SiteConstants> = OnceLock::new();

/// Install the table.
///
/// The first call wins; later calls return the already-installed table
/// unchanged. Accessors used before `init` install the canonical defaults.
pub fn init(constants: SiteConstants) -> &'static SiteConstants {
    CONSTANTS.get_or_init(|| constants)
}

/// The whole table.
#[inline]
pub fn constants() -> &'static SiteConstants {
    CONSTANTS.get_or_init(SiteConstants::default)
}

/// Site identity record (`[site]`).
#[inline]
pub fn site() -> &'static SiteInfoConfig {
    &constants().site
}

/// Metadata record for the requested page.
///
/// The input is the closed [`Page`] enumeration, so an unknown page cannot
/// reach this lookup.
#[inline]
pub fn page_meta(page: Page) -> &'static PageMetaConfig {
    constants().pages.get(page)
}

/// Social links in display order.
#[inline]
pub fn socials() -> &'static [SocialLink] {
    &constants().socials
}

#[cfg(test)]
mod tests {
    use super::*;

    // The handle is a process-wide singleton shared by every test in this
    // binary, so all tests here only ever install the default table.

    #[test]
    fn test_init_first_call_wins() {
        let installed = init(SiteConstants::default());
        assert_eq!(installed.site.name, "syahidfrd");

        // A second init does not replace the table.
        let again = init(SiteConstants::default());
        assert_eq!(installed.site.name, again.site.name);
    }

    #[test]
    fn test_accessors_return_canonical_values() {
        assert_eq!(site().posts_on_homepage, 5);
        assert_eq!(site().projects_on_homepage, 3);
        assert_eq!(page_meta(Page::Home).title, "Home");
        assert_eq!(page_meta(Page::Blog).title, "Blog");
        assert_eq!(page_meta(Page::Projects).title, "Projects");
        assert_eq!(socials().len(), 2);
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let first = site();
        let second = site();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.email, second.email);

        let links_a = socials();
        let links_b = socials();
        assert_eq!(links_a.len(), links_b.len());
        for (a, b) in links_a.iter().zip(links_b) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.href, b.href);
        }
    }
}
