//! `[[socials]]` section configuration.
//!
//! Ordered list of outbound profile links. The order in the table is the
//! display order; rendering layers must preserve it.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "github"
//! href = "https://github.com/syahidfrd"
//!
//! [[socials]]
//! name = "linkedin"
//! href = "https://www.linkedin.com/in/syahidfrd"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single outbound profile link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SocialLink {
    /// Platform identifier, used both as label and icon-selection key.
    pub name: String,

    /// Absolute `https` URL of the profile.
    pub href: String,
}

/// The canonical social links, in display order.
pub fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "github".into(),
            href: "https://github.com/syahidfrd".into(),
        },
        SocialLink {
            name: "linkedin".into(),
            href: "https://www.linkedin.com/in/syahidfrd".into(),
        },
    ]
}

/// Validate the social links list.
///
/// # Checks
/// - `name` must not be empty
/// - `href` must be a well-formed absolute URL
/// - `href` must use the `https` scheme and have a host
/// - repeated platform names only warn; icon pickers key on the name
pub fn validate(socials: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, link) in socials.iter().enumerate() {
        if !link.name.is_empty() && !seen.insert(link.name.as_str()) {
            diag.warn(
                FieldPath::leaked(format!("socials[{i}].name")),
                format!("platform `{}` appears more than once", link.name),
            );
        }

        if link.name.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::leaked(format!("socials[{i}].name")),
                "must not be empty",
                "set the platform identifier, e.g.: \"github\"",
            );
        }

        let href_field = || FieldPath::leaked(format!("socials[{i}].href"));

        if link.href.trim().is_empty() {
            diag.error_with_hint(
                href_field(),
                "must not be empty",
                "use format like https://example.com/you",
            );
            continue;
        }

        // Strict URL check via the url crate
        match url::Url::parse(&link.href) {
            Ok(parsed) => {
                if parsed.scheme() != "https" {
                    diag.error_with_hint(
                        href_field(),
                        format!("scheme '{}' not supported, must be https", parsed.scheme()),
                        "use format like https://example.com/you",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        href_field(),
                        "URL must have a valid host",
                        "use format like https://example.com/you",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    href_field(),
                    format!("invalid URL: {}", e),
                    "use format like https://example.com/you",
                );
            }
        }
    }
}

/// Generate a commented TOML template for this section.
pub fn template_with_header() -> String {
    let mut out = String::from("# Outbound profile links, shown in this order.\n");
    for (i, link) in default_socials().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "[[socials]]\nname = {:?}\nhref = {:?}\n",
            link.name, link.href
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse;

    #[test]
    fn test_default_socials_exact_order() {
        let config = test_parse("");

        assert_eq!(config.socials.len(), 2);
        assert_eq!(config.socials[0].name, "github");
        assert_eq!(config.socials[0].href, "https://github.com/syahidfrd");
        assert_eq!(config.socials[1].name, "linkedin");
        assert_eq!(
            config.socials[1].href,
            "https://www.linkedin.com/in/syahidfrd"
        );
    }

    #[test]
    fn test_default_socials_are_absolute_https_urls() {
        for link in default_socials() {
            let parsed = url::Url::parse(&link.href).unwrap();
            assert_eq!(parsed.scheme(), "https");
            assert!(parsed.host_str().is_some());
        }
    }

    #[test]
    fn test_socials_override_preserves_order() {
        let config = test_parse(
            "[[socials]]\nname = \"mastodon\"\nhref = \"https://hachyderm.io/@me\"\n\
             [[socials]]\nname = \"github\"\nhref = \"https://github.com/me\"\n\
             [[socials]]\nname = \"linkedin\"\nhref = \"https://www.linkedin.com/in/me\"",
        );

        let names: Vec<&str> = config.socials.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["mastodon", "github", "linkedin"]);
    }

    #[test]
    fn test_http_scheme_rejected() {
        let links = vec![SocialLink {
            name: "github".into(),
            href: "http://github.com/me".into(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate(&links, &mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "socials[0].href");
        assert!(diag.errors()[0].message.contains("must be https"));
    }

    #[test]
    fn test_relative_url_rejected() {
        let links = vec![SocialLink {
            name: "github".into(),
            href: "/profile/me".into(),
        }];

        let mut diag = ConfigDiagnostics::new();
        validate(&links, &mut diag);

        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("invalid URL"));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let links = vec![SocialLink::default()];

        let mut diag = ConfigDiagnostics::new();
        validate(&links, &mut diag);

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "socials[0].name");
        assert_eq!(diag.errors()[1].field.as_str(), "socials[0].href");
    }

    #[test]
    fn test_error_field_carries_list_index() {
        let links = vec![
            SocialLink {
                name: "github".into(),
                href: "https://github.com/me".into(),
            },
            SocialLink {
                name: "broken".into(),
                href: "not a url".into(),
            },
        ];

        let mut diag = ConfigDiagnostics::new();
        validate(&links, &mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "socials[1].href");
    }

    #[test]
    fn test_duplicate_platform_warns_but_passes() {
        let links = vec![
            SocialLink {
                name: "github".into(),
                href: "https://github.com/me".into(),
            },
            SocialLink {
                name: "github".into(),
                href: "https://github.com/work".into(),
            },
        ];

        let mut diag = ConfigDiagnostics::new();
        validate(&links, &mut diag);

        // Duplicates are a warning, not an error.
        assert!(diag.is_empty());
    }

    #[test]
    fn test_empty_socials_list_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        validate(&[], &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_socials_template_contains_defaults() {
        let template = template_with_header();
        assert!(template.contains("[[socials]]"));
        assert!(template.contains("https://github.com/syahidfrd"));
        assert!(template.contains("https://www.linkedin.com/in/syahidfrd"));
    }
}
