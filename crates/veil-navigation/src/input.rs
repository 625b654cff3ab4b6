//! Input resolution for the address field
//!
//! 1. `http://` / `https://` prefix → navigate unchanged
//! 2. Dotted, whitespace-free text → navigate with `https://` prepended
//! 3. Anything else → web search

use serde::{Deserialize, Serialize};

/// Default search endpoint; `%s` is replaced with the encoded query.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";

/// Result of resolving address field input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavigationTarget {
    /// Navigate directly to a URL
    Url { url: String },
    /// Search for the query; `url` is the ready-to-load search page
    Search { query: String, url: String },
}

impl NavigationTarget {
    /// The URL the surface should load.
    pub fn url(&self) -> &str {
        match self {
            NavigationTarget::Url { url } => url,
            NavigationTarget::Search { url, .. } => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, NavigationTarget::Search { .. })
    }
}

pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    /// Resolve user input into a navigation target.
    ///
    /// Returns `None` for empty or whitespace-only input; callers must not
    /// navigate in that case.
    pub fn resolve(&self, input: &str) -> Option<NavigationTarget> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Some(NavigationTarget::Url {
                url: input.to_string(),
            });
        }

        if Self::looks_like_domain(input) {
            return Some(NavigationTarget::Url {
                url: format!("https://{}", input),
            });
        }

        Some(NavigationTarget::Search {
            query: input.to_string(),
            url: self.build_search_url(input),
        })
    }

    /// Contains a dot and no whitespace
    fn looks_like_domain(input: &str) -> bool {
        input.contains('.') && !input.chars().any(char::is_whitespace)
    }

    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str) -> Option<NavigationTarget> {
        InputResolver::new().resolve(input)
    }

    #[test]
    fn test_resolve_full_url_unchanged() {
        for input in [
            "https://example.com",
            "http://example.com/path?q=1#frag",
            "https://localhost:8080",
            "http://a b",
        ] {
            match resolve(input) {
                Some(NavigationTarget::Url { url }) => assert_eq!(url, input),
                other => panic!("Expected Url for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_trims_before_matching() {
        assert_eq!(
            resolve("  https://example.com \n"),
            Some(NavigationTarget::Url {
                url: "https://example.com".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_domain() {
        assert_eq!(
            resolve("openai.com").map(|t| t.url().to_string()),
            Some("https://openai.com".to_string())
        );
        assert_eq!(
            resolve("docs.rs/url/latest").map(|t| t.url().to_string()),
            Some("https://docs.rs/url/latest".to_string())
        );
        assert_eq!(
            resolve("192.168.1.1").map(|t| t.url().to_string()),
            Some("https://192.168.1.1".to_string())
        );
    }

    #[test]
    fn test_resolve_search() {
        match resolve("how to bake bread") {
            Some(NavigationTarget::Search { query, url }) => {
                assert_eq!(query, "how to bake bread");
                assert_eq!(url, "https://www.google.com/search?q=how%20to%20bake%20bread");
            }
            other => panic!("Expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_dotted_text_with_spaces_is_search() {
        let target = resolve("what is node.js").unwrap();
        assert!(target.is_search());
        assert!(target.url().contains("what%20is%20node.js"));
    }

    #[test]
    fn test_single_word_is_search() {
        let target = resolve("localhost").unwrap();
        assert!(target.is_search());
    }

    #[test]
    fn test_search_encodes_reserved_characters() {
        let target = resolve("c++ & rust?").unwrap();
        assert_eq!(
            target.url(),
            "https://www.google.com/search?q=c%2B%2B%20%26%20rust%3F"
        );
    }

    #[test]
    fn test_empty_input_resolves_to_nothing() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
        assert_eq!(resolve("\t\n"), None);
    }

    #[test]
    fn test_custom_search_engine() {
        let resolver =
            InputResolver::with_search_engine("https://duckduckgo.com/?q=%s".to_string());
        assert_eq!(
            resolver.resolve("rust lang").unwrap().url(),
            "https://duckduckgo.com/?q=rust%20lang"
        );
    }
}
