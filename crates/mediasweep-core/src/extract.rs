//! Public-id extraction from media source URLs.
//!
//! A Cloudinary-hosted image URL embeds its `public_id` as
//! `<prefix>/<segment>` somewhere in the path. URLs that do not contain the
//! prefix segment yield no identifier and are silently dropped by callers.

use crate::error::{CoreError, CoreResult};
use regex::Regex;

/// Extracts `public_id` values of the form `<prefix>/<segment>` from URLs.
#[derive(Debug, Clone)]
pub struct PublicIdExtractor {
    prefix: String,
    pattern: Regex,
}

impl PublicIdExtractor {
    /// Build an extractor for the given path prefix.
    ///
    /// The prefix is matched literally (regex metacharacters are escaped)
    /// and may appear anywhere in the URL. Leading and trailing slashes on
    /// the prefix are ignored.
    pub fn new(prefix: &str) -> CoreResult<Self> {
        let prefix = prefix.trim_matches('/');
        if prefix.is_empty() {
            return Err(CoreError::InvalidPrefix(
                "prefix must not be empty".to_string(),
            ));
        }

        let pattern = Regex::new(&format!("({}/[^/]+)", regex::escape(prefix)))?;

        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// The configured prefix, without surrounding slashes.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extract the public id from a source URL.
    ///
    /// Returns `None` when the URL does not contain the prefix segment.
    #[must_use]
    pub fn extract(&self, url: &str) -> Option<String> {
        self.pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_prefixed_id() {
        let extractor = PublicIdExtractor::new("patriciosalinas").unwrap();
        let url = "https://res.cloudinary.com/demo/image/upload/v1/patriciosalinas/photo.jpg";
        assert_eq!(
            extractor.extract(url),
            Some("patriciosalinas/photo.jpg".to_string())
        );
    }

    #[test]
    fn test_url_without_prefix_yields_nothing() {
        let extractor = PublicIdExtractor::new("patriciosalinas").unwrap();
        let url = "https://example.com/wp-content/uploads/2024/photo.jpg";
        assert_eq!(extractor.extract(url), None);
    }

    #[test]
    fn test_stops_at_next_path_segment() {
        let extractor = PublicIdExtractor::new("media").unwrap();
        let url = "https://host/media/album/photo.jpg";
        assert_eq!(extractor.extract(url), Some("media/album".to_string()));
    }

    #[test]
    fn test_prefix_with_surrounding_slashes_is_normalized() {
        let extractor = PublicIdExtractor::new("/media/").unwrap();
        assert_eq!(extractor.prefix(), "media");
        assert_eq!(
            extractor.extract("https://host/media/photo.jpg"),
            Some("media/photo.jpg".to_string())
        );
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(
            PublicIdExtractor::new("/"),
            Err(CoreError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_regex_metacharacters_in_prefix_are_literal() {
        let extractor = PublicIdExtractor::new("site.name").unwrap();
        assert_eq!(extractor.extract("https://host/siteXname/photo.jpg"), None);
        assert_eq!(
            extractor.extract("https://host/site.name/photo.jpg"),
            Some("site.name/photo.jpg".to_string())
        );
    }
}
