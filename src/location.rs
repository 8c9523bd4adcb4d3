use crate::compat::{String, ToString};
use crate::encoding::encode_path;
use crate::error::{ParseError, Result};
use crate::helpers::split_address;

/// The address of a page view: path, optional query and optional fragment.
///
/// `query` and `fragment` are stored without their leading `?`/`#`. `None`
/// means the delimiter is absent; `Some("")` means a bare `?` or `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Location {
    /// A location with the given path and no query or fragment.
    ///
    /// `?` and `#` inside `path` are percent-encoded so they stay part of the
    /// path instead of starting a query or fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyPath`] for an empty path and
    /// [`ParseError::RelativePath`] if it does not start with `/`.
    pub fn new(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(ParseError::EmptyPath);
        }
        if !path.starts_with('/') {
            return Err(ParseError::RelativePath);
        }

        Ok(Self {
            path: encode_path(path).into_owned(),
            query: None,
            fragment: None,
        })
    }

    /// Build from the pieces a browser reports: `pathname`, `search` and `hash`.
    ///
    /// `search` and `hash` carry their leading delimiter, and the browser
    /// reports `""` both for a missing and for a bare `?`/`#`, so `""` maps to
    /// `None`. An empty `pathname` is treated as `/`.
    #[cfg_attr(not(feature = "web"), allow(dead_code))]
    pub(crate) fn from_browser_parts(pathname: &str, search: &str, hash: &str) -> Self {
        let path = if pathname.is_empty() { "/" } else { pathname };
        Self {
            path: path.to_string(),
            query: search.strip_prefix('?').map(ToString::to_string),
            fragment: hash.strip_prefix('#').map(ToString::to_string),
        }
    }

    /// Parse an address of the form `/path[?query][#fragment]`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyPath`] if there is no path segment and
    /// [`ParseError::RelativePath`] if the path does not start with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pool_param::Location;
    ///
    /// let location = Location::parse("/app?foo=bar#top").unwrap();
    /// assert_eq!(location.path(), "/app");
    /// assert_eq!(location.query(), Some("foo=bar"));
    /// assert_eq!(location.fragment(), Some("top"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let (path, query, fragment) = split_address(input);

        if path.is_empty() {
            return Err(ParseError::EmptyPath);
        }
        if !path.starts_with('/') {
            return Err(ParseError::RelativePath);
        }

        Ok(Self {
            path: path.to_string(),
            query: query.map(ToString::to_string),
            fragment: fragment.map(ToString::to_string),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query without the leading `?`
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Fragment without the leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Same path, new query, no fragment.
    #[must_use]
    pub fn with_query(&self, query: Option<String>) -> Self {
        Self {
            path: self.path.clone(),
            query,
            fragment: None,
        }
    }

    /// Same path and query, new fragment.
    #[must_use]
    pub fn with_fragment(mut self, fragment: Option<String>) -> Self {
        self.fragment = fragment;
        self
    }

    /// Full address: `path[?query][#fragment]`
    pub fn href(&self) -> String {
        let mut href = String::with_capacity(
            self.path.len()
                + self.query.as_ref().map_or(0, |q| q.len() + 1)
                + self.fragment.as_ref().map_or(0, |f| f.len() + 1),
        );
        href.push_str(&self.path);
        if let Some(query) = &self.query {
            href.push('?');
            href.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            fragment: None,
        }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}

impl core::str::FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_only() {
        let location = Location::parse("/app").unwrap();
        assert_eq!(location.path(), "/app");
        assert_eq!(location.query(), None);
        assert_eq!(location.fragment(), None);
        assert_eq!(location.href(), "/app");
    }

    #[test]
    fn test_parse_bare_question_mark() {
        let location = Location::parse("/app?").unwrap();
        assert_eq!(location.query(), Some(""));
        assert_eq!(location.href(), "/app?");
    }

    #[test]
    fn test_parse_full() {
        let location = Location::parse("/a/b?x=1&y=2#sec").unwrap();
        assert_eq!(location.path(), "/a/b");
        assert_eq!(location.query(), Some("x=1&y=2"));
        assert_eq!(location.fragment(), Some("sec"));
        assert_eq!(location.href(), "/a/b?x=1&y=2#sec");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Location::parse(""), Err(ParseError::EmptyPath));
        assert_eq!(Location::parse("?a=1"), Err(ParseError::EmptyPath));
        assert_eq!(Location::parse("#top"), Err(ParseError::EmptyPath));
        assert_eq!(Location::parse("app"), Err(ParseError::RelativePath));
    }

    #[test]
    fn test_new_validates_path() {
        assert_eq!(Location::new("/app").unwrap().href(), "/app");
        assert_eq!(Location::new(""), Err(ParseError::EmptyPath));
        assert_eq!(Location::new("app"), Err(ParseError::RelativePath));
        assert_eq!(Location::default().href(), "/");
    }

    #[test]
    fn test_new_escapes_query_and_fragment_markers() {
        let location = Location::new("/a?b#c").unwrap();
        assert_eq!(location.path(), "/a%3Fb%23c");
        assert_eq!(location.query(), None);
        assert_eq!(location.fragment(), None);
        assert_eq!(Location::parse(&location.href()).unwrap(), location);
    }

    #[test]
    fn test_from_browser_parts() {
        let location = Location::from_browser_parts("/app", "?poolId=x", "#top");
        assert_eq!(location.query(), Some("poolId=x"));
        assert_eq!(location.fragment(), Some("top"));

        let bare = Location::from_browser_parts("", "", "");
        assert_eq!(bare.href(), "/");
        assert_eq!(bare.query(), None);
        assert_eq!(bare.fragment(), None);
    }

    #[test]
    fn test_with_query_drops_fragment() {
        let location = Location::parse("/app?a=1#top").unwrap();
        let next = location.with_query(Some("b=2".to_string()));
        assert_eq!(next.href(), "/app?b=2");
        assert_eq!(location.with_query(None).href(), "/app");
    }

    #[test]
    fn test_from_str_and_display() {
        let location: Location = "/app?poolId=x".parse().unwrap();
        assert_eq!(location.to_string(), "/app?poolId=x");
    }
}
