/// Errors that can occur when parsing a page address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The address has no path segment (empty, or starts with `?` or `#`)
    EmptyPath,
    /// The path does not start with `/`
    RelativePath,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyPath => "Address has no path",
            Self::RelativePath => "Path must start with '/'",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for address parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
