//! # Error Types
//!
//! This module defines the error type for the boundary operations of the chord
//! sheet library.
//!
//! The core text operations (line classification, transposition, tagged-section
//! parsing) are total: an unrecognised chord or an empty section is a handled
//! outcome, never an error. Errors only come from the edges where callers hand
//! us structured data or names we have to trust.
//!
//! ## Error Types
//! - `MetadataError` - Invalid YAML frontmatter at the top of a song sheet
//! - `UnknownKey` - A key name that is not one of the twelve pitch classes
//! - `ContentError` - Stored lyrics JSON in none of the accepted shapes
//!
//! ## Usage
//! ```rust
//! use cifra::{retune, CifraError};
//!
//! let source = "---\ntone: G\n---\nG  D\nSanto";
//! match retune(source, "H") {
//!     Ok(sheet) => println!("{}", sheet),
//!     Err(CifraError::UnknownKey(key)) => eprintln!("no such key: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CifraError {
    /// Invalid metadata error.
    ///
    /// Occurs when the YAML frontmatter of a song sheet cannot be parsed.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::MetadataError("invalid type: sequence, expected a string".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: invalid type: sequence, expected a string");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// Unknown key error.
    ///
    /// Occurs when a caller asks for a key that does not normalise to a pitch class.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::UnknownKey("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown key: H");
    /// ```
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Stored content error.
    ///
    /// Occurs when lyrics content is valid JSON but neither a string, a grouped
    /// `{verses, coro}` record nor a list of sections.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::ContentError("expected text or sections, found a number".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid lyrics content: expected text or sections, found a number"
    /// );
    /// ```
    #[error("Invalid lyrics content: {0}")]
    ContentError(String),
}
