//! Embedded error documentation for `mroc explain`.
//!
//! Each code has a markdown file in `errors/` explaining the problem with an
//! example and a fix. The files are embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create `errors/EXXXX.md`
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code, if it has any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Linearization errors (E00xx)
    (ErrorCode::E0001, include_str!("errors/E0001.md")),
    (ErrorCode::E0002, include_str!("errors/E0002.md")),
    // Hierarchy file errors (E01xx)
    (ErrorCode::E0101, include_str!("errors/E0101.md")),
    (ErrorCode::E0102, include_str!("errors/E0102.md")),
    (ErrorCode::E0103, include_str!("errors/E0103.md")),
    (ErrorCode::E0104, include_str!("errors/E0104.md")),
    // Hierarchy file warnings (W01xx)
    (ErrorCode::W0101, include_str!("errors/W0101.md")),
];
