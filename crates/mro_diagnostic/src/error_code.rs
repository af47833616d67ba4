//! Error codes for all diagnostics.
//!
//! Each code is a unique identifier (e.g. `E0001`) whose second digit names
//! the layer that raised it. Used for `mroc explain` lookups.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### or W####:
/// - E00xx: Linearization errors
/// - E01xx: Hierarchy file errors
/// - W01xx: Hierarchy file warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Linearization Errors (E00xx)
    /// Inconsistent precedence: no order satisfies every declaration
    E0001,
    /// Ancestor chain too deep (likely a cycle)
    E0002,

    // Hierarchy File Errors (E01xx)
    /// Syntax error in a declaration line
    E0101,
    /// Reference to an undeclared type
    E0102,
    /// Type declared twice
    E0103,
    /// Parent of the wrong kind (class where an interface is required, or
    /// the reverse)
    E0104,

    // Hierarchy File Warnings (W01xx)
    /// Parent listed more than once; the repeat is ignored
    W0101,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0101,
        ErrorCode::E0102,
        ErrorCode::E0103,
        ErrorCode::E0104,
        ErrorCode::W0101,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0103 => "E0103",
            ErrorCode::E0104 => "E0104",
            ErrorCode::W0101 => "W0101",
        }
    }

    /// Check if this code was raised while linearizing.
    pub fn is_linearize_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    /// Check if this code was raised while reading a hierarchy file.
    pub fn is_hierarchy_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0101 | ErrorCode::E0102 | ErrorCode::E0103 | ErrorCode::E0104
        )
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0101)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
