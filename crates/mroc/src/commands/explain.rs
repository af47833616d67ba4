//! The `explain` command: display documentation for an error code.

use std::io::Write;

use mro_diagnostic::{ErrorCode, ErrorDocs};

/// Write the documentation for `code_str` to `out`, or a message to `err`.
pub fn explain_command<O: Write, E: Write>(code_str: &str, out: &mut O, err: &mut E) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "Unknown error code: {code_str}");
        let _ = writeln!(err);
        let _ = writeln!(
            err,
            "Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit."
        );
        let _ = writeln!(err, "Examples: E0001, E0102, W0101");
        return false;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = writeln!(out, "{doc}");
        true
    } else {
        let _ = writeln!(err, "No documentation available for {code_str}");
        false
    }
}
