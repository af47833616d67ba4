//! Diagnostic system for linearization and hierarchy errors.
//!
//! Every reported problem becomes a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability and `mroc explain`
//! - a one-line message saying what went wrong
//! - labels pointing at hierarchy-file lines, when there is a file
//! - notes with the structured detail (partial order, stuck inputs)
//! - suggestions for fixing it
//!
//! [`render`] turns a [`LinearizeError`](mro_linearize::LinearizeError) into
//! a diagnostic, naming types through a [`TypeUniverse`](mro_ir::TypeUniverse).
//! The [`emitter`] module writes diagnostics to a terminal or as JSON.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod render;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
