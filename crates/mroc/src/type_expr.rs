//! Command-line type expressions: a class name or primitive keyword followed
//! by any number of `[]`.

use mro_diagnostic::{Diagnostic, ErrorCode};
use mro_ir::{ClassRegistry, ElementType, Primitive, TypeNode};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeExprError {
    #[error("malformed type expression `{0}`")]
    Malformed(String),

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("`{0}` has more than 255 array dimensions")]
    TooManyDimensions(String),
}

impl TypeExprError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TypeExprError::Malformed(expr) => Diagnostic::error(ErrorCode::E0101)
                .with_message(self.to_string())
                .with_note(format!("`{expr}` should be a type name followed by zero or more `[]`")),
            TypeExprError::UnknownType(_) => Diagnostic::error(ErrorCode::E0102)
                .with_message(self.to_string())
                .with_note("name a type declared in the hierarchy file, a predeclared type, or a primitive keyword"),
            TypeExprError::TooManyDimensions(_) => {
                Diagnostic::error(ErrorCode::E0101).with_message(self.to_string())
            }
        }
    }
}

/// Resolve `expr` against `registry`.
///
/// Primitive keywords win over class names.
pub fn parse_type_expr(expr: &str, registry: &ClassRegistry) -> Result<TypeNode, TypeExprError> {
    let trimmed = expr.trim();
    let mut base = trimmed;
    let mut dims: usize = 0;
    while let Some(rest) = base.strip_suffix("[]") {
        base = rest.trim_end();
        dims += 1;
    }

    if base.is_empty() || base.contains(['[', ']']) || base.contains(char::is_whitespace) {
        return Err(TypeExprError::Malformed(trimmed.to_string()));
    }

    let element = match Primitive::from_keyword(base) {
        Some(primitive) => ElementType::Primitive(primitive),
        None => {
            let id = registry
                .lookup(base)
                .ok_or_else(|| TypeExprError::UnknownType(base.to_string()))?;
            ElementType::Class(id)
        }
    };

    let dims = u8::try_from(dims).map_err(|_| TypeExprError::TooManyDimensions(trimmed.to_string()))?;
    Ok(element.lifted(dims))
}
