//! Hierarchy files.
//!
//! One declaration per line; `#` starts a comment:
//!
//! ```text
//! interface NAME [extends NAME, ...]
//! class NAME [extends NAME] [implements NAME, ...]
//! ```
//!
//! `Object`, `Serializable`, and `Cloneable` are predeclared. A class without
//! `extends` extends `Object`; an interface has no superclass. Declarations
//! may refer to types declared later in the file.
//!
//! Reading is two passes: the first declares every name, the second resolves
//! parent clauses. Every error found is reported, not just the first.

use mro_diagnostic::{Diagnostic, ErrorCode};
use mro_ir::{ClassId, ClassKind, ClassRegistry, Primitive};
use rustc_hash::FxHashMap;

/// A problem that prevents building the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    #[error("line {line}: {message}")]
    Syntax { line: u32, message: String },

    #[error("line {line}: unknown type `{name}`")]
    UnknownType { line: u32, name: String },

    #[error("line {line}: `{name}` is already declared")]
    Duplicate {
        line: u32,
        name: String,
        /// Line of the first declaration; `None` for predeclared types.
        previous: Option<u32>,
    },

    #[error("line {line}: `{name}` is not {}", kind_phrase(.expected))]
    WrongKind {
        line: u32,
        name: String,
        expected: ClassKind,
    },
}

fn kind_phrase(kind: &ClassKind) -> &'static str {
    match kind {
        ClassKind::Class => "a class",
        ClassKind::Interface => "an interface",
    }
}

impl HierarchyError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> u32 {
        match self {
            HierarchyError::Syntax { line, .. }
            | HierarchyError::UnknownType { line, .. }
            | HierarchyError::Duplicate { line, .. }
            | HierarchyError::WrongKind { line, .. } => *line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            HierarchyError::Syntax { .. } => ErrorCode::E0101,
            HierarchyError::UnknownType { .. } => ErrorCode::E0102,
            HierarchyError::Duplicate { .. } => ErrorCode::E0103,
            HierarchyError::WrongKind { .. } => ErrorCode::E0104,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            HierarchyError::Syntax { line, message } => diag
                .with_message(message.clone())
                .with_label(*line, "in this declaration"),
            HierarchyError::UnknownType { line, name } => diag
                .with_message(format!("unknown type `{name}`"))
                .with_label(*line, format!("`{name}` is not declared in this file")),
            HierarchyError::Duplicate {
                line,
                name,
                previous,
            } => {
                let diag = diag
                    .with_message(format!("`{name}` is declared more than once"))
                    .with_label(*line, "declared again here");
                match previous {
                    Some(previous) => diag.with_secondary_label(*previous, "first declared here"),
                    None => diag.with_note(format!("`{name}` is predeclared")),
                }
            }
            HierarchyError::WrongKind {
                line,
                name,
                expected,
            } => {
                let keyword = match expected {
                    ClassKind::Class => "extends",
                    ClassKind::Interface => "implements",
                };
                diag.with_message(format!("`{name}` is not {}", kind_phrase(expected)))
                    .with_label(*line, "used as a parent here")
                    .with_suggestion(format!(
                        "a class `extends` one class and `implements` interfaces; check the `{keyword}` clause"
                    ))
            }
        }
    }
}

/// A problem that is reported but does not stop the hierarchy from loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HierarchyWarning {
    /// A parent named twice in one list; only the first is kept.
    RepeatedParent {
        line: u32,
        owner: String,
        parent: String,
    },
}

impl HierarchyWarning {
    pub fn line(&self) -> u32 {
        match self {
            HierarchyWarning::RepeatedParent { line, .. } => *line,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            HierarchyWarning::RepeatedParent {
                line,
                owner,
                parent,
            } => Diagnostic::warning(ErrorCode::W0101)
                .with_message(format!("`{parent}` is listed more than once as a parent of `{owner}`"))
                .with_label(*line, "repeated here")
                .with_suggestion(format!("remove the repeated `{parent}`")),
        }
    }
}

/// One parsed line, before names are resolved.
#[derive(Debug)]
struct Declaration<'src> {
    line: u32,
    kind: ClassKind,
    name: &'src str,
    extends: Vec<&'src str>,
    implements: Vec<&'src str>,
}

/// A loaded hierarchy file.
#[derive(Clone, Debug)]
pub struct Hierarchy {
    registry: ClassRegistry,
    lines: FxHashMap<ClassId, u32>,
    /// Types declared in the file, in file order.
    declared: Vec<ClassId>,
    warnings: Vec<HierarchyWarning>,
}

impl Hierarchy {
    /// Read a hierarchy from source text.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn parse(source: &str) -> Result<Self, Vec<HierarchyError>> {
        let mut errors = Vec::new();
        let mut declarations = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
            match parse_line(line, text) {
                Ok(Some(decl)) => declarations.push(decl),
                Ok(None) => {}
                Err(err) => errors.push(err),
            }
        }

        let mut hierarchy = Hierarchy {
            registry: ClassRegistry::new(),
            lines: FxHashMap::default(),
            declared: Vec::with_capacity(declarations.len()),
            warnings: Vec::new(),
        };

        // Pass 1: declare every name.
        let mut accepted = Vec::with_capacity(declarations.len());
        for decl in &declarations {
            if let Some(existing) = hierarchy.registry.lookup(decl.name) {
                errors.push(HierarchyError::Duplicate {
                    line: decl.line,
                    name: decl.name.to_string(),
                    previous: hierarchy.lines.get(&existing).copied(),
                });
                continue;
            }
            let id = match decl.kind {
                ClassKind::Class => hierarchy.registry.declare_class(decl.name),
                ClassKind::Interface => hierarchy.registry.declare_interface(decl.name),
            };
            hierarchy.lines.insert(id, decl.line);
            hierarchy.declared.push(id);
            accepted.push((id, decl));
        }

        // Pass 2: resolve parent clauses.
        for (id, decl) in accepted {
            if let Err(err) = hierarchy.resolve_parents(id, decl) {
                errors.push(err);
            }
        }

        if errors.is_empty() {
            tracing::debug!(types = hierarchy.declared.len(), "hierarchy loaded");
            Ok(hierarchy)
        } else {
            errors.sort_by_key(HierarchyError::line);
            Err(errors)
        }
    }

    fn resolve_parents(&mut self, id: ClassId, decl: &Declaration<'_>) -> Result<(), HierarchyError> {
        let (interface_names, superclass_name) = match decl.kind {
            ClassKind::Class => (&decl.implements, decl.extends.first()),
            ClassKind::Interface => (&decl.extends, None),
        };

        if let Some(name) = superclass_name {
            let superclass = self.resolve(name, decl.line, ClassKind::Class)?;
            self.registry.set_superclass(id, Some(superclass));
        }

        let mut interfaces = Vec::with_capacity(interface_names.len());
        for name in interface_names {
            let interface = self.resolve(name, decl.line, ClassKind::Interface)?;
            if interfaces.contains(&interface) {
                self.warnings.push(HierarchyWarning::RepeatedParent {
                    line: decl.line,
                    owner: decl.name.to_string(),
                    parent: (*name).to_string(),
                });
                continue;
            }
            interfaces.push(interface);
        }
        self.registry.set_interfaces(id, interfaces);
        Ok(())
    }

    fn resolve(&self, name: &str, line: u32, expected: ClassKind) -> Result<ClassId, HierarchyError> {
        let id = self
            .registry
            .lookup(name)
            .ok_or_else(|| HierarchyError::UnknownType {
                line,
                name: name.to_string(),
            })?;
        if self.registry.kind(id) == Some(expected) {
            Ok(id)
        } else {
            Err(HierarchyError::WrongKind {
                line,
                name: name.to_string(),
                expected,
            })
        }
    }

    #[inline]
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Line a type was declared on. `None` for predeclared types.
    pub fn line_of(&self, id: ClassId) -> Option<u32> {
        self.lines.get(&id).copied()
    }

    /// Types declared in the file, in file order.
    pub fn declared(&self) -> &[ClassId] {
        &self.declared
    }

    pub fn warnings(&self) -> &[HierarchyWarning] {
        &self.warnings
    }
}

const KEYWORDS: [&str; 4] = ["class", "interface", "extends", "implements"];

/// Split a line into words and commas.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let mut rest = word;
        while let Some(pos) = rest.find(',') {
            if pos > 0 {
                tokens.push(&rest[..pos]);
            }
            tokens.push(",");
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            tokens.push(rest);
        }
    }
    tokens
}

/// Cursor over one line's tokens.
struct LineParser<'src> {
    tokens: Vec<&'src str>,
    pos: usize,
    line: u32,
}

impl<'src> LineParser<'src> {
    fn peek(&self) -> Option<&'src str> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<&'src str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, keyword: &str) -> bool {
        if self.peek() == Some(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> HierarchyError {
        HierarchyError::Syntax {
            line: self.line,
            message: message.into(),
        }
    }

    fn name(&mut self) -> Result<&'src str, HierarchyError> {
        let Some(token) = self.bump() else {
            return Err(self.error("expected a type name at end of line"));
        };
        if Primitive::from_keyword(token).is_some() {
            return Err(self.error(format!("`{token}` is a primitive type, not a class or interface")));
        }
        if KEYWORDS.contains(&token) || token == "," || !is_identifier(token) {
            return Err(self.error(format!("expected a type name, found `{token}`")));
        }
        Ok(token)
    }

    /// `NAME (, NAME)*`
    fn name_list(&mut self) -> Result<Vec<&'src str>, HierarchyError> {
        let mut names = vec![self.name()?];
        while self.eat(",") {
            names.push(self.name()?);
        }
        Ok(names)
    }

    fn finish(&mut self) -> Result<(), HierarchyError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error(format!("unexpected `{token}`"))),
        }
    }
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    let valid_rest = |c: char| c.is_alphanumeric() || matches!(c, '_' | '$' | '.');
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => chars.all(valid_rest),
        _ => false,
    }
}

fn parse_line(line: u32, text: &str) -> Result<Option<Declaration<'_>>, HierarchyError> {
    let code = text.split('#').next().unwrap_or_default();
    let tokens = tokenize(code);
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut p = LineParser {
        tokens,
        pos: 0,
        line,
    };
    let kind = match p.bump() {
        Some("class") => ClassKind::Class,
        Some("interface") => ClassKind::Interface,
        Some(other) => {
            return Err(p.error(format!("expected `class` or `interface`, found `{other}`")));
        }
        None => return Ok(None),
    };
    let name = p.name()?;

    let mut extends = Vec::new();
    let mut implements = Vec::new();
    match kind {
        ClassKind::Interface => {
            if p.eat("extends") {
                extends = p.name_list()?;
            }
            if p.peek() == Some("implements") {
                return Err(p.error("interfaces use `extends` for their parents, not `implements`"));
            }
        }
        ClassKind::Class => {
            if p.eat("extends") {
                extends.push(p.name()?);
                if p.peek() == Some(",") {
                    return Err(p.error("a class extends at most one class"));
                }
            }
            if p.eat("implements") {
                implements = p.name_list()?;
            }
            if p.peek() == Some("extends") {
                return Err(p.error("`extends` must come before `implements`"));
            }
        }
    }
    p.finish()?;

    Ok(Some(Declaration {
        line,
        kind,
        name,
        extends,
        implements,
    }))
}
