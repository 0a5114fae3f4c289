//! Class definition data model.
//!
//! This module contains the validated form of a class definition: the
//! definition itself, its option descriptors, and the closed set of value
//! kinds an option can have.

/// Name of the handler capability. A definition listing it among its
/// directly implemented capabilities is a protocol root and does not chain
/// to a parent implementation.
pub const OPTION_HANDLER_CAPABILITY: &str = "OptionHandler";

/// Closed set of value kinds resolvable to codec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Free-form text.
    Text,
    /// Filesystem path.
    Path,
    /// Bare boolean flag.
    Flag,
    /// Nested option-bearing object, carrying its type path.
    Object(String),
    /// Homogeneous array of another kind (repeated-flag encoding).
    Array(Box<OptionKind>),
}

impl OptionKind {
    /// Resolves a descriptor type name to a kind.
    ///
    /// Keywords map to the scalar kinds, a `[]` suffix wraps the inner
    /// kind in an array, and anything shaped like a type path is a nested
    /// object. Returns `None` for everything else.
    #[must_use]
    pub fn resolve(type_name: &str) -> Option<Self> {
        if let Some(inner) = type_name.strip_suffix("[]") {
            return Self::resolve(inner.trim()).map(|kind| Self::Array(Box::new(kind)));
        }
        match type_name {
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "string" => Some(Self::Text),
            "file" => Some(Self::Path),
            "bool" => Some(Self::Flag),
            other if is_type_path(other) => Some(Self::Object(other.to_string())),
            _ => None,
        }
    }

    /// Returns the Rust type the kind maps to in generated code.
    #[must_use]
    pub fn rust_type(&self) -> String {
        match self {
            Self::Int => "i32".to_string(),
            Self::Long => "i64".to_string(),
            Self::Float => "f32".to_string(),
            Self::Double => "f64".to_string(),
            Self::Text => "String".to_string(),
            Self::Path => "PathBuf".to_string(),
            Self::Flag => "bool".to_string(),
            Self::Object(class) => short_type_name(class).to_string(),
            Self::Array(inner) => format!("Vec<{}>", inner.rust_type()),
        }
    }

    /// Returns true if values of this kind are `Copy` in generated code.
    #[must_use]
    pub fn is_copy(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Long | Self::Float | Self::Double | Self::Flag
        )
    }

    /// Returns true for the array kind.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the full import path of an object class, if this kind (or
    /// its array element) is an object with a module path.
    #[must_use]
    pub fn object_import(&self) -> Option<&str> {
        match self {
            Self::Object(class) if class.contains("::") => Some(class),
            Self::Array(inner) => inner.object_import(),
            _ => None,
        }
    }
}

/// Returns true if a name is plausibly a Rust type path.
fn is_type_path(name: &str) -> bool {
    name.contains("::") || name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Extracts the final segment of a `::`-separated type path.
#[must_use]
pub fn short_type_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// One configurable parameter of a class definition.
#[derive(Debug, Clone)]
pub struct OptionDef {
    /// Property identifier, starts lower-case, unique within a definition.
    pub property: String,
    /// Resolved value kind.
    pub kind: OptionKind,
    /// External token name, without the leading dash. Derived from the
    /// property when the definition gives none.
    pub flag: String,
    /// Expression producing the default value, spliced verbatim.
    pub default_expr: String,
    /// Optional guard predicate over a candidate `value`.
    pub constraint_expr: Option<String>,
    /// Help text for the option listing.
    pub help: String,
}

/// One generation unit: identity, parent, capabilities, and options.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// Base class name.
    pub name: String,
    /// Module path of the generated type, `::`-separated, may be empty.
    pub package: String,
    /// Prefix for the generated type name.
    pub prefix: String,
    /// Suffix for the generated type name.
    pub suffix: String,
    /// Parent class path, if any.
    pub superclass: Option<String>,
    /// Additional implemented capabilities.
    pub implements: Vec<String>,
    /// Author recorded in the generated header.
    pub author: String,
    /// Organization recorded in the generated header.
    pub organization: String,
    /// Option descriptors in declaration order.
    pub options: Vec<OptionDef>,
    /// True if the definition directly implements the handler capability
    /// and therefore must not chain to a parent implementation.
    pub is_root: bool,
}

impl ClassDef {
    /// Returns the final generated type name: prefix + name + suffix.
    #[must_use]
    pub fn type_name(&self) -> String {
        format!("{}{}{}", self.prefix, self.name, self.suffix)
    }
}
