//! Domain types for XML-RPC introspection.
//!
//! Strong types for the values that flow from the server's `system.*`
//! methods into the code generator: the fixed type vocabulary of
//! XML-RPC, method signatures built from it, and the dotted method
//! names that get split into a class prefix and a member name.
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_core::{MethodName, MethodSignature, TypeTag};
//!
//! let name = MethodName::new("sample.add");
//! assert_eq!(name.split(), ("sample", "add"));
//!
//! let sig = MethodSignature::from_wire("sample.add", &["int", "int", "int"]).unwrap();
//! assert_eq!(sig.return_type, TypeTag::Int);
//! assert_eq!(sig.parameter_types.len(), 2);
//! ```

use crate::{Error, Result};
use std::fmt;

/// Separator between the prefix and the member name of a method.
pub const METHOD_SEPARATOR: char = '.';

/// An XML-RPC value type as reported by `system.methodSignature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `boolean`
    Boolean,
    /// `int` / `i4`
    Int,
    /// `double`
    Double,
    /// `string`
    String,
    /// `base64`
    Bytes,
    /// `dateTime.iso8601`
    DateTime,
    /// `struct`
    Struct,
    /// `array`
    Array,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Int,
        Self::Double,
        Self::String,
        Self::Bytes,
        Self::DateTime,
        Self::Struct,
        Self::Array,
    ];

    /// Parses a type name as it appears on the wire.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrpc_proxy_core::TypeTag;
    ///
    /// assert_eq!(TypeTag::from_wire("i4"), Some(TypeTag::Int));
    /// assert_eq!(TypeTag::from_wire("dateTime.iso8601"), Some(TypeTag::DateTime));
    /// assert_eq!(TypeTag::from_wire("nil"), None);
    /// ```
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "int" | "i4" => Some(Self::Int),
            "double" => Some(Self::Double),
            "string" => Some(Self::String),
            "base64" => Some(Self::Bytes),
            "dateTime.iso8601" => Some(Self::DateTime),
            "struct" => Some(Self::Struct),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    /// Returns the canonical wire spelling.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "base64",
            Self::DateTime => "dateTime.iso8601",
            Self::Struct => "struct",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// One callable overload of a remote method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    /// Type of the value the method returns
    pub return_type: TypeTag,
    /// Types of the parameters, in call order
    pub parameter_types: Vec<TypeTag>,
}

impl MethodSignature {
    /// Creates a signature from already-parsed tags.
    #[must_use]
    pub const fn new(return_type: TypeTag, parameter_types: Vec<TypeTag>) -> Self {
        Self {
            return_type,
            parameter_types,
        }
    }

    /// Builds a signature from the wire form: return type first, then
    /// the parameter types.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedSignature` if the list is empty or names
    /// a type outside the XML-RPC vocabulary.
    pub fn from_wire<S: AsRef<str>>(method: &str, types: &[S]) -> Result<Self> {
        let (first, rest) = types.split_first().ok_or_else(|| Error::MalformedSignature {
            method: method.to_string(),
            reason: "signature has no return type".to_string(),
        })?;

        let parse = |name: &str| {
            TypeTag::from_wire(name).ok_or_else(|| Error::MalformedSignature {
                method: method.to_string(),
                reason: format!("unknown type '{name}'"),
            })
        };

        let return_type = parse(first.as_ref())?;
        let parameter_types = rest
            .iter()
            .map(|t| parse(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            return_type,
            parameter_types,
        })
    }

    /// Returns the number of parameters.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.return_type)?;
        for (i, param) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

/// Full remote method name, e.g. `sample.add` (newtype over String).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodName(String);

impl MethodName {
    /// Creates a new method name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the full name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits at the last separator into `(prefix, local_name)`.
    ///
    /// Without a separator the prefix is empty and the local name is
    /// the whole string.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrpc_proxy_core::MethodName;
    ///
    /// assert_eq!(MethodName::new("a.b.c").split(), ("a.b", "c"));
    /// assert_eq!(MethodName::new("ping").split(), ("", "ping"));
    /// ```
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        self.0
            .rfind(METHOD_SEPARATOR)
            .map_or(("", self.0.as_str()), |pos| {
                (&self.0[..pos], &self.0[pos + METHOD_SEPARATOR.len_utf8()..])
            })
    }

    /// Returns the part before the last separator.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.split().0
    }

    /// Returns the part after the last separator.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.split().1
    }

    /// Returns `true` if the computed prefix equals `prefix` exactly.
    #[must_use]
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.prefix() == prefix
    }

    /// Consumes the `MethodName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MethodName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MethodName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Name of the generated proxy class (newtype over String).
///
/// Not validated on construction; the emitters check that it is a
/// usable C++ identifier so the failure names the class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Creates a new class name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the class name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the header file the declaration block belongs in.
    ///
    /// The definition block includes this file, and the include guard
    /// is derived from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrpc_proxy_core::ClassName;
    ///
    /// assert_eq!(ClassName::new("SampleProxy").header_file(), "SampleProxy.h");
    /// ```
    #[must_use]
    pub fn header_file(&self) -> String {
        format!("{}.h", self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_separator() {
        let name = MethodName::new("listEverything");
        assert_eq!(name.prefix(), "");
        assert_eq!(name.local_name(), "listEverything");
    }

    #[test]
    fn test_split_on_last_separator() {
        let name = MethodName::new("a.b.c");
        assert_eq!(name.prefix(), "a.b");
        assert_eq!(name.local_name(), "c");
    }

    #[test]
    fn test_split_edge_separators() {
        assert_eq!(MethodName::new(".x").split(), ("", "x"));
        assert_eq!(MethodName::new("x.").split(), ("x", ""));
        assert_eq!(MethodName::new("").split(), ("", ""));
    }

    #[test]
    fn test_matches_prefix_is_exact() {
        let name = MethodName::new("system.multicall");
        assert!(name.matches_prefix("system"));
        assert!(!name.matches_prefix("sys"));
        assert!(!name.matches_prefix(""));

        let bare = MethodName::new("ping");
        assert!(bare.matches_prefix(""));
        assert!(!bare.matches_prefix("ping"));
    }

    #[test]
    fn test_type_tag_wire_names_roundtrip_for_all() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_wire(tag.wire_name()), Some(tag));
        }
    }

    #[test]
    fn test_type_tag_aliases_and_unknowns() {
        assert_eq!(TypeTag::from_wire("i4"), Some(TypeTag::Int));
        assert_eq!(TypeTag::from_wire("i8"), None);
        assert_eq!(TypeTag::from_wire("Int"), None);
        assert_eq!(TypeTag::from_wire(""), None);
    }

    #[test]
    fn test_signature_from_wire() {
        let sig = MethodSignature::from_wire("m", &["string", "base64", "i4"]).unwrap();
        assert_eq!(sig.return_type, TypeTag::String);
        assert_eq!(sig.parameter_types, vec![TypeTag::Bytes, TypeTag::Int]);
        assert_eq!(sig.arity(), 2);
    }

    #[test]
    fn test_signature_return_only() {
        let sig = MethodSignature::from_wire("m", &["array"]).unwrap();
        assert_eq!(sig.return_type, TypeTag::Array);
        assert!(sig.parameter_types.is_empty());
    }

    #[test]
    fn test_signature_empty_is_malformed() {
        let empty: [&str; 0] = [];
        let err = MethodSignature::from_wire("sample.nothing", &empty).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("sample.nothing"));
    }

    #[test]
    fn test_signature_unknown_type_is_malformed() {
        let err = MethodSignature::from_wire("sample.nil", &["nil", "int"]).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("'nil'"));
    }

    #[test]
    fn test_signature_display() {
        let sig = MethodSignature::new(TypeTag::Int, vec![TypeTag::Int, TypeTag::String]);
        assert_eq!(sig.to_string(), "int(int, string)");
    }

    #[test]
    fn test_class_name_header_file() {
        assert_eq!(ClassName::new("systemProxy").header_file(), "systemProxy.h");
    }
}
