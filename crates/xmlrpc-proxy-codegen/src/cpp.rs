//! C++ code generation utilities.
//!
//! Maps XML-RPC types onto the native C++ types and `xmlrpc_c` wire
//! value classes used by the generated proxy, and provides the small
//! lexical helpers the templates need.
//!
//! Every mapping here is a total `match` over [`TypeTag`]; adding a tag
//! without a mapping does not compile.
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_codegen::cpp;
//! use xmlrpc_proxy_core::TypeTag;
//!
//! assert_eq!(cpp::native_type(TypeTag::Int), "int");
//! assert_eq!(cpp::wire_type(TypeTag::Int), "xmlrpc_c::value_int");
//! assert_eq!(cpp::include_guard("SampleProxy.h"), "SAMPLEPROXY_H");
//! ```

use xmlrpc_proxy_core::TypeTag;

/// Words that cannot name a class or member function.
const RESERVED: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "co_await",
    "co_return", "co_yield", "compl", "concept", "const", "const_cast", "consteval",
    "constexpr", "constinit", "continue", "decltype", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept",
    "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected", "public",
    "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof",
    "static", "static_assert", "static_cast", "struct", "switch", "template", "this",
    "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
    "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// C++ type a value of `tag` has in the proxy's public interface.
#[must_use]
pub const fn native_type(tag: TypeTag) -> &'static str {
    match tag {
        TypeTag::Boolean => "bool",
        TypeTag::Int => "int",
        TypeTag::Double => "double",
        TypeTag::String => "std::string",
        TypeTag::Bytes => "std::vector<unsigned char>",
        TypeTag::DateTime => "time_t",
        TypeTag::Struct => "std::map<std::string, xmlrpc_c::value>",
        TypeTag::Array => "std::vector<xmlrpc_c::value>",
    }
}

/// C++ parameter type: scalars by const value, containers by const reference.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_codegen::cpp::parameter_type;
/// use xmlrpc_proxy_core::TypeTag;
///
/// assert_eq!(parameter_type(TypeTag::Double), "double const");
/// assert_eq!(parameter_type(TypeTag::String), "std::string const&");
/// ```
#[must_use]
pub fn parameter_type(tag: TypeTag) -> String {
    match tag {
        TypeTag::Boolean | TypeTag::Int | TypeTag::Double | TypeTag::DateTime => {
            format!("{} const", native_type(tag))
        }
        TypeTag::String | TypeTag::Bytes | TypeTag::Struct | TypeTag::Array => {
            format!("{} const&", native_type(tag))
        }
    }
}

/// `xmlrpc_c` value class that carries `tag` on the wire.
#[must_use]
pub const fn wire_type(tag: TypeTag) -> &'static str {
    match tag {
        TypeTag::Boolean => "xmlrpc_c::value_boolean",
        TypeTag::Int => "xmlrpc_c::value_int",
        TypeTag::Double => "xmlrpc_c::value_double",
        TypeTag::String => "xmlrpc_c::value_string",
        TypeTag::Bytes => "xmlrpc_c::value_bytestring",
        TypeTag::DateTime => "xmlrpc_c::value_datetime",
        TypeTag::Struct => "xmlrpc_c::value_struct",
        TypeTag::Array => "xmlrpc_c::value_array",
    }
}

/// Expression wrapping the native value `arg` for the wire.
#[must_use]
pub fn marshal_expr(tag: TypeTag, arg: &str) -> String {
    format!("{}({arg})", wire_type(tag))
}

/// Expression converting the wire value `value` back to the native type.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_codegen::cpp::unmarshal_expr;
/// use xmlrpc_proxy_core::TypeTag;
///
/// assert_eq!(
///     unmarshal_expr(TypeTag::Int, "result"),
///     "static_cast<int>(xmlrpc_c::value_int(result))"
/// );
/// ```
#[must_use]
pub fn unmarshal_expr(tag: TypeTag, value: &str) -> String {
    let wire = wire_type(tag);
    match tag {
        TypeTag::Bytes => format!("{wire}({value}).vectorUcharValue()"),
        TypeTag::Array => format!("{wire}({value}).vectorValueValue()"),
        TypeTag::Boolean
        | TypeTag::Int
        | TypeTag::Double
        | TypeTag::String
        | TypeTag::DateTime
        | TypeTag::Struct => format!("static_cast<{}>({wire}({value}))", native_type(tag)),
    }
}

/// Returns `true` if `name` can be used as a C++ class or function name.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_codegen::cpp::is_identifier;
///
/// assert!(is_identifier("listMethods"));
/// assert!(is_identifier("_private2"));
/// assert!(!is_identifier("2fast"));
/// assert!(!is_identifier("get-state"));
/// assert!(!is_identifier("delete"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.contains(&name)
}

/// Include guard derived from a header file name.
///
/// ASCII letters are upper-cased, digits kept, everything else becomes `_`.
#[must_use]
pub fn include_guard(header_file: &str) -> String {
    header_file
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Quotes `s` as a C++ string literal.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_codegen::cpp::string_literal;
///
/// assert_eq!(string_literal("sample.add"), "\"sample.add\"");
/// assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
/// ```
#[must_use]
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Lays `text` out as a block comment, one entry per line, indented
/// by `indent`. Returns nothing for blank text.
///
/// `*/` inside the text is broken up so the comment cannot end early.
#[must_use]
pub fn block_comment(text: &str, indent: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<String> = text
        .lines()
        .map(|line| line.trim_end().replace("*/", "* /"))
        .collect();

    if let [only] = lines.as_slice() {
        return vec![format!("{indent}/* {only} */")];
    }

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("{indent}/*"));
    for line in &lines {
        if line.is_empty() {
            out.push(format!("{indent} *"));
        } else {
            out.push(format!("{indent} * {line}"));
        }
    }
    out.push(format!("{indent} */"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_maps_to_a_native_type() {
        for tag in TypeTag::ALL {
            assert!(!native_type(tag).is_empty(), "{tag} has no native type");
            assert!(wire_type(tag).starts_with("xmlrpc_c::value_"));
            assert!(parameter_type(tag).starts_with(native_type(tag)));
            assert!(unmarshal_expr(tag, "result").contains(wire_type(tag)));
        }
    }

    #[test]
    fn test_native_types_are_distinct() {
        let mut seen: Vec<&str> = TypeTag::ALL.iter().map(|t| native_type(*t)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), TypeTag::ALL.len());
    }

    #[test]
    fn test_specific_mappings() {
        assert_eq!(native_type(TypeTag::Boolean), "bool");
        assert_eq!(native_type(TypeTag::DateTime), "time_t");
        assert_eq!(native_type(TypeTag::Bytes), "std::vector<unsigned char>");
        assert_eq!(parameter_type(TypeTag::Struct), "std::map<std::string, xmlrpc_c::value> const&");
        assert_eq!(marshal_expr(TypeTag::String, "arg1"), "xmlrpc_c::value_string(arg1)");
        assert_eq!(
            unmarshal_expr(TypeTag::Array, "result"),
            "xmlrpc_c::value_array(result).vectorValueValue()"
        );
        assert_eq!(
            unmarshal_expr(TypeTag::Bytes, "result"),
            "xmlrpc_c::value_bytestring(result).vectorUcharValue()"
        );
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("add"));
        assert!(is_identifier("SampleProxy"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("class"));
        assert!(!is_identifier("naïve"));
    }

    #[test]
    fn test_newer_keywords_rejected() {
        for word in [
            "static_cast",
            "decltype",
            "requires",
            "wchar_t",
            "thread_local",
            "co_await",
            "char8_t",
            "xor_eq",
        ] {
            assert!(!is_identifier(word), "{word}");
        }
    }

    #[test]
    fn test_include_guard() {
        assert_eq!(include_guard("SampleProxy.h"), "SAMPLEPROXY_H");
        assert_eq!(include_guard("v2_api.h"), "V2_API_H");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(string_literal("tab\there"), "\"tab\\there\"");
        assert_eq!(string_literal("\u{1}"), "\"\\x01\"");
    }

    #[test]
    fn test_block_comment_single_line() {
        assert_eq!(block_comment("adds two ints", "    "), ["    /* adds two ints */"]);
    }

    #[test]
    fn test_block_comment_multi_line_and_terminator() {
        let lines = block_comment("first\n\nends */ here\n", "");
        assert_eq!(lines, ["/*", " * first", " *", " * ends * / here", " */"]);
    }

    #[test]
    fn test_block_comment_blank() {
        assert!(block_comment("  \n ", "    ").is_empty());
    }
}
