//! Template contexts for proxy generation.
//!
//! Plain serializable views of the proxy class model, already lowered
//! to C++ text fragments, that the Handlebars templates iterate over.

use serde::Serialize;

/// Context for the `proxy/header` template.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderContext {
    /// Name of the generating tool, for the banner
    pub tool_name: String,
    /// Generated class name
    pub class_name: String,
    /// Include guard macro
    pub include_guard: String,
    /// One entry per (method, signature) pair
    pub functions: Vec<FunctionContext>,
}

/// Context for the `proxy/implementation` template.
#[derive(Debug, Clone, Serialize)]
pub struct ImplementationContext {
    /// Name of the generating tool, for the banner
    pub tool_name: String,
    /// Generated class name
    pub class_name: String,
    /// Header file holding the class declaration
    pub header_file: String,
    /// One entry per (method, signature) pair
    pub functions: Vec<FunctionContext>,
}

/// One generated member function.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionContext {
    /// Member function name
    pub name: String,
    /// Remote method name as a C++ string literal
    pub remote_name: String,
    /// Native return type
    pub return_type: String,
    /// Comma-separated parameter declarations
    pub parameter_list: String,
    /// Help comment lines; only the first overload of a method has them
    pub help_lines: Vec<String>,
    /// Statements adding each argument to `params`
    pub marshal_lines: Vec<String>,
    /// Expression converting `result` to the return type
    pub unmarshal: String,
}
