//! CLI-specific types.
//!
//! Exit codes and the parsed positional arguments of the generator.
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_core::cli::{CommandLineArgs, ExitCode};
//!
//! let args = CommandLineArgs::new("http://localhost/RPC2", "system", "systemProxy");
//! assert_eq!(args.method_prefix(), "system");
//!
//! assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
//! assert_eq!(ExitCode::ERROR.as_i32(), 1);
//! ```

use crate::ClassName;
use std::fmt;

/// CLI exit code.
///
/// The generator distinguishes failures only in its printed message, so
/// every failure uses [`ExitCode::ERROR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// Any failure: usage, remote fault, or unexpected error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three positional arguments of the generator.
///
/// Immutable once parsed: values are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLineArgs {
    server_address: String,
    method_prefix: String,
    class_name: ClassName,
}

impl CommandLineArgs {
    /// Creates the argument triple.
    #[must_use]
    pub fn new(
        server_address: impl Into<String>,
        method_prefix: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            server_address: server_address.into(),
            method_prefix: method_prefix.into(),
            class_name: ClassName::new(class_name),
        }
    }

    /// URL of the XML-RPC server.
    #[must_use]
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    /// Prefix a method must have to be included; empty selects
    /// unprefixed methods.
    #[must_use]
    pub fn method_prefix(&self) -> &str {
        &self.method_prefix
    }

    /// Name to give the generated class.
    #[must_use]
    pub const fn class_name(&self) -> &ClassName {
        &self.class_name
    }
}
