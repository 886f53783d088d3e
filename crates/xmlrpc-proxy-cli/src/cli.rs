//! Command-line argument parsing.
//!
//! The generator takes exactly three positional arguments. Any other
//! count is a usage error reported with the generator's own message and
//! exit code 1, rather than clap's default exit code 2.

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io;
use thiserror::Error;
use xmlrpc_proxy_core::cli::{CommandLineArgs, ExitCode};

/// Generate a C++ proxy class for the methods an XML-RPC server describes.
///
/// Writes the class declaration, a blank line, and the class
/// definition to standard output.
#[derive(Parser, Debug)]
#[command(name = "xmlrpc-cpp-proxy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// URL of the XML-RPC server, e.g. http://localhost/RPC2
    server_address: String,

    /// Prefix of the methods to include (empty string selects methods without a prefix)
    method_prefix: String,

    /// Name to give the generated proxy class
    class_name: String,
}

impl From<Cli> for CommandLineArgs {
    fn from(cli: Cli) -> Self {
        Self::new(cli.server_address, cli.method_prefix, cli.class_name)
    }
}

/// Why the arguments did not yield a [`CommandLineArgs`].
#[derive(Debug, Error)]
pub enum UsageError {
    /// `--help` or `--version` was requested.
    #[error("{0}")]
    Info(clap::Error),

    /// The arguments do not form a valid invocation.
    #[error(
        "There are 3 arguments: server URL, prefix for the methods to include \
         (empty to include methods without a prefix), and name to give the \
         generated proxy class.  You specified {specified} arguments.\n\
         Example:  xmlrpc-cpp-proxy http://localhost/RPC2 system systemProxy"
    )]
    Usage {
        /// Number of arguments after the program name
        specified: usize,
    },
}

impl UsageError {
    /// Exit code the process should end with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Info(_) => ExitCode::SUCCESS,
            Self::Usage { .. } => ExitCode::ERROR,
        }
    }

    /// Prints the message: help and version to stdout, usage to stderr.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if help or version text cannot be written.
    pub fn print(&self) -> io::Result<()> {
        match self {
            Self::Info(err) => err.print(),
            Self::Usage { .. } => {
                eprintln!("{self}");
                Ok(())
            }
        }
    }
}

/// Parses the full process argument list, program name included.
///
/// # Errors
///
/// Returns `UsageError::Usage` unless exactly three arguments follow
/// the program name, and `UsageError::Info` for `--help` / `--version`.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_cli::cli::parse_args;
///
/// let args = parse_args(["xmlrpc-cpp-proxy", "http://localhost/RPC2", "", "RootProxy"]).unwrap();
/// assert_eq!(args.method_prefix(), "");
/// assert_eq!(args.class_name().as_str(), "RootProxy");
///
/// assert!(parse_args(["xmlrpc-cpp-proxy", "http://localhost/RPC2"]).is_err());
/// ```
pub fn parse_args<I, T>(args: I) -> Result<CommandLineArgs, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let specified = args.len().saturating_sub(1);

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli.into()),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(UsageError::Info(err))
        }
        Err(err) => {
            tracing::debug!("argument parsing failed: {:?}", err.kind());
            Err(UsageError::Usage { specified })
        }
    }
}
