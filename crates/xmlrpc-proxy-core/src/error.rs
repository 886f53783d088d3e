//! Error types for the XML-RPC proxy generator.
//!
//! A single error hierarchy is shared by every library crate in the
//! workspace. Remote faults keep their numeric code so the driver can
//! report them verbatim, and failures raised while rendering are wrapped
//! once with the class name they belong to.
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_core::{Error, Result};
//!
//! fn check_timeout(secs: u64) -> Result<()> {
//!     if secs == 0 {
//!         return Err(Error::ConfigError {
//!             message: "timeout must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_timeout(0).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::fmt;
use thiserror::Error;

/// Which generated artifact a rendering failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// The declaration (`.h`) block.
    Header,
    /// The definition (`.cpp`) block.
    Definition,
}

impl Artifact {
    /// Returns the human-readable name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Definition => "definition",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the proxy generator.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered a call with an XML-RPC fault.
    #[error("XML-RPC fault #{code}: {description}")]
    Fault {
        /// Fault code reported by the server
        code: i32,
        /// Fault string reported by the server
        description: String,
    },

    /// The server could not be reached, or the HTTP exchange failed.
    #[error("XML-RPC call to {server} failed")]
    ConnectionFailed {
        /// Address of the server
        server: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A successful response had the wrong shape for the call.
    #[error("Malformed response to {method}: {reason}")]
    MalformedResponse {
        /// Remote method that was called
        method: String,
        /// What was wrong with the response
        reason: String,
    },

    /// A signature reported by the server could not be understood.
    #[error("Malformed signature for method '{method}': {reason}")]
    MalformedSignature {
        /// Remote method whose signature is malformed
        method: String,
        /// What was wrong with the signature
        reason: String,
    },

    /// A name is not a C++ identifier, or clashes with a generated name.
    #[error("'{name}' cannot be used as the name of a generated C++ {kind}")]
    InvalidIdentifier {
        /// What the name is used for ("class", "method")
        kind: &'static str,
        /// The offending name
        name: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
    },

    /// Rendering one of the generated artifacts failed.
    ///
    /// Everything raised while formatting individual methods is folded
    /// into this variant so the caller reports one coherent failure.
    #[error("Failed to generate {artifact} for class {class_name}.  {source}")]
    GenerationFailed {
        /// Artifact being rendered
        artifact: Artifact,
        /// Name of the proxy class
        class_name: String,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Writing generated code to the output sink failed.
    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Wraps `self` as a rendering failure for `class_name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrpc_proxy_core::{Artifact, Error};
    ///
    /// let err = Error::Template { message: "boom".to_string() }
    ///     .in_generation(Artifact::Header, "SampleProxy");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Failed to generate header for class SampleProxy.  Template error: boom"
    /// );
    /// ```
    #[must_use]
    pub fn in_generation(self, artifact: Artifact, class_name: &str) -> Self {
        Self::GenerationFailed {
            artifact,
            class_name: class_name.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the remote fault carried by this error, if any.
    ///
    /// Looks through `GenerationFailed` wrappers.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrpc_proxy_core::{Artifact, Error};
    ///
    /// let err = Error::Fault { code: -32601, description: "no such method".to_string() }
    ///     .in_generation(Artifact::Definition, "Proxy");
    /// assert_eq!(err.fault(), Some((-32601, "no such method")));
    /// ```
    #[must_use]
    pub fn fault(&self) -> Option<(i32, &str)> {
        match self {
            Self::Fault { code, description } => Some((*code, description.as_str())),
            Self::GenerationFailed { source, .. } => source.fault(),
            _ => None,
        }
    }

    /// Returns `true` if this is a remote fault.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault { .. })
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }

    /// Returns `true` if the server sent something this tool cannot use.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedResponse { .. } | Self::MalformedSignature { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this error was raised while rendering an artifact.
    #[must_use]
    pub const fn is_generation_error(&self) -> bool {
        matches!(self, Self::GenerationFailed { .. })
    }
}

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display() {
        let err = Error::Fault {
            code: 3,
            description: "Unknown method".to_string(),
        };
        assert_eq!(err.to_string(), "XML-RPC fault #3: Unknown method");
        assert!(err.is_fault());
        assert!(!err.is_connection_error());
    }

    #[test]
    fn test_connection_error_detection() {
        let err = Error::ConnectionFailed {
            server: "http://localhost/RPC2".to_string(),
            source: "connection refused".into(),
        };
        assert!(err.is_connection_error());
        assert!(err.fault().is_none());
        assert!(err.to_string().contains("http://localhost/RPC2"));
    }

    #[test]
    fn test_malformed_detection() {
        let response = Error::MalformedResponse {
            method: "system.listMethods".to_string(),
            reason: "expected an array".to_string(),
        };
        let signature = Error::MalformedSignature {
            method: "sample.add".to_string(),
            reason: "empty signature".to_string(),
        };
        assert!(response.is_malformed());
        assert!(signature.is_malformed());
        assert!(
            !Error::ConfigError {
                message: "x".to_string()
            }
            .is_malformed()
        );
    }

    #[test]
    fn test_generation_wrapping_names_class_and_artifact() {
        let err = Error::InvalidIdentifier {
            kind: "method",
            name: "do-it".to_string(),
        }
        .in_generation(Artifact::Definition, "SampleProxy");

        assert!(err.is_generation_error());
        let display = err.to_string();
        assert!(display.starts_with("Failed to generate definition for class SampleProxy."));
        assert!(display.contains("do-it"));
    }

    #[test]
    fn test_fault_seen_through_wrapper() {
        let err = Error::Fault {
            code: 7,
            description: "busy".to_string(),
        }
        .in_generation(Artifact::Header, "P");
        assert_eq!(err.fault(), Some((7, "busy")));
        assert!(!err.is_fault());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Output(_)));
    }

    #[test]
    fn test_artifact_display() {
        assert_eq!(Artifact::Header.to_string(), "header");
        assert_eq!(Artifact::Definition.to_string(), "definition");
    }
}
