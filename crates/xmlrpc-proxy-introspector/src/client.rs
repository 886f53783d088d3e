//! Introspection facade.
//!
//! The three standard introspection calls, independent of how they
//! travel to the server.

use xmlrpc_proxy_core::{MethodName, MethodSignature, Result};

/// What `system.methodSignature` told us about a method.
///
/// A server may decline to describe a method. That is reported as
/// [`SignatureReport::Unspecified`], which is distinct from an empty
/// signature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureReport {
    /// The server does not report signatures for this method.
    Unspecified,
    /// The reported overloads.
    Signatures(Vec<MethodSignature>),
}

impl SignatureReport {
    /// Returns the signatures, or `None` when unspecified.
    #[must_use]
    pub fn signatures(&self) -> Option<&[MethodSignature]> {
        match self {
            Self::Unspecified => None,
            Self::Signatures(sigs) => Some(sigs),
        }
    }
}

/// Read-only queries against a server's `system.*` methods.
///
/// Implementations perform no retries: any failure is returned as-is
/// and is fatal to the run.
pub trait SystemIntrospection {
    /// `system.listMethods`: every method name the server knows.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a remote fault, or a
    /// response that is not a list of strings.
    fn list_methods(&self) -> Result<Vec<MethodName>>;

    /// `system.methodHelp`: documentation string for `method`, empty if
    /// the server has none.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a remote fault, or a
    /// non-string response.
    fn method_help(&self, method: &MethodName) -> Result<String>;

    /// `system.methodSignature`: the overloads of `method`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a remote fault, or a
    /// signature list that cannot be understood.
    fn method_signature(&self, method: &MethodName) -> Result<SignatureReport>;
}

impl<T: SystemIntrospection + ?Sized> SystemIntrospection for &T {
    fn list_methods(&self) -> Result<Vec<MethodName>> {
        (**self).list_methods()
    }

    fn method_help(&self, method: &MethodName) -> Result<String> {
        (**self).method_help(method)
    }

    fn method_signature(&self, method: &MethodName) -> Result<SignatureReport> {
        (**self).method_signature(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmlrpc_proxy_core::TypeTag;

    #[test]
    fn test_unspecified_has_no_signatures() {
        assert!(SignatureReport::Unspecified.signatures().is_none());
    }

    #[test]
    fn test_empty_list_is_not_unspecified() {
        let report = SignatureReport::Signatures(vec![]);
        assert_eq!(report.signatures(), Some(&[][..]));
        assert_ne!(report, SignatureReport::Unspecified);
    }

    #[test]
    fn test_signatures_exposed() {
        let sig = MethodSignature::new(TypeTag::Int, vec![TypeTag::Int]);
        let report = SignatureReport::Signatures(vec![sig.clone()]);
        assert_eq!(report.signatures().unwrap(), &[sig]);
    }
}
