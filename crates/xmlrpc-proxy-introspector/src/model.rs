//! In-memory model of the proxy class to generate.
//!
//! Built once by the collector, then read by both emitters.
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_core::{ClassName, MethodName, MethodSignature, TypeTag};
//! use xmlrpc_proxy_introspector::{MethodDescriptor, ProxyClass};
//!
//! let add = MethodDescriptor::new(
//!     MethodName::new("sample.add"),
//!     "adds two ints",
//!     vec![MethodSignature::new(TypeTag::Int, vec![TypeTag::Int, TypeTag::Int])],
//! )
//! .unwrap();
//!
//! let mut class = ProxyClass::new(ClassName::new("SampleProxy"));
//! class.add_method(add);
//!
//! assert_eq!(class.method_count(), 1);
//! assert_eq!(class.methods()[0].local_name(), "add");
//! ```

use xmlrpc_proxy_core::{ClassName, Error, MethodName, MethodSignature, Result};

/// One remote method that becomes member functions of the proxy class.
///
/// Always carries at least one signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    remote_name: MethodName,
    help: String,
    signatures: Vec<MethodSignature>,
}

impl MethodDescriptor {
    /// Creates a descriptor. The local name is the part of
    /// `remote_name` after its last separator.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedSignature` if `signatures` is empty.
    pub fn new(
        remote_name: MethodName,
        help: impl Into<String>,
        signatures: Vec<MethodSignature>,
    ) -> Result<Self> {
        if signatures.is_empty() {
            return Err(Error::MalformedSignature {
                method: remote_name.into_inner(),
                reason: "method has no signatures".to_string(),
            });
        }

        Ok(Self {
            remote_name,
            help: help.into(),
            signatures,
        })
    }

    /// Member function name in the generated class.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.remote_name.local_name()
    }

    /// Full name used for the remote call.
    #[must_use]
    pub const fn remote_name(&self) -> &MethodName {
        &self.remote_name
    }

    /// Help text reported by the server.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Reported overloads, in server order. Never empty.
    #[must_use]
    pub fn signatures(&self) -> &[MethodSignature] {
        &self.signatures
    }
}

/// The class to generate: its name and methods in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClass {
    class_name: ClassName,
    methods: Vec<MethodDescriptor>,
}

impl ProxyClass {
    /// Creates an empty class.
    #[must_use]
    pub const fn new(class_name: ClassName) -> Self {
        Self {
            class_name,
            methods: Vec::new(),
        }
    }

    /// Appends a method, keeping insertion order.
    pub fn add_method(&mut self, method: MethodDescriptor) {
        self.methods.push(method);
    }

    /// Name of the class.
    #[must_use]
    pub const fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// Methods in the order they were added.
    #[must_use]
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Number of methods.
    #[inline]
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if the class has no methods.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
