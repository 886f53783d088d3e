//! C++ proxy class generation.
//!
//! Renders the proxy class model built by the introspector into two
//! text artifacts: a declaration block for `<ClassName>.h` and a
//! definition block that includes it. Both are produced with
//! Handlebars templates; the mapping from XML-RPC types to C++ types
//! lives in [`cpp`].
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_codegen::ProxyGenerator;
//! use xmlrpc_proxy_core::ClassName;
//! use xmlrpc_proxy_introspector::ProxyClass;
//!
//! let generator = ProxyGenerator::new().unwrap();
//! let class = ProxyClass::new(ClassName::new("EmptyProxy"));
//!
//! let header = generator.render_declaration(&class).unwrap();
//! let source = generator.render_definition(&class).unwrap();
//!
//! assert!(header.contains("class EmptyProxy {"));
//! assert!(source.contains("#include \"EmptyProxy.h\""));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cpp;
pub mod generator;
pub mod template_engine;
pub mod types;

pub use generator::{ProxyGenerator, TOOL_NAME};
pub use types::{FunctionContext, HeaderContext, ImplementationContext};
