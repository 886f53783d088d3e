//! XML-RPC server introspection.
//!
//! Queries a server's `system.listMethods`, `system.methodHelp` and
//! `system.methodSignature` methods, keeps the methods under one name
//! prefix, and builds the in-memory model of the proxy class to
//! generate.
//!
//! The remote calls sit behind the [`SystemIntrospection`] trait so any
//! client can be injected; [`XmlRpcIntrospector`] is the HTTP one.
//!
//! # Examples
//!
//! ```no_run
//! use xmlrpc_proxy_core::{ClassName, ProxyConfig};
//! use xmlrpc_proxy_introspector::{XmlRpcIntrospector, collect};
//!
//! # fn example() -> xmlrpc_proxy_core::Result<()> {
//! let client = XmlRpcIntrospector::new("http://localhost/RPC2", &ProxyConfig::default())?;
//! let collection = collect(&client, "system", ClassName::new("systemProxy"))?;
//! println!("{} methods", collection.class.method_count());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod client;
pub mod collector;
pub mod http;
pub mod model;

pub use client::{SignatureReport, SystemIntrospection};
pub use collector::{Collection, SKIP_LOG_TARGET, collect};
pub use http::XmlRpcIntrospector;
pub use model::{MethodDescriptor, ProxyClass};
