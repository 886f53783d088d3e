//! Core types, configuration, and errors for the XML-RPC proxy generator.
//!
//! This crate provides the foundational types shared by the introspector,
//! the code generator, and the command-line driver.
//!
//! # Architecture
//!
//! The core consists of:
//! - Wire-level type vocabulary (`TypeTag`, `MethodSignature`)
//! - Strong name types (`MethodName`, `ClassName`)
//! - Error hierarchy with contextual information
//! - CLI exit codes and parsed command-line arguments
//! - Layered runtime configuration

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
pub mod config;
mod error;
mod types;

pub use config::ProxyConfig;
pub use error::{Artifact, Error, Result};
pub use types::{ClassName, MethodName, MethodSignature, TypeTag};
