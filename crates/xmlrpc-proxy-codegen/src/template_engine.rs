//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars with the proxy templates pre-registered. Output is
//! C++ source, so HTML escaping is switched off.
//!
//! # Examples
//!
//! ```
//! use xmlrpc_proxy_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "// {{name}} <ok>").unwrap();
//! let out = engine.render("greeting", &json!({"name": "SampleProxy"})).unwrap();
//! assert_eq!(out, "// SampleProxy <ok>");
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use xmlrpc_proxy_core::{Error, Result};

/// Name of the template producing the declaration block.
pub const HEADER_TEMPLATE: &str = "proxy/header";

/// Name of the template producing the definition block.
pub const IMPLEMENTATION_TEMPLATE: &str = "proxy/implementation";

/// Template engine for code generation.
///
/// Strict mode is on: a template referring to a field its context
/// lacks fails to render instead of producing an empty string.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the proxy templates registered.
    ///
    /// # Errors
    ///
    /// Returns `Error::Template` if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_proxy_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_proxy_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(HEADER_TEMPLATE, include_str!("../templates/header.h.hbs"))
            .map_err(|e| Error::Template {
                message: format!("Failed to register header template: {e}"),
            })?;

        handlebars
            .register_template_string(
                IMPLEMENTATION_TEMPLATE,
                include_str!("../templates/implementation.cpp.hbs"),
            )
            .map_err(|e| Error::Template {
                message: format!("Failed to register implementation template: {e}"),
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns `Error::Template` if the template is not registered, the
    /// context cannot be serialized, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("Rendering '{template_name}' failed: {e}"),
            })
    }

    /// Registers an additional template.
    ///
    /// # Errors
    ///
    /// Returns `Error::Template` if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::Template {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }
}
