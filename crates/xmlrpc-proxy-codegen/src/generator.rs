//! Declaration and definition emitters.
//!
//! Both artifacts are rendered from the same lowered view of the proxy
//! class: one C++ member function per (method, signature) pair, in
//! discovery order. Any failure while rendering is reported once,
//! wrapped with the artifact and class name.

use crate::cpp;
use crate::template_engine::{HEADER_TEMPLATE, IMPLEMENTATION_TEMPLATE, TemplateEngine};
use crate::types::{FunctionContext, HeaderContext, ImplementationContext};
use xmlrpc_proxy_core::{Artifact, Error, MethodSignature, Result, TypeTag};
use xmlrpc_proxy_introspector::{MethodDescriptor, ProxyClass};

/// Name written into the "Generated by" banner of both artifacts.
pub const TOOL_NAME: &str = "xmlrpc-cpp-proxy";

/// Indentation of members inside the class body.
const MEMBER_INDENT: &str = "    ";

/// Data members the header template declares in every proxy class.
const GENERATED_MEMBERS: &[&str] = &["client", "serverUrl"];

/// Renders proxy classes as C++ source.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_codegen::ProxyGenerator;
/// use xmlrpc_proxy_core::{ClassName, MethodName, MethodSignature, TypeTag};
/// use xmlrpc_proxy_introspector::{MethodDescriptor, ProxyClass};
///
/// let mut class = ProxyClass::new(ClassName::new("SampleProxy"));
/// class.add_method(
///     MethodDescriptor::new(
///         MethodName::new("sample.add"),
///         "adds two ints",
///         vec![MethodSignature::new(TypeTag::Int, vec![TypeTag::Int, TypeTag::Int])],
///     )
///     .unwrap(),
/// );
///
/// let generator = ProxyGenerator::new().unwrap();
/// let header = generator.render_declaration(&class).unwrap();
/// assert!(header.contains("add(int const arg1, int const arg2);"));
/// ```
#[derive(Debug)]
pub struct ProxyGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl ProxyGenerator<'_> {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns `Error::Template` if template registration fails.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Renders the class declaration, the content of `<ClassName>.h`.
    ///
    /// # Errors
    ///
    /// Returns `Error::GenerationFailed` naming the class if a name is
    /// not a usable C++ identifier, a method would clash with a generated
    /// member, or the template fails to render.
    pub fn render_declaration(&self, class: &ProxyClass) -> Result<String> {
        let class_name = class.class_name().as_str();
        tracing::info!(
            "Generating header for class {class_name} ({} methods)",
            class.method_count()
        );

        self.declaration(class)
            .map_err(|e| e.in_generation(Artifact::Header, class_name))
    }

    /// Renders the class definition, which includes `<ClassName>.h`.
    ///
    /// # Errors
    ///
    /// Returns `Error::GenerationFailed` naming the class if a name is
    /// not a usable C++ identifier, a method would clash with a generated
    /// member, or the template fails to render.
    pub fn render_definition(&self, class: &ProxyClass) -> Result<String> {
        let class_name = class.class_name().as_str();
        tracing::info!(
            "Generating definition for class {class_name} ({} methods)",
            class.method_count()
        );

        self.definition(class)
            .map_err(|e| e.in_generation(Artifact::Definition, class_name))
    }

    fn declaration(&self, class: &ProxyClass) -> Result<String> {
        let class_name = checked_class_name(class)?;
        let header_file = class.class_name().header_file();

        let context = HeaderContext {
            tool_name: TOOL_NAME.to_string(),
            class_name: class_name.to_string(),
            include_guard: cpp::include_guard(&header_file),
            functions: functions(class)?,
        };

        self.engine.render(HEADER_TEMPLATE, &context)
    }

    fn definition(&self, class: &ProxyClass) -> Result<String> {
        let class_name = checked_class_name(class)?;

        let context = ImplementationContext {
            tool_name: TOOL_NAME.to_string(),
            class_name: class_name.to_string(),
            header_file: class.class_name().header_file(),
            functions: functions(class)?,
        };

        self.engine.render(IMPLEMENTATION_TEMPLATE, &context)
    }
}

fn checked_class_name(class: &ProxyClass) -> Result<&str> {
    let name = class.class_name().as_str();
    if cpp::is_identifier(name) {
        Ok(name)
    } else {
        Err(Error::InvalidIdentifier {
            kind: "class",
            name: name.to_string(),
        })
    }
}

/// Lowers every method of `class` into template functions.
fn functions(class: &ProxyClass) -> Result<Vec<FunctionContext>> {
    let class_name = class.class_name().as_str();
    let mut out = Vec::new();
    for method in class.methods() {
        out.extend(method_functions(class_name, method)?);
    }
    Ok(out)
}

/// A member function name must be an identifier and must not collide
/// with the generated data members or the constructor.
fn method_functions(class_name: &str, method: &MethodDescriptor) -> Result<Vec<FunctionContext>> {
    let name = method.local_name();
    if !cpp::is_identifier(name) || GENERATED_MEMBERS.contains(&name) || name == class_name {
        return Err(Error::InvalidIdentifier {
            kind: "method",
            name: method.remote_name().to_string(),
        });
    }

    let remote_name = cpp::string_literal(method.remote_name().as_str());
    let help = cpp::block_comment(method.help(), MEMBER_INDENT);

    Ok(method
        .signatures()
        .iter()
        .enumerate()
        .map(|(i, signature)| FunctionContext {
            name: name.to_string(),
            remote_name: remote_name.clone(),
            return_type: cpp::native_type(signature.return_type).to_string(),
            parameter_list: parameter_list(signature),
            help_lines: if i == 0 { help.clone() } else { Vec::new() },
            marshal_lines: marshal_lines(signature),
            unmarshal: cpp::unmarshal_expr(signature.return_type, "result"),
        })
        .collect())
}

/// `(argN, type)` for each parameter, numbered from 1.
fn argument_names(signature: &MethodSignature) -> impl Iterator<Item = (String, TypeTag)> + '_ {
    signature
        .parameter_types
        .iter()
        .enumerate()
        .map(|(i, tag)| (format!("arg{}", i + 1), *tag))
}

fn parameter_list(signature: &MethodSignature) -> String {
    argument_names(signature)
        .map(|(arg, tag)| format!("{} {arg}", cpp::parameter_type(tag)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn marshal_lines(signature: &MethodSignature) -> Vec<String> {
    argument_names(signature)
        .map(|(arg, tag)| format!("params.add({});", cpp::marshal_expr(tag, &arg)))
        .collect()
}
