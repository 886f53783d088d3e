//! Pipeline execution and logging initialization.
//!
//! [`run`] is the straight-line driver: collect the class from the
//! server, write the declaration, a blank line, then the definition.
//! Text already written stays written if a later stage fails.

use std::error::Error as StdError;
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use xmlrpc_proxy_codegen::ProxyGenerator;
use xmlrpc_proxy_core::cli::CommandLineArgs;
use xmlrpc_proxy_core::{Error, ProxyConfig, Result};
use xmlrpc_proxy_introspector::{SKIP_LOG_TARGET, SystemIntrospection, collect};

/// Initializes logging infrastructure.
///
/// Logs go to stderr; stdout carries the generated code. `RUST_LOG`
/// wins over the configured level, but neither can silence the
/// warnings for skipped methods.
pub fn init_logging(config: &ProxyConfig) {
    tracing_subscriber::registry()
        .with(log_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn log_filter(config: &ProxyConfig) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    keep_skip_warnings(filter)
}

/// Skipped-method warnings go to stderr even under a quieter filter.
fn keep_skip_warnings(filter: EnvFilter) -> EnvFilter {
    match format!("{SKIP_LOG_TARGET}=warn").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Generates the proxy class described by `args` into `out`.
///
/// # Errors
///
/// Returns the first failure: an introspection error from `client`, a
/// `GenerationFailed` from either emitter, or `Output` if `out` rejects
/// a write.
pub fn run<C, W>(args: &CommandLineArgs, client: &C, out: &mut W) -> Result<()>
where
    C: SystemIntrospection + ?Sized,
    W: Write + ?Sized,
{
    let generator = ProxyGenerator::new()?;

    let collection = collect(client, args.method_prefix(), args.class_name().clone())?;
    let class = &collection.class;

    let declaration = generator.render_declaration(class)?;
    out.write_all(declaration.as_bytes())?;
    writeln!(out)?;
    out.flush()?;

    let definition = generator.render_definition(class)?;
    out.write_all(definition.as_bytes())?;
    out.flush()?;

    tracing::info!(
        "Generated class {} with {} methods",
        class.class_name(),
        class.method_count()
    );

    Ok(())
}

/// Formats the one-line diagnostic printed for a failed run.
///
/// A top-level fault prints its code and description; anything else
/// prints its message followed by any causes it does not already show.
///
/// # Examples
///
/// ```
/// use xmlrpc_proxy_cli::runner::diagnostic;
/// use xmlrpc_proxy_core::Error;
///
/// let err = Error::Fault { code: 4, description: "Too many parameters".to_string() };
/// assert_eq!(
///     diagnostic("xmlrpc-cpp-proxy", &err),
///     "xmlrpc-cpp-proxy: XML-RPC fault #4: Too many parameters"
/// );
/// ```
#[must_use]
pub fn diagnostic(program: &str, err: &Error) -> String {
    if let Error::Fault { code, description } = err {
        return format!("{program}: XML-RPC fault #{code}: {description}");
    }

    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(source) = cause {
        let text = source.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = source.source();
    }

    format!("{program}: {message}")
}
