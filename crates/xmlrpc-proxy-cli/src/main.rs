//! `xmlrpc-cpp-proxy`: generate a C++ proxy class for an XML-RPC server.
//!
//! ```bash
//! xmlrpc-cpp-proxy http://localhost/RPC2 system systemProxy > systemProxy.txt
//! ```
//!
//! The declaration block goes to `systemProxy.h`, the definition block
//! (after the blank separator line) to the implementation file.

use anyhow::{Context, Result};
use std::io;
use std::panic;
use xmlrpc_proxy_cli::{diagnostic, init_logging, parse_args, run};
use xmlrpc_proxy_codegen::TOOL_NAME;
use xmlrpc_proxy_core::ProxyConfig;
use xmlrpc_proxy_core::cli::{CommandLineArgs, ExitCode};
use xmlrpc_proxy_introspector::XmlRpcIntrospector;

fn main() {
    let exit_code = panic::catch_unwind(execute).unwrap_or_else(|_| {
        eprintln!("{TOOL_NAME}: Unknown failure");
        ExitCode::ERROR
    });

    std::process::exit(exit_code.as_i32());
}

fn execute() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            if let Err(io_err) = err.print() {
                eprintln!("{TOOL_NAME}: failed to print message: {io_err}");
                return ExitCode::ERROR;
            }
            return err.exit_code();
        }
    };

    let client = match setup(&args) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{TOOL_NAME}: {err:#}");
            return ExitCode::ERROR;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&args, &client, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "generation failed");
            eprintln!("{}", diagnostic(TOOL_NAME, &err));
            ExitCode::ERROR
        }
    }
}

/// Loads configuration, starts logging, and builds the server client.
fn setup(args: &CommandLineArgs) -> Result<XmlRpcIntrospector> {
    let config = ProxyConfig::load().context("failed to load configuration")?;
    init_logging(&config);

    let client = XmlRpcIntrospector::new(args.server_address(), &config)
        .with_context(|| format!("failed to create client for {}", args.server_address()))?;
    tracing::info!("Introspecting {}", client.url());

    Ok(client)
}
