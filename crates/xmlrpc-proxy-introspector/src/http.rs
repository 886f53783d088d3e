//! XML-RPC over HTTP introspection client.
//!
//! Encoding and decoding are delegated to the `xmlrpc` crate; the HTTP
//! exchange uses a blocking `reqwest` client so the configured timeout
//! and user agent apply to every call. Calls are issued one at a time.

use crate::client::{SignatureReport, SystemIntrospection};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use std::error::Error as StdError;
use tracing::debug;
use xmlrpc::{Request, Transport, Value};
use xmlrpc_proxy_core::{Error, MethodName, MethodSignature, ProxyConfig, Result};

const LIST_METHODS: &str = "system.listMethods";
const METHOD_HELP: &str = "system.methodHelp";
const METHOD_SIGNATURE: &str = "system.methodSignature";

/// Introspection client for a server reachable over HTTP.
///
/// # Examples
///
/// ```no_run
/// use xmlrpc_proxy_core::ProxyConfig;
/// use xmlrpc_proxy_introspector::{SystemIntrospection, XmlRpcIntrospector};
///
/// # fn example() -> xmlrpc_proxy_core::Result<()> {
/// let client = XmlRpcIntrospector::new("http://localhost:8080/RPC2", &ProxyConfig::default())?;
/// for name in client.list_methods()? {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct XmlRpcIntrospector {
    url: String,
    http: Client,
}

impl XmlRpcIntrospector {
    /// Creates a client for the server at `url`.
    ///
    /// No connection is made until the first call.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the HTTP client cannot be built
    /// from `config`.
    pub fn new(url: impl Into<String>, config: &ProxyConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::ConfigError {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    /// Address of the server.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn call(&self, request: &Request<'_>, method: &str) -> Result<Value> {
        debug!("Calling {method} on {}", self.url);

        let transport = HttpTransport {
            http: &self.http,
            url: &self.url,
        };

        request.call(transport).map_err(|err| {
            err.fault().map_or_else(
                || Error::ConnectionFailed {
                    server: self.url.clone(),
                    source: err.to_string().into(),
                },
                |fault| Error::Fault {
                    code: fault.fault_code,
                    description: fault.fault_string.clone(),
                },
            )
        })
    }
}

impl SystemIntrospection for XmlRpcIntrospector {
    fn list_methods(&self) -> Result<Vec<MethodName>> {
        let value = self.call(&Request::new(LIST_METHODS), LIST_METHODS)?;
        parse_method_list(&value)
    }

    fn method_help(&self, method: &MethodName) -> Result<String> {
        let request = Request::new(METHOD_HELP).arg(method.as_str());
        let value = self.call(&request, METHOD_HELP)?;
        parse_help(method, &value)
    }

    fn method_signature(&self, method: &MethodName) -> Result<SignatureReport> {
        let request = Request::new(METHOD_SIGNATURE).arg(method.as_str());
        let value = self.call(&request, METHOD_SIGNATURE)?;
        parse_signature_report(method, &value)
    }
}

/// One HTTP POST carrying one XML-RPC request.
struct HttpTransport<'a> {
    http: &'a Client,
    url: &'a str,
}

impl Transport for HttpTransport<'_> {
    type Stream = Response;

    fn transmit(
        self,
        request: &Request<'_>,
    ) -> std::result::Result<Self::Stream, Box<dyn StdError + Send + Sync>> {
        let mut body = Vec::new();
        request.write_as_xml(&mut body)?;

        let response = self
            .http
            .post(self.url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(body)
            .send()?
            .error_for_status()?;

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !is_xml_content_type(content_type) {
                return Err(format!("unexpected response content type '{content_type}'").into());
            }
        }

        Ok(response)
    }
}

fn is_xml_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "text/xml" || mime == "application/xml"
}

fn malformed(method: &str, reason: impl Into<String>) -> Error {
    Error::MalformedResponse {
        method: method.to_string(),
        reason: reason.into(),
    }
}

fn parse_method_list(value: &Value) -> Result<Vec<MethodName>> {
    let items = value
        .as_array()
        .ok_or_else(|| malformed(LIST_METHODS, "expected an array of method names"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(MethodName::new)
                .ok_or_else(|| malformed(LIST_METHODS, "method name is not a string"))
        })
        .collect()
}

fn parse_help(method: &MethodName, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| malformed(METHOD_HELP, format!("help for {method} is not a string")))
}

/// Anything other than an array (conventionally the string `undef`)
/// means the server will not describe the method.
fn parse_signature_report(method: &MethodName, value: &Value) -> Result<SignatureReport> {
    let Some(entries) = value.as_array() else {
        debug!("No signature reported for {method}");
        return Ok(SignatureReport::Unspecified);
    };

    entries
        .iter()
        .map(|entry| {
            let types = entry.as_array().ok_or_else(|| {
                malformed(
                    METHOD_SIGNATURE,
                    format!("signature of {method} is not an array of type names"),
                )
            })?;

            let names = types
                .iter()
                .map(|t| {
                    t.as_str().ok_or_else(|| {
                        malformed(
                            METHOD_SIGNATURE,
                            format!("type name in signature of {method} is not a string"),
                        )
                    })
                })
                .collect::<Result<Vec<&str>>>()?;

            MethodSignature::from_wire(method.as_str(), names.as_slice())
        })
        .collect::<Result<Vec<_>>>()
        .map(SignatureReport::Signatures)
}
