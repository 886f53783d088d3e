//! Name filter and collector.
//!
//! Lists the server's methods, keeps those whose prefix equals the
//! requested one, and fetches help and signatures for each kept method.

use crate::client::{SignatureReport, SystemIntrospection};
use crate::model::{MethodDescriptor, ProxyClass};
use tracing::{debug, info, warn};
use xmlrpc_proxy_core::{ClassName, MethodName, Result};

/// Log target of the per-method skip warnings.
///
/// The CLI keeps this target at `warn` whatever filter is configured,
/// so skipped methods are always reported on stderr.
pub const SKIP_LOG_TARGET: &str = "xmlrpc_cpp_proxy::skipped";

/// Outcome of a collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// The class to generate
    pub class: ProxyClass,
    /// Methods that matched the prefix but were left out because the
    /// server reports no signatures for them, in discovery order
    pub skipped: Vec<MethodName>,
}

/// Builds the proxy class model from a server.
///
/// Methods keep the order `system.listMethods` returned them in;
/// duplicates are processed independently. A matching method whose
/// signature is unspecified (or an empty list) is skipped with one
/// warning. Any other failure aborts the pass.
///
/// # Errors
///
/// Returns the first error raised by `client`.
///
/// # Examples
///
/// ```no_run
/// use xmlrpc_proxy_core::{ClassName, ProxyConfig};
/// use xmlrpc_proxy_introspector::{XmlRpcIntrospector, collect};
///
/// # fn example() -> xmlrpc_proxy_core::Result<()> {
/// let client = XmlRpcIntrospector::new("http://localhost/RPC2", &ProxyConfig::default())?;
/// let collection = collect(&client, "", ClassName::new("RootProxy"))?;
/// for name in &collection.skipped {
///     println!("no signature: {name}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn collect<C>(client: &C, prefix: &str, class_name: ClassName) -> Result<Collection>
where
    C: SystemIntrospection + ?Sized,
{
    let names = client.list_methods()?;
    info!(
        "Server lists {} methods; collecting prefix '{}' into class {}",
        names.len(),
        prefix,
        class_name
    );

    let mut class = ProxyClass::new(class_name);
    let mut skipped = Vec::new();

    for name in names {
        if !name.matches_prefix(prefix) {
            debug!("Ignoring method {name}: prefix '{}' does not match", name.prefix());
            continue;
        }

        let help = client.method_help(&name)?;
        let report = client.method_signature(&name)?;

        match report {
            SignatureReport::Signatures(signatures) if !signatures.is_empty() => {
                debug!("Adding method {name} with {} signature(s)", signatures.len());
                class.add_method(MethodDescriptor::new(name, help, signatures)?);
            }
            SignatureReport::Signatures(_) => {
                warn!(
                    target: SKIP_LOG_TARGET,
                    "Skipping method {name} because server reports an empty signature list for it"
                );
                skipped.push(name);
            }
            SignatureReport::Unspecified => {
                warn!(
                    target: SKIP_LOG_TARGET,
                    "Skipping method {name} because server does not report any signatures \
                     for it (via system.methodSignature method)"
                );
                skipped.push(name);
            }
        }
    }

    info!(
        "Collected {} methods ({} skipped)",
        class.method_count(),
        skipped.len()
    );

    Ok(Collection { class, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use xmlrpc_proxy_core::{Error, MethodSignature, TypeTag};

    mockall::mock! {
        Server {}

        impl SystemIntrospection for Server {
            fn list_methods(&self) -> Result<Vec<MethodName>>;
            fn method_help(&self, method: &MethodName) -> Result<String>;
            fn method_signature(&self, method: &MethodName) -> Result<SignatureReport>;
        }
    }

    fn names(list: &[&str]) -> Vec<MethodName> {
        list.iter().map(|n| MethodName::new(*n)).collect()
    }

    fn int_sig() -> SignatureReport {
        SignatureReport::Signatures(vec![MethodSignature::new(TypeTag::Int, vec![TypeTag::Int])])
    }

    #[test]
    fn test_non_matching_methods_never_queried() {
        let mut server = MockServer::new();
        server
            .expect_list_methods()
            .returning(|| Ok(names(&["system.listMethods", "other.thing", "bare"])));
        server.expect_method_help().never();
        server.expect_method_signature().never();

        let collection = collect(&server, "sample", ClassName::new("P")).unwrap();
        assert!(collection.class.is_empty());
        assert!(collection.skipped.is_empty());
    }

    #[test]
    fn test_empty_prefix_selects_unprefixed() {
        let mut server = MockServer::new();
        server
            .expect_list_methods()
            .returning(|| Ok(names(&["ping", "a.ping", "pong"])));
        server.expect_method_help().times(2).returning(|_| Ok(String::new()));
        server
            .expect_method_signature()
            .times(2)
            .returning(|_| Ok(int_sig()));

        let collection = collect(&server, "", ClassName::new("Root")).unwrap();
        let locals: Vec<_> = collection
            .class
            .methods()
            .iter()
            .map(MethodDescriptor::local_name)
            .collect();
        assert_eq!(locals, ["ping", "pong"]);
    }

    #[test]
    fn test_unspecified_signature_skipped_once() {
        let mut server = MockServer::new();
        server
            .expect_list_methods()
            .returning(|| Ok(names(&["s.a", "s.b"])));
        server.expect_method_help().returning(|_| Ok("help".to_string()));
        server
            .expect_method_signature()
            .with(eq(MethodName::new("s.a")))
            .returning(|_| Ok(SignatureReport::Unspecified));
        server
            .expect_method_signature()
            .with(eq(MethodName::new("s.b")))
            .returning(|_| Ok(int_sig()));

        let collection = collect(&server, "s", ClassName::new("S")).unwrap();
        assert_eq!(collection.skipped, names(&["s.a"]));
        assert_eq!(collection.class.method_count(), 1);
        assert_eq!(collection.class.methods()[0].local_name(), "b");
    }

    #[test]
    fn test_empty_signature_list_skipped() {
        let mut server = MockServer::new();
        server.expect_list_methods().returning(|| Ok(names(&["s.a"])));
        server.expect_method_help().returning(|_| Ok(String::new()));
        server
            .expect_method_signature()
            .returning(|_| Ok(SignatureReport::Signatures(vec![])));

        let collection = collect(&server, "s", ClassName::new("S")).unwrap();
        assert!(collection.class.is_empty());
        assert_eq!(collection.skipped.len(), 1);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let mut server = MockServer::new();
        server
            .expect_list_methods()
            .returning(|| Ok(names(&["m.z", "x.skip", "m.a", "m.z"])));
        server.expect_method_help().times(3).returning(|_| Ok(String::new()));
        server
            .expect_method_signature()
            .times(3)
            .returning(|_| Ok(int_sig()));

        let collection = collect(&server, "m", ClassName::new("M")).unwrap();
        let remotes: Vec<_> = collection
            .class
            .methods()
            .iter()
            .map(|m| m.remote_name().as_str())
            .collect();
        assert_eq!(remotes, ["m.z", "m.a", "m.z"]);
    }

    #[test]
    fn test_fault_aborts_collection() {
        let mut server = MockServer::new();
        server.expect_list_methods().returning(|| Ok(names(&["s.a", "s.b"])));
        server.expect_method_help().times(1).returning(|_| {
            Err(Error::Fault {
                code: 2,
                description: "help unavailable".to_string(),
            })
        });
        server.expect_method_signature().never();

        let err = collect(&server, "s", ClassName::new("S")).unwrap_err();
        assert_eq!(err.fault(), Some((2, "help unavailable")));
    }

    #[test]
    fn test_list_failure_propagates() {
        let mut server = MockServer::new();
        server.expect_list_methods().returning(|| {
            Err(Error::ConnectionFailed {
                server: "http://nowhere".to_string(),
                source: "refused".into(),
            })
        });

        let err = collect(&server, "s", ClassName::new("S")).unwrap_err();
        assert!(err.is_connection_error());
    }
}
