// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed kubeconfig with a single cluster, context and token user

use crate::error::{Result, SaCreatorError};
use crate::types::{ClusterTarget, ProvisionedSecret};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct KubeconfigDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<NamedCluster>,
    pub contexts: Vec<NamedContext>,
    pub current_context: String,
    pub users: Vec<NamedUser>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedCluster {
    pub cluster: ClusterEntry,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterEntry {
    /// Base64 of the PEM bundle
    pub certificate_authority_data: String,
    pub server: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedContext {
    pub context: ContextEntry,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContextEntry {
    pub cluster: String,
    pub user: String,
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedUser {
    pub name: String,
    pub user: UserEntry,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserEntry {
    /// Plaintext bearer token
    pub token: String,
}

impl std::fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEntry")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl KubeconfigDocument {
    /// Build a kubeconfig that authenticates as `user` with the token read
    /// from `secret`.
    ///
    /// The context and current-context are named after the cluster. Both the
    /// token and the CA certificate must be non-empty.
    pub fn new(
        target: &ClusterTarget,
        user: &str,
        secret: &ProvisionedSecret,
        ca_certificate: &str,
    ) -> Result<Self> {
        if ca_certificate.is_empty() {
            return Err(SaCreatorError::EmptyCaCertificate);
        }
        if secret.token.is_empty() {
            return Err(SaCreatorError::InvalidToken {
                secret: format!("{}/{}", secret.namespace, secret.name),
                reason: "token is empty".to_string(),
            });
        }

        Ok(KubeconfigDocument {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            clusters: vec![NamedCluster {
                cluster: ClusterEntry {
                    certificate_authority_data: STANDARD.encode(ca_certificate),
                    server: target.url.clone(),
                },
                name: target.name.clone(),
            }],
            contexts: vec![NamedContext {
                context: ContextEntry {
                    cluster: target.name.clone(),
                    user: user.to_string(),
                    namespace: target.namespace.clone(),
                },
                name: target.name.clone(),
            }],
            current_context: target.name.clone(),
            users: vec![NamedUser {
                name: user.to_string(),
                user: UserEntry {
                    token: secret.token.clone(),
                },
            }],
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SaCreatorError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_secret(token: &str) -> ProvisionedSecret {
        ProvisionedSecret {
            name: "svc1-token".to_string(),
            namespace: "ns1".to_string(),
            token: token.to_string(),
        }
    }

    fn make_document() -> KubeconfigDocument {
        let target = ClusterTarget::new("https://localhost:6443", "test", "ns1");
        KubeconfigDocument::new(&target, "svc1", &make_secret("abc123"), "CAFEBABE").unwrap()
    }

    #[test]
    fn test_rendered_fields() {
        let yaml = make_document().to_yaml().unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["apiVersion"], "v1");
        assert_eq!(doc["kind"], "Config");
        assert_eq!(
            doc["clusters"][0]["cluster"]["certificate-authority-data"],
            STANDARD.encode("CAFEBABE").as_str()
        );
        assert_eq!(doc["clusters"][0]["cluster"]["server"], "https://localhost:6443");
        assert_eq!(doc["clusters"][0]["name"], "test");
        assert_eq!(doc["contexts"][0]["name"], "test");
        assert_eq!(doc["contexts"][0]["context"]["cluster"], "test");
        assert_eq!(doc["contexts"][0]["context"]["user"], "svc1");
        assert_eq!(doc["contexts"][0]["context"]["namespace"], "ns1");
        assert_eq!(doc["current-context"], "test");
        assert_eq!(doc["users"][0]["name"], "svc1");
        assert_eq!(doc["users"][0]["user"]["token"], "abc123");
    }

    #[test]
    fn test_parses_as_kubeconfig() {
        let yaml = make_document().to_yaml().unwrap();

        let parsed = kube::config::Kubeconfig::from_yaml(&yaml).unwrap();

        assert_eq!(parsed.current_context.as_deref(), Some("test"));
        assert_eq!(parsed.clusters.len(), 1);
        let cluster = parsed.clusters[0].cluster.as_ref().unwrap();
        assert_eq!(cluster.server.as_deref(), Some("https://localhost:6443"));
        assert_eq!(
            cluster.certificate_authority_data.as_deref(),
            Some(STANDARD.encode("CAFEBABE").as_str())
        );
        assert_eq!(parsed.auth_infos[0].name, "svc1");
        assert_eq!(parsed.contexts[0].name, "test");
    }

    #[test]
    fn test_pem_certificate_is_encoded_whole() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----";
        let target = ClusterTarget::new("https://10.0.0.1:6443", "prod", "apps");

        let doc = KubeconfigDocument::new(&target, "deployer", &make_secret("t0k3n"), pem).unwrap();

        let decoded = STANDARD
            .decode(&doc.clusters[0].cluster.certificate_authority_data)
            .unwrap();
        assert_eq!(decoded, pem.as_bytes());
    }

    #[test]
    fn test_empty_ca_is_rejected() {
        let target = ClusterTarget::new("https://localhost:6443", "test", "ns1");

        let err = KubeconfigDocument::new(&target, "svc1", &make_secret("abc123"), "").unwrap_err();

        assert!(matches!(err, SaCreatorError::EmptyCaCertificate));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let target = ClusterTarget::new("https://localhost:6443", "test", "ns1");

        let err = KubeconfigDocument::new(&target, "svc1", &make_secret(""), "CAFEBABE").unwrap_err();

        match err {
            SaCreatorError::InvalidToken { secret, .. } => assert_eq!(secret, "ns1/svc1-token"),
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", make_document());

        assert!(!debug.contains("abc123"));
    }
}
