// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys used on provisioned objects
pub mod annotations {
    /// Binds a token secret to its service account; the token controller
    /// only populates secrets carrying it
    pub const SERVICE_ACCOUNT_NAME: &str = "kubernetes.io/service-account.name";
}

/// Secret type the token controller fills in
pub const SERVICE_ACCOUNT_TOKEN_TYPE: &str = "kubernetes.io/service-account-token";

/// Data key holding the bearer token in a token secret
pub const TOKEN_KEY: &str = "token";

/// Cluster root CA published into every namespace by the control plane
pub mod root_ca {
    pub const CONFIG_MAP: &str = "kube-root-ca.crt";
    pub const NAMESPACE: &str = "kube-system";
    /// JSONPath for the `ca.crt` key (the dot has to be escaped)
    pub const JSONPATH: &str = "jsonpath={.data.ca\\.crt}";
}

/// Token polling configuration
pub mod token {
    /// Interval in seconds between token lookups
    pub const POLL_INTERVAL_SECS: u64 = 1;
    /// Seconds to wait for the token controller before giving up
    pub const TIMEOUT_SECS: u64 = 30;
}

/// Default kubectl binary
pub const KUBECTL: &str = "kubectl";
