// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Where resources are created and what the kubeconfig's cluster block says
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterTarget {
    /// API server URL, emitted verbatim as `server`
    pub url: String,
    /// Name of the kubeconfig cluster, context and current-context
    pub name: String,
    pub namespace: String,
}

impl ClusterTarget {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}
