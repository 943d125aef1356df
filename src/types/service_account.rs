// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The service account to provision and the permissions it gets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceAccountSpec {
    pub name: String,
    pub secret_name: Option<String>,
    pub role_name: Option<String>,
    pub role_binding_name: Option<String>,
    /// RBAC verbs, passed to kubectl unvalidated
    pub verbs: Vec<String>,
    /// Resource kinds, passed to kubectl unvalidated
    pub resources: Vec<String>,
}

impl ServiceAccountSpec {
    pub fn new(name: impl Into<String>, verbs: Vec<String>, resources: Vec<String>) -> Self {
        Self {
            name: name.into(),
            secret_name: None,
            role_name: None,
            role_binding_name: None,
            verbs,
            resources,
        }
    }

    /// Get the name of the token secret, defaulting to `<sa>-token`
    pub fn secret_name(&self) -> String {
        self.secret_name
            .clone()
            .unwrap_or_else(|| format!("{}-token", self.name))
    }

    /// Get the role name, defaulting to `<sa>-role`
    pub fn role_name(&self) -> String {
        self.role_name
            .clone()
            .unwrap_or_else(|| format!("{}-role", self.name))
    }

    /// Get the role binding name, defaulting to `<sa>-role-binding`
    pub fn role_binding_name(&self) -> String {
        self.role_binding_name
            .clone()
            .unwrap_or_else(|| format!("{}-role-binding", self.name))
    }
}

/// A token secret whose token the control plane has filled in
#[derive(Clone, PartialEq, Eq)]
pub struct ProvisionedSecret {
    pub name: String,
    pub namespace: String,
    /// Decoded bearer token
    pub token: String,
}

// Keep the token out of logs
impl std::fmt::Debug for ProvisionedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionedSecret")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("token", &"<redacted>")
            .finish()
    }
}
