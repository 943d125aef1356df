// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Post-creation existence checks

use crate::error::{Result, SaCreatorError};
use crate::kubernetes::{CommandOutput, CommandRunner, KubectlCommand};
use crate::types::ServiceAccountSpec;
use tracing::{info, instrument};

/// Check that the service account, role and role binding can be looked up.
///
/// This only proves the objects exist; it does not compare the role's rules
/// with what was requested.
#[instrument(skip_all, fields(namespace = %namespace, sa = %spec.name))]
pub async fn validate_resources(
    runner: &dyn CommandRunner,
    namespace: &str,
    spec: &ServiceAccountSpec,
) -> Result<()> {
    let service_account = lookup(runner, "sa", &spec.name, namespace).await?;
    let role = lookup(runner, "role", &spec.role_name(), namespace).await?;
    let role_binding = lookup(runner, "rolebinding", &spec.role_binding_name(), namespace).await?;

    if [&service_account, &role, &role_binding]
        .iter()
        .any(|o| !exists(o))
    {
        return Err(SaCreatorError::ValidationFailed {
            service_account: service_account.combined().to_string(),
            role: role.combined().to_string(),
            role_binding: role_binding.combined().to_string(),
        });
    }

    info!("Service account, role and role binding are present");
    Ok(())
}

async fn lookup(
    runner: &dyn CommandRunner,
    kind: &str,
    name: &str,
    namespace: &str,
) -> Result<CommandOutput> {
    runner
        .run(&KubectlCommand::new(["get", kind, name, "-n", namespace]))
        .await
}

fn exists(output: &CommandOutput) -> bool {
    output.is_success() && !output.stdout.is_empty()
}
