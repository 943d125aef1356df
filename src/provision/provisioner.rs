// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creation of the service account, its RBAC objects and token secret

use crate::constants::{annotations, SERVICE_ACCOUNT_TOKEN_TYPE};
use crate::error::{Result, SaCreatorError};
use crate::kubernetes::{ensure_namespace_exists, CommandRunner, KubectlCommand};
use crate::types::{ClusterTarget, ServiceAccountSpec};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Create the namespace (if missing), service account, role, role binding and
/// token secret, in that order.
///
/// Resources that already exist are left alone so the flow can be re-run.
/// Any other kubectl failure stops provisioning; whatever was created before
/// it stays in the cluster.
#[instrument(skip_all, fields(namespace = %target.namespace, sa = %spec.name))]
pub async fn provision(
    runner: &dyn CommandRunner,
    target: &ClusterTarget,
    spec: &ServiceAccountSpec,
) -> Result<()> {
    let namespace = target.namespace.as_str();
    ensure_namespace_exists(runner, namespace).await?;

    create(
        runner,
        KubectlCommand::new([
            "create",
            "sa",
            spec.name.as_str(),
            "-n",
            namespace,
            "--save-config",
        ]),
    )
    .await?;

    let role_name = spec.role_name();
    create(runner, role_command(namespace, spec)).await?;

    create(
        runner,
        KubectlCommand::new([
            "create".to_string(),
            "rolebinding".to_string(),
            spec.role_binding_name(),
            "-n".to_string(),
            namespace.to_string(),
            format!("--role={}", role_name),
            format!("--serviceaccount={}:{}", namespace, spec.name),
            "--save-config".to_string(),
        ]),
    )
    .await?;

    apply_token_secret(runner, namespace, spec).await
}

fn role_command(namespace: &str, spec: &ServiceAccountSpec) -> KubectlCommand {
    KubectlCommand::new([
        "create".to_string(),
        "role".to_string(),
        spec.role_name(),
        "-n".to_string(),
        namespace.to_string(),
        format!("--verb={}", spec.verbs.join(",")),
        format!("--resource={}", spec.resources.join(",")),
        "--save-config".to_string(),
    ])
}

/// Run a create command, tolerating objects that already exist
async fn create(runner: &dyn CommandRunner, command: KubectlCommand) -> Result<()> {
    let output = runner.run(&command).await?;

    if output.is_already_exists() {
        warn!("{} skipped: {}", command, output.stderr);
        return Ok(());
    }

    let output = output.into_result(&command)?;
    info!("{}", output.stdout);
    Ok(())
}

/// Apply the token secret the control plane fills in for the service account
async fn apply_token_secret(
    runner: &dyn CommandRunner,
    namespace: &str,
    spec: &ServiceAccountSpec,
) -> Result<()> {
    let secret = token_secret(namespace, spec);
    let manifest =
        serde_json::to_string(&secret).map_err(|e| SaCreatorError::Serialization(e.to_string()))?;

    let command = KubectlCommand::new(["apply", "-f", "-"]).with_stdin(manifest);
    let output = runner.run(&command).await?.into_result(&command)?;
    info!("{}", output.stdout);
    Ok(())
}

/// Build the service-account-token secret bound to the service account
pub fn token_secret(namespace: &str, spec: &ServiceAccountSpec) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(spec.secret_name()),
            namespace: Some(namespace.to_string()),
            annotations: Some(BTreeMap::from([(
                annotations::SERVICE_ACCOUNT_NAME.to_string(),
                spec.name.clone(),
            )])),
            ..Default::default()
        },
        type_: Some(SERVICE_ACCOUNT_TOKEN_TYPE.to_string()),
        ..Default::default()
    }
}
