// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! End-to-end flow: provision, wait for the token, validate, render.

use crate::config::Config;
use crate::error::Result;
use crate::kubeconfig::{fetch_ca_certificate, write_kubeconfig, KubeconfigDocument};
use crate::kubernetes::CommandRunner;
use crate::provision::{provision, validate_resources, wait_for_token};
use crate::types::{ClusterTarget, ServiceAccountSpec};
use std::path::Path;
use tracing::{info, instrument};

/// Provision the service account and build a kubeconfig for it.
///
/// Each step relies on the cluster state left by the previous one. Nothing is
/// rolled back when a later step fails.
#[instrument(skip_all, fields(cluster = %target.name, namespace = %target.namespace, sa = %spec.name))]
pub async fn create_kubeconfig(
    runner: &dyn CommandRunner,
    config: &Config,
    target: &ClusterTarget,
    spec: &ServiceAccountSpec,
) -> Result<KubeconfigDocument> {
    provision(runner, target, spec).await?;

    let secret = wait_for_token(
        runner,
        &spec.secret_name(),
        &target.namespace,
        config.poll_interval,
        config.token_timeout,
    )
    .await?;

    validate_resources(runner, &target.namespace, spec).await?;

    let ca_certificate = fetch_ca_certificate(runner).await?;
    let document = KubeconfigDocument::new(target, &spec.name, &secret, &ca_certificate)?;

    info!(
        "Kubeconfig for {}/{} is ready (token from secret {}/{})",
        target.namespace, spec.name, secret.namespace, secret.name
    );
    Ok(document)
}

/// Run the whole flow and emit the kubeconfig. Nothing is written on failure.
pub async fn run(
    runner: &dyn CommandRunner,
    config: &Config,
    target: &ClusterTarget,
    spec: &ServiceAccountSpec,
    output: Option<&Path>,
) -> Result<()> {
    let document = create_kubeconfig(runner, config, target, spec).await?;
    write_kubeconfig(&document.to_yaml()?, output).await
}
