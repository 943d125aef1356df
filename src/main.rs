// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use k8s_sa_creator::cli::Args;
use k8s_sa_creator::config::Config;
use k8s_sa_creator::kubernetes::KubectlRunner;
use k8s_sa_creator::workflow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for the kubeconfig
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load configuration
    let config = args.apply_to(Config::from_env()?);
    info!(
        "Configuration loaded: kubectl={}, token_timeout={:?}",
        config.kubectl, config.token_timeout
    );

    let runner = KubectlRunner::new(config.kubectl.clone()).with_context(args.context.clone());
    let target = args.target();
    let spec = args.service_account();

    info!(
        "Provisioning service account {}/{} on cluster {}",
        target.namespace, spec.name, target.name
    );

    workflow::run(
        &runner,
        &config,
        &target,
        &spec,
        args.output_file.as_deref(),
    )
    .await
    .with_context(|| {
        format!(
            "Failed to create kubeconfig for service account {}/{}",
            target.namespace, spec.name
        )
    })
}
