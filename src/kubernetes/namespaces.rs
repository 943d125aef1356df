// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::Result;
use crate::kubernetes::command::{CommandRunner, KubectlCommand};
use tracing::{info, instrument, warn};

/// Ensure a namespace exists in the cluster, create if it doesn't
#[instrument(skip(runner))]
pub async fn ensure_namespace_exists(runner: &dyn CommandRunner, namespace: &str) -> Result<()> {
    let lookup = runner
        .run(&KubectlCommand::new(["get", "namespace", namespace]))
        .await?;

    if lookup.is_success() {
        info!("Namespace {} already exists.", namespace);
        return Ok(());
    }

    info!("Creating namespace {}", namespace);
    let create = KubectlCommand::new(["create", "namespace", namespace, "--save-config"]);
    let output = runner.run(&create).await?;

    // Lost a race with someone else creating it
    if output.is_already_exists() {
        warn!("Namespace {} appeared while creating it", namespace);
        return Ok(());
    }

    output.into_result(&create)?;
    info!("Namespace {} created successfully", namespace);
    Ok(())
}
