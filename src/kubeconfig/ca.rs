// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::root_ca;
use crate::error::{Result, SaCreatorError};
use crate::kubernetes::{CommandRunner, KubectlCommand};
use tracing::{debug, instrument};

/// Read the cluster root CA (PEM) from the `kube-root-ca.crt` ConfigMap
#[instrument(skip(runner))]
pub async fn fetch_ca_certificate(runner: &dyn CommandRunner) -> Result<String> {
    let output = runner
        .run(&KubectlCommand::new([
            "get",
            "configmap",
            root_ca::CONFIG_MAP,
            "-n",
            root_ca::NAMESPACE,
            "-o",
            root_ca::JSONPATH,
        ]))
        .await?;

    if !output.is_success() {
        debug!("CA lookup failed: {}", output.stderr);
        return Err(SaCreatorError::EmptyCaCertificate);
    }
    if output.stdout.is_empty() {
        return Err(SaCreatorError::EmptyCaCertificate);
    }

    Ok(output.stdout)
}
