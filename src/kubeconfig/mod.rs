// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig rendering for the provisioned service account.

pub mod ca;
pub mod document;

pub use ca::fetch_ca_certificate;
pub use document::KubeconfigDocument;

use crate::error::{Result, SaCreatorError};
use std::path::Path;
use tracing::info;

/// Write the kubeconfig to `path`, or print it to stdout when no path is given
pub async fn write_kubeconfig(yaml: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, yaml)
                .await
                .map_err(|source| SaCreatorError::Output {
                    path: path.display().to_string(),
                    source,
                })?;
            info!("kubeconfig file has been generated: {}", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}
