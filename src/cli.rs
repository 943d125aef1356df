// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments

use crate::config::Config;
use crate::types::{ClusterTarget, ServiceAccountSpec};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "k8s-sa-creator",
    version,
    about = "Generate a Kubernetes kubeconfig for a service account."
)]
pub struct Args {
    /// Kubernetes cluster URL
    #[arg(long, value_parser = parse_cluster_url)]
    pub cluster_url: String,

    /// Kubernetes cluster name
    #[arg(long)]
    pub cluster_name: String,

    /// Namespace for the resources
    #[arg(long)]
    pub namespace: String,

    /// Service Account name
    #[arg(long)]
    pub sa: String,

    /// Secret name (token for sa), defaults to <sa>-token
    #[arg(long)]
    pub secret_name: Option<String>,

    /// Role name, defaults to <sa>-role
    #[arg(long)]
    pub role_name: Option<String>,

    /// Role binding name, defaults to <sa>-role-binding
    #[arg(long)]
    pub role_binding_name: Option<String>,

    /// Comma-separated list of permissions like 'list,get,create,delete'
    #[arg(long, value_parser = parse_comma_list)]
    pub permissions: CommaList,

    /// Comma-separated list of resources like 'pod,deployment,service'
    #[arg(long, value_parser = parse_comma_list)]
    pub resources: CommaList,

    /// Path where kubeconfig will be saved (stdout if omitted)
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// kubectl context to provision through
    #[arg(long)]
    pub context: Option<String>,

    /// Seconds to wait for the service account token
    #[arg(long, value_name = "SECONDS")]
    pub token_timeout: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommaList(pub Vec<String>);

fn parse_comma_list(value: &str) -> Result<CommaList, String> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        return Err("expected at least one comma-separated value".to_string());
    }
    Ok(CommaList(items))
}

/// Accept absolute http(s) URLs but keep the user's spelling
fn parse_cluster_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid cluster URL: {}", e))?;
    match url.scheme() {
        "https" | "http" => Ok(value.to_string()),
        other => Err(format!("unsupported cluster URL scheme '{}'", other)),
    }
}

impl Args {
    pub fn target(&self) -> ClusterTarget {
        ClusterTarget::new(&self.cluster_url, &self.cluster_name, &self.namespace)
    }

    pub fn service_account(&self) -> ServiceAccountSpec {
        ServiceAccountSpec {
            secret_name: self.secret_name.clone(),
            role_name: self.role_name.clone(),
            role_binding_name: self.role_binding_name.clone(),
            ..ServiceAccountSpec::new(
                &self.sa,
                self.permissions.0.clone(),
                self.resources.0.clone(),
            )
        }
    }

    /// Let command-line flags override the environment
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(secs) = self.token_timeout {
            config.token_timeout = Duration::from_secs(secs);
        }
        config
    }
}
