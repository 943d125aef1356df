// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaCreatorError {
    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Timeout waiting for token in secret {namespace}/{secret} after {timeout:?}")]
    TokenTimeout {
        secret: String,
        namespace: String,
        timeout: Duration,
    },

    #[error("Condition not met within {0:?}")]
    Timeout(Duration),

    #[error("Invalid token in secret {secret}: {reason}")]
    InvalidToken { secret: String, reason: String },

    #[error(
        "Some resources were not created successfully. SA: {service_account} Role: {role} RoleBinding: {role_binding}"
    )]
    ValidationFailed {
        service_account: String,
        role: String,
        role_binding: String,
    },

    #[error("CA certificate is empty")]
    EmptyCaCertificate,

    #[error("Failed to serialize manifest: {0}")]
    Serialization(String),

    #[error("Failed to write kubeconfig to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SaCreatorError>;
