// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Waiting for the token controller to populate a token secret

use crate::constants::TOKEN_KEY;
use crate::error::{Result, SaCreatorError};
use crate::kubernetes::{poll_until, CommandRunner, KubectlCommand};
use crate::types::ProvisionedSecret;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Poll the secret until its token is set, then return it decoded.
#[instrument(skip(runner))]
pub async fn wait_for_token(
    runner: &dyn CommandRunner,
    secret_name: &str,
    namespace: &str,
    interval: Duration,
    timeout: Duration,
) -> Result<ProvisionedSecret> {
    let command = KubectlCommand::new([
        "get".to_string(),
        "secret".to_string(),
        secret_name.to_string(),
        "-n".to_string(),
        namespace.to_string(),
        "-o".to_string(),
        format!("jsonpath={{.data.{}}}", TOKEN_KEY),
    ]);

    let command = &command;
    let raw = poll_until(interval, timeout, move || async move {
        let output = runner.run(command).await?;
        if !output.is_success() {
            debug!("Secret lookup failed: {}", output.stderr);
            return Ok(None);
        }
        Ok((!output.stdout.is_empty()).then_some(output.stdout))
    })
    .await
    .map_err(|e| match e {
        SaCreatorError::Timeout(timeout) => SaCreatorError::TokenTimeout {
            secret: secret_name.to_string(),
            namespace: namespace.to_string(),
            timeout,
        },
        other => other,
    })?;

    let token = decode_token(secret_name, &raw)?;
    info!("Token for secret {}/{} is available", namespace, secret_name);

    Ok(ProvisionedSecret {
        name: secret_name.to_string(),
        namespace: namespace.to_string(),
        token,
    })
}

fn decode_token(secret_name: &str, raw: &str) -> Result<String> {
    let invalid = |reason: String| SaCreatorError::InvalidToken {
        secret: secret_name.to_string(),
        reason,
    };

    let bytes = STANDARD.decode(raw).map_err(|e| invalid(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))
}
