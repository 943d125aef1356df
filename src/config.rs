// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{token, KUBECTL};
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// kubectl binary to invoke
    pub kubectl: String,
    pub poll_interval: Duration,
    /// How long to wait for the token controller to fill in the secret
    pub token_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kubectl: KUBECTL.to_string(),
            poll_interval: Duration::from_secs(token::POLL_INTERVAL_SECS),
            token_timeout: Duration::from_secs(token::TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key: &str| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let kubectl = lookup("SA_CREATOR_KUBECTL").unwrap_or(defaults.kubectl);
        let poll_interval = secs_var(&lookup, "SA_CREATOR_POLL_INTERVAL_SECS")?
            .unwrap_or(defaults.poll_interval);
        let token_timeout = secs_var(&lookup, "SA_CREATOR_TOKEN_TIMEOUT_SECS")?
            .unwrap_or(defaults.token_timeout);

        Ok(Config {
            kubectl,
            poll_interval,
            token_timeout,
        })
    }
}

fn secs_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    lookup(key)
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{} must be a whole number of seconds, got '{}'", key, v))
        })
        .transpose()
}
