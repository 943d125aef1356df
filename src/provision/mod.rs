// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service account provisioning, token retrieval and validation.

pub mod provisioner;
pub mod token;
pub mod validate;

pub use provisioner::{provision, token_secret};
pub use token::wait_for_token;
pub use validate::validate_resources;
