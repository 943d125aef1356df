// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! kubectl execution, polling, and namespace management.

pub mod command;
pub mod namespaces;
pub mod poll;

pub use command::{CommandOutput, CommandRunner, KubectlCommand, KubectlRunner};
pub use namespaces::ensure_namespace_exists;
pub use poll::poll_until;
