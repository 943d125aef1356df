// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod cluster;
pub mod service_account;

pub use cluster::ClusterTarget;
pub use service_account::{ProvisionedSecret, ServiceAccountSpec};
