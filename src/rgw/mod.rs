// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The rgw keyring, service and deployment, each created at most once per namespace.

pub mod deployment;
pub mod keyring;
pub mod service;

pub use deployment::{ensure_deployment, make_deployment};
pub use keyring::ensure_keyring;
pub use service::{ensure_service, make_service};

use crate::constants::{labels, APP_NAME};
use std::collections::BTreeMap;

/// Labels selecting the rgw pods of a cluster
pub fn get_labels(cluster_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (labels::APP.to_string(), APP_NAME.to_string()),
        (labels::CLUSTER.to_string(), cluster_name.to_string()),
    ])
}
