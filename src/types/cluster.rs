// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{DATA_DIR, IMAGE_REPO};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Settings for the rgw workload, fixed for the lifetime of a reconcile call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub namespace: String,
    pub version: String,
    pub replicas: i32,
    pub data_dir: PathBuf,
}

impl ClusterConfig {
    pub fn new(namespace: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            version: version.into(),
            replicas: 2,
            data_dir: PathBuf::from(DATA_DIR),
        }
    }

    /// Full image reference for the configured rookd version
    pub fn image(&self) -> String {
        make_rook_image(&self.version)
    }
}

pub fn make_rook_image(version: &str) -> String {
    format!("{}:{}", IMAGE_REPO, version)
}

/// Name and monitor endpoints of the ceph cluster behind the gateway.
///
/// Monitors are keyed by mon name, so iteration order (and everything derived
/// from it) is stable for a given input.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMembership {
    pub name: String,
    pub monitors: BTreeMap<String, String>,
}

impl ClusterMembership {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            monitors: BTreeMap::new(),
        }
    }

    pub fn with_monitor(mut self, name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        self.monitors.insert(name.into(), endpoint.into());
        self
    }

    pub fn has_monitors(&self) -> bool {
        !self.monitors.is_empty()
    }
}
