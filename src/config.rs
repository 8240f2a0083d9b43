// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::ceph::mon::parse_mon_endpoints;
use crate::constants::DATA_DIR;
use crate::types::{ClusterConfig, ClusterMembership};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Provisioner configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub membership: ClusterMembership,
    /// Key of client.admin, used to mint the gateway keyring
    pub admin_secret: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} environment variable not set", key))
        };

        let namespace = lookup("RGW_NAMESPACE").unwrap_or_else(|| "rook".to_string());
        let version = lookup("ROOK_VERSION").unwrap_or_else(|| "latest".to_string());
        let replicas = match lookup("RGW_REPLICAS") {
            Some(v) => v
                .parse::<i32>()
                .with_context(|| format!("RGW_REPLICAS is not a number: {}", v))?,
            None => 2,
        };
        if replicas < 0 {
            bail!("RGW_REPLICAS must not be negative, got {}", replicas);
        }
        let data_dir = lookup("ROOK_DATA_DIR").unwrap_or_else(|| DATA_DIR.to_string());

        let cluster_name = required("CLUSTER_NAME")?;
        let monitors = parse_mon_endpoints(&required("MON_ENDPOINTS")?)
            .context("MON_ENDPOINTS is invalid")?;
        if monitors.is_empty() {
            bail!("MON_ENDPOINTS does not list any mons");
        }
        let admin_secret = required("ADMIN_SECRET")?;

        Ok(Config {
            cluster: ClusterConfig {
                namespace,
                version,
                replicas,
                data_dir: PathBuf::from(data_dir),
            },
            membership: ClusterMembership {
                name: cluster_name,
                monitors,
            },
            admin_secret,
        })
    }
}
