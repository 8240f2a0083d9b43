// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admin sessions backed by the `ceph` command line tool.

use crate::ceph::mon::mon_hosts;
use crate::ceph::{AdminConnector, AdminSession};
use crate::error::{Result, RgwError};
use crate::types::ClusterMembership;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

const ADMIN_ENTITY: &str = "client.admin";

/// Connects to a cluster by writing a ceph.conf and admin keyring to a working directory
#[derive(Debug, Clone)]
pub struct CephCliConnector {
    config_dir: PathBuf,
    admin_secret: String,
    binary: String,
}

impl CephCliConnector {
    pub fn new(config_dir: impl Into<PathBuf>, admin_secret: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
            admin_secret: admin_secret.into(),
            binary: "ceph".to_string(),
        }
    }

    /// Use a different ceph binary than the one on PATH
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

#[async_trait]
impl AdminConnector for CephCliConnector {
    type Session = CephCliSession;

    #[instrument(skip(self, membership), fields(cluster = %membership.name))]
    async fn connect(&self, membership: &ClusterMembership) -> Result<CephCliSession> {
        let connect_err = |e: std::io::Error| RgwError::ConnectError(e.to_string());

        tokio::fs::create_dir_all(&self.config_dir)
            .await
            .map_err(connect_err)?;

        let conf_path = self.config_dir.join(format!("{}.config", membership.name));
        let keyring_path = self.config_dir.join(format!("{}.admin.keyring", membership.name));

        // Build the session before writing so a partial write is cleaned up on drop
        let mut session = CephCliSession {
            binary: self.binary.clone(),
            cluster_name: membership.name.clone(),
            conf_path,
            keyring_path,
        };

        let conf = format!(
            "[global]\nmon host = {}\nauth cluster required = cephx\nauth service required = cephx\nauth client required = cephx\n",
            mon_hosts(&membership.monitors)
        );
        let keyring = format!("[{}]\n\tkey = {}\n", ADMIN_ENTITY, self.admin_secret);

        let written = async {
            tokio::fs::write(&session.conf_path, conf).await?;
            tokio::fs::write(&session.keyring_path, keyring).await
        }
        .await;
        if let Err(e) = written {
            session.shutdown();
            return Err(connect_err(e));
        }

        info!("Opened admin session to cluster {}", membership.name);
        Ok(session)
    }
}

/// A session is the pair of config files the ceph tool is pointed at
#[derive(Debug)]
pub struct CephCliSession {
    binary: String,
    cluster_name: String,
    conf_path: PathBuf,
    keyring_path: PathBuf,
}

#[derive(Deserialize)]
struct AuthKey {
    key: String,
}

#[async_trait]
impl AdminSession for CephCliSession {
    async fn auth_get_or_create_key(&self, entity: &str, caps: &[(&str, &str)]) -> Result<String> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--conf")
            .arg(&self.conf_path)
            .arg("--keyring")
            .arg(&self.keyring_path)
            .args(["--name", ADMIN_ENTITY, "--format", "json"])
            .args(["auth", "get-or-create-key", entity]);
        for (service, cap) in caps {
            cmd.args([*service, *cap]);
        }

        debug!("Running {:?}", cmd);
        let output = cmd
            .output()
            .await
            .map_err(|e| RgwError::KeyringError(format!("failed to run {}: {}", self.binary, e)))?;

        if !output.status.success() {
            return Err(RgwError::KeyringError(format!(
                "auth get-or-create-key {} failed ({}): {}",
                entity,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let parsed: AuthKey = serde_json::from_slice(&output.stdout).map_err(|e| {
            RgwError::KeyringError(format!("unexpected output for {}: {}", entity, e))
        })?;

        Ok(parsed.key)
    }

    fn shutdown(&mut self) {
        for path in [&self.conf_path, &self.keyring_path] {
            remove_quietly(path);
        }
        debug!("Closed admin session to cluster {}", self.cluster_name);
    }
}

fn remove_quietly(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove {}: {}", path.display(), e),
    }
}
