// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rgw reconciler - brings the object gateway of one ceph cluster up.

use crate::ceph::AdminConnector;
use crate::error::{Result, RgwError, Step};
use crate::rgw::{ensure_deployment, ensure_keyring, ensure_service};
use crate::types::{ClusterConfig, ClusterMembership};
use kube::Client;
use tracing::{info, instrument};

pub struct RgwReconciler<C: AdminConnector> {
    client: Client,
    config: ClusterConfig,
    connector: C,
}

impl<C: AdminConnector> RgwReconciler<C> {
    pub fn new(client: Client, config: ClusterConfig, connector: C) -> Self {
        Self {
            client,
            config,
            connector,
        }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Create the keyring secret, the service and the deployment, in that order.
    ///
    /// Safe to call repeatedly and concurrently. The first failing step stops the
    /// sequence; resources created by earlier steps are left in place for the
    /// next call to build on.
    #[instrument(skip(self, membership), fields(namespace = %self.config.namespace))]
    pub async fn start(&self, membership: Option<&ClusterMembership>) -> Result<()> {
        info!("start running rgw");

        let Some(membership) = membership.filter(|m| m.has_monitors()) else {
            return Err(RgwError::MissingMonitors);
        };
        let namespace = &self.config.namespace;

        ensure_keyring(&self.client, namespace, &self.connector, membership)
            .await
            .map_err(|e| e.in_step(Step::Keyring))?;

        ensure_service(&self.client, namespace, &membership.name)
            .await
            .map_err(|e| e.in_step(Step::Service))?;

        ensure_deployment(&self.client, &self.config, membership)
            .await
            .map_err(|e| e.in_step(Step::Deployment))?;

        Ok(())
    }
}
