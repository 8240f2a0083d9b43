// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rgw_provisioner::ceph::CephCliConnector;
use rgw_provisioner::config::Config;
use rgw_provisioner::constants::retry::{INTERVAL_SECS, MAX_INTERVAL_SECS};
use rgw_provisioner::reconcilers::RgwReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting rgw provisioner");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, version={}, replicas={}, cluster={}",
        config.cluster.namespace,
        config.cluster.version,
        config.cluster.replicas,
        config.membership.name
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let connector = CephCliConnector::new(&config.cluster.data_dir, config.admin_secret.clone());
    let reconciler = RgwReconciler::new(client, config.cluster.clone(), connector);

    // Every step is idempotent, so a failed attempt is simply run again
    let mut interval = INTERVAL_SECS;
    loop {
        match reconciler.start(Some(&config.membership)).await {
            Ok(()) => {
                info!("rgw is running");
                return Ok(());
            }
            Err(e) => {
                warn!("Failed to start rgw: {}, retrying in {} seconds...", e, interval);
            }
        }

        sleep(Duration::from_secs(interval)).await;

        // Exponential backoff with max cap
        interval = (interval * 2).min(MAX_INTERVAL_SECS);
    }
}
