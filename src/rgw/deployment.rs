// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The rgw deployment and its pod template.

use crate::ceph::mon::{admin_secret_env_var, flatten_mon_endpoints, mon_secret_env_var, secret_env_var};
use crate::constants::{rgw, APP_NAME, DATA_DIR_VOLUME, KEYRING_KEY};
use crate::error::Result;
use crate::kubernetes::{create_if_absent, Created};
use crate::rgw::get_labels;
use crate::types::{ClusterConfig, ClusterMembership};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, EmptyDirVolumeSource, PodSpec, PodTemplateSpec, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::{api::ObjectMeta, Api, Client};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Create the rgw deployment unless one already exists. An existing deployment is not compared.
#[instrument(skip(client, config, membership), fields(namespace = %config.namespace, cluster = %membership.name))]
pub async fn ensure_deployment(
    client: &Client,
    config: &ClusterConfig,
    membership: &ClusterMembership,
) -> Result<()> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), &config.namespace);

    match create_if_absent(&deployments, &make_deployment(config, membership)).await? {
        Created::Created(_) => info!("rgw deployment started"),
        Created::AlreadyExists => info!("rgw deployment already exists"),
    }

    Ok(())
}

pub fn make_deployment(config: &ClusterConfig, membership: &ClusterMembership) -> Deployment {
    let labels = get_labels(&membership.name);

    let template = PodTemplateSpec {
        metadata: Some(ObjectMeta {
            name: Some("rook-rgw".to_string()),
            labels: Some(labels.clone()),
            annotations: Some(BTreeMap::new()),
            ..Default::default()
        }),
        spec: Some(PodSpec {
            containers: vec![rgw_container(config, membership)],
            restart_policy: Some("Always".to_string()),
            volumes: Some(vec![Volume {
                name: DATA_DIR_VOLUME.to_string(),
                empty_dir: Some(EmptyDirVolumeSource::default()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
    };

    Deployment {
        metadata: ObjectMeta {
            name: Some(APP_NAME.to_string()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(config.replicas),
            selector: LabelSelector {
                match_labels: Some(labels),
                ..Default::default()
            },
            template,
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// The rookd invocation for the gateway
pub fn gateway_command(config: &ClusterConfig, membership: &ClusterMembership) -> String {
    format!(
        "/usr/bin/rookd rgw --data-dir={} --mon-endpoints={} --cluster-name={} --rgw-port={} --rgw-host={}",
        config.data_dir.display(),
        flatten_mon_endpoints(&membership.monitors),
        membership.name,
        rgw::PORT,
        rgw::DNS_NAME
    )
}

fn rgw_container(config: &ClusterConfig, membership: &ClusterMembership) -> Container {
    // Without the delay rookd regularly starts before pod networking is up
    let command = format!(
        "sleep {}; {}",
        rgw::STARTUP_DELAY_SECS,
        gateway_command(config, membership)
    );

    Container {
        name: APP_NAME.to_string(),
        image: Some(config.image()),
        command: Some(vec!["/bin/sh".to_string(), "-c".to_string(), command]),
        volume_mounts: Some(vec![VolumeMount {
            name: DATA_DIR_VOLUME.to_string(),
            mount_path: config.data_dir.display().to_string(),
            ..Default::default()
        }]),
        env: Some(vec![
            secret_env_var("ROOKD_RGW_KEYRING", APP_NAME, KEYRING_KEY),
            mon_secret_env_var(),
            admin_secret_env_var(),
        ]),
        ..Default::default()
    }
}
