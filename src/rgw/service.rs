// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{rgw::PORT, APP_NAME};
use crate::error::Result;
use crate::kubernetes::{create_if_absent, Created};
use crate::rgw::get_labels;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::{api::ObjectMeta, Api, Client};
use tracing::{info, instrument};

/// Create the rgw service unless one already exists
#[instrument(skip(client))]
pub async fn ensure_service(client: &Client, namespace: &str, cluster_name: &str) -> Result<()> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);

    match create_if_absent(&services, &make_service(namespace, cluster_name)).await? {
        Created::Created(s) => {
            let cluster_ip = s
                .spec
                .and_then(|spec| spec.cluster_ip)
                .unwrap_or_else(|| "<pending>".to_string());
            info!("RGW service running at {}:{}", cluster_ip, PORT);
        }
        Created::AlreadyExists => info!("RGW service already running"),
    }

    Ok(())
}

pub fn make_service(namespace: &str, cluster_name: &str) -> Service {
    let labels = get_labels(cluster_name);

    Service {
        metadata: ObjectMeta {
            name: Some(APP_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                name: Some(APP_NAME.to_string()),
                port: PORT,
                target_port: Some(IntOrString::Int(PORT)),
                protocol: Some("TCP".to_string()),
                ..Default::default()
            }]),
            selector: Some(labels),
            ..Default::default()
        }),
        ..Default::default()
    }
}
