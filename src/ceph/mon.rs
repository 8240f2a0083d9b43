// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mon endpoint encoding and the secret bindings published by the mon component.

use crate::constants::mon::{ADMIN_SECRET_KEY, MON_SECRET_KEY, SECRET_NAME};
use crate::error::{Result, RgwError};
use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource, SecretKeySelector};
use std::collections::BTreeMap;

/// Flatten monitors into `name=endpoint` pairs joined by commas
pub fn flatten_mon_endpoints(monitors: &BTreeMap<String, String>) -> String {
    monitors
        .iter()
        .map(|(name, endpoint)| format!("{}={}", name, endpoint))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse the output of [`flatten_mon_endpoints`] back into a monitor map
pub fn parse_mon_endpoints(flattened: &str) -> Result<BTreeMap<String, String>> {
    let mut monitors = BTreeMap::new();

    for entry in flattened.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((name, endpoint)) = entry.split_once('=') else {
            return Err(RgwError::InvalidMonEndpoints(format!(
                "expected name=endpoint, got '{}'",
                entry
            )));
        };
        if name.is_empty() || endpoint.is_empty() {
            return Err(RgwError::InvalidMonEndpoints(format!(
                "empty name or endpoint in '{}'",
                entry
            )));
        }
        monitors.insert(name.to_string(), endpoint.to_string());
    }

    Ok(monitors)
}

/// Comma separated endpoints, as used for `mon host` in ceph.conf
pub fn mon_hosts(monitors: &BTreeMap<String, String>) -> String {
    monitors.values().cloned().collect::<Vec<_>>().join(",")
}

pub fn mon_secret_env_var() -> EnvVar {
    secret_env_var("ROOKD_MON_SECRET", SECRET_NAME, MON_SECRET_KEY)
}

pub fn admin_secret_env_var() -> EnvVar {
    secret_env_var("ROOKD_ADMIN_SECRET", SECRET_NAME, ADMIN_SECRET_KEY)
}

/// An env var resolved by the kubelet from a secret key at pod start
pub fn secret_env_var(name: &str, secret: &str, key: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value_from: Some(EnvVarSource {
            secret_key_ref: Some(SecretKeySelector {
                name: secret.to_string(),
                key: key.to_string(),
                optional: None,
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}
