// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The rgw keyring secret.

use crate::ceph::{connect_as_admin, create_keyring, AdminConnector};
use crate::constants::{APP_NAME, KEYRING_KEY, ROOK_SECRET_TYPE};
use crate::error::Result;
use crate::kubernetes::{create_if_absent, get_opt, Created};
use crate::types::ClusterMembership;
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ObjectMeta, Api, Client};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Make sure the rgw keyring secret exists, minting a new key only when it is absent.
///
/// An existing secret is trusted as-is and never rewritten.
#[instrument(skip(client, connector, membership), fields(cluster = %membership.name))]
pub async fn ensure_keyring<C: AdminConnector>(
    client: &Client,
    namespace: &str,
    connector: &C,
    membership: &ClusterMembership,
) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    if get_opt(&secrets, APP_NAME).await?.is_some() {
        info!("the rgw keyring was already generated");
        return Ok(());
    }

    info!("generating rgw keyring");
    let keyring = {
        let session = connect_as_admin(connector, membership).await?;
        create_keyring(&*session).await?
    };

    let secret = make_keyring_secret(namespace, &keyring);
    match create_if_absent(&secrets, &secret).await? {
        Created::Created(_) => info!("rgw keyring saved"),
        Created::AlreadyExists => info!("rgw keyring was saved concurrently, keeping the existing one"),
    }

    Ok(())
}

pub fn make_keyring_secret(namespace: &str, keyring: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(APP_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        string_data: Some(BTreeMap::from([(
            KEYRING_KEY.to_string(),
            keyring.to_string(),
        )])),
        type_: Some(ROOK_SECRET_TYPE.to_string()),
        ..Default::default()
    }
}
