// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Gateway keyring creation.

use crate::ceph::AdminSession;
use crate::constants::rgw::ENTITY;
use crate::error::{Result, RgwError};
use tracing::debug;

const MON_CAPS: &str = "allow rw";
const OSD_CAPS: &str = "allow rwx";

/// Mint the gateway key over an admin session and render it as a keyring
pub async fn create_keyring<S: AdminSession + ?Sized>(session: &S) -> Result<String> {
    let key = session
        .auth_get_or_create_key(ENTITY, &[("osd", OSD_CAPS), ("mon", MON_CAPS)])
        .await?;

    if key.trim().is_empty() {
        return Err(RgwError::KeyringError(format!(
            "cluster returned an empty key for {}",
            ENTITY
        )));
    }

    debug!("Got key for {}", ENTITY);
    Ok(render_keyring(ENTITY, key.trim()))
}

pub fn render_keyring(entity: &str, key: &str) -> String {
    format!(
        "[{}]\n\tkey = {}\n\tcaps mon = \"{}\"\n\tcaps osd = \"{}\"\n",
        entity, key, MON_CAPS, OSD_CAPS
    )
}
