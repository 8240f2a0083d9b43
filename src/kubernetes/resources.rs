// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Get and create helpers that treat not-found and already-exists as outcomes.

use crate::error::Result;
use kube::{api::PostParams, Api, Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Result of a create that tolerates losing the race to another creator
#[derive(Debug)]
pub enum Created<K> {
    Created(K),
    AlreadyExists,
}

impl<K> Created<K> {
    pub fn is_new(&self) -> bool {
        matches!(self, Created::Created(_))
    }
}

pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 404)
}

pub fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 409)
}

/// Fetch a resource by name, mapping 404 to `None`
pub async fn get_opt<K>(api: &Api<K>, name: &str) -> Result<Option<K>>
where
    K: Resource + Clone + DeserializeOwned + Debug,
{
    match api.get(name).await {
        Ok(obj) => Ok(Some(obj)),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Create a resource, treating 409 as success without inspecting the existing object
#[instrument(skip(api, obj), fields(name = %obj.name_any()))]
pub async fn create_if_absent<K>(api: &Api<K>, obj: &K) -> Result<Created<K>>
where
    K: Resource + Clone + Serialize + DeserializeOwned + Debug,
{
    match api.create(&PostParams::default(), obj).await {
        Ok(created) => Ok(Created::Created(created)),
        Err(e) if is_already_exists(&e) => {
            debug!("{} already exists", obj.name_any());
            Ok(Created::AlreadyExists)
        }
        Err(e) => Err(e.into()),
    }
}
