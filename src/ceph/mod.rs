// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Administrative access to the ceph cluster and mon helpers.

pub mod cli;
pub mod keyring;
pub mod mon;

pub use cli::CephCliConnector;
pub use keyring::create_keyring;

use crate::error::Result;
use crate::types::ClusterMembership;
use async_trait::async_trait;
use std::ops::Deref;

/// Opens administrative sessions against a ceph cluster
#[async_trait]
pub trait AdminConnector: Send + Sync {
    type Session: AdminSession;

    async fn connect(&self, membership: &ClusterMembership) -> Result<Self::Session>;
}

/// An open administrative session.
///
/// `shutdown` must be safe to call on a session that failed mid-operation.
#[async_trait]
pub trait AdminSession: Send + Sync {
    /// Get or create the auth key for `entity` with the given capability pairs
    async fn auth_get_or_create_key(&self, entity: &str, caps: &[(&str, &str)]) -> Result<String>;

    fn shutdown(&mut self);
}

/// Owns a session and shuts it down when dropped
pub struct SessionGuard<S: AdminSession> {
    session: S,
}

impl<S: AdminSession> SessionGuard<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }
}

impl<S: AdminSession> Deref for SessionGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S: AdminSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        self.session.shutdown();
    }
}

/// Connect to the cluster and hand back a guard that always releases the session
pub async fn connect_as_admin<C: AdminConnector>(
    connector: &C,
    membership: &ClusterMembership,
) -> Result<SessionGuard<C::Session>> {
    let session = connector.connect(membership).await?;
    Ok(SessionGuard::new(session))
}
