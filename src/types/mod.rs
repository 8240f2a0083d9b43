// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Value types describing the target rgw deployment and the ceph cluster it fronts.

pub mod cluster;

pub use cluster::{ClusterConfig, ClusterMembership};
