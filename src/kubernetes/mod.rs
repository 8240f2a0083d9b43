// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for idempotent resource creation.

pub mod resources;

pub use resources::{create_if_absent, get_opt, is_already_exists, is_not_found, Created};
