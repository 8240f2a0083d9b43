// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reconcilers that converge the rgw resources.

pub mod rgw;

pub use rgw::RgwReconciler;
