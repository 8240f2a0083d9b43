// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name shared by the rgw secret, service and deployment
pub const APP_NAME: &str = "rgw";

/// Key in the rgw secret holding the keyring text
pub const KEYRING_KEY: &str = "keyring";

/// Label keys applied to every rook resource
pub mod labels {
    pub const APP: &str = "app";
    pub const CLUSTER: &str = "rook_cluster";
}

/// Secret type for rook-managed secrets
pub const ROOK_SECRET_TYPE: &str = "kubernetes.io/rook";

/// Default directory for rook scratch data inside the pod
pub const DATA_DIR: &str = "/var/lib/rook";
/// Name of the emptyDir volume mounted at the data dir
pub const DATA_DIR_VOLUME: &str = "rook-data";

/// Image repository for rookd
pub const IMAGE_REPO: &str = "quay.io/rook/rookd";

/// Object gateway settings
pub mod rgw {
    pub const PORT: i32 = 53390;
    pub const DNS_NAME: &str = "rook-rgw";
    /// Ceph auth entity for the gateway
    pub const ENTITY: &str = "client.radosgw.gateway";
    /// Seconds to wait before starting rookd, the pod network is not always ready
    pub const STARTUP_DELAY_SECS: u64 = 5;
}

/// Secrets published by the mon component
pub mod mon {
    pub const SECRET_NAME: &str = "mon";
    pub const MON_SECRET_KEY: &str = "mon-secret";
    pub const ADMIN_SECRET_KEY: &str = "admin-secret";
}

/// Retry configuration for the outer control loop in main
pub mod retry {
    /// Initial delay in seconds between attempts
    pub const INTERVAL_SECS: u64 = 5;
    /// Maximum delay in seconds (exponential backoff cap)
    pub const MAX_INTERVAL_SECS: u64 = 60;
}
