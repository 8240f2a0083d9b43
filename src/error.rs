// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use thiserror::Error;

/// The provisioning step that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Keyring,
    Service,
    Deployment,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Step::Keyring => "create rgw keyring",
            Step::Service => "start rgw service",
            Step::Deployment => "create rgw deployment",
        };
        f.write_str(step)
    }
}

#[derive(Error, Debug)]
pub enum RgwError {
    #[error("missing mons to start rgw")]
    MissingMonitors,

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to connect to cluster: {0}")]
    ConnectError(String),

    #[error("Failed to create keyring: {0}")]
    KeyringError(String),

    #[error("Invalid mon endpoints: {0}")]
    InvalidMonEndpoints(String),

    #[error("failed to {step}: {source}")]
    Step {
        step: Step,
        #[source]
        source: Box<RgwError>,
    },
}

impl RgwError {
    /// Wrap this error with the step that produced it
    pub fn in_step(self, step: Step) -> Self {
        RgwError::Step {
            step,
            source: Box::new(self),
        }
    }

    /// The failing step, if the error was raised by the reconciler
    pub fn step(&self) -> Option<Step> {
        match self {
            RgwError::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RgwError>;
