// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::engine::WorkloadKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChaosError {
    #[error("error while listing {kind}s in namespace {namespace} with matching labels {selector}: {source}")]
    ListingFailed {
        kind: WorkloadKind,
        namespace: String,
        selector: String,
        #[source]
        source: kube::Error,
    },

    #[error("no {kind}s in namespace {namespace} with matching labels {selector}")]
    EmptyMatch {
        kind: WorkloadKind,
        namespace: String,
        selector: String,
    },

    #[error("no {kind}s chaos-candidate found in namespace {namespace} with matching labels {selector}")]
    NoChaosCandidate {
        kind: WorkloadKind,
        namespace: String,
        selector: String,
    },

    #[error("Unsupported workload kind: {0}")]
    UnsupportedKind(String),

    #[error("Invalid chaos engine: {0}")]
    InvalidEngine(String),
}

pub type Result<T> = std::result::Result<T, ChaosError>;
