// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::WorkloadKind;
use tracing::info;

/// Receives one event per opted-in workload found during resolution
pub trait CandidateSink: Send + Sync {
    fn chaos_candidate(&self, kind: WorkloadKind, name: &str, uid: &str);
}

/// Emits candidates as structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl CandidateSink for TracingSink {
    fn chaos_candidate(&self, kind: WorkloadKind, name: &str, uid: &str) {
        info!(kind = %kind, name = %name, uid = %uid, "chaos candidate found");
    }
}

impl<S: CandidateSink + ?Sized> CandidateSink for &S {
    fn chaos_candidate(&self, kind: WorkloadKind, name: &str, uid: &str) {
        (**self).chaos_candidate(kind, name, uid)
    }
}
