// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Chaos candidate resolution.
//!
//! Lists the workloads selected by an [`EngineContext`], counts the ones
//! whose opt-in annotation is set and turns the result into a [`Decision`].
//! A call either fails while listing, finds nothing to list, finds no
//! opted-in workload, or resolves with a non-zero count.

use crate::candidates::annotation::{annotation_value, is_opted_in};
use crate::candidates::sink::CandidateSink;
use crate::error::{ChaosError, Result};
use crate::kubernetes::listers::ResourceLister;
use crate::types::{EngineContext, ResourceDescriptor, WorkloadKind};
use tracing::{debug, instrument};

/// Number of chaos candidates, or why there are none
pub type Decision = Result<usize>;

/// Outcome of one resolution, handed back with the untouched context
#[derive(Debug)]
pub struct Resolution<'a> {
    pub engine: &'a EngineContext,
    pub outcome: Decision,
}

impl Resolution<'_> {
    pub fn count(&self) -> Option<usize> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Stateless resolver; every call lists afresh
pub struct CandidateResolver<S> {
    sink: S,
}

impl<S: CandidateSink> CandidateResolver<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[instrument(
        skip(self, lister, engine),
        fields(
            kind = %engine.workload_kind,
            namespace = %engine.namespace,
            selector = %engine.label_selector
        )
    )]
    pub async fn resolve<'a, L>(
        &self,
        lister: &L,
        annotation_key: &str,
        engine: &'a EngineContext,
    ) -> Resolution<'a>
    where
        L: ResourceLister + ?Sized,
    {
        let outcome = self.decide(lister, annotation_key, engine).await;
        Resolution { engine, outcome }
    }

    async fn decide<L>(&self, lister: &L, annotation_key: &str, engine: &EngineContext) -> Decision
    where
        L: ResourceLister + ?Sized,
    {
        let kind = engine.workload_kind;

        let items = lister
            .list(&engine.namespace, &engine.label_selector)
            .await
            .map_err(|source| ChaosError::ListingFailed {
                kind,
                namespace: engine.namespace.clone(),
                selector: engine.label_selector.clone(),
                source,
            })?;

        if items.is_empty() {
            return Err(ChaosError::EmptyMatch {
                kind,
                namespace: engine.namespace.clone(),
                selector: engine.label_selector.clone(),
            });
        }

        let count = self.count_candidates(kind, &items, annotation_key);
        debug!("{} of {} {}s opted into chaos", count, items.len(), kind);

        if count == 0 {
            return Err(ChaosError::NoChaosCandidate {
                kind,
                namespace: engine.namespace.clone(),
                selector: engine.label_selector.clone(),
            });
        }

        Ok(count)
    }

    /// Count opted-in workloads, reporting each one to the sink
    pub fn count_candidates(
        &self,
        kind: WorkloadKind,
        items: &[ResourceDescriptor],
        annotation_key: &str,
    ) -> usize {
        items
            .iter()
            .filter(|item| is_opted_in(annotation_value(&item.annotations, annotation_key)))
            .inspect(|item| self.sink.chaos_candidate(kind, &item.name, &item.uid))
            .count()
    }
}
