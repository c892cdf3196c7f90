// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ChaosEngine reconciler - runs the chaos candidate gate for each engine.

use crate::candidates::{check_annotation, CandidateResolver, TracingSink};
use crate::config::Config;
use crate::constants::INVALID_ENGINE_REQUEUE_SECS;
use crate::error::{ChaosError, Result};
use crate::types::{ChaosEngine, EngineContext};
use futures::StreamExt;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct ChaosEngineReconciler {
    client: Client,
    config: Config,
    resolver: CandidateResolver<TracingSink>,
}

impl ChaosEngineReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            config,
            resolver: CandidateResolver::new(TracingSink),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let engines: Api<ChaosEngine> = match self.config.watch_namespace.as_deref() {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let context = Arc::new(self);

        Controller::new(engines, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok((engine, action)) => {
                        debug!("Reconciled chaos engine {}: {:?}", engine, action)
                    }
                    Err(e) => warn!("Chaos engine reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(engine: Arc<ChaosEngine>, ctx: Arc<ChaosEngineReconciler>) -> Result<Action> {
    let name = engine.name_any();
    let namespace = engine.namespace().unwrap_or_default();

    if !engine.annotation_check_enabled() {
        debug!(
            "ChaosEngine {}/{} has annotationCheck disabled, skipping",
            namespace, name
        );
        return Ok(Action::await_change());
    }

    let target = EngineContext::from_engine(&engine)?;
    let resolution = check_annotation(
        ctx.client.clone(),
        &ctx.resolver,
        &ctx.config.annotation_key,
        &target,
    )
    .await;

    match resolution.outcome {
        Ok(count) => info!(
            "ChaosEngine {}/{}: {} chaos candidate(s) for {} {} in {}",
            namespace,
            name,
            count,
            resolution.engine.workload_kind,
            resolution.engine.label_selector,
            resolution.engine.namespace
        ),
        Err(e) => warn!(
            "ChaosEngine {}/{} is not allowed to proceed: {}",
            namespace, name, e
        ),
    }

    // A failed gate is not retried, the next engine change re-runs it
    Ok(Action::await_change())
}

fn error_policy(
    _engine: Arc<ChaosEngine>,
    error: &ChaosError,
    _ctx: Arc<ChaosEngineReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(Duration::from_secs(INVALID_ENGINE_REQUEUE_SECS))
}
