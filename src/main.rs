// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chaos_gate::config::Config;
use chaos_gate::constants::OPERATOR_NAME;
use chaos_gate::reconcilers::ChaosEngineReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting {}", OPERATOR_NAME);

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, annotation_key={}",
        config.watch_namespace.as_deref().unwrap_or("<all>"),
        config.annotation_key
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    ChaosEngineReconciler::new(client, config).run().await?;

    // The controller stream only ends on shutdown
    warn!("ChaosEngine reconciler stopped");
    Ok(())
}
