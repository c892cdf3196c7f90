// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::annotations;
use anyhow::{bail, Result};
use std::env;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace to watch for ChaosEngines, all namespaces when unset
    pub watch_namespace: Option<String>,
    pub annotation_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let watch_namespace = lookup("WATCH_NAMESPACE").filter(|ns| !ns.is_empty());
        let annotation_key = lookup("CHAOS_ANNOTATION_KEY")
            .unwrap_or_else(|| annotations::CHAOS.to_string());

        if annotation_key.trim().is_empty() {
            bail!("CHAOS_ANNOTATION_KEY environment variable must not be empty");
        }

        Ok(Config {
            watch_namespace,
            annotation_key,
        })
    }
}
