// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(group = "litmuschaos.io", version = "v1alpha1", kind = "ChaosEngine")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct ChaosEngineSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appinfo: Option<ApplicationParams>,
    /// "true" or "false"; the check runs unless this is "false"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_check: Option<String>,
}

/// Target application of a chaos engine
#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
pub struct ApplicationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appkind: Option<String>,
}

impl ChaosEngine {
    /// Whether targets must opt in through their annotation before chaos runs
    pub fn annotation_check_enabled(&self) -> bool {
        self.spec
            .annotation_check
            .as_deref()
            .map_or(true, |v| !v.trim().eq_ignore_ascii_case("false"))
    }
}
