// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Engine context and the workload kinds a chaos engine can target.

use crate::error::{ChaosError, Result};
use crate::types::chaos_engine::ChaosEngine;
use kube::core::GroupVersionResource;
use kube::ResourceExt;
use std::fmt;
use std::str::FromStr;

/// Workload kinds that can be checked for chaos candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
    DaemonSet,
    DeploymentConfig,
    Rollout,
}

impl WorkloadKind {
    pub const ALL: [WorkloadKind; 5] = [
        WorkloadKind::Deployment,
        WorkloadKind::StatefulSet,
        WorkloadKind::DaemonSet,
        WorkloadKind::DeploymentConfig,
        WorkloadKind::Rollout,
    ];

    /// Lowercase name as written in a ChaosEngine's `appkind`
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "deployment",
            WorkloadKind::StatefulSet => "statefulset",
            WorkloadKind::DaemonSet => "daemonset",
            WorkloadKind::DeploymentConfig => "deploymentconfig",
            WorkloadKind::Rollout => "rollout",
        }
    }

    /// Kubernetes `kind` of the listed objects
    pub fn api_kind(&self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::StatefulSet => "StatefulSet",
            WorkloadKind::DaemonSet => "DaemonSet",
            WorkloadKind::DeploymentConfig => "DeploymentConfig",
            WorkloadKind::Rollout => "Rollout",
        }
    }

    /// Resource coordinates for kinds without a typed API in k8s-openapi.
    /// Returns `None` for kinds listed through a typed client.
    pub fn dynamic_resource(&self) -> Option<GroupVersionResource> {
        match self {
            WorkloadKind::DeploymentConfig => Some(GroupVersionResource::gvr(
                "apps.openshift.io",
                "v1",
                "deploymentconfigs",
            )),
            WorkloadKind::Rollout => Some(GroupVersionResource::gvr(
                "argoproj.io",
                "v1alpha1",
                "rollouts",
            )),
            _ => None,
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadKind {
    type Err = ChaosError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        WorkloadKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ChaosError::UnsupportedKind(s.to_string()))
    }
}

/// Identifies the target workload group for one resolution.
/// Read-only to the resolver and handed back unchanged with every decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineContext {
    pub namespace: String,
    pub workload_kind: WorkloadKind,
    pub label_selector: String,
}

impl EngineContext {
    pub fn new(
        namespace: impl Into<String>,
        workload_kind: WorkloadKind,
        label_selector: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            workload_kind,
            label_selector: label_selector.into(),
        }
    }

    /// Build the context from a ChaosEngine's application info.
    /// The application namespace defaults to the engine's own namespace.
    pub fn from_engine(engine: &ChaosEngine) -> Result<Self> {
        let engine_name = engine.name_any();
        let Some(appinfo) = engine.spec.appinfo.as_ref() else {
            return Err(ChaosError::InvalidEngine(format!(
                "ChaosEngine {} has no appinfo",
                engine_name
            )));
        };

        let Some(appkind) = appinfo.appkind.as_deref() else {
            return Err(ChaosError::InvalidEngine(format!(
                "ChaosEngine {} has no appinfo.appkind",
                engine_name
            )));
        };

        let namespace = appinfo
            .appns
            .clone()
            .filter(|ns| !ns.is_empty())
            .or_else(|| engine.namespace())
            .ok_or_else(|| {
                ChaosError::InvalidEngine(format!(
                    "ChaosEngine {} has no application namespace",
                    engine_name
                ))
            })?;

        Ok(Self::new(
            namespace,
            appkind.parse()?,
            appinfo.applabel.clone().unwrap_or_default(),
        ))
    }
}
