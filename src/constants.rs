// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys read by the chaos gate
pub mod annotations {
    /// When set to "true", marks a workload as a chaos candidate
    pub const CHAOS: &str = "litmuschaos.io/chaos";
    /// The only value accepted as an opt-in
    pub const ENABLED_VALUE: &str = "true";
}

/// The operator name used in logs and field managers
pub const OPERATOR_NAME: &str = "chaos-gate";

/// Requeue delay for engines that could not be turned into a context
pub const INVALID_ENGINE_REQUEUE_SECS: u64 = 60;
