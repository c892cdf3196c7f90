// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Opt-in annotation evaluation.
//!
//! A workload is a chaos candidate only when its annotation value is the
//! exact string `"true"`. Matching is case-sensitive and nothing is trimmed;
//! any other value, including a missing annotation, means "not enabled".

use crate::constants::annotations::ENABLED_VALUE;
use std::collections::BTreeMap;

/// Check if an annotation value opts the workload into chaos
pub fn is_opted_in(value: &str) -> bool {
    value == ENABLED_VALUE
}

/// Read the value stored under `key`, treating a missing key as empty
pub fn annotation_value<'a>(annotations: &'a BTreeMap<String, String>, key: &str) -> &'a str {
    annotations.get(key).map(String::as_str).unwrap_or_default()
}
