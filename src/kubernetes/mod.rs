// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes bindings for listing candidate workloads.

pub mod listers;

pub use listers::{lister_for, DynamicLister, ResourceLister, TypedLister};
