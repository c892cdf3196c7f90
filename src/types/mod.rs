// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data model: engine context, workload kinds and listed resources.

pub mod chaos_engine;
pub mod engine;
pub mod resource;

pub use chaos_engine::ChaosEngine;
pub use engine::{EngineContext, WorkloadKind};
pub use resource::ResourceDescriptor;
