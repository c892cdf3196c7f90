// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing workloads by namespace and label selector.
//!
//! Typed kinds go through their k8s-openapi types, everything else through
//! `DynamicObject`. Both reduce items to a [`ResourceDescriptor`].

use crate::error::{ChaosError, Result};
use crate::types::{ResourceDescriptor, WorkloadKind};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{ApiResource, DynamicObject, ListParams},
    core::{GroupVersionKind, GroupVersionResource},
    Api, Client, Resource,
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Fetches the workloads of one kind matching a label selector
#[async_trait]
pub trait ResourceLister: Send + Sync {
    async fn list(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> std::result::Result<Vec<ResourceDescriptor>, kube::Error>;
}

fn list_params(label_selector: &str) -> ListParams {
    if label_selector.is_empty() {
        ListParams::default()
    } else {
        ListParams::default().labels(label_selector)
    }
}

/// Lister over a typed, namespaced API such as `Api<Deployment>`
pub struct TypedLister<K> {
    client: Client,
    _kind: PhantomData<fn() -> K>,
}

impl<K> TypedLister<K> {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K> ResourceLister for TypedLister<K>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug + Send + Sync + 'static,
    K::DynamicType: Default,
{
    #[instrument(skip(self))]
    async fn list(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> std::result::Result<Vec<ResourceDescriptor>, kube::Error> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&list_params(label_selector)).await?;

        debug!("Listed {} items", list.items.len());
        Ok(list
            .items
            .iter()
            .map(|item| ResourceDescriptor::from_meta(item.meta()))
            .collect())
    }
}

/// Lister over the dynamic API, addressed by group, version and resource
pub struct DynamicLister {
    client: Client,
    resource: ApiResource,
}

impl DynamicLister {
    pub fn new(client: Client, gvr: &GroupVersionResource, kind: &str) -> Self {
        let gvk = GroupVersionKind::gvk(&gvr.group, &gvr.version, kind);
        Self {
            client,
            resource: ApiResource::from_gvk_with_plural(&gvk, &gvr.resource),
        }
    }
}

#[async_trait]
impl ResourceLister for DynamicLister {
    #[instrument(skip(self))]
    async fn list(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> std::result::Result<Vec<ResourceDescriptor>, kube::Error> {
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &self.resource);
        let list = api.list(&list_params(label_selector)).await?;

        debug!("Listed {} {}", list.items.len(), self.resource.plural);
        Ok(list
            .items
            .iter()
            .map(|item| ResourceDescriptor::from_meta(&item.metadata))
            .collect())
    }
}

/// Pick the lister binding for a workload kind
pub fn lister_for(client: Client, kind: WorkloadKind) -> Result<Box<dyn ResourceLister>> {
    let lister: Box<dyn ResourceLister> = match kind {
        WorkloadKind::Deployment => Box::new(TypedLister::<Deployment>::new(client)),
        WorkloadKind::StatefulSet => Box::new(TypedLister::<StatefulSet>::new(client)),
        WorkloadKind::DaemonSet => Box::new(TypedLister::<DaemonSet>::new(client)),
        WorkloadKind::DeploymentConfig | WorkloadKind::Rollout => {
            let gvr = kind
                .dynamic_resource()
                .ok_or_else(|| ChaosError::UnsupportedKind(kind.to_string()))?;
            Box::new(DynamicLister::new(client, &gvr, kind.api_kind()))
        }
    };
    Ok(lister)
}
