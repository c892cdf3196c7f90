// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deciding whether a workload group has opted into chaos.

pub mod annotation;
pub mod resolver;
pub mod sink;

pub use annotation::is_opted_in;
pub use resolver::{CandidateResolver, Decision, Resolution};
pub use sink::{CandidateSink, TracingSink};

use crate::kubernetes::lister_for;
use crate::types::EngineContext;
use kube::Client;

/// Resolve chaos candidates for an engine using the lister bound to its kind
pub async fn check_annotation<'a, S: CandidateSink>(
    client: Client,
    resolver: &CandidateResolver<S>,
    annotation_key: &str,
    engine: &'a EngineContext,
) -> Resolution<'a> {
    match lister_for(client, engine.workload_kind) {
        Ok(lister) => resolver.resolve(lister.as_ref(), annotation_key, engine).await,
        Err(e) => Resolution {
            engine,
            outcome: Err(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::annotations::CHAOS;
    use crate::error::ChaosError;
    use crate::test_utils::{list_json, status_json, workload_json, MockService};
    use crate::types::WorkloadKind;

    #[tokio::test]
    async fn test_check_annotation_typed_kind() {
        let client = MockService::new()
            .on_get(
                "/apis/apps/v1/namespaces/shop/statefulsets",
                200,
                &list_json(
                    "apps/v1",
                    "StatefulSetList",
                    vec![
                        workload_json("db-0", "uid-1", &[(CHAOS, "true")]),
                        workload_json("db-1", "uid-2", &[]),
                        workload_json("db-2", "uid-3", &[(CHAOS, "false")]),
                    ],
                ),
            )
            .into_client();
        let ctx = EngineContext::new("shop", WorkloadKind::StatefulSet, "app=db");

        let resolution =
            check_annotation(client, &CandidateResolver::new(TracingSink), CHAOS, &ctx).await;

        assert_eq!(resolution.count(), Some(1));
    }

    #[tokio::test]
    async fn test_check_annotation_dynamic_kind_without_candidates() {
        let client = MockService::new()
            .on_get(
                "/apis/apps.openshift.io/v1/namespaces/shop/deploymentconfigs",
                200,
                &list_json(
                    "apps.openshift.io/v1",
                    "DeploymentConfigList",
                    vec![workload_json("frontend", "uid-1", &[])],
                ),
            )
            .into_client();
        let ctx = EngineContext::new("shop", WorkloadKind::DeploymentConfig, "app=frontend");

        let resolution =
            check_annotation(client, &CandidateResolver::new(TracingSink), CHAOS, &ctx).await;

        assert!(matches!(resolution.outcome, Err(ChaosError::NoChaosCandidate { .. })));
    }

    #[tokio::test]
    async fn test_check_annotation_listing_failed() {
        let client = MockService::new()
            .on_get(
                "/apis/apps/v1/namespaces/shop/deployments",
                401,
                &status_json(401, "Unauthorized", "Unauthorized"),
            )
            .into_client();
        let ctx = EngineContext::new("shop", WorkloadKind::Deployment, "app=nginx");

        let resolution =
            check_annotation(client, &CandidateResolver::new(TracingSink), CHAOS, &ctx).await;

        assert!(matches!(resolution.outcome, Err(ChaosError::ListingFailed { .. })));
        assert_eq!(resolution.engine, &ctx);
    }
}
