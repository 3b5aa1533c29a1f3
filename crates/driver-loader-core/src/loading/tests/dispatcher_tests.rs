#![cfg(test)]

use std::sync::Arc;

use super::common::{coordinates, driver, planner_over};
use crate::loading::{DispatchStatus, InstallDispatcher, InstallMode};
use crate::runtime::{InMemoryPluginRuntime, InstallError, PluginId};

#[tokio::test]
async fn test_dispatch_installs_unloaded_candidates() {
    let runtime = Arc::new(InMemoryPluginRuntime::new());
    let dispatcher = InstallDispatcher::new(runtime.clone());
    let candidates = vec![driver(1, "mysql", "8.0.21"), driver(2, "hive", "2.3.7")];

    let report = dispatcher.dispatch(&candidates).await;

    assert_eq!(report.installed_count(), 2);
    assert_eq!(report.failure_count(), 0);
    assert_eq!(coordinates(runtime.installed().await.iter()), vec!["mysql@8.0.21", "hive@2.3.7"]);
    assert_eq!(
        runtime.loaded().await,
        vec![PluginId::from("mysql@8.0.21"), PluginId::from("hive@2.3.7")]
    );
}

#[tokio::test]
async fn test_already_loaded_is_skipped_by_substring() {
    let runtime = Arc::new(InMemoryPluginRuntime::new().with_loaded(["driver-A-plugin@v1"]));
    let dispatcher = InstallDispatcher::new(runtime.clone());
    let candidates = vec![driver(2, "A", "v2")];

    let report = dispatcher.dispatch(&candidates).await;

    assert_eq!(report.installed_count(), 0);
    assert_eq!(report.skipped_count(), 1);
    match &report.records()[0].status {
        DispatchStatus::AlreadyLoaded(id) => assert_eq!(id.as_str(), "driver-A-plugin@v1"),
        other => panic!("Expected AlreadyLoaded, got {:?}", other),
    }
    assert!(runtime.installed().await.is_empty());
}

#[tokio::test]
async fn test_pinned_install_bypasses_loaded_check() {
    let runtime = Arc::new(InMemoryPluginRuntime::new().with_loaded(["A@v1"]));
    let dispatcher = InstallDispatcher::new(runtime.clone());
    let descriptors = vec![driver(1, "A", "v1"), driver(2, "A", "v2")];

    let guarded = planner_over(&descriptors).plan("A").await.expect("plan should succeed");
    let pinned = planner_over(&descriptors).plan("A@v2").await.expect("plan should succeed");

    let guarded_report = dispatcher.execute(&guarded).await;
    assert_eq!(guarded_report.skipped_count(), 1);
    assert!(runtime.installed().await.is_empty());

    let calls_before = runtime.list_calls();
    let pinned_report = dispatcher.execute(&pinned).await;
    assert_eq!(pinned_report.installed_count(), 1);
    assert_eq!(pinned_report.records()[0].mode, InstallMode::Pinned);
    assert_eq!(runtime.list_calls(), calls_before, "Pinned installs never query the loaded list");
    assert_eq!(coordinates(runtime.installed().await.iter()), vec!["A@v2"]);
}

#[tokio::test]
async fn test_failure_does_not_stop_batch() {
    let runtime = Arc::new(InMemoryPluginRuntime::new().fail_installs_for("mysql"));
    let dispatcher = InstallDispatcher::new(runtime.clone());
    let candidates = vec![driver(1, "mysql", "8.0.21"), driver(2, "hive", "2.3.7")];

    let report = dispatcher.dispatch(&candidates).await;

    assert_eq!(report.len(), 2);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.installed_count(), 1);
    let failed = report.failed().next().expect("one failure");
    assert_eq!(failed.descriptor.driver_code, "mysql");
    assert!(matches!(failed.status, DispatchStatus::Failed(InstallError::Rejected { .. })));
    assert_eq!(coordinates(runtime.installed().await.iter()), vec!["hive@2.3.7"]);
}

#[tokio::test]
async fn test_loaded_list_is_requeried_per_candidate() {
    let runtime = Arc::new(InMemoryPluginRuntime::new());
    let dispatcher = InstallDispatcher::new(runtime.clone());
    // Second candidate shares its code with the first; the first install must be seen
    let candidates = vec![driver(1, "mysql", "8.0.21"), driver(2, "mysql", "5.1.49")];

    let report = dispatcher.dispatch(&candidates).await;

    assert_eq!(runtime.list_calls(), 2);
    assert_eq!(report.installed_count(), 1);
    assert_eq!(report.skipped_count(), 1);
}

#[tokio::test]
async fn test_runtime_lookup_failure_is_per_candidate() {
    let runtime = Arc::new(InMemoryPluginRuntime::new().unavailable());
    let dispatcher = InstallDispatcher::new(runtime.clone());
    let candidates = vec![driver(1, "mysql", "8.0.21"), driver(2, "hive", "2.3.7")];

    let report = dispatcher.dispatch(&candidates).await;

    assert_eq!(report.failure_count(), 2);
    assert!(report
        .failed()
        .all(|r| matches!(r.status, DispatchStatus::Failed(InstallError::Runtime(_)))));
    assert!(runtime.installed().await.is_empty());
}

#[tokio::test]
async fn test_empty_batch() {
    let dispatcher = InstallDispatcher::new(Arc::new(InMemoryPluginRuntime::new()));
    let report = dispatcher.dispatch(&[]).await;
    assert!(report.is_empty());
}
