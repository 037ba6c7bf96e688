//! Explorer state: lookup snapshot reuse, lazy organization fetches, and the
//! export operation end to end.

mod common;

use avoimuus_lib::export::ExportOutcome;
use avoimuus_lib::Explorer;
use common::*;
use std::sync::Arc;

#[tokio::test]
async fn lookup_is_built_once_per_registry_snapshot() {
    let api = StaticApi::new(
        vec![registry_item(7, fi_only(target_info("Matti Meikäläinen", "VM", None)))],
        Vec::new(),
        Vec::new(),
    );
    let explorer = Explorer::new(api.clone());

    let first = explorer.target_lookup().await.unwrap();
    let second = explorer.target_lookup().await.unwrap();

    assert_eq!(api.target_fetch_count(), 1);
    assert!(Arc::ptr_eq(&first, &second), "same snapshot, same table");
    assert_eq!(first.get(7).unwrap().organization, "VM");
}

#[tokio::test]
async fn organizations_are_fetched_only_on_first_access() {
    let api = StaticApi::new(
        Vec::new(),
        vec![activity(1, "Yritys Oy", Vec::new())],
        vec![organization(1, "Yritys Oy", "1234567-8")],
    );
    let explorer = Explorer::new(api.clone());

    explorer.activities().await.unwrap();
    assert_eq!(api.organization_fetch_count(), 0, "nothing asked for them yet");

    let orgs = explorer.organizations().await.unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(api.organization_fetch_count(), 1);

    explorer.organizations().await.unwrap();
    assert_eq!(api.organization_fetch_count(), 1, "second access is cached");
}

#[tokio::test]
async fn export_writes_filtered_rows_to_disk() {
    let api = StaticApi::new(
        vec![registry_item(7, fi_only(target_info("Matti Meikäläinen", "VM", None)))],
        vec![
            activity(
                1,
                "Yritys Oy",
                vec![topic(Some("CER-direktiivi"), None, vec![target_by_id(7)])],
            ),
            activity(2, "Toinen Oy", vec![topic(Some("Verotus"), None, Vec::new())]),
        ],
        Vec::new(),
    );
    let explorer = Explorer::new(api.clone());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avoimuus-export.csv");
    let outcome = explorer.export_activities("cer", &path).await.unwrap();

    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: path.clone(),
            rows: 1
        }
    );
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Matti Meikäläinen (VM)"));
}

#[tokio::test]
async fn export_of_empty_filter_set_is_a_no_op() {
    let api = StaticApi::new(
        Vec::new(),
        vec![activity(1, "Yritys Oy", Vec::new())],
        Vec::new(),
    );
    let explorer = Explorer::new(api.clone());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avoimuus-export.csv");
    let outcome = explorer
        .export_activities("no-such-company", &path)
        .await
        .unwrap();

    assert_eq!(outcome, ExportOutcome::SkippedEmpty);
    assert!(!path.exists(), "no file is written for an empty set");
}

#[tokio::test]
async fn invalidate_all_forces_refetch() {
    let api = StaticApi::new(
        Vec::new(),
        vec![activity(1, "Yritys Oy", Vec::new())],
        Vec::new(),
    );
    let explorer = Explorer::new(api.clone());

    explorer.activities().await.unwrap();
    explorer.activities().await.unwrap();
    assert_eq!(api.activity_fetch_count(), 1);

    explorer.invalidate_all();
    explorer.activities().await.unwrap();
    assert_eq!(api.activity_fetch_count(), 2);
}
