// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use backr_core::AlertLevel;
use std::collections::BTreeMap;

fn record(now: DateTime<Utc>) -> NotificationRecord {
    NotificationRecord {
        statement: ProjectErrorStatement {
            project_name: "proj".to_string(),
            count: 1,
            reasons: BTreeMap::new(),
            max_level: AlertLevel::Warning,
        },
        created_at: now,
        sent_at: now,
    }
}

#[tokio::test]
async fn in_memory_store_round_trips() {
    let store = InMemoryNotificationStore::new();
    let now = Utc::now();
    store.save("fp1", &record(now)).await.unwrap();

    let found = store.get("fp1").await.unwrap().unwrap();
    assert_eq!(found.created_at, now);
    assert!(store.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn sled_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let db = sled::open(dir.path()).unwrap();
    let store = SledNotificationStore::new(&db).unwrap();

    let now = Utc::now();
    store.save("fp1", &record(now)).await.unwrap();
    let found = store.get("fp1").await.unwrap().unwrap();
    assert_eq!(found.statement.project_name, "proj");
}
