// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use backr_core::Rule;

fn project(name: &str) -> Project {
    Project::new(name, vec![Rule::new(3, 1)])
}

#[tokio::test]
async fn in_memory_store_round_trips() {
    let store = InMemoryProjectStore::new();
    store.save(&project("alpha")).await.unwrap();
    store.save(&project("beta")).await.unwrap();

    let mut names: Vec<String> = store.list().await.unwrap().into_iter().map(|p| p.name).collect();
    names.sort();
    assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);

    assert!(store.get_by_name("alpha").await.unwrap().is_some());
    assert!(store.get_by_name("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn in_memory_store_save_overwrites_by_name() {
    let store = InMemoryProjectStore::new();
    store.save(&project("alpha")).await.unwrap();
    let mut updated = project("alpha");
    updated.rules.push(Rule::new(1, 7));
    store.save(&updated).await.unwrap();

    let found = store.get_by_name("alpha").await.unwrap().unwrap();
    assert_eq!(found.rules.len(), 2);
}

#[tokio::test]
async fn sled_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let db = sled::open(dir.path()).unwrap();
    let store = SledProjectStore::new(&db).unwrap();

    store.save(&project("alpha")).await.unwrap();
    let found = store.get_by_name("alpha").await.unwrap().unwrap();
    assert_eq!(found.name, "alpha");
    assert_eq!(store.list().await.unwrap().len(), 1);
}
