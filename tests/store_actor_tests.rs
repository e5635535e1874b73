use lumen::LumenError;
use lumen::store::ResourceKind;
use lumen_schema::{
    AuthProvider, AuthProviderPatch, NewDatabase, NewMetric, NewProject, Project, ProjectPatch,
    StorageBucket,
};
use serde_json::Map;

fn new_database(name: &str) -> NewDatabase {
    NewDatabase {
        name: name.to_string(),
        connection_string: format!("postgresql://localhost/{name}"),
        status: "active".to_string(),
        extensions: Vec::new(),
        metrics: Map::new(),
    }
}

#[tokio::test]
async fn handle_round_trips_typed_records() {
    let store = lumen::store::spawn(false).await.expect("spawn store");

    let project = store
        .create_project(NewProject::named("gamma"))
        .await
        .expect("create project");
    assert_eq!(project.id, 1);

    let db = store
        .create_for_project(project.id, new_database("analytics"))
        .await
        .expect("create database");
    assert_eq!(db.project_id, project.id);

    let listed = store
        .list_for_project::<lumen_schema::Database>(project.id)
        .await
        .expect("list databases");
    assert_eq!(listed, vec![db.clone()]);

    let fetched: Project = store.get(project.id).await.expect("get project");
    assert_eq!(fetched, project);

    let renamed = store
        .update(
            project.id,
            ProjectPatch {
                name: Some("gamma-2".to_string()),
                ..ProjectPatch::default()
            },
        )
        .await
        .expect("update project");
    assert_eq!(renamed.name, "gamma-2");
    assert_eq!(renamed.region, project.region);
}

#[tokio::test]
async fn missing_records_map_to_not_found() {
    let store = lumen::store::spawn(true).await.expect("spawn store");

    let err = store
        .get::<StorageBucket>(404)
        .await
        .expect_err("bucket 404 must be missing");
    assert!(matches!(
        err,
        LumenError::NotFound {
            kind: ResourceKind::StorageBucket,
            id: 404
        }
    ));

    let err = store
        .update(
            9,
            AuthProviderPatch {
                enabled: Some(true),
                config: None,
            },
        )
        .await
        .expect_err("auth provider 9 must be missing");
    assert!(matches!(err, LumenError::NotFound { id: 9, .. }));

    store.delete_project(1).await.expect("delete seeded project");
    assert!(matches!(
        store.delete_project(1).await,
        Err(LumenError::NotFound { .. })
    ));

    // Children of a deleted project stay reachable.
    let providers = store
        .list_for_project::<AuthProvider>(1)
        .await
        .expect("list auth");
    assert_eq!(providers.len(), 3);
}

#[tokio::test]
async fn ids_are_per_kind_and_sequential_under_concurrency() {
    let store = lumen::store::spawn(false).await.expect("spawn store");

    let mut tasks = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .create_for_project(
                    1,
                    NewMetric {
                        metric_type: "api_requests".to_string(),
                        value: f64::from(i),
                        timestamp: None,
                    },
                )
                .await
                .expect("create metric")
                .id
        }));
    }
    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.expect("task panicked"));
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=50).collect::<Vec<i64>>());

    // Another kind starts at 1 again.
    let db = store
        .create_for_project(1, new_database("main"))
        .await
        .expect("create database");
    assert_eq!(db.id, 1);
}
