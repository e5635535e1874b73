//! Demo data loaded into a fresh store.

use lumen_schema::{
    NewAiAssistant, NewAuthProvider, NewDatabase, NewFunction, NewMetric, NewProject,
    NewStorageBucket,
};
use serde_json::{Map, Value, json};

use super::envelope::ResourceCreate;
use super::memory::MemoryStore;
use super::traits::ChildCreate;

const DEMO_PROJECT_NAME: &str = "Demo Project";

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Inserts the demo project (id 1 on an empty store) and its children.
pub fn seed_demo(store: &mut MemoryStore) -> i64 {
    let project_id = store
        .create_project(NewProject {
            name: DEMO_PROJECT_NAME.to_string(),
            description: Some("Sample project created at startup".to_string()),
            status: "active".to_string(),
            region: "us-east-1".to_string(),
        })
        .id;

    let children: Vec<ResourceCreate> = vec![
        NewDatabase {
            name: "main".to_string(),
            connection_string: "postgresql://postgres@db.demo.lumen.local:5432/main".to_string(),
            status: "active".to_string(),
            extensions: vec!["pgvector".to_string(), "postgis".to_string()],
            metrics: object(json!({
                "connections": 12,
                "queriesPerMinute": 840,
                "storageUsedMb": 256
            })),
        }
        .into_create(project_id),
        NewAuthProvider {
            provider: "email".to_string(),
            enabled: true,
            config: object(json!({ "confirmEmail": true })),
        }
        .into_create(project_id),
        NewAuthProvider {
            provider: "google".to_string(),
            enabled: true,
            config: object(json!({ "clientId": "demo-google-client" })),
        }
        .into_create(project_id),
        NewAuthProvider {
            provider: "github".to_string(),
            enabled: false,
            config: Map::new(),
        }
        .into_create(project_id),
        NewStorageBucket {
            name: "avatars".to_string(),
            public: true,
            file_count: 128,
            total_size: 52_428_800,
        }
        .into_create(project_id),
        NewStorageBucket {
            name: "documents".to_string(),
            public: false,
            file_count: 42,
            total_size: 157_286_400,
        }
        .into_create(project_id),
        NewFunction {
            name: "hello-world".to_string(),
            runtime: "deno".to_string(),
            status: "deployed".to_string(),
            invocations: 1_523,
        }
        .into_create(project_id),
        NewFunction {
            name: "send-email".to_string(),
            runtime: "node".to_string(),
            status: "deployed".to_string(),
            invocations: 311,
        }
        .into_create(project_id),
        NewAiAssistant {
            name: "Support Bot".to_string(),
            model: "gpt-4o-mini".to_string(),
            config: object(json!({
                "systemPrompt": "You are a helpful assistant for the Lumen dashboard.",
                "temperature": 0.7
            })),
            active: true,
        }
        .into_create(project_id),
        NewMetric {
            metric_type: "cpu_usage".to_string(),
            value: 23.5,
            timestamp: None,
        }
        .into_create(project_id),
        NewMetric {
            metric_type: "memory_usage".to_string(),
            value: 61.2,
            timestamp: None,
        }
        .into_create(project_id),
        NewMetric {
            metric_type: "api_requests".to_string(),
            value: 18_240.0,
            timestamp: None,
        }
        .into_create(project_id),
    ];

    for create in children {
        store.create(create);
    }
    project_id
}
