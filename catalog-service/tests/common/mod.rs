use catalog_service::config::{CatalogConfig, MongoConfig};
use catalog_service::services::MongoDb;
use catalog_service::startup::Application;
use shop_core::config::Config as CoreConfig;
use std::time::Duration;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("catalog_test_{}", Uuid::new_v4());

        let config = CatalogConfig {
            common: CoreConfig { port: 0 },
            mongodb: MongoConfig {
                uri: test_mongodb_uri(),
                database: db_name.clone(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait until the liveness route answers.
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&format!("{}/", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Cleanup test database after test completes.
    pub async fn cleanup(&self) {
        self.db
            .database()
            .drop(None)
            .await
            .expect("Failed to drop test database");
    }
}

/// Store connections stay lazy, so tests that never touch the store run fine
/// without a local MongoDB. The short timeouts keep the ones that do from
/// hanging when it is missing.
fn test_mongodb_uri() -> String {
    std::env::var("TEST_MONGODB_URI").unwrap_or_else(|_| {
        "mongodb://localhost:27017/?serverSelectionTimeoutMS=2000&connectTimeoutMS=2000".to_string()
    })
}
