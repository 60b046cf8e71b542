#![allow(dead_code)] // not every test file uses every helper

use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use std::net::SocketAddr;
use taskboard_server::config::Config;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::{postgres, testcontainers};

/// Test context holding a migrated database.
pub struct TestContext {
    // container is kept to ensure it's not dropped
    pub container: testcontainers::ContainerAsync<postgres::Postgres>,
    pub db: DatabaseConnection,
}

pub async fn setup_container() -> anyhow::Result<testcontainers::ContainerAsync<postgres::Postgres>>
{
    let container = postgres::Postgres::default().start().await?;
    Ok(container)
}

pub async fn setup_db(
    container: &testcontainers::ContainerAsync<postgres::Postgres>,
) -> anyhow::Result<DatabaseConnection> {
    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(5432).await?;
    let db_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);
    let db = Database::connect(&db_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn setup() -> anyhow::Result<TestContext> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let container = setup_container().await?;
    let db = setup_db(&container).await?;
    Ok(TestContext { container, db })
}

pub fn test_config() -> Config {
    Config {
        db_url: String::new(),
        port: 0,
        allowed_origins: vec!["http://localhost:3000".to_string()],
    }
}

/// Serves the full application on an ephemeral port and returns its base URL.
pub async fn spawn_app(db: DatabaseConnection) -> anyhow::Result<String> {
    let app = taskboard_server::web::create_app(db, &test_config())?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!("Test server stopped: {}", err);
        }
    });
    Ok(format!("http://{}", address))
}
