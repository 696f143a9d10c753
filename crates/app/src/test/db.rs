//! Throwaway databases inside a shared Postgres container.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

use crate::database;

const USER: &str = "salesboard_test";
const PASSWORD: &str = "salesboard_test_password";

/// Container plus its server URL, resolved once so later tests never talk
/// to the Docker API from their own runtimes.
struct SharedPostgres {
    _container: ContainerAsync<PostgresImage>,
    server_url: String,
}

/// Started on first use and shared by every test in the binary.
static POSTGRES: Lazy<OnceCell<SharedPostgres>> = Lazy::new(OnceCell::new);

static NEXT_DATABASE: AtomicU64 = AtomicU64::new(0);

async fn start_postgres() -> SharedPostgres {
    let container = PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .with_tag("16-alpine")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    SharedPostgres {
        _container: container,
        server_url: format!("postgresql://{USER}:{PASSWORD}@{host}:{port}"),
    }
}

async fn server_url() -> &'static str {
    &POSTGRES.get_or_init(start_postgres).await.server_url
}

/// A freshly migrated database owned by one test.
///
/// Each test gets its own database, so service methods can commit normally
/// without leaking state into other tests. Databases are left for the
/// container to discard when the test binary exits.
#[derive(Debug, Clone)]
pub struct TestDb {
    pub pool: PgPool,
    pub name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let name = format!(
            "salesboard_test_{}_{}",
            std::process::id(),
            NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
        );

        let server_url = server_url().await;

        let mut conn = PgConnection::connect(&format!("{server_url}/postgres"))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = database::connect(&format!("{server_url}/{name}"))
            .await
            .expect("Failed to connect to test database");

        database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrated_database_has_empty_transactions_table() {
        let test_db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_transactions")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to count transactions");

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn databases_are_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        assert_ne!(first.name, second.name);

        sqlx::query(
            "INSERT INTO product_transactions \
             (uuid, id, title, description, price, category, date_of_sale, sold) \
             VALUES ('0190a3c4-0000-7000-8000-000000000001', 1, 't', 'd', 1, 'c', now(), true)",
        )
        .execute(first.pool())
        .await
        .expect("Failed to insert into first database");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_transactions")
            .fetch_one(second.pool())
            .await
            .expect("Failed to count transactions");

        assert_eq!(count, 0, "second database must not see first database rows");
    }
}
