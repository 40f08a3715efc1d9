#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect to the test database and migrate it on first use. Callers treat
/// an `Err` as "no database available" and skip the test. The short
/// connect timeout keeps DB-gated tests from hanging when nothing listens.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig {
        url: models::db::DATABASE_URL.clone(),
        connect_timeout_secs: 2,
        acquire_timeout_secs: 2,
        ..Default::default()
    };
    let db = models::db::connect_with_config(&cfg).await?;
    MIGRATED
        .get_or_try_init(|| async {
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(db)
}
