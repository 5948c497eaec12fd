use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Build the connection pool and bring the schema up to date. Pending
/// migrations run here so a freshly pointed database is usable immediately.
pub fn create_pool(database_url: &str) -> Result<DbPool, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;

    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;

    Ok(pool)
}
