//! Database module
//!
//! Connection and schema checks for the PostgreSQL account store.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::store::{CREATE_USER_AND_ACCOUNT_ROUTINE, DEPOSIT_ROUTINE};

/// Open a connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify database connectivity
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Check that the routines the account store relies on exist
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let required_routines = [
        (DEPOSIT_ROUTINE, "PROCEDURE"),
        (CREATE_USER_AND_ACCOUNT_ROUTINE, "FUNCTION"),
    ];

    for (routine, kind) in required_routines {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.routines
                WHERE routine_schema = current_schema()
                  AND routine_name = $1
                  AND routine_type = $2
            )
            "#,
        )
        .bind(routine)
        .bind(kind)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required {} '{}' does not exist", kind.to_lowercase(), routine);
            return Ok(false);
        }
    }

    tracing::info!(
        "Account store routines verified: {}, {}",
        DEPOSIT_ROUTINE,
        CREATE_USER_AND_ACCOUNT_ROUTINE
    );
    Ok(true)
}
