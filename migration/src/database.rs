//! Create and drop the database named in `DATABASE_URL`.
//!
//! Both commands connect to the server's `postgres` maintenance database,
//! since a database cannot be created or dropped from a session inside it.

use sea_orm_migration::sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};
use url::Url;

const MAINTENANCE_DB: &str = "postgres";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseTarget {
    name: String,
    server_url: String,
}

impl DatabaseTarget {
    pub fn parse(database_url: &str) -> Result<Self, DbErr> {
        let mut url = Url::parse(database_url)
            .map_err(|e| DbErr::Custom(format!("invalid DATABASE_URL: {e}")))?;

        let name = url.path().trim_start_matches('/').to_string();
        if name.is_empty() || name.contains('/') {
            return Err(DbErr::Custom(
                "DATABASE_URL must name exactly one database".to_string(),
            ));
        }

        url.set_path(&format!("/{MAINTENANCE_DB}"));

        Ok(Self {
            name,
            server_url: url.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    async fn connect_server(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.server_url.as_str()).await
    }

    /// Returns `false` when the database was already there.
    pub async fn create_database(&self) -> Result<bool, DbErr> {
        let conn = self.connect_server().await?;
        if exists_on(&conn, &self.name).await? {
            return Ok(false);
        }

        conn.execute_unprepared(&format!("CREATE DATABASE {}", quote_ident(&self.name)))
            .await?;
        Ok(true)
    }

    /// Returns `false` when there was nothing to drop.
    pub async fn drop_database(&self) -> Result<bool, DbErr> {
        let conn = self.connect_server().await?;
        if !exists_on(&conn, &self.name).await? {
            return Ok(false);
        }

        conn.execute_unprepared(&format!("DROP DATABASE {}", quote_ident(&self.name)))
            .await?;
        Ok(true)
    }
}

async fn exists_on(conn: &DatabaseConnection, name: &str) -> Result<bool, DbErr> {
    let row = conn
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [name.into()],
        ))
        .await?;
    Ok(row.is_some())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
