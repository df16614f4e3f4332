//!
//! Throwaway databases for repository tests.
//!
//! Tests using them require env variables to be set and database to be running.
//!

use crate::application::ApplicationEnv;
use anyhow::Context;
use mongodb::{options::ClientOptions, Client, Database};
use uuid::Uuid;

pub async fn create_test_database() -> anyhow::Result<Database> {
    let _ = dotenvy::dotenv();
    let env = ApplicationEnv::parse().context("failed to parse env variables")?;
    let db_name = format!("test_{}_{}", env.db_name, Uuid::new_v4().simple());

    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&db_name);

    Ok(db)
}

pub async fn destroy_test_database(database: Database) {
    let _ = database.drop().await;
    database.client().clone().shutdown().await;
}
