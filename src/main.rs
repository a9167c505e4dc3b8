use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yan_portal::{
    config::{database, seed},
    errors::Result,
    portal::Portal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load seed data (bundled unless YAN_SEED_FILE is set)
    let seed_data = seed::load_seed_from_env()
        .inspect_err(|e| error!("Failed to load seed data: {}", e))?;

    // 4. Connect and make sure the key-value table exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed any collection that is missing
    let portal = Portal::new(db, seed_data);
    portal
        .initialize()
        .await
        .inspect_err(|e| error!("Failed to initialize collections: {}", e))?;

    match portal.current_session().await? {
        Some(session) => info!("Signed in as '{}' ({})", session.username, session.role),
        None => info!("No active session."),
    }
    info!("{} member organisations in the directory.", portal.members().len());

    Ok(())
}
