use vidup_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    vidup_api::telemetry::init_telemetry();

    // Load configuration (reads .env when present)
    let config = Config::from_env()?;

    // Initialize the application (storage, state, routes)
    let (_state, router) = vidup_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    vidup_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
