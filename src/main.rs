use log::{error, info};
use recipe_finder::{serve, ServerConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded configuration: {:?}", config);

    if let Err(e) = serve(&config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
