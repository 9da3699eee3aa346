use log::error;
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    let app_state = web::AppState::new(service::AppState::new(config));

    if let Err(e) = web::init_server(app_state).await {
        error!("{e}");
        std::process::exit(1);
    }
}
