use std::sync::Arc;

use tokio::net::TcpListener;

use fable::{handlers, logger::Logger, types::AppState, Config, WikiError};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    // A second init can only happen if something else set a logger first;
    // losing our sink is not worth refusing to start over.
    let _ = Logger::init();

    let config = Config::from_env();
    let state = AppState {
        data_dir: Arc::clone(&config.data_dir),
        templates_dir: Arc::clone(&config.templates_dir),
    };

    let app = handlers::router(state);

    let addr = config.socket_addr();
    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
