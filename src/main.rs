use grubdash_backend_rs::{
    app::App,
    types::{Config, ToContext},
};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let ctx = match Config::from_env() {
        Ok(config) => config.to_context().await,
        Err(err) => Err(err),
    };

    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::error!("Failed to start: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
