use dotenvy::dotenv;
use snafu::ResultExt;

use spotlight::api::{create_app, create_router};
use spotlight::config::Config;
use spotlight::error::{ApplicationError, BindAddressSnafu, LoadContentSnafu, WebServerSnafu};
use spotlight::logger;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;

    let _guard = logger::init(&config)?;

    let catalogue = config.catalogue().context(LoadContentSnafu)?;
    let app = create_app(catalogue);

    let listener = tokio::net::TcpListener::bind(config.host)
        .await
        .context(BindAddressSnafu { address: config.host })?;
    tracing::info!("listening on {}", config.host);

    axum::serve(listener, create_router(app))
        .await
        .context(WebServerSnafu)
}
