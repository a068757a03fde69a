//! Binary crate for the weather-station GraphQL server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Building the GraphQL schema over the station connector
//! - Serving it over HTTP

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use clap::Parser;
use stations_core::{Config, OpenWeatherStations, StationsApi};

mod graphql;

use graphql::StationsSchema;

/// Weather-station GraphQL server.
#[derive(Debug, Parser)]
#[command(
    name = "stations-server",
    version,
    about = "GraphQL server for the OpenWeather station API"
)]
struct Args {
    /// Path to the TOML config file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address override, e.g. "127.0.0.1:4000".
    #[arg(long)]
    listen: Option<String>,

    /// Print the schema SDL and exit.
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.print_schema {
        print!("{}", graphql::sdl());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let api_key = config.api_key()?.to_string();
    let connector: Arc<dyn StationsApi> =
        Arc::new(OpenWeatherStations::new(api_key, config.base_url.clone()));

    let schema = graphql::build_schema(connector);

    let app = Router::new()
        .route("/graphql", get(playground).post(graphql_handler))
        .with_state(schema);

    let listen = args.listen.unwrap_or(config.listen);
    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("Failed to bind {listen}"))?;

    log::info!("Server is running on http://{listen}/graphql");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn graphql_handler(
    State(schema): State<StationsSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
