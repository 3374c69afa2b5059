use crate::app_config::AppConfig;
use crate::device::{ConsoleMapView, FixedLocationProvider};
use crate::firebase::{FirebaseAuth, Firestore};
use crate::parking::load_spots_from;
use crate::screens::{MapSettings, Services};
use crate::session::{Session, TokenStore};
use crate::shell::App;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

mod app_config;
mod device;
mod domain;
mod error;
mod firebase;
mod geo_coordinate_deserializer;
mod notice;
mod parking;
mod providers;
mod screens;
mod session;
mod shell;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = firebase::new_client(&config)?;
    let session = Session::new();
    let tokens = TokenStore::new(config.core().token_file());
    if tokens.restore().await.is_some() {
        debug!("Found a stored user token");
    }

    let services = Services {
        identity: Arc::new(FirebaseAuth::new(client.clone(), &config, session.clone())),
        store: Arc::new(Firestore::new(client, &config, session)),
        location: Arc::new(FixedLocationProvider::from_config(&config)),
        tokens,
        request_timeout: config.core().request_timeout(),
        users_collection: config.firebase().users_collection().to_string(),
    };
    info!("✅  Initialized backend clients");

    let spots = load_spots_from(Path::new(config.map().spots_file())).await?;

    let mut app = App::new(services, MapSettings::from_config(&config), spots, Arc::new(ConsoleMapView));
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    shell::run(&mut app).await?;

    Ok(())
}
