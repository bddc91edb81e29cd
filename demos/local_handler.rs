//! Serves one station request and one search against the live catalog.
//!
//! ```sh
//! MAXI80_PRIVATE_KEY="$(cat AuthKey.p8)" MAXI80_KEY_ID=... MAXI80_TEAM_ID=... \
//! 	cargo run --example local_handler -- "Depeche Mode"
//! ```

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::Result;
// self
use maxi80_backend::{
	auth::SigningMaterial,
	bootstrap,
	config::{Config, LogLevel},
	obs,
	secrets::{DEFAULT_SECRET_NAME, StaticCredentialProvider},
	transport::ReqwestCatalogTransport,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	obs::init_tracing(LogLevel::Debug)?;

	let material = SigningMaterial::new(
		env::var("MAXI80_PRIVATE_KEY")?,
		env::var("MAXI80_KEY_ID")?,
		env::var("MAXI80_TEAM_ID")?,
	);
	let credentials =
		StaticCredentialProvider::default().with_material(DEFAULT_SECRET_NAME, &material)?;
	let transport = Arc::new(ReqwestCatalogTransport::new()?);
	let handler = bootstrap::build_handler(&Config::default(), &credentials, transport).await;
	let term = env::args().nth(1).unwrap_or_else(|| "Depeche Mode".into());
	let station = handler.handle_event("GET", "/station", None).await;

	println!("{} {}", station.status, station.body);

	let query = [("term".to_owned(), term)].into_iter().collect();
	let search = handler.handle_event("GET", "/search", Some(query)).await;

	println!("{} {}", search.status, search.body);

	Ok(())
}
