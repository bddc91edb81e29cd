//! `GET /station`.

// self
use crate::{
	_prelude::*,
	action::{Action, ActionFuture},
	endpoint::Endpoint,
	request::Request,
	station::Station,
};

/// Serves the compiled-in [`Station`] descriptor. Takes no parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct StationAction;
impl StationAction {
	/// Encodes the station descriptor.
	pub fn body() -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(&Station::maxi80())?)
	}
}
impl Action for StationAction {
	fn endpoint(&self) -> Endpoint {
		Endpoint::Station
	}

	fn handle<'a>(&'a self, _request: &'a Request) -> ActionFuture<'a> {
		Box::pin(async move { Self::body() })
	}
}
