//! Serverless backend for the Maxi80 radio: station metadata plus an Apple Music search proxy
//! authorized by a cached, self-signed developer token.
//!
//! Inbound events flow through [`handler::Handler`], which asks the [`router::Router`] for the
//! [`action::Action`] bound to the request's path and method. The search action obtains an
//! `Authorization` header from an [`auth::AuthorizationProvider`] that reuses the token held in
//! a [`cache::TokenCache`] until the [`auth::TokenFactory`] reports it invalid.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod action;
pub mod auth;
pub mod bootstrap;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod obs;
pub mod request;
pub mod router;
pub mod secrets;
pub mod station;
pub mod transport;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use http::{Method, StatusCode};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
