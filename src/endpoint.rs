//! Closed set of paths served by the backend.

// self
use crate::_prelude::*;

/// Registered endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// `/station`
	Station,
	/// `/search`
	Search,
}
impl Endpoint {
	/// Every endpoint in registration order.
	pub const ALL: [Self; 2] = [Self::Station, Self::Search];

	/// Request path bound to the endpoint.
	pub const fn path(self) -> &'static str {
		match self {
			Self::Station => "/station",
			Self::Search => "/search",
		}
	}

	/// Resolves an exact, case-sensitive path.
	pub fn from_path(path: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|endpoint| endpoint.path() == path)
	}

	/// Stable label used in spans and metrics.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Station => "station",
			Self::Search => "search",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.path())
	}
}
