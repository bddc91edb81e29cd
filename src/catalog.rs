//! Apple Music catalog endpoints and search categories.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production catalog base URL.
pub const CATALOG_BASE_URL: &str = "https://api.music.apple.com/v1";
/// Storefront every search is issued against.
pub const STOREFRONT: &str = "fr";

/// Catalog operations the backend calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogEndpoint {
	/// `GET /catalog/{storefront}/search`.
	Search,
}
impl CatalogEndpoint {
	/// Path relative to the catalog base URL.
	pub fn path(self) -> String {
		match self {
			Self::Search => format!("/catalog/{STOREFRONT}/search"),
		}
	}

	/// Builds the absolute URL under `base`, appending `query` in order and percent-encoded.
	pub fn url(self, base: &str, query: &[(&str, &str)]) -> Result<Url, url::ParseError> {
		let mut url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), self.path()))?;

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query);
		}

		Ok(url)
	}
}

/// Result categories the catalog search can return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
	/// Artist matches.
	Artists,
	/// Song matches.
	Songs,
	/// Album matches.
	Albums,
}
impl SearchType {
	/// Value used in the `types` query parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Artists => "artists",
			Self::Songs => "songs",
			Self::Albums => "albums",
		}
	}
}
impl FromStr for SearchType {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"artists" => Ok(Self::Artists),
			"songs" => Ok(Self::Songs),
			"albums" => Ok(Self::Albums),
			_ => Err(ConfigError::UnknownSearchType(s.trim().to_owned())),
		}
	}
}
impl Display for SearchType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Parses a comma-separated list, dropping empty items and duplicates while keeping order.
pub fn parse_search_types(raw: &str) -> Result<Vec<SearchType>, ConfigError> {
	let mut types = Vec::new();

	for item in raw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
		let kind = item.parse::<SearchType>()?;

		if !types.contains(&kind) {
			types.push(kind);
		}
	}

	if types.is_empty() { Err(ConfigError::NoSearchTypes) } else { Ok(types) }
}

/// Joins categories for the `types` query parameter.
pub fn search_types_param(types: &[SearchType]) -> String {
	types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(",")
}
