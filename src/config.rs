//! Process configuration read once from environment variables.
//!
//! | Variable | Default |
//! | --- | --- |
//! | `LOG_LEVEL` | `info` |
//! | `AWS_REGION` | unset |
//! | `SECRET_NAME` | `Maxi80-AppleMusicKey` |
//! | `UPSTREAM_TIMEOUT_SECS` | `10` |
//! | `SEARCH_TYPES` | `songs` |
//! | `CATALOG_BASE_URL` | `https://api.music.apple.com/v1` |

// self
use crate::{
	_prelude::*,
	catalog::{self, CATALOG_BASE_URL, SearchType},
	error::ConfigError,
	secrets::DEFAULT_SECRET_NAME,
};

/// Default upstream timeout in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Verbosity accepted by `LOG_LEVEL`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
	/// Errors only.
	Error,
	/// Warnings and errors.
	Warn,
	/// Informational output.
	#[default]
	Info,
	/// Debug output, including token cache decisions.
	Debug,
	/// Everything.
	Trace,
}
impl LogLevel {
	/// Returns the filter directive for this level.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Warn => "warn",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		}
	}
}
impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"error" => Ok(Self::Error),
			"warn" | "warning" => Ok(Self::Warn),
			"info" => Ok(Self::Info),
			"debug" => Ok(Self::Debug),
			"trace" => Ok(Self::Trace),
			_ => Err(ConfigError::InvalidLogLevel(s.to_owned())),
		}
	}
}
impl Display for LogLevel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Validated runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// Subscriber verbosity.
	pub log_level: LogLevel,
	/// Region used by the secrets manager client; the SDK default chain applies when unset.
	pub region: Option<String>,
	/// Name of the secret holding the signing material.
	pub secret_name: String,
	/// Timeout applied to every upstream catalog call.
	pub upstream_timeout_secs: u64,
	/// Categories requested from the catalog search.
	pub search_types: Vec<SearchType>,
	/// Catalog base URL without a trailing slash.
	pub catalog_base_url: String,
}
impl Config {
	/// Reads the configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		envy::from_env::<RawConfig>()?.validate()
	}

	/// Reads the configuration from explicit `(NAME, value)` pairs.
	pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		envy::from_iter::<_, RawConfig>(vars)?.validate()
	}

	/// Upstream timeout as a [`StdDuration`].
	pub fn upstream_timeout(&self) -> StdDuration {
		StdDuration::from_secs(self.upstream_timeout_secs)
	}
}
impl Default for Config {
	fn default() -> Self {
		Self {
			log_level: LogLevel::default(),
			region: None,
			secret_name: DEFAULT_SECRET_NAME.into(),
			upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
			search_types: vec![SearchType::Songs],
			catalog_base_url: CATALOG_BASE_URL.into(),
		}
	}
}

#[derive(Deserialize)]
struct RawConfig {
	#[serde(default = "default_log_level")]
	log_level: String,
	#[serde(default)]
	aws_region: Option<String>,
	#[serde(default = "default_secret_name")]
	secret_name: String,
	#[serde(default = "default_upstream_timeout_secs")]
	upstream_timeout_secs: u64,
	#[serde(default = "default_search_types")]
	search_types: String,
	#[serde(default = "default_catalog_base_url")]
	catalog_base_url: String,
}
impl RawConfig {
	fn validate(self) -> Result<Config, ConfigError> {
		if self.upstream_timeout_secs == 0 {
			return Err(ConfigError::ZeroTimeout);
		}

		let log_level = self.log_level.parse()?;
		let search_types = catalog::parse_search_types(&self.search_types)?;
		let catalog_base_url = self.catalog_base_url.trim().trim_end_matches('/').to_owned();

		Url::parse(&catalog_base_url)?;

		let region = self.aws_region.filter(|r| !r.trim().is_empty());
		let secret_name = match self.secret_name.trim() {
			"" => DEFAULT_SECRET_NAME.to_owned(),
			name => name.to_owned(),
		};

		Ok(Config {
			log_level,
			region,
			secret_name,
			upstream_timeout_secs: self.upstream_timeout_secs,
			search_types,
			catalog_base_url,
		})
	}
}

fn default_log_level() -> String {
	LogLevel::default().as_str().into()
}

fn default_secret_name() -> String {
	DEFAULT_SECRET_NAME.into()
}

fn default_upstream_timeout_secs() -> u64 {
	DEFAULT_UPSTREAM_TIMEOUT_SECS
}

fn default_search_types() -> String {
	SearchType::Songs.as_str().into()
}

fn default_catalog_base_url() -> String {
	CATALOG_BASE_URL.into()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
	}

	#[test]
	fn empty_environment_uses_defaults() {
		let config = Config::from_vars(Vec::new()).expect("Defaults should validate.");

		assert_eq!(config, Config::default());
		assert_eq!(config.upstream_timeout(), StdDuration::from_secs(10));
	}

	#[test]
	fn overrides_are_parsed() {
		let config = Config::from_vars(vars(&[
			("LOG_LEVEL", "DEBUG"),
			("AWS_REGION", "eu-central-1"),
			("SECRET_NAME", "staging/apple-music"),
			("UPSTREAM_TIMEOUT_SECS", "3"),
			("SEARCH_TYPES", "songs, artists,albums"),
			("CATALOG_BASE_URL", "http://127.0.0.1:9000/v1/"),
		]))
		.expect("Overrides should validate.");

		assert_eq!(config.log_level, LogLevel::Debug);
		assert_eq!(config.region.as_deref(), Some("eu-central-1"));
		assert_eq!(config.secret_name, "staging/apple-music");
		assert_eq!(config.upstream_timeout_secs, 3);
		assert_eq!(
			config.search_types,
			vec![SearchType::Songs, SearchType::Artists, SearchType::Albums]
		);
		assert_eq!(config.catalog_base_url, "http://127.0.0.1:9000/v1");
	}

	#[test]
	fn invalid_values_are_rejected() {
		assert!(matches!(
			Config::from_vars(vars(&[("LOG_LEVEL", "loud")])),
			Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
		));
		assert!(matches!(
			Config::from_vars(vars(&[("UPSTREAM_TIMEOUT_SECS", "0")])),
			Err(ConfigError::ZeroTimeout)
		));
		assert!(matches!(
			Config::from_vars(vars(&[("UPSTREAM_TIMEOUT_SECS", "soon")])),
			Err(ConfigError::Environment(_))
		));
		assert!(matches!(
			Config::from_vars(vars(&[("SEARCH_TYPES", "songs,videos")])),
			Err(ConfigError::UnknownSearchType(kind)) if kind == "videos"
		));
		assert!(matches!(
			Config::from_vars(vars(&[("SEARCH_TYPES", " , ")])),
			Err(ConfigError::NoSearchTypes)
		));
		assert!(matches!(
			Config::from_vars(vars(&[("CATALOG_BASE_URL", "not a url")])),
			Err(ConfigError::InvalidCatalogUrl(_))
		));
	}

	#[test]
	fn blank_region_is_treated_as_unset() {
		let config =
			Config::from_vars(vars(&[("AWS_REGION", "  ")])).expect("Blank region should validate.");

		assert_eq!(config.region, None);
	}
}
