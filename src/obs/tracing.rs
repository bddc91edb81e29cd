// self
use crate::{_prelude::*, config::LogLevel, error::ConfigError, obs::TokenEvent};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used while routing and handling requests.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the endpoint label + stage.
	pub fn new(endpoint: &'static str, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("maxi80.request", endpoint, stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (endpoint, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event describing a token cache decision.
pub fn log_token_event(event: TokenEvent) {
	#[cfg(feature = "tracing")]
	{
		match event {
			TokenEvent::Failed => {
				tracing::warn!(outcome = event.as_str(), "developer token could not be minted")
			},
			_ => tracing::debug!(outcome = event.as_str(), "developer token cache decision"),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = event;
	}
}

/// Logs a failed request. `error` stays in logs and never reaches the response body.
pub fn log_request_failure(status: StatusCode, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		if status.is_server_error() {
			tracing::error!(status = status.as_u16(), error = %error, "request failed");
		} else {
			tracing::debug!(status = status.as_u16(), error = %error, "request rejected");
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, error);
	}
}

/// Logs a bootstrap problem that leaves the process serving in a degraded mode.
pub fn log_degraded(component: &'static str, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(component, error = %error, "starting without this component");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (component, error);
	}
}

/// Installs a global `fmt` subscriber filtered at `level`.
///
/// Call once at process start; a second call fails with [`ConfigError::TracingInit`].
pub fn init_tracing(level: LogLevel) -> Result<(), ConfigError> {
	#[cfg(feature = "tracing")]
	{
		let filter = tracing_subscriber::EnvFilter::new(level.as_str());

		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(false)
			.try_init()
			.map_err(|source| ConfigError::TracingInit { source })
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = level;

		Ok(())
	}
}
