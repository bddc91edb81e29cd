// self
use crate::obs::{RequestOutcome, TokenEvent};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(endpoint: &'static str, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"maxi80_request_total",
			"endpoint" => endpoint,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}

/// Records a token cache decision via metrics and, when enabled, a debug event.
pub fn record_token_event(event: TokenEvent) {
	super::tracing::log_token_event(event);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!("maxi80_token_total", "outcome" => event.as_str()).increment(1);
	}
}
