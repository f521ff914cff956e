//! Tracing side of the console's observability.
//!
//! Each step (token exchange, then query) runs inside a `gamers_console.step` span. Upstream
//! statuses are logged here rather than checked: a 2xx is a debug event, anything else a
//! warning, since the body is used either way. The binary prints these events on stderr.

// self
use crate::{_prelude::*, obs::StepKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedStep<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStep<F> = F;

/// Span covering one step of the token-then-query workflow.
#[derive(Clone, Debug)]
pub struct StepSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StepSpan {
	/// Creates a new span tagged with the provided step kind + stage.
	pub fn new(kind: StepKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("gamers_console.step", step = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStep<Fut>
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

/// Logs the HTTP status of an upstream reply.
///
/// Bodies are consumed regardless of status, so a non-success status is only surfaced here.
pub fn record_status(kind: StepKind, status: u16) {
	#[cfg(feature = "tracing")]
	{
		if (200..300).contains(&status) {
			tracing::debug!(step = kind.as_str(), status, "Upstream replied.");
		} else {
			tracing::warn!(
				step = kind.as_str(),
				status,
				"Upstream replied with a non-success status; using the body as-is."
			);
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, status);
	}
}

/// Logs a step failure before it propagates to the caller.
pub fn record_step_failure(kind: StepKind, err: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(step = kind.as_str(), error = %err, "Step failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, err);
	}
}
