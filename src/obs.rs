//! Optional observability helpers for the console's two network steps.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `gamers_console.step` with the
//!   `step` and `stage` fields, plus status events for every upstream reply.
//! - Enable `metrics` to increment the `gamers_console_step_total` counter for every
//!   attempt/success/failure, labeled by `step` + `outcome`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::_prelude::*;

/// Network steps performed per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
	/// Client-credentials token exchange.
	Authenticate,
	/// Database query forwarding.
	Query,
}
impl StepKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StepKind::Authenticate => "authenticate",
			StepKind::Query => "query",
		}
	}
}
impl Display for StepKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepOutcome {
	/// Entry to a step.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl StepOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StepOutcome::Attempt => "attempt",
			StepOutcome::Success => "success",
			StepOutcome::Failure => "failure",
		}
	}
}
impl Display for StepOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a step span, recording attempt and final outcome.
pub(crate) async fn observe_step<Fut, T, E>(
	kind: StepKind,
	stage: &'static str,
	fut: Fut,
) -> Result<T, E>
where
	Fut: Future<Output = Result<T, E>>,
	E: Display,
{
	let span = StepSpan::new(kind, stage);

	record_step_outcome(kind, StepOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_step_outcome(kind, StepOutcome::Success),
		Err(e) => {
			record_step_failure(kind, e);
			record_step_outcome(kind, StepOutcome::Failure);
		},
	}

	result
}
