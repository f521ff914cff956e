//! `gamers_console_step_total` counter, labeled by `step` (`authenticate`, `query`) and
//! `outcome` (`attempt`, `success`, `failure`). A no-op unless the `metrics` feature is on and
//! the embedding process installs a recorder.

// self
use crate::obs::{StepKind, StepOutcome};

/// Records a step outcome via the global metrics recorder (when enabled).
pub fn record_step_outcome(kind: StepKind, outcome: StepOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"gamers_console_step_total",
			"step" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_step_outcome_noop_without_recorder() {
		record_step_outcome(StepKind::Authenticate, StepOutcome::Failure);
	}
}
