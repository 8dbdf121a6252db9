use anchor_lang::prelude::*;

use crate::{
    errors::OracleError,
    state::{OraclePolicy, PriceOracle},
};

/// Why a price failed validation, in order of precedence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Paused,
    Stale,
    ConfidenceTooWide,
}

impl From<RejectReason> for OracleError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Paused => OracleError::Paused,
            RejectReason::Stale => OracleError::Stale,
            RejectReason::ConfidenceTooWide => OracleError::ConfidenceTooWide,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(RejectReason),
}

impl Verdict {
    pub fn into_result(self) -> Result<()> {
        match self {
            Verdict::Accept => Ok(()),
            Verdict::Reject(reason) => Err(OracleError::from(reason).into()),
        }
    }
}

/// Evaluate an oracle's price against a set of thresholds.
/// The first failing rule wins: paused, then staleness, then confidence width.
/// With no thresholds only the pause flag is enforced.
/// # Arguments
/// * `oracle` - The oracle holding the price
/// * `current_slot` - The slot the check is made at
/// * `thresholds` - The staleness and confidence limits, if any
/// # Returns
/// * `Verdict` - Accept, or the reason for rejection
pub fn evaluate(
    oracle: &PriceOracle,
    current_slot: u64,
    thresholds: Option<&OraclePolicy>,
) -> Verdict {
    if oracle.paused {
        return Verdict::Reject(RejectReason::Paused);
    }

    let Some(policy) = thresholds else {
        return Verdict::Accept;
    };

    // The slot clock never runs backwards past the last write
    let age = current_slot.saturating_sub(oracle.last_update_slot);
    if age > policy.max_staleness {
        return Verdict::Reject(RejectReason::Stale);
    }

    // Both values share the price's fixed-point scale
    if oracle.confidence > policy.max_confidence {
        return Verdict::Reject(RejectReason::ConfidenceTooWide);
    }

    Verdict::Accept
}
