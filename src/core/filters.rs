use crate::models::Seeker;

/// Reason recorded when the debt gate rejects a seeker
pub const DEBT_GATE_REASON: &str = "profile is debt-flagged";

/// Outcome of the debt gate for a seeker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Eligible,
    Rejected(&'static str),
}

impl GateDecision {
    pub fn is_eligible(self) -> bool {
        matches!(self, GateDecision::Eligible)
    }
}

/// Check the seeker against the debt registry flag
///
/// This is the first stage of the pipeline. A rejected seeker gets no
/// factor evaluation at all.
#[inline]
pub fn debt_gate(seeker: &Seeker) -> GateDecision {
    if seeker.debt_status.is_flagged() {
        GateDecision::Rejected(DEBT_GATE_REASON)
    } else {
        GateDecision::Eligible
    }
}
