use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::diff::ItemDiff;
use crate::distribution::DistributionSummary;

/// Partial update of a [`Report`](super::Report); `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ReportPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffs: Option<Vec<ItemDiff>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributions: Option<Vec<DistributionSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalidations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitutes_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalidated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl ReportPatch {
    pub fn field_count(&self) -> usize {
        [
            self.source.is_some(),
            self.target.is_some(),
            self.diffs.is_some(),
            self.distributions.is_some(),
            self.invalidations.is_some(),
            self.constitutes_payment.is_some(),
            self.completed.is_some(),
            self.invalidated.is_some(),
            self.time.is_some(),
            self.amount.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}

/// Output of the diffing phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPhase {
    pub diffs: Vec<ItemDiff>,
}

impl From<DiffPhase> for ReportPatch {
    fn from(phase: DiffPhase) -> Self {
        ReportPatch {
            diffs: Some(phase.diffs),
            ..ReportPatch::default()
        }
    }
}

/// Output of the transfer phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferPhase {
    /// Elapsed milliseconds.
    pub time: u64,
    /// Bytes moved; `None` when the engine does not track them.
    pub amount: Option<u64>,
    pub completed: bool,
}

impl TransferPhase {
    pub fn new(elapsed: Duration, amount: Option<u64>, completed: bool) -> Self {
        Self {
            time: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            amount,
            completed,
        }
    }
}

impl From<TransferPhase> for ReportPatch {
    fn from(phase: TransferPhase) -> Self {
        ReportPatch {
            time: Some(phase.time),
            amount: phase.amount,
            completed: Some(phase.completed),
            ..ReportPatch::default()
        }
    }
}

/// Output of the CDN invalidation phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationPhase {
    pub distributions: Vec<DistributionSummary>,
    pub invalidations: Vec<String>,
    pub constitutes_payment: bool,
}

impl From<InvalidationPhase> for ReportPatch {
    fn from(phase: InvalidationPhase) -> Self {
        ReportPatch {
            distributions: Some(phase.distributions),
            invalidations: Some(phase.invalidations),
            constitutes_payment: Some(phase.constitutes_payment),
            invalidated: Some(true),
            ..ReportPatch::default()
        }
    }
}
