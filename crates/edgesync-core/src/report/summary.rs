use serde::Serialize;

use super::{Report, ONE_MB};
use crate::diff::DiffKind;

/// Aggregate counts of a run, for tabular or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub source: String,
    pub target: String,
    pub up_to_date: bool,
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub megabytes: Option<f64>,
    pub completed: bool,
    pub invalidated: bool,
    pub invalidation_paths: usize,
    pub domains: Vec<String>,
    pub constitutes_payment: bool,
}

impl Report {
    pub fn summary(&self) -> ReportSummary {
        let count = |kind: DiffKind| self.diffs.iter().filter(|d| d.kind == kind).count();
        ReportSummary {
            source: self.source.clone(),
            target: self.target.clone(),
            up_to_date: self.is_up_to_date(),
            created: count(DiffKind::Create),
            updated: count(DiffKind::Update),
            deleted: count(DiffKind::Delete),
            seconds: self.time as f64 / 1000.0,
            megabytes: self.amount.map(|bytes| bytes as f64 / ONE_MB as f64),
            completed: self.completed,
            invalidated: self.invalidated,
            invalidation_paths: self.invalidation_paths().len(),
            domains: self
                .invalidation_domains()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            constitutes_payment: self.constitutes_payment,
        }
    }
}

impl ReportSummary {
    /// Total number of changed items.
    pub fn changes(&self) -> usize {
        self.created + self.updated + self.deleted
    }
}
