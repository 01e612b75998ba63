//! Outcome of a single synchronization run.
//!
//! A [`Report`] is created when a run starts (usually knowing only the
//! source and target), patched once per engine phase and finally rendered
//! or summarized by the caller. It performs no I/O and carries no internal
//! synchronization: a single coordinator owns it for the whole run.

mod patch;
mod render;
mod summary;

pub use patch::{DiffPhase, InvalidationPhase, ReportPatch, TransferPhase};
pub use render::{format_megabytes, format_seconds, RenderOptions, ONE_MB};
pub use summary::ReportSummary;

use serde::{Deserialize, Serialize};

use crate::diff::ItemDiff;
use crate::distribution::DistributionSummary;
use crate::errors::{ValidationError, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub diffs: Vec<ItemDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributions: Option<Vec<DistributionSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalidations: Option<Vec<String>>,
    #[serde(default)]
    pub constitutes_payment: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub invalidated: bool,
    /// Elapsed milliseconds.
    #[serde(default)]
    pub time: u64,
    /// Bytes transferred, when the engine tracks them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

impl Report {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            diffs: Vec::new(),
            distributions: None,
            invalidations: None,
            constitutes_payment: false,
            completed: false,
            invalidated: false,
            time: 0,
            amount: None,
        }
    }

    pub fn builder() -> ReportBuilder {
        ReportBuilder::default()
    }

    /// Build a report from a partial set of fields; `source` and `target`
    /// must be present, everything else falls back to its default.
    pub fn from_patch(mut patch: ReportPatch) -> ValidationResult<Self> {
        let source = patch
            .source
            .take()
            .ok_or(ValidationError::MissingField("source"))?;
        let target = patch
            .target
            .take()
            .ok_or(ValidationError::MissingField("target"))?;
        let mut report = Report::new(source, target);
        report.merge(patch);
        Ok(report)
    }

    /// Overwrite every field present in `patch`, leaving the rest untouched.
    ///
    /// Sequences are replaced wholesale, never appended to.
    pub fn merge(&mut self, patch: ReportPatch) {
        log::debug!(
            "merging {} field(s) into report {} -> {}",
            patch.field_count(),
            self.source,
            self.target
        );
        let ReportPatch {
            source,
            target,
            diffs,
            distributions,
            invalidations,
            constitutes_payment,
            completed,
            invalidated,
            time,
            amount,
        } = patch;

        if let Some(source) = source {
            self.source = source;
        }
        if let Some(target) = target {
            self.target = target;
        }
        if let Some(diffs) = diffs {
            self.diffs = diffs;
        }
        if let Some(distributions) = distributions {
            self.distributions = Some(distributions);
        }
        if let Some(invalidations) = invalidations {
            self.invalidations = Some(invalidations);
        }
        if let Some(constitutes_payment) = constitutes_payment {
            self.constitutes_payment = constitutes_payment;
        }
        if let Some(completed) = completed {
            self.completed = completed;
        }
        if let Some(invalidated) = invalidated {
            self.invalidated = invalidated;
        }
        if let Some(time) = time {
            self.time = time;
        }
        if let Some(amount) = amount {
            self.amount = Some(amount);
        }
    }

    pub fn record_diffs(&mut self, phase: DiffPhase) {
        self.merge(phase.into());
    }

    pub fn record_transfer(&mut self, phase: TransferPhase) {
        self.merge(phase.into());
    }

    /// Marks the report as invalidated in addition to storing the results.
    pub fn record_invalidation(&mut self, phase: InvalidationPhase) {
        self.merge(phase.into());
    }

    pub fn is_up_to_date(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn invalidation_paths(&self) -> &[String] {
        self.invalidations.as_deref().unwrap_or_default()
    }

    /// Display names of the distributions, skipping any without one.
    pub fn invalidation_domains(&self) -> Vec<&str> {
        self.distributions
            .iter()
            .flatten()
            .filter_map(|dist| {
                let name = dist.display_name();
                if name.is_none() {
                    log::warn!("distribution without alias or domain name omitted from report");
                }
                name
            })
            .collect()
    }
}

/// Step-by-step construction with the required fields checked at `build`.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    patch: ReportPatch,
}

impl ReportBuilder {
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.patch.source = Some(source.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.patch.target = Some(target.into());
        self
    }

    pub fn diffs(mut self, diffs: Vec<ItemDiff>) -> Self {
        self.patch.diffs = Some(diffs);
        self
    }

    /// Append one diff after any already supplied.
    pub fn diff(mut self, diff: ItemDiff) -> Self {
        self.patch.diffs.get_or_insert_with(Vec::new).push(diff);
        self
    }

    pub fn distributions(mut self, distributions: Vec<DistributionSummary>) -> Self {
        self.patch.distributions = Some(distributions);
        self
    }

    pub fn invalidations(mut self, invalidations: Vec<String>) -> Self {
        self.patch.invalidations = Some(invalidations);
        self
    }

    pub fn constitutes_payment(mut self, value: bool) -> Self {
        self.patch.constitutes_payment = Some(value);
        self
    }

    pub fn completed(mut self, value: bool) -> Self {
        self.patch.completed = Some(value);
        self
    }

    pub fn invalidated(mut self, value: bool) -> Self {
        self.patch.invalidated = Some(value);
        self
    }

    pub fn time(mut self, millis: u64) -> Self {
        self.patch.time = Some(millis);
        self
    }

    pub fn amount(mut self, bytes: u64) -> Self {
        self.patch.amount = Some(bytes);
        self
    }

    pub fn build(self) -> ValidationResult<Report> {
        Report::from_patch(self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::builder()
            .source("./public")
            .target("s3://site-bucket")
            .diff(ItemDiff::create("index.html").unwrap())
            .diff(ItemDiff::delete("old.css").unwrap())
            .time(1500)
            .build()
            .unwrap()
    }

    #[test]
    fn new_report_has_defaults() {
        let report = Report::new("a", "b");
        assert!(report.diffs.is_empty());
        assert!(!report.completed && !report.invalidated && !report.constitutes_payment);
        assert_eq!(report.time, 0);
        assert_eq!(report.amount, None);
        assert_eq!(report.distributions, None);
        assert_eq!(report.invalidations, None);
    }

    #[test]
    fn builder_requires_source_and_target() {
        let err = Report::builder().target("b").build().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("source"));
        let err = Report::builder().source("a").build().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("target"));
    }

    #[test]
    fn builder_keeps_diff_order() {
        let keys: Vec<_> = sample().diffs.into_iter().map(|d| d.key).collect();
        assert_eq!(keys, ["index.html", "old.css"]);
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut report = sample();
        let before = report.diffs.clone();
        report.merge(ReportPatch {
            time: Some(500),
            ..ReportPatch::default()
        });
        assert_eq!(report.time, 500);
        assert_eq!(report.diffs, before);
        assert_eq!(report.source, "./public");
    }

    #[test]
    fn merge_replaces_sequences() {
        let mut report = sample();
        report.merge(ReportPatch {
            diffs: Some(vec![ItemDiff::update("app.js").unwrap()]),
            ..ReportPatch::default()
        });
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].key, "app.js");
    }

    #[test]
    fn clone_does_not_alias_sequences() {
        let original = sample();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.time = 9;
        copy.diffs.push(ItemDiff::create("new.txt").unwrap());
        copy.invalidations
            .get_or_insert_with(Vec::new)
            .push("/index.html".into());

        assert_eq!(original.time, 1500);
        assert_eq!(original.diffs.len(), 2);
        assert_eq!(original.invalidations, None);
    }

    #[test]
    fn domains_skip_nameless_distributions() {
        let mut report = sample();
        report.distributions = Some(vec![
            DistributionSummary::new("d1.cloudfront.net"),
            DistributionSummary::default(),
            DistributionSummary::new("d2.cloudfront.net").with_aliases(["cdn.example.com"]),
        ]);
        assert_eq!(
            report.invalidation_domains(),
            ["d1.cloudfront.net", "cdn.example.com"]
        );
    }

    #[test]
    fn deserializes_partial_engine_output() {
        let report: Report = serde_json::from_str(
            r#"{"source":"dist","target":"s3://bucket","diffs":[{"type":"UPDATE","key":"a.js"}],"time":42}"#,
        )
        .unwrap();
        assert_eq!(report.time, 42);
        assert_eq!(report.diffs[0], ItemDiff::update("a.js").unwrap());
        assert!(!report.completed);
        assert_eq!(report.amount, None);
    }

    #[test]
    fn rejects_unknown_diff_type_in_json() {
        let result = serde_json::from_str::<Report>(
            r#"{"source":"a","target":"b","diffs":[{"type":"RENAME","key":"x"}]}"#,
        );
        assert!(result.is_err());
    }
}
