pub mod config;
pub mod diff;
pub mod distribution;
pub mod errors;
pub mod highlight;
pub mod report;

pub use diff::{DiffKind, ItemDiff};
pub use distribution::DistributionSummary;
pub use errors::{ValidationError, ValidationResult};
pub use highlight::{AnsiHighlighter, Highlighter, PlainHighlighter, Role};
pub use report::{
    DiffPhase, InvalidationPhase, RenderOptions, Report, ReportBuilder, ReportPatch,
    ReportSummary, TransferPhase,
};
