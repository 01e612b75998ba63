use crate::cli::{MergeArgs, RenderArgs, SummaryArgs};
use crate::context::AppContext;
use crate::report_io::{read_json, write_json};
use edgesync_core::config::resolve_render_options;
use edgesync_core::{Report, ReportPatch, ReportSummary};
use eyre::Result;

pub fn run_render(ctx: &AppContext, args: &RenderArgs) -> Result<()> {
    let report: Report = read_json(&args.report)?;
    let options = resolve_render_options(&ctx.settings, args.colors_flag());
    log::debug!("rendering {} (colors: {})", args.report.display(), options.colors);
    let rendered = report.render(options);
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let report: Report = read_json(&args.report)?;
    let summary = report.summary();
    if args.json {
        return write_json(&summary, None);
    }
    print!("{}", describe_summary(&summary));
    Ok(())
}

pub(crate) fn describe_summary(summary: &ReportSummary) -> String {
    let mut out = format!("{} -> {}\n", summary.source, summary.target);
    if summary.up_to_date {
        out.push_str("Up to date\n");
    } else {
        out.push_str(&format!(
            "• Changes: {} created, {} updated, {} deleted\n",
            summary.created, summary.updated, summary.deleted
        ));
    }
    out.push_str(&format!("• Took: {} s\n", summary.seconds));
    if let Some(megabytes) = summary.megabytes {
        out.push_str(&format!("• Transferred: {megabytes:.2} MB\n"));
    }
    if summary.invalidated {
        out.push_str(&format!(
            "• Invalidated {} path(s) on {}\n",
            summary.invalidation_paths,
            if summary.domains.is_empty() {
                "no named distribution".to_owned()
            } else {
                summary.domains.join(", ")
            }
        ));
    }
    out.push_str(&format!(
        "• Completed: {} | Billable: {}\n",
        yes_no(summary.completed),
        yes_no(summary.constitutes_payment)
    ));
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn run_merge(args: &MergeArgs) -> Result<()> {
    let mut report: Report = read_json(&args.report)?;
    for path in &args.patches {
        let patch: ReportPatch = read_json(path)?;
        if patch.is_empty() {
            log::warn!("patch {} sets no fields", path.display());
        }
        report.merge(patch);
    }
    write_json(&report, args.output.as_deref())
}
