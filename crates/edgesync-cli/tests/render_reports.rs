use std::io::Write;
use std::process::Stdio;

mod common;
use common::{stderr, stdout, TestContext, FULL_REPORT};

#[test]
fn render_plain_matches_expected_text() {
    let ctx = TestContext::new();
    let report = ctx.write("report.json", FULL_REPORT);

    let output = ctx.run_path("render", &report, &["--no-color"]);
    assert!(output.status.success(), "render failed: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "./public \u{2192} s3://www-bucket\n\
         Took: 2 s\n\
         Transferred (1.00 MB):\n\
         \t+ index.html\n\
         \t+ app.js\n\
         \t- old.css\n\
         Invalidated on (www.example.com, d2.cloudfront.net):\n\
         \t/index.html\n\
         \t/app.js\n"
    );
}

#[test]
fn render_up_to_date() {
    let ctx = TestContext::new();
    let report = ctx.write("report.json", r#"{"source":"a","target":"b","time":5}"#);

    let output = ctx.run_path("render", &report, &["--no-color"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a \u{2192} b\nUP TO DATE\n");
}

#[test]
fn render_colors_by_default() {
    let ctx = TestContext::new();
    let report = ctx.write("report.json", FULL_REPORT);

    let output = ctx.run_path("render", &report, &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains('\u{1b}'), "expected ANSI escapes");
}

#[test]
fn no_color_env_disables_escapes() {
    let ctx = TestContext::new();
    let report = ctx.write("report.json", FULL_REPORT);

    let output = ctx
        .command()
        .env("NO_COLOR", "1")
        .arg("render")
        .arg(&report)
        .output()
        .expect("run edgesync");
    assert!(output.status.success());
    assert!(!stdout(&output).contains('\u{1b}'));
}

#[test]
fn stored_setting_disables_colors() {
    let ctx = TestContext::new();
    let report = ctx.write("report.json", FULL_REPORT);

    let output = ctx.run(&["config", "--colors", "off"]);
    assert!(output.status.success(), "config failed: {}", stderr(&output));
    assert!(ctx.config_dir.join("settings.json").exists());

    let output = ctx.run_path("render", &report, &[]);
    assert!(!stdout(&output).contains('\u{1b}'));

    let output = ctx.run_path("render", &report, &["--color"]);
    assert!(stdout(&output).contains('\u{1b}'));
}

#[test]
fn unknown_diff_type_fails() {
    let ctx = TestContext::new();
    let report = ctx.write(
        "report.json",
        r#"{"source":"a","target":"b","diffs":[{"type":"RENAME","key":"x"}]}"#,
    );

    let output = ctx.run_path("render", &report, &["--no-color"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("report.json"));
}

#[test]
fn render_reads_report_from_stdin() {
    let ctx = TestContext::new();

    let mut child = ctx
        .command()
        .args(["render", "-", "--no-color"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn edgesync");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(br#"{"source":"a","target":"b","diffs":[{"type":"CREATE","key":"x.txt"}],"time":2000}"#)
        .expect("write report to stdin");
    let output = child.wait_with_output().expect("wait for edgesync");

    assert!(output.status.success(), "render failed: {}", stderr(&output));
    assert_eq!(stdout(&output), "a \u{2192} b\nTook: 2 s\nTransfer:\n\t+ x.txt\n");
}
