#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

pub struct TestContext {
    pub _work: TempDir,
    pub workspace: PathBuf,
    pub config_dir: PathBuf,
    pub cli_bin: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let work = tempdir().expect("tempdir");
        let workspace = work.path().to_path_buf();
        let config_dir = workspace.join("cli-config");
        fs::create_dir_all(&config_dir).expect("cli config");

        Self {
            _work: work,
            workspace,
            config_dir,
            cli_bin: PathBuf::from(env!("CARGO_BIN_EXE_edgesync")),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.workspace.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Command with an isolated config dir and no color hints from the host.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.cli_bin);
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .env_remove("NO_COLOR")
            .env_remove("EDGESYNC_NO_COLOR")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run edgesync")
    }

    pub fn run_path(&self, verb: &str, path: &Path, extra: &[&str]) -> Output {
        self.command()
            .arg(verb)
            .arg(path)
            .args(extra)
            .output()
            .expect("run edgesync")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub const FULL_REPORT: &str = r#"{
    "source": "./public",
    "target": "s3://www-bucket",
    "diffs": [
        {"type": "CREATE", "key": "index.html"},
        {"type": "UPDATE", "key": "app.js"},
        {"type": "DELETE", "key": "old.css"}
    ],
    "distributions": [
        {"domainName": "d1.cloudfront.net", "aliases": ["www.example.com"]},
        {"domainName": "d2.cloudfront.net"}
    ],
    "invalidations": ["/index.html", "/app.js"],
    "invalidated": true,
    "completed": true,
    "time": 2000,
    "amount": 1048576
}"#;
