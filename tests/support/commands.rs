//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Settings the samples read; stripped from the inherited environment so
/// only fnsamples.toml supplies them.
const SAMPLE_SETTINGS: &[&str] = &["ExampleSecret", "BlobOutpath", "Schedule"];

impl Test {
    /// Create an fnsamples command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - current directory set to the test project directory
    /// - colors, log filter and config overrides removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("fnsamples").expect("failed to find fnsamples binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("FNSAMPLES_CONFIG");
        cmd.env_remove("FNSAMPLES_LOG");
        for key in SAMPLE_SETTINGS {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Shortcut for `fnsamples list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run fnsamples list")
    }

    /// Shortcut for `fnsamples invoke <name> [args...]`.
    pub fn invoke(&self, name: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg("invoke")
            .arg(name)
            .args(args)
            .output()
            .expect("failed to run fnsamples invoke")
    }

    /// Shortcut for `fnsamples route <path> [args...]`.
    pub fn route(&self, path: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg("route")
            .arg(path)
            .args(args)
            .output()
            .expect("failed to run fnsamples route")
    }

    /// Shortcut for `fnsamples resolve <key>`.
    pub fn resolve(&self, key: &str) -> Output {
        self.cmd()
            .args(["resolve", key])
            .output()
            .expect("failed to run fnsamples resolve")
    }

    /// Shortcut for `fnsamples schedule <name> -n <count>`.
    pub fn schedule(&self, name: &str, count: usize) -> Output {
        self.cmd()
            .args(["schedule", name, "-n", &count.to_string()])
            .output()
            .expect("failed to run fnsamples schedule")
    }
}
