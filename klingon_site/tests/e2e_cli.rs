//! End-to-End CLI Tests for klingon-site

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the klingon-site binary
fn klingon_site() -> Command {
    cargo_bin_cmd!("klingon-site")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        klingon_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--out"))
            .stdout(predicate::str::contains("--year"));
    }

    #[test]
    fn shows_version() {
        klingon_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn check_validates_catalog_without_writing() {
        let temp = TempDir::new().expect("temp dir");
        klingon_site()
            .current_dir(temp.path())
            .arg("--check")
            .assert()
            .success();
        assert!(!temp.path().join("dist").exists());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn writes_page_to_requested_path() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public").join("index.html");

        klingon_site()
            .current_dir(temp.path())
            .args(["--year", "2371", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("rendered page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("2371 Learn Klingon"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn default_run_writes_dist_index() {
        let temp = TempDir::new().expect("temp dir");

        klingon_site()
            .current_dir(temp.path())
            .assert()
            .success();

        let out = temp.path().join("dist").join("index.html");
        assert!(out.exists(), "default output missing");
        let html = std::fs::read_to_string(&out).expect("rendered page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("class=\"feature-card\""));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn uses_config_output_and_lang() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("site.toml"),
            "lang = \"tlh\"\n\n[output]\npath = \"site/index.html\"\n",
        )
        .expect("write config");

        klingon_site()
            .current_dir(temp.path())
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("site/index.html"))
            .expect("rendered page");
        assert!(html.contains("<html lang=\"tlh\""));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("site.toml"), "lang = [").expect("write config");

        klingon_site()
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }
}
