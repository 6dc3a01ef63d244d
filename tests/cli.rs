use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn danger_pep8() -> Command {
    Command::cargo_bin("danger-pep8").unwrap()
}

/// Drop a fake flake8 on PATH that answers both the full report and the
/// count invocation.
#[cfg(unix)]
fn stub_flake8(bin_dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let script = "#!/bin/sh\n\
                  case \"$*\" in\n\
                    *--count*) echo \"10\" ;;\n\
                    *) echo \"./tests/test_matcher.py:90:9: E128 continuation line under-indented for visual indent\" ;;\n\
                  esac\n";

    let path = bin_dir.join("flake8");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
fn stub_path(bin_dir: &Path) -> String {
    format!(
        "{}:{}",
        bin_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

#[test]
fn schema_prints_config_schema() {
    danger_pep8()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("base_dir"))
        .stdout(predicate::str::contains("threshold"));
}

#[test]
fn lint_is_a_silent_noop_when_flake8_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("danger-pep8.yaml");
    fs::write(&config_path, "flake8:\n  binary: no-such-linter-xyzzy\n").unwrap();

    danger_pep8()
        .current_dir(dir.path())
        .args(["lint", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let md = fs::read_to_string(dir.path().join("out/report.md")).unwrap();
    assert_eq!(md, "*No issues*\n");
}

#[test]
fn malformed_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("danger-pep8.yaml"), "threshold: [not an int\n").unwrap();

    danger_pep8()
        .current_dir(dir.path())
        .arg("lint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[cfg(unix)]
#[test]
fn lint_reports_a_markdown_table() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["lint", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## DangerPep8 found issues"))
        .stdout(predicate::str::contains(
            "| ./tests/test_matcher.py | 90 | 9 | E128 continuation line under-indented for visual indent |",
        ));

    let json = fs::read_to_string(dir.path().join("out/report.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(document["markdowns"].as_array().unwrap().len(), 1);
    assert!(document["warnings"].as_array().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn lint_resolves_github_links() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());
    fs::write(
        dir.path().join("danger-pep8.yaml"),
        "provider: github\ngithub:\n  repo: acme/widgets\n  ref: main\n",
    )
    .unwrap();

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["lint", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[test_matcher.py](https://github.com/acme/widgets/blob/main/tests/test_matcher.py#L90)",
        ));
}

#[cfg(unix)]
#[test]
fn lint_inline_prints_messages_only() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["lint", "--inline", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "E128 continuation line under-indented for visual indent",
        ))
        .stdout(predicate::str::contains("DangerPep8 found issues").not());
}

#[cfg(unix)]
#[test]
fn lint_below_threshold_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["lint", "--threshold", "5", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn lint_fail_on_issues_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["lint", "--fail-on-issues", "--report-dir", "out"])
        .assert()
        .failure()
        .code(1);
}

#[cfg(unix)]
#[test]
fn count_warns_with_the_total() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["count", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "10 PEP 8 issues found. Swallow your pride and fix them.",
        ));
}

#[cfg(unix)]
#[test]
fn count_below_threshold_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    stub_flake8(dir.path());

    danger_pep8()
        .current_dir(dir.path())
        .env("PATH", stub_path(dir.path()))
        .args(["count", "--threshold", "20", "--report-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PEP 8 issues found").not());
}
