// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! End-to-end tests of the cinnabar binary against real config files.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use cinnabar::config::Ecosystem;

const SAMPLE: &str = r#"
apps:
  - name: api
    script: gunicorn
    args: backend.wsgi:application --bind 0.0.0.0:8808
    interpreter: /srv/api/venv/bin/python3
    env:
      DJANGO_SETTINGS_MODULE: backend.settings
      PYTHONPATH: /srv/api
"#;

fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create tempdir");
    let path = dir.path().join("ecosystem.yaml");
    fs::write(&path, contents).expect("failed to write config");
    (dir, path)
}

fn cinnabar() -> Command {
    Command::cargo_bin("cinnabar").expect("binary should be built")
}

#[test]
fn check_accepts_a_valid_config() {
    let (_dir, path) = write_config(SAMPLE);

    cinnabar()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 1 app(s) declared"));
}

#[test]
fn check_rejects_a_config_without_interpreter() {
    let (_dir, path) = write_config(
        r#"
apps:
  - name: api
    script: gunicorn
"#,
    );

    cinnabar().arg("check").arg(&path).assert().failure();
}

#[test]
fn check_rejects_a_missing_file() {
    cinnabar()
        .arg("check")
        .arg("/nonexistent/ecosystem.yaml")
        .assert()
        .failure();
}

#[test]
fn show_output_reparses_to_the_same_config() {
    let (_dir, path) = write_config(SAMPLE);

    let output = cinnabar().arg("show").arg(&path).assert().success();
    let yaml = String::from_utf8(output.get_output().stdout.clone()).expect("stdout is utf8");

    let shown = Ecosystem::from_yaml(&yaml).expect("show output should parse");
    let original = Ecosystem::from_yaml(SAMPLE).expect("sample should parse");
    assert_eq!(shown, original);
}

#[test]
fn spawn_runs_the_declared_invocation() {
    // sh -c env: the spawned shell prints its environment, which must carry
    // the declared vars merged over the inherited ones
    let (_dir, path) = write_config(
        r#"
apps:
  - name: printer
    script: -c
    args: env
    interpreter: /bin/sh
    env:
      CINNABAR_SPAWN_TEST: it-works
"#,
    );

    cinnabar()
        .arg("spawn")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CINNABAR_SPAWN_TEST=it-works"));
}

#[test]
fn spawn_mirrors_the_child_exit_code() {
    let dir = TempDir::new().expect("failed to create tempdir");
    let script = dir.path().join("failer.sh");
    fs::write(&script, "exit 3\n").expect("failed to write script");

    let config = format!(
        r#"
apps:
  - name: failer
    script: "{}"
    interpreter: /bin/sh
"#,
        script.display()
    );
    let path = dir.path().join("ecosystem.yaml");
    fs::write(&path, config).expect("failed to write config");

    cinnabar().arg("spawn").arg(&path).assert().failure().code(3);
}

#[test]
fn spawn_requires_a_name_with_multiple_apps() {
    let (_dir, path) = write_config(
        r#"
apps:
  - name: one
    script: "true"
    interpreter: /usr/bin/env
  - name: two
    script: "true"
    interpreter: /usr/bin/env
"#,
    );

    cinnabar().arg("spawn").arg(&path).assert().failure();

    cinnabar()
        .arg("spawn")
        .arg(&path)
        .arg("--app")
        .arg("two")
        .assert()
        .success();
}
