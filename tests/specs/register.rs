//! Behavioral specs for `bulletin register`.

use crate::prelude::*;

/// > Registering creates the roster file
#[test]
fn register_creates_roster() {
    let project = Project::empty();

    bulletin_cmd()
        .args(["register", "--name", "Maria  Silva", "--registration", "123.456-7"])
        .args(["--unit", "3BPM", "--channel", "1001"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("Registered MARIA SILVA (1 entries)\n");

    bulletin_cmd()
        .args(["message", "mat 1234567"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("MARIA SILVA (page 1)"));
}

/// > Registering an existing name replaces the entry
#[test]
fn register_same_name_updates_entry() {
    let project = Project::with_roster();

    bulletin_cmd()
        .args(["register", "--name", "maria silva", "--registration", "999", "--channel", "2002"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("Updated MARIA SILVA (3 entries)\n");

    let roster = project.read("roster.toml");
    assert!(roster.contains("2002"));
    assert!(!roster.contains("1001"));
}

/// > A blank channel is rejected and the roster is left untouched
#[test]
fn register_blank_channel_rejected() {
    let project = Project::empty();

    bulletin_cmd()
        .args(["register", "--name", "Maria Silva", "--registration", "1", "--channel", " "])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("registration rejected"));

    assert!(!project.path().join("roster.toml").exists());
}
