//! Behavioral specs for `bulletin message`.

use crate::prelude::*;

/// > Registration numbers match as whole words
#[test]
fn message_finds_registration_number() {
    let project = Project::with_roster();

    bulletin_cmd()
        .args(["message", "Favor apresentar-se: mat. 7654321, amanhã."])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("1 mentioned:"))
        .stdout(predicates::str::contains("JOAO SOUZA (page 1)"));
}

/// > Digits glued to a registration number do not match
#[test]
fn message_rejects_partial_number() {
    let project = Project::with_roster();

    bulletin_cmd()
        .args(["message", "protocolo 76543219"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("No registered person mentioned.\n");
}

/// > Matching is case-insensitive
#[test]
fn message_is_case_insensitive() {
    let project = Project::with_roster();

    bulletin_cmd()
        .args(["message", "parabéns, maria silva!"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("MARIA SILVA"));
}

/// > JSON output lists mentions with their snippets
#[test]
fn message_json_output() {
    let project = Project::with_roster();

    let output = bulletin_cmd()
        .args(["message", "3BPM em formatura", "-o", "json"])
        .current_dir(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let mentions = value["mentions"].as_array().unwrap();
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0]["identity"]["display_name"], "MARIA SILVA");
    assert_eq!(mentions[0]["snippet"], "...3BPM em formatura...");
}
