//! Behavioral specs for `bulletin check`.

use crate::prelude::*;

const PAGE_ONE: &str = "BOLETIM GERAL Nº 42 - 10 de março\nExpediente do dia";
const PAGE_TWO: &str = "Promoção de MARIA SILVA ao posto.\nTransferência mat. 7654321 para o 1BPM.";
const PAGE_THREE: &str = "Elogio a Ana Souza.\nNovamente MARIA SILVA.";

fn sorted(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().collect();
    values.sort();
    values
}

// =============================================================================
// Delivery
// =============================================================================

/// > One message per recipient channel lands in the outbox
#[test]
fn check_deliver_writes_one_record_per_channel() {
    let project = Project::with_roster();
    project.bulletin("bg42.txt", &[PAGE_ONE, PAGE_TWO, PAGE_THREE]);

    bulletin_cmd()
        .args(["check", "bg42.txt", "--deliver", "out/outbox.jsonl", "--no-color"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with("BOLETIM GERAL Nº 42 - 10 de março\n"))
        .stdout(predicates::str::contains("2 mentioned:"))
        .stdout(predicates::str::contains("MARIA SILVA (page 2)"))
        .stdout(predicates::str::contains("PASS: 2 notified"));

    let records = project.outbox("out/outbox.jsonl");
    let channels = sorted(records.iter().map(|r| r["channel"].as_str().unwrap().to_string()));
    assert_eq!(channels, vec!["1001", "1002"]);
}

/// > The first span that mentions a recipient provides the excerpt
#[test]
fn check_first_page_wins_and_shared_channel_collapses() {
    let project = Project::with_roster();
    project.bulletin("bg42.txt", &[PAGE_ONE, PAGE_TWO, PAGE_THREE]);

    bulletin_cmd()
        .args(["check", "bg42.txt", "--deliver", "outbox.jsonl"])
        .current_dir(project.path())
        .assert()
        .success();

    let records = project.outbox("outbox.jsonl");
    let maria = records.iter().find(|r| r["channel"] == "1001").unwrap();
    let maria = maria["text"].as_str().unwrap();
    assert!(maria.starts_with("Hello, MARIA SILVA!"));
    assert!(maria.contains("Promoção de MARIA SILVA"));
    assert!(!maria.contains("Novamente"));
    assert!(maria.contains("BOLETIM GERAL Nº 42 - 10 de março"));
    assert!(maria.ends_with("Full bulletin: https://www.pm.pb.gov.br/boletins"));

    let shared = records.iter().find(|r| r["channel"] == "1002").unwrap();
    assert!(shared["text"].as_str().unwrap().starts_with("Hello, JOAO SOUZA!"));
}

/// > Without --deliver, messages are previewed on stdout
#[test]
fn check_dry_run_prints_messages() {
    let project = Project::with_roster();
    project.bulletin("bg42.txt", &[PAGE_ONE, PAGE_TWO]);

    bulletin_cmd()
        .args(["check", "bg42.txt", "--dry-run"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("--- to 1001 ---"))
        .stdout(predicates::str::contains("Hello, MARIA SILVA!"))
        .stdout(predicates::str::contains("Excerpt:\n...Promoção de MARIA SILVA"));

    assert!(!project.path().join("outbox.jsonl").exists());
}

/// > --deliver and --dry-run cannot be combined
#[test]
fn check_deliver_conflicts_with_dry_run() {
    let project = Project::with_roster();
    project.bulletin("bg42.txt", &[PAGE_ONE]);

    bulletin_cmd()
        .args(["check", "bg42.txt", "--deliver", "o.jsonl", "--dry-run"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("cannot be used with"));
}

// =============================================================================
// Outcomes
// =============================================================================

/// > A document nobody is mentioned in succeeds without sending
#[test]
fn check_no_matches_sends_nothing() {
    let project = Project::with_roster();
    project.bulletin("bg43.txt", &["BOLETIM Nº 43\nNada consta."]);

    bulletin_cmd()
        .args(["check", "bg43.txt", "--deliver", "outbox.jsonl"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No registered person mentioned."));

    assert!(project.outbox("outbox.jsonl").is_empty());
}

/// > An empty document is an extraction failure, exit code 2
#[test]
fn check_empty_document_is_extraction_failure() {
    let project = Project::with_roster();
    project.file("blank.txt", "  \n\x0c\n");

    bulletin_cmd()
        .args(["check", "blank.txt", "--no-color"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains("FAIL: could not extract text"));
}

/// > Undecodable pages are an extraction failure, nothing is sent
#[test]
fn check_undecodable_document_is_extraction_failure() {
    let project = Project::with_roster();
    std::fs::write(project.path().join("binary.txt"), b"MARIA SILVA\x0c\xff\xfe").unwrap();

    bulletin_cmd()
        .args(["check", "binary.txt", "--deliver", "outbox.jsonl", "--no-color"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains("page 2"));

    assert!(project.outbox("outbox.jsonl").is_empty());
}

/// > A missing document is an error
#[test]
fn check_missing_file_fails() {
    let project = Project::with_roster();

    bulletin_cmd()
        .args(["check", "nope.txt"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

/// > JSON output exposes the outcome flags
#[test]
fn check_json_output() {
    let project = Project::with_roster();
    project.bulletin("bg42.txt", &[PAGE_ONE, PAGE_TWO]);

    let output = bulletin_cmd()
        .args(["check", "bg42.txt", "-o", "json"])
        .current_dir(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "dispatched");
    assert_eq!(value["no_matches"], false);
    assert_eq!(value["extraction_failed"], false);
    let notified = sorted(
        value["notified_identities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string()),
    );
    assert_eq!(notified, vec!["JOAO SOUZA", "MARIA SILVA"]);

    // Dry-run previews go to stderr so stdout stays valid JSON
    assert!(String::from_utf8_lossy(&output.stderr).contains("--- to 1001 ---"));
}

// =============================================================================
// Configuration
// =============================================================================

/// > Header label and message limit come from bulletin.toml
#[test]
fn check_uses_config_label_and_limit() {
    let project = Project::with_roster();
    project.file(
        "bulletin.toml",
        "version = 1\n\n[header]\nlabel = \"EDITAL\"\n\n[notify]\nmax_message_chars = 60\n",
    );
    project.bulletin("edital.txt", &["EDITAL Nº 7 de 2026\nConvocado: MARIA SILVA"]);

    bulletin_cmd()
        .args(["check", "edital.txt", "--deliver", "outbox.jsonl", "--no-color"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with("EDITAL Nº 7 de 2026\n"));

    let records = project.outbox("outbox.jsonl");
    assert_eq!(records.len(), 1);
    let text = records[0]["text"].as_str().unwrap();
    assert_eq!(text.chars().count(), 60);
    assert!(text.ends_with("\n..."));
}

/// > A bulletin without a caption line gets the fallback header
#[test]
fn check_fallback_header() {
    let project = Project::with_roster();
    project.bulletin("nohead.txt", &["Portaria sobre MARIA SILVA"]);

    bulletin_cmd()
        .args(["check", "nohead.txt", "--deliver", "outbox.jsonl", "--no-color"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Bulletin (number not identified)\n"));
}

/// > --roster overrides the roster next to the config
#[test]
fn check_roster_flag_overrides_default() {
    let project = Project::empty();
    project.file("people/team.toml", ROSTER);
    project.bulletin("bg42.txt", &[PAGE_ONE, PAGE_TWO]);

    bulletin_cmd()
        .args(["check", "bg42.txt", "-R", "people/team.toml", "--no-color"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("2 mentioned:"));
}
