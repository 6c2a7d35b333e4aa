use assert_cmd::Command;

fn xatag() -> Command {
    Command::cargo_bin("xatag").unwrap()
}

#[test]
fn help_names_the_core_commands() {
    xatag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("add"))
        .stdout(predicates::str::contains("delete"))
        .stdout(predicates::str::contains("copy"))
        .stdout(predicates::str::contains("list"));
}

#[test]
fn add_requires_a_tag_and_a_file() {
    xatag().arg("add").assert().failure();
}

#[test]
fn listing_a_missing_file_fails_but_reports_the_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("no-such-file.mp3");

    xatag()
        .arg("--no-index")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .arg("list")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicates::str::contains("no-such-file.mp3"));
}

#[test]
fn a_batch_continues_past_a_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("gone.mp3");

    // delete-all on a missing file fails for that file; exit code is
    // non-zero but the error names only the bad path
    xatag()
        .arg("--no-index")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .arg("delete-all")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicates::str::contains("gone.mp3"));
}

#[test]
fn known_without_a_registry_says_so() {
    let temp_dir = tempfile::tempdir().unwrap();

    xatag()
        .arg("--config-dir")
        .arg(temp_dir.path())
        .arg("known")
        .assert()
        .success()
        .stdout(predicates::str::contains("No known-tags registry"));
}
