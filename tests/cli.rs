use assert_cmd::Command;

mod common;

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.arg("-V");
    cmd.assert()
        .success()
        .stdout(predicates::str::starts_with("gpxrte "));
}

// pull-atomic subcommand tests

#[test]
fn pull_atomic_writes_one_file_per_segment() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("rides.gpx");
    common::write_document(
        &input,
        &[
            common::route_xml(Some("commute"), &[(50.0, 8.0), (50.1, 8.1)]),
            common::route_xml(Some("evening loop"), &[(51.0, 9.0), (51.1, 9.1)]),
        ],
    );

    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.arg("pull-atomic").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Wrote 2 segment file(s)"));

    assert!(temp.path().join("commute__atomic.gpx").is_file());
    assert!(temp.path().join("evening loop__atomic.gpx").is_file());
}

#[test]
fn pull_atomic_single_segment_by_index() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("rides.gpx");
    common::write_document(
        &input,
        &[
            common::route_xml(Some("commute"), &[(50.0, 8.0), (50.1, 8.1)]),
            common::route_xml(Some("evening loop"), &[(51.0, 9.0), (51.1, 9.1)]),
        ],
    );

    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.args(["pull-atomic", "--segment", "1"]).arg(&input);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Wrote 1 segment file(s)"));

    assert!(!temp.path().join("commute__atomic.gpx").exists());
    assert!(temp.path().join("evening loop__atomic.gpx").is_file());
}

// pull-distance subcommand tests

#[test]
fn pull_distance_reports_zero_for_short_route() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("short.gpx");
    common::write_document(
        &input,
        &[common::route_xml(
            Some("short"),
            &common::equator_points(3, 50.0),
        )],
    );

    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.arg("pull-distance")
        .arg(&input)
        .args(["--segment", "0", "--meters", "5000"])
        .arg("--out")
        .arg(temp.path().join("piece.gpx"));
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Wrote 0 segment file(s)"));
}

#[test]
fn pull_distance_rejects_non_positive_budget() {
    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.args([
        "pull-distance",
        "whatever.gpx",
        "--segment",
        "0",
        "--out",
        "out.gpx",
        "--meters=-10",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("positive distance"));
}

// pull-coord subcommand tests

#[test]
fn pull_coord_requires_complete_coordinate_pairs() {
    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.args([
        "pull-coord",
        "whatever.gpx",
        "--segment",
        "0",
        "--begin-lat",
        "50.0",
        "--out",
        "out.gpx",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("--begin-lon"));
}

// set-name subcommand tests

#[test]
fn set_name_rewrites_segment_name_in_place() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("rides.gpx");
    common::write_document(
        &input,
        &[common::route_xml(Some("old name"), &[(50.0, 8.0), (50.1, 8.1)])],
    );

    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.arg("set-name")
        .arg(&input)
        .args(["--segment", "0", "--name", "new name"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Renamed segment 0"));

    let rewritten = std::fs::read_to_string(&input).expect("read rewritten file");
    assert!(rewritten.contains("<name>new name</name>"));
    assert!(!rewritten.contains("old name"));
}

// error reporting

#[test]
fn missing_input_file_fails_with_no_document() {
    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.args(["pull-atomic", "does_not_exist.gpx"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("no loadable GPX document"));
}

#[test]
fn out_of_range_segment_index_fails() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let input = temp.path().join("rides.gpx");
    common::write_document(
        &input,
        &[common::route_xml(Some("only"), &[(50.0, 8.0), (50.1, 8.1)])],
    );

    let mut cmd = Command::cargo_bin("gpxrte").unwrap();
    cmd.args(["pull-atomic", "--segment", "5"]).arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("segment index 5 out of range"));
}
