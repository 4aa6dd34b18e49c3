use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn month_keys(path: &Path) -> Vec<String> {
    let raw = fs::read_to_string(path).expect("read month json");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("parse month json");
    doc.as_object()
        .expect("month object")
        .keys()
        .cloned()
        .collect()
}

fn day_len(path: &Path, day: &str) -> usize {
    let raw = fs::read_to_string(path).expect("read month json");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("parse month json");
    doc[day].as_array().expect("day records").len()
}

#[test]
fn convert_merges_daily_csv_files_into_one_month_document() {
    let tmp = tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("mkdir data");
    fs::write(data_dir.join("2025_12_01.csv"), "name,score\nalice,1\nbob,2\n")
        .expect("write day 1");
    fs::write(
        data_dir.join("2025_12_02.csv"),
        "name,score\nalice,3\nbob,4\ncarol,5\n",
    )
    .expect("write day 2");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2025_12")
        .arg("--keep-sources")
        .assert()
        .success();

    let month_path = data_dir.join("2025_12.json");
    assert_eq!(month_keys(&month_path), ["2025_12_01", "2025_12_02"]);
    assert_eq!(day_len(&month_path, "2025_12_01"), 2);
    assert_eq!(day_len(&month_path, "2025_12_02"), 3);

    // Re-supplying one day replaces that day wholesale and leaves the
    // other untouched.
    fs::write(
        data_dir.join("2025_12_01.csv"),
        "name,score\na,1\nb,2\nc,3\nd,4\n",
    )
    .expect("rewrite day 1");
    fs::remove_file(data_dir.join("2025_12_02.csv")).expect("remove day 2");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2025_12")
        .arg("--keep-sources")
        .assert()
        .success();

    assert_eq!(month_keys(&month_path), ["2025_12_01", "2025_12_02"]);
    assert_eq!(day_len(&month_path, "2025_12_01"), 4);
    assert_eq!(day_len(&month_path, "2025_12_02"), 3);
}

#[test]
fn convert_deletes_sources_once_confirmed() {
    let tmp = tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("mkdir data");
    let source = data_dir.join("2026_01_05.csv");
    fs::write(&source, "name\nalice\n").expect("write source");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2026_01")
        .assert()
        .success();

    assert!(!source.exists());
    assert!(data_dir.join("2026_01.json").exists());
}

#[test]
fn convert_menu_accepts_a_numeric_selection() {
    let tmp = tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("mkdir data");
    let source = data_dir.join("2025_12_01.csv");
    fs::write(&source, "name\nalice\n").expect("write source");

    // "1" picks the only month; the cleanup and index prompts then hit end
    // of input, which declines both.
    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("convert")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("available months:"));

    assert!(data_dir.join("2025_12.json").exists());
    assert!(source.exists());
    assert!(!tmp.path().join("files.json").exists());
}

#[test]
fn convert_without_matching_files_fails() {
    let tmp = tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("mkdir data");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2099_01")
        .assert()
        .failure();
}

#[test]
fn convert_without_a_data_directory_fails_before_writing() {
    let tmp = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2025_12")
        .assert()
        .failure()
        .stderr(predicates::str::contains("data directory not found"));
}

#[test]
fn files_without_a_day_key_are_skipped_not_fatal() {
    let tmp = tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("mkdir data");
    fs::write(data_dir.join("2025_12_01.csv"), "name\nalice\n").expect("write day");
    fs::write(data_dir.join("summary.csv"), "name\nbob\n").expect("write stray");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2025_12")
        .arg("--keep-sources")
        .assert()
        .success()
        .stderr(predicates::str::contains("DAY_KEY_MISMATCH"));

    let month_path = data_dir.join("2025_12.json");
    assert_eq!(month_keys(&month_path), ["2025_12_01"]);
    assert!(data_dir.join("summary.csv").exists());
}

#[test]
fn shift_jis_sources_decode_through_the_candidate_list() {
    let tmp = tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(&data_dir).expect("mkdir data");
    // "名前\nテスト\n" in Shift_JIS.
    let body: &[u8] = b"\x96\xbc\x91\x4f\n\x83\x65\x83\x58\x83\x67\n";
    fs::write(data_dir.join("2025_12_01.csv"), body).expect("write sjis");

    assert_cmd::cargo::cargo_bin_cmd!("monthroll")
        .current_dir(tmp.path())
        .env("MONTHROLL_ROOT", tmp.path())
        .arg("--yes")
        .arg("convert")
        .arg("2025_12")
        .arg("--keep-sources")
        .assert()
        .success();

    let raw = fs::read_to_string(data_dir.join("2025_12.json")).expect("read month json");
    assert!(raw.contains("名前"));
    assert!(raw.contains("テスト"));
}
