use std::fs;
use std::path::Path;

use lexfetch_config::Config;

use crate::backup;

fn test_config(dir: &Path) -> Config {
    Config {
        app_id: "id".to_string(),
        app_key: "key".to_string(),
        lang: "en-gb".to_string(),
        base_url: "http://localhost".to_string(),
        in_file: dir.join("words.txt"),
        out_file: dir.join("definitions.txt"),
        error_file: dir.join("errors.txt"),
        divider: ";".to_string(),
        throttle_secs: 0,
    }
}

#[test]
fn stamped_name_keeps_extension() {
    let stamped = backup::stamped_name(Path::new("/tmp/definitions.txt"), "20260830-120000");
    assert_eq!(
        stamped,
        Path::new("/tmp/definitions_20260830-120000.txt")
    );
}

#[test]
fn stamped_name_without_extension_appends_suffix() {
    let stamped = backup::stamped_name(Path::new("/tmp/wordlist"), "20260830-120000");
    assert_eq!(stamped, Path::new("/tmp/wordlist_20260830-120000"));
}

#[test]
fn backup_renames_leftover_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path());

    fs::write(&config.out_file, "old results\n").expect("write out file");
    fs::write(&config.error_file, "old errors\n").expect("write error file");

    backup::backup_previous(&config).expect("backup");

    assert!(!config.out_file.exists());
    assert!(!config.error_file.exists());

    let backups: Vec<String> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(backups.len(), 2);
    assert!(backups.iter().any(|n| n.starts_with("definitions_") && n.ends_with(".txt")));
    assert!(backups.iter().any(|n| n.starts_with("errors_") && n.ends_with(".txt")));
}

#[test]
fn backup_is_a_no_op_without_leftovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path());

    backup::backup_previous(&config).expect("backup");

    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
}
