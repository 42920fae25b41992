#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATEGORIES: [(&str, &str, &str); 5] = [
    ("fleeting", "fleetingYYMMDD-HHMMtopic.md", "Fleeting"),
    ("literature", "literature.md", "Literature"),
    ("daily", "dailyYYMMDD.md", "Fleeting"),
    ("meeting", "meetingYYMMDDtopic.md", "Fleeting"),
    ("permanent", "permanent.md", "Permanent"),
];

fn zk_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zk").unwrap();
    cmd.env("HOME", home).env_remove("ZK_CONFIG");
    cmd
}

/// Creates a zettel tree plus a config file pointing at it. Returns the config path.
fn setup(temp: &TempDir) -> PathBuf {
    let root = temp.path().join("Zettel");
    let templates = root.join(".Templates");
    fs::create_dir_all(&templates).unwrap();

    let mut names = String::from("[Template Names]\n");
    let mut dirs = String::from("[Note Destination Directory Names]\n");
    for (key, template, folder) in CATEGORIES {
        fs::create_dir_all(root.join(folder)).unwrap();
        fs::write(
            templates.join(template),
            "# %topic%\nCreated YYYY-MM-DD A\nA note about the topic.\n",
        )
        .unwrap();
        names.push_str(&format!("{}:{}\n", key, template));
        dirs.push_str(&format!("{}:{}\n", key, folder));
    }

    let config = format!(
        "[General]\nZettelkastenPath:{}\nTemplatesDirectory:.Templates\n\n{}\n{}",
        root.display(),
        names,
        dirs
    );
    let config_path = temp.path().join("zk.conf");
    fs::write(&config_path, config).unwrap();
    config_path
}

#[test]
fn test_init_writes_default_config_to_home() {
    let temp = TempDir::new().unwrap();

    zk_cmd(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file written to"));

    let written = fs::read_to_string(temp.path().join(".zkcli")).unwrap();
    assert!(written.starts_with("[General]\nZettelkastenPath:~/Zettel\n"));
    assert!(written.contains("[Note Destination Directory Names]\n"));

    zk_cmd(temp.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_init_honors_env_config() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("custom.conf");

    zk_cmd(temp.path())
        .env("ZK_CONFIG", &target)
        .arg("init")
        .assert()
        .success();
    assert!(target.is_file());
    assert!(!temp.path().join(".zkcli").exists());
}

#[test]
fn test_missing_config_exits_with_config_code() {
    let temp = TempDir::new().unwrap();

    zk_cmd(temp.path())
        .arg("daily")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("zk init"));
}

#[test]
fn test_default_config_without_tree_is_path_error() {
    let temp = TempDir::new().unwrap();
    zk_cmd(temp.path()).arg("init").assert().success();

    zk_cmd(temp.path())
        .arg("check")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Zettel path not valid"));
}

#[test]
fn test_perm_writes_once() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);
    let note = temp.path().join("Zettel").join("Permanent").join("emergence.md");

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["perm", "emergence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note written to"))
        .stdout(predicate::str::contains("emergence.md"));

    let body = fs::read_to_string(&note).unwrap();
    assert!(body.starts_with("# emergence\nCreated "));
    assert!(body.ends_with("A note about the topic.\n"));
    assert!(!body.contains("YYYY"));

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["perm", "emergence"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_topic_required() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("lit")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_fleet_names_note_with_timestamp() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["fleet", "ideas"])
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(temp.path().join("Zettel").join("Fleeting"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    let name = &names[0];
    assert!(name.starts_with("fleeting"));
    assert!(name.ends_with("ideas.md"));
    // fleeting + YYMMDD + '-' + HHMM + ideas.md
    assert_eq!(name.len(), "fleeting".len() + 6 + 1 + 4 + "ideas.md".len());
}

#[test]
fn test_path_does_not_write() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["path", "literature", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Literature").and(predicate::str::contains("dune.md")));

    assert!(!temp
        .path()
        .join("Zettel")
        .join("Literature")
        .join("dune.md")
        .exists());
}

#[test]
fn test_check_lists_paths() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"))
        .stdout(predicate::str::contains("meetingYYMMDDtopic.md"));
}

#[test]
fn test_missing_template_named_in_error() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);
    fs::remove_file(temp.path().join("Zettel").join(".Templates").join("permanent.md")).unwrap();

    zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["perm", "x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("permanent.md"));
}

#[test]
fn test_edit_existing_note_reports_once_and_exits_with_write_code() {
    let temp = TempDir::new().unwrap();
    let config = setup(&temp);
    let note = temp.path().join("Zettel").join("Permanent").join("emergence.md");
    fs::write(&note, "kept").unwrap();

    let assert = zk_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["perm", "emergence", "--edit"])
        .write_stdin("true\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Edit file?"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("exists").count(), 1);
    assert_eq!(fs::read_to_string(&note).unwrap(), "kept");
}
