use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_PROJECTS: &str = r#"{"projects": []}"#;

    fn cmd() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hcloud-ssh-sync"));
        cmd.env_remove("HCLOUD_ENDPOINT").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    #[serial]
    fn test_cli_help() {
        cmd().arg("--help").assert().success().stdout(
            predicate::str::contains("--config-file")
                .and(predicate::str::contains("--ssh-config-file"))
                .and(predicate::str::contains("--marker"))
                .and(predicate::str::contains("--printonly")),
        );
    }

    #[test]
    #[serial]
    fn test_cli_version() {
        cmd().arg("--version").assert().success().stdout(predicate::str::contains("hcloud-ssh-sync"));
    }

    #[test]
    #[serial]
    fn test_missing_config_file_fails() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let ssh_config = temp_dir.child("ssh_config");
        ssh_config.write_str("Host foo\n").unwrap();

        cmd()
            .arg("--config-file")
            .arg(temp_dir.child("missing.json").path())
            .arg("--ssh-config-file")
            .arg(ssh_config.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration error"));

        ssh_config.assert("Host foo\n");
    }

    #[test]
    #[serial]
    fn test_missing_ssh_config_fails() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config = temp_dir.child("config.json");
        config.write_str(EMPTY_PROJECTS).unwrap();

        cmd()
            .arg("--config-file")
            .arg(config.path())
            .arg("--ssh-config-file")
            .arg(temp_dir.child("nope").path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read"));

        temp_dir.child("nope").assert(predicate::path::missing());
    }

    #[test]
    #[serial]
    fn test_printonly_prints_and_keeps_file() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config = temp_dir.child("config.json");
        config.write_str(EMPTY_PROJECTS).unwrap();
        let ssh_config = temp_dir.child("ssh_config");
        ssh_config.write_str("Host foo\n").unwrap();

        cmd()
            .arg("--config-file")
            .arg(config.path())
            .arg("--ssh-config-file")
            .arg(ssh_config.path())
            .arg("--marker")
            .arg("X")
            .arg("--printonly")
            .assert()
            .success()
            .stdout("Host foo\n\n\n##START X ##\n\n##END X ##\n");

        ssh_config.assert("Host foo\n");
    }

    #[test]
    #[serial]
    fn test_insert_then_replace() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config = temp_dir.child("config.json");
        config.write_str(EMPTY_PROJECTS).unwrap();
        let ssh_config = temp_dir.child("ssh_config");
        ssh_config.write_str("Host foo\n").unwrap();

        cmd()
            .arg("--config-file")
            .arg(config.path())
            .arg("--ssh-config-file")
            .arg(ssh_config.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Added new config to"));

        let after_insert = fs::read_to_string(ssh_config.path()).unwrap();
        assert_eq!(
            after_insert,
            "Host foo\n\n\n##START HCLOUD-REPLACE ##\n\n##END HCLOUD-REPLACE ##\n"
        );

        cmd()
            .arg("--config-file")
            .arg(config.path())
            .arg("--ssh-config-file")
            .arg(ssh_config.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Replaced config in"));

        ssh_config.assert(after_insert.as_str());
    }

    #[test]
    #[serial]
    fn test_home_directory_expansion() {
        let home = assert_fs::TempDir::new().unwrap();
        home.child(".ssh").create_dir_all().unwrap();
        let ssh_config = home.child(".ssh").child("config");
        ssh_config.write_str("Host foo\n").unwrap();
        let config = home.child("config.json");
        config.write_str(EMPTY_PROJECTS).unwrap();

        cmd()
            .env("HOME", home.path())
            .arg("--config-file")
            .arg(config.path())
            .arg("--ssh-config-file")
            .arg("~/.ssh/config")
            .assert()
            .success()
            .stdout(predicate::str::contains(ssh_config.path().display().to_string()));

        ssh_config.assert(predicate::str::contains("##START HCLOUD-REPLACE ##"));
    }

    #[test]
    #[serial]
    fn test_backup_flag() {
        let temp_dir = assert_fs::TempDir::new().unwrap();
        let config = temp_dir.child("config.json");
        config.write_str(EMPTY_PROJECTS).unwrap();
        let ssh_config = temp_dir.child("ssh_config");
        ssh_config.write_str("Host foo\n").unwrap();

        cmd()
            .arg("--config-file")
            .arg(config.path())
            .arg("--ssh-config-file")
            .arg(ssh_config.path())
            .arg("--backup")
            .assert()
            .success()
            .stdout(predicate::str::contains("Backup created:"));

        let backups: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("ssh_config.backup."))
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(backups[0].path()).unwrap(), "Host foo\n");
    }
}
