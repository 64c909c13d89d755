//! CLI 集成测试
//!
//! 使用 assert_cmd 进行命令行集成测试；这里只覆盖不依赖外部工具的行为

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// 创建临时测试环境
fn create_test_env() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// 在临时目录中运行 bootstrap，主目录也指向临时目录以隔离用户级配置
fn bootstrap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bootstrap").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

mod basic_commands {
    use super::*;

    #[test]
    fn test_help_command() {
        let temp_dir = create_test_env();
        bootstrap(&temp_dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("bootstrap"));
    }

    #[test]
    fn test_version_command() {
        let temp_dir = create_test_env();
        bootstrap(&temp_dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod input_validation {
    use super::*;

    #[test]
    fn test_empty_project_name_fails_without_side_effects() {
        let temp_dir = create_test_env();
        fs::write(temp_dir.path().join("README.md"), "# project-template\n").unwrap();

        bootstrap(&temp_dir)
            .write_stdin("   \nhttps://example.com/demo.git\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("项目名称不能为空"));

        assert!(!temp_dir.path().join(".env").exists());
        assert!(!temp_dir.path().join(".venv").exists());
        assert!(!temp_dir.path().join(".git").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            "# project-template\n"
        );
    }

    #[test]
    fn test_empty_url_fails() {
        let temp_dir = create_test_env();
        bootstrap(&temp_dir)
            .arg("init")
            .write_stdin("demo\n\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("仓库地址不能为空"));
    }

    #[test]
    fn test_closed_stdin_fails() {
        let temp_dir = create_test_env();
        bootstrap(&temp_dir)
            .write_stdin("")
            .assert()
            .failure()
            .code(1);
    }
}

mod config_commands {
    use super::*;

    #[test]
    fn test_config_init_writes_file_once() {
        let temp_dir = create_test_env();
        let config_file = temp_dir.path().join("bootstrap.toml");

        bootstrap(&temp_dir)
            .args(["config", "init"])
            .assert()
            .success();
        let content = fs::read_to_string(&config_file).unwrap();
        assert!(content.contains("branch = \"develop\""));
        assert!(content.contains("[placeholders]"));

        bootstrap(&temp_dir)
            .args(["config", "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));

        bootstrap(&temp_dir)
            .args(["config", "init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn test_config_show_reflects_project_file() {
        let temp_dir = create_test_env();
        fs::write(
            temp_dir.path().join("bootstrap.toml"),
            "branch = \"main\"\ngenerate_docs = false\n",
        )
        .unwrap();

        bootstrap(&temp_dir)
            .args(["config", "show", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"branch\": \"main\""))
            .stdout(predicate::str::contains("\"generate_docs\": false"))
            .stdout(predicate::str::contains("\"env_dir\": \".venv\""));
    }

    #[test]
    fn test_config_show_with_root_flag() {
        let temp_dir = create_test_env();
        let project = temp_dir.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("bootstrap.toml"), "remote = \"upstream\"\n").unwrap();

        bootstrap(&temp_dir)
            .args(["config", "show", "-C"])
            .arg(&project)
            .assert()
            .success()
            .stdout(predicate::str::contains("remote = \"upstream\""));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp_dir = create_test_env();
        fs::write(temp_dir.path().join("bootstrap.toml"), "branch = [\n").unwrap();

        bootstrap(&temp_dir)
            .args(["config", "show"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("bootstrap.toml"));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp_dir = create_test_env();
        bootstrap(&temp_dir)
            .args(["config", "show", "--config", "nope.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.toml"));
    }
}

mod doctor_command {
    use super::*;

    #[test]
    fn test_doctor_reports_without_mutating() {
        let temp_dir = create_test_env();
        fs::write(
            temp_dir.path().join(".env"),
            "# Environment variables for the project\nPROJECT_NAME=demo\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("README.md"), "# project-template\n").unwrap();

        bootstrap(&temp_dir)
            .arg("doctor")
            .assert()
            .success()
            .stdout(predicate::str::contains("PROJECT_NAME=demo"))
            .stdout(predicate::str::contains("README.md: 包含占位符"));

        assert!(!temp_dir.path().join(".git").exists());
        assert!(!temp_dir.path().join("bootstrap.toml").exists());
    }
}
