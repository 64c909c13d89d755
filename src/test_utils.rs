//! 测试工具模块
//!
//! 提供统一的测试环境管理：环境变量守卫、临时项目目录、
//! 记录调用的假命令执行器和固定身份。

use crate::application::services::Bootstrapper;
use crate::application::steps::StepContext;
use crate::domain::error::Result;
use crate::domain::models::Platform;
use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec, IdentityProvider};
use crate::infrastructure::config::BootstrapConfig;
use crate::infrastructure::console::Console;
use crate::infrastructure::paths::Workspace;
use crate::infrastructure::process::ProcessRunner;
use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use tempfile::TempDir;

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        // 首先移除所有不在原始环境中的变量
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        // 然后恢复所有原始变量的值
        for (key, value) in &self.original_vars {
            if env::var(key).ok().as_ref() != Some(value) {
                self.set_var(key, value);
            }
        }
    }
}

/// 临时项目目录
pub struct TempProject {
    temp_dir: TempDir,
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TempProject {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// 写入文件（自动创建父目录）
    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn dir(&self, relative: &str) {
        std::fs::create_dir_all(self.path().join(relative)).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path().join(relative).exists()
    }
}

/// 记录调用的假命令执行器
///
/// 默认所有命令成功；`fail_on` 让命令行包含指定片段的调用以非零码退出。
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<String>>,
    failures: RefCell<Vec<(String, String)>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, fragment: &str, stderr: &str) {
        self.failures
            .borrow_mut()
            .push((fragment.to_string(), stderr.to_string()));
    }

    /// 已执行的命令行
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let line = spec.to_string();
        self.calls.borrow_mut().push(line.clone());

        let failure = self
            .failures
            .borrow()
            .iter()
            .find(|(fragment, _)| line.contains(fragment.as_str()))
            .map(|(_, stderr)| stderr.clone());

        Ok(match failure {
            Some(stderr) => CommandOutput {
                success: false,
                code: Some(1),
                stdout: String::new(),
                stderr,
            },
            None => CommandOutput {
                success: true,
                code: Some(0),
                ..CommandOutput::default()
            },
        })
    }
}

/// 只把 git 交给真实进程，其余命令视为成功
pub struct GitOnlyRunner {
    git: ProcessRunner,
    fake: RecordingRunner,
}

impl GitOnlyRunner {
    pub fn new(git: ProcessRunner) -> Self {
        Self {
            git,
            fake: RecordingRunner::new(),
        }
    }
}

impl CommandRunner for GitOnlyRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        if spec.program == "git" {
            self.git.run(spec)
        } else {
            self.fake.run(spec)
        }
    }
}

/// 固定身份
pub struct FixedIdentity(pub String);

impl IdentityProvider for FixedIdentity {
    fn username(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// 单个步骤或整个服务的测试夹具
pub struct Harness {
    pub project: TempProject,
    pub workspace: Workspace,
    pub config: BootstrapConfig,
    pub runner: RecordingRunner,
    pub identity: FixedIdentity,
    pub platform: Platform,
}

impl Harness {
    pub fn new() -> Self {
        let project = TempProject::new();
        let workspace = Workspace::new(project.path());
        Self {
            project,
            workspace,
            config: BootstrapConfig::default(),
            runner: RecordingRunner::new(),
            identity: FixedIdentity("tester".to_string()),
            platform: Platform::Unix,
        }
    }

    /// 步骤上下文
    pub fn ctx(&self) -> StepContext<'_> {
        StepContext {
            config: &self.config,
            workspace: &self.workspace,
            runner: &self.runner,
            identity: &self.identity,
            platform: self.platform,
            console: Console::quiet(),
        }
    }

    pub fn bootstrapper(&self) -> Bootstrapper<'_> {
        Bootstrapper::new(
            self.config.clone(),
            self.workspace.clone(),
            &self.runner,
            &self.identity,
            Console::quiet(),
        )
        .with_platform(self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("BOOTSTRAP_TEST_CLEANUP_VAR", "cleanup_test");
            assert_eq!(env::var("BOOTSTRAP_TEST_CLEANUP_VAR").unwrap(), "cleanup_test");
        }
        // guard 被释放后，变量应该被清理
        assert!(env::var("BOOTSTRAP_TEST_CLEANUP_VAR").is_err());
    }

    #[test]
    fn test_recording_runner_scripted_failure() {
        let runner = RecordingRunner::new();
        runner.fail_on("remote remove", "No such remote");

        let ok = runner.run(&CommandSpec::new("git", ["init"])).unwrap();
        let failed = runner
            .run(&CommandSpec::new("git", ["remote", "remove", "origin"]))
            .unwrap();

        assert!(ok.success);
        assert!(!failed.success);
        assert_eq!(failed.stderr, "No such remote");
        assert_eq!(runner.commands(), vec!["git init", "git remote remove origin"]);
    }
}
