//! 引导步骤
//!
//! 每个步骤实现 [`Step`]，整个运行是对有序步骤列表的折叠，
//! 遇到第一个 [`FailurePolicy::Abort`] 步骤失败即停止。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Platform, ProjectInputs};
use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec, IdentityProvider};
use crate::infrastructure::config::BootstrapConfig;
use crate::infrastructure::console::Console;
use crate::infrastructure::paths::Workspace;
use serde::Serialize;

pub mod docs;
pub mod env_file;
pub mod environment;
pub mod git;
pub mod post_setup;
pub mod templates;

pub use docs::GenerateDocs;
pub use env_file::WriteEnvFile;
pub use environment::{CreateEnvironment, InstallDependencies};
pub use git::{AddRemote, CreateBranch, InitRepository, RemoveRemote};
pub use post_setup::PostSetup;
pub use templates::SubstituteTemplates;

/// 失败策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailurePolicy {
    /// 失败即终止整个运行
    Abort,
    /// 失败被忽略，继续下一步
    Tolerate,
}

/// 步骤结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    Done,
    Skipped(String),
}

/// 步骤共享的运行环境
pub struct StepContext<'a> {
    pub config: &'a BootstrapConfig,
    pub workspace: &'a Workspace,
    pub runner: &'a dyn CommandRunner,
    pub identity: &'a dyn IdentityProvider,
    pub platform: Platform,
    pub console: Console,
}

impl StepContext<'_> {
    /// 执行命令，非零退出码转换为 [`DomainError::CommandFailed`]
    pub fn run_checked(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let output = self.runner.run(spec)?;
        if !output.success {
            return Err(DomainError::CommandFailed {
                command: spec.to_string(),
                stderr: output.stderr,
            });
        }
        Ok(output)
    }
}

/// 引导步骤
pub trait Step {
    /// 稳定的步骤名，用于日志和报告
    fn name(&self) -> &'static str;

    fn policy(&self) -> FailurePolicy {
        FailurePolicy::Abort
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome>;
}

/// 完整的引导步骤序列（输入校验之后）
pub fn standard_pipeline(inputs: &ProjectInputs, config: &BootstrapConfig) -> Vec<Box<dyn Step>> {
    let mut steps: Vec<Box<dyn Step>> = Vec::new();
    steps.push(Box::new(CreateEnvironment));
    steps.push(Box::new(InstallDependencies));

    if config.generate_docs {
        steps.push(Box::new(GenerateDocs));
    }

    steps.push(Box::new(WriteEnvFile::new(inputs.name())));
    steps.push(Box::new(SubstituteTemplates::new(inputs.clone())));
    steps.push(Box::new(InitRepository));
    steps.push(Box::new(RemoveRemote));
    steps.push(Box::new(AddRemote::new(inputs.repo_url())));
    steps.push(Box::new(CreateBranch));
    steps.push(Box::new(PostSetup));

    steps
}
