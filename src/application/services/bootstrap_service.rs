//! 引导服务
//!
//! 把有序步骤列表折叠成一次运行：步骤严格顺序执行，第 N 步失败时第 N+1 步
//! 不会被尝试，唯一的例外是 [`FailurePolicy::Tolerate`] 步骤。没有回滚，没有重试。

use crate::application::steps::{
    self, FailurePolicy, GenerateDocs, Step, StepContext, StepOutcome,
};
use crate::domain::error::Result;
use crate::domain::models::{Platform, ProjectInputs};
use crate::domain::ports::{CommandRunner, IdentityProvider};
use crate::infrastructure::config::BootstrapConfig;
use crate::infrastructure::console::Console;
use crate::infrastructure::paths::Workspace;
use serde::Serialize;

/// 单步执行状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Done,
    Skipped(String),
    /// 失败但按策略被忽略
    Tolerated(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub name: &'static str,
    pub status: StepStatus,
}

/// 一次成功运行的记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepRecord>,
}

impl RunReport {
    pub fn status_of(&self, name: &str) -> Option<&StepStatus> {
        self.steps.iter().find(|r| r.name == name).map(|r| &r.status)
    }
}

/// 引导服务
pub struct Bootstrapper<'a> {
    config: BootstrapConfig,
    workspace: Workspace,
    runner: &'a dyn CommandRunner,
    identity: &'a dyn IdentityProvider,
    platform: Platform,
    console: Console,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(
        config: BootstrapConfig,
        workspace: Workspace,
        runner: &'a dyn CommandRunner,
        identity: &'a dyn IdentityProvider,
        console: Console,
    ) -> Self {
        Self {
            config,
            workspace,
            runner,
            identity,
            platform: Platform::current(),
            console,
        }
    }

    /// 覆盖宿主平台
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    fn context(&self) -> StepContext<'_> {
        StepContext {
            config: &self.config,
            workspace: &self.workspace,
            runner: self.runner,
            identity: self.identity,
            platform: self.platform,
            console: self.console,
        }
    }

    /// 完整引导：先校验输入，再执行标准步骤序列
    ///
    /// 输入校验失败时不会产生任何副作用。
    pub fn run(&self, name: &str, repo_url: &str) -> Result<RunReport> {
        let inputs = ProjectInputs::new(name, repo_url)?;
        let steps = steps::standard_pipeline(&inputs, &self.config);
        self.execute(&steps)
    }

    /// 只生成文档
    pub fn build_docs(&self) -> Result<RunReport> {
        let steps: [Box<dyn Step>; 1] = [Box::new(GenerateDocs)];
        self.execute(&steps)
    }

    /// 顺序执行步骤，遇到第一个中止型失败即返回
    pub fn execute(&self, steps: &[Box<dyn Step>]) -> Result<RunReport> {
        let ctx = self.context();

        steps.iter().try_fold(RunReport::default(), |mut report, step| {
            self.console.trace(&format!("→ {}", step.name()));

            let status = match (step.run(&ctx), step.policy()) {
                (Ok(StepOutcome::Done), _) => StepStatus::Done,
                (Ok(StepOutcome::Skipped(reason)), _) => {
                    self.console.skipped(&reason);
                    StepStatus::Skipped(reason)
                }
                (Err(e), FailurePolicy::Tolerate) => {
                    self.console
                        .trace(&format!("{} 失败（已忽略）: {}", step.name(), e));
                    StepStatus::Tolerated(e.to_string())
                }
                (Err(e), FailurePolicy::Abort) => return Err(e),
            };

            report.steps.push(StepRecord {
                name: step.name(),
                status,
            });
            Ok(report)
        })
    }
}
