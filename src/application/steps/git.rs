//! 版本控制步骤

use super::{FailurePolicy, Step, StepContext, StepOutcome};
use crate::domain::error::Result;
use crate::domain::ports::CommandSpec;

fn git<const N: usize>(args: [&str; N]) -> CommandSpec {
    CommandSpec::new("git", args)
}

/// 没有仓库标记时初始化仓库并提交全部文件
pub struct InitRepository;

impl Step for InitRepository {
    fn name(&self) -> &'static str {
        "init-repository"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        if ctx.workspace.has_repository() {
            return Ok(StepOutcome::Skipped("已存在 Git 仓库".to_string()));
        }

        ctx.console.step("正在初始化新的 Git 仓库...");
        ctx.run_checked(&git(["init"]))?;
        ctx.run_checked(&git(["add", "."]))?;
        ctx.run_checked(&git(["commit", "-m", ctx.config.commit_message.as_str()]))?;
        Ok(StepOutcome::Done)
    }
}

/// 删除已有的远程
///
/// 唯一允许失败的步骤：远程可能本来就不存在。
pub struct RemoveRemote;

impl Step for RemoveRemote {
    fn name(&self) -> &'static str {
        "remove-remote"
    }

    fn policy(&self) -> FailurePolicy {
        FailurePolicy::Tolerate
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        ctx.run_checked(&git(["remote", "remove", ctx.config.remote.as_str()]))?;
        Ok(StepOutcome::Done)
    }
}

/// 添加指向给定地址的远程
pub struct AddRemote {
    url: String,
}

impl AddRemote {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl Step for AddRemote {
    fn name(&self) -> &'static str {
        "add-remote"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        ctx.console.step(&format!("正在设置远程仓库: {}", self.url));
        ctx.run_checked(&git([
            "remote",
            "add",
            ctx.config.remote.as_str(),
            self.url.as_str(),
        ]))?;
        Ok(StepOutcome::Done)
    }
}

/// 创建并切换到固定分支；分支已存在时失败
pub struct CreateBranch;

impl Step for CreateBranch {
    fn name(&self) -> &'static str {
        "create-branch"
    }

    fn run(&self, ctx: &StepContext<'_>) -> Result<StepOutcome> {
        let branch = ctx.config.branch.as_str();
        ctx.console
            .step(&format!("正在创建并切换到 {} 分支...", branch));
        ctx.run_checked(&git(["checkout", "-b", branch]))?;
        Ok(StepOutcome::Done)
    }
}
