//! bootstrap 主程序入口
//!
//! 入口代码只做参数解析和错误出口，逻辑委托给库

use clap::Parser;
use project_bootstrap::app::{AppConfig, Application};
use project_bootstrap::cli::{Cli, Commands, ConfigCommands, OutputFormat};
use project_bootstrap::commands::{
    CommandContext, CommandHandler, ConfigInitCommand, ConfigShowCommand, DocsCommand,
    DoctorCommand, InitCommand,
};
use project_bootstrap::Result;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        e.report(verbose);
        std::process::exit(1);
    }
}

/// 运行具体命令
fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext {
        verbose: cli.verbose,
    };
    let app = Application::new(AppConfig {
        verbose: cli.verbose,
        root: cli.root,
        config_path: cli.config,
    })?;

    let handler: Box<dyn CommandHandler + '_> = match cli.command.unwrap_or_default() {
        Commands::Init { skip_docs } => Box::new(InitCommand::new(&app, skip_docs)),
        Commands::Docs => Box::new(DocsCommand::new(&app)),
        Commands::Doctor => Box::new(DoctorCommand::new(&app)),
        Commands::Config(ConfigCommands::Show { format }) => Box::new(ConfigShowCommand::new(
            &app,
            OutputFormat::from(format.as_str()),
        )),
        Commands::Config(ConfigCommands::Init { force }) => {
            Box::new(ConfigInitCommand::new(&app, force))
        }
    };

    handler.execute(&ctx)
}
