use clap::Parser;
use geosave::cli::{self, Cli};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    if let Err(err) = geosave::init(cli.verbose) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match cli::commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
