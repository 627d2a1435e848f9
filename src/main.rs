//! sysbridge 命令网关入口

use clap::Parser;
use std::path::PathBuf;
use sysbridge_lib::utils::init_logging;
use tracing::error;

/// 远程系统命令网关
#[derive(Parser, Debug)]
#[command(name = "sysbridge", version, about = "Remote system-command gateway over HTTP")]
struct Cli {
    /// 配置文件路径，默认查找可执行文件旁的 config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 监听地址，覆盖配置文件中的 listen 项
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 初始化日志系统
    if let Err(e) = init_logging() {
        eprintln!("日志系统初始化失败: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = sysbridge_lib::run(cli.config, cli.listen).await {
        error!("网关启动失败: {}", e);
        std::process::exit(1);
    }
}
