//! sysbridge 命令网关后端
//!
//! 这是一个面向远程调用方的系统命令网关实现，通过单一 HTTP 端点
//! 接收预定义的系统操作请求。主要功能包括：
//! - 基于允许列表的命令过滤
//! - 命令参数校验与统一分发
//! - 进程、电源、文件系统和网络相关的命令执行

// 模块声明
pub mod commands; // 命令分发与执行器模块
pub mod config; // 统一配置系统模块
pub mod server; // HTTP 服务模块
pub mod utils; // 工具和错误处理模块

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use commands::{CommandDispatcher, Speaker, SubprocessSpeaker};
use server::GatewayServer;
use utils::error::AppResult;

/// 启动命令网关
///
/// 配置在这里加载一次，此后保持不可变：允许列表、基准目录和
/// 监听地址都来自启动时的快照，运行期间修改配置文件不会生效。
pub async fn run(config_path: Option<PathBuf>, listen_override: Option<String>) -> AppResult<()> {
    let config_file = config::locate_config_file(config_path.as_deref());
    let mut config = config::load_config(&config_file);

    if let Some(listen) = listen_override {
        config.listen = listen;
    }

    let allow_list = Arc::new(config.allow_list());
    let base_dir = config.resolve_base_dir();
    info!(
        "网关配置就绪: 监听 {}, 允许 {} 条命令, 基准目录 {}",
        config.listen,
        allow_list.len(),
        base_dir.display()
    );

    let speaker: Arc<dyn Speaker> = Arc::new(SubprocessSpeaker::new());
    let dispatcher = Arc::new(CommandDispatcher::new(base_dir, speaker));

    let server = GatewayServer::bind(&config.listen)?;
    server.serve(allow_list, dispatcher).await
}
