/*!
 * 配置系统默认值
 *
 * 提供所有配置项的默认值和默认配置创建函数。
 */

use crate::config::types::GatewayConfig;

/// 默认 HTTP 监听地址
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

/// 默认允许执行的命令列表
pub const DEFAULT_ALLOWED_COMMANDS: &str = "process,shut down,restart,show files,create file,create folder,remove file,remove folder,copy file,copy folder,open file,open folder,read file,network";

/// 创建默认配置
pub fn create_default_config() -> GatewayConfig {
    GatewayConfig {
        listen: DEFAULT_LISTEN.to_string(),
        base_dir: String::new(),
        allowed_commands: DEFAULT_ALLOWED_COMMANDS.to_string(),
    }
}
