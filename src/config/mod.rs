/*!
 * 统一配置系统模块
 *
 * 提供基于 TOML 格式的配置管理功能，包括配置定位、解析和
 * 默认值回退。配置在启动时加载一次，运行期间保持不可变。
 */

pub mod defaults;
pub mod loader;
pub mod types;

// 重新导出核心类型和函数
pub use defaults::{create_default_config, DEFAULT_ALLOWED_COMMANDS, DEFAULT_LISTEN};
pub use loader::{load_config, locate_config_file};
pub use types::{AllowList, GatewayConfig};

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.toml";
