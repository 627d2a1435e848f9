/*!
 * TOML 配置加载
 *
 * 实现配置文件的定位与读取。配置在进程启动时加载一次，
 * 之后保持不可变，任何读取或解析失败都回退到默认配置。
 */

use crate::config::{defaults::create_default_config, types::GatewayConfig, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 定位配置文件
///
/// 查找顺序：
/// 1. 命令行显式指定的路径
/// 2. 可执行文件所在目录下的 config.toml
/// 3. 用户配置目录下的 sysbridge/config.toml
/// 4. 当前工作目录下的 config.toml
pub fn locate_config_file(cli_path: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("sysbridge").join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(CONFIG_FILE_NAME)
}

/// 加载配置
///
/// 配置文件不存在、读取失败或解析失败时均回退到默认配置，
/// 保证网关总能带着一份有效配置启动。
pub fn load_config(path: &Path) -> GatewayConfig {
    debug!("开始加载配置: {:?}", path);

    if !path.exists() {
        info!("配置文件不存在，使用默认配置");
        return create_default_config();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("无法读取配置文件: {}, 使用默认配置", e);
            return create_default_config();
        }
    };

    match toml::from_str::<GatewayConfig>(&content) {
        Ok(config) => {
            info!("配置文件解析成功");
            config
        }
        Err(e) => {
            warn!("配置文件解析失败: {}, 使用默认配置", e);
            create_default_config()
        }
    }
}
