/*!
 * 配置系统数据类型定义
 *
 * 定义网关配置的数据结构，结构与 TOML 配置文件格式保持完全一致。
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// 网关主配置结构
///
/// 包含网关的所有配置项，结构与 TOML 配置文件格式保持一致。
/// 配置在进程启动时加载一次，运行期间不可变。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayConfig {
    /// HTTP 监听地址
    pub listen: String,

    /// 命令操作的基准目录，空字符串表示可执行文件所在目录
    pub base_dir: String,

    /// 允许执行的命令名称（逗号分隔）
    pub allowed_commands: String,
}

impl GatewayConfig {
    /// 解析允许命令集合
    pub fn allow_list(&self) -> AllowList {
        AllowList::parse(&self.allowed_commands)
    }

    /// 解析基准目录
    ///
    /// 空字符串使用可执行文件所在目录，获取失败时回退到当前工作目录。
    pub fn resolve_base_dir(&self) -> PathBuf {
        let trimmed = self.base_dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// 允许执行的命令集合
///
/// 集合内的名称全部为小写并去除首尾空白，成员检查在小写形式下进行。
#[derive(Debug, Clone)]
pub struct AllowList {
    entries: HashSet<String>,
}

impl AllowList {
    /// 从逗号分隔的字符串解析
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { entries }
    }

    /// 判断命令是否被允许
    pub fn contains(&self, command: &str) -> bool {
        self.entries.contains(command)
    }

    /// 集合内的命令数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
