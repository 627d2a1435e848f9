/*!
 * 命令类型定义
 *
 * 每个网关命令对应一个枚举成员，携带规范名称与必需参数表。
 * 新增命令时在这里补充成员，match 的穷尽性检查会强制所有
 * 分发逻辑同步更新。
 */

use std::collections::HashMap;

/// 网关支持的命令类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Process,
    ShutDown,
    Restart,
    ShowFiles,
    CreateFile,
    CreateFolder,
    RemoveFile,
    RemoveFolder,
    CopyFile,
    CopyFolder,
    OpenFile,
    OpenFolder,
    ReadFile,
    Network,
}

impl CommandKind {
    /// 全部命令成员
    pub const ALL: [CommandKind; 14] = [
        CommandKind::Process,
        CommandKind::ShutDown,
        CommandKind::Restart,
        CommandKind::ShowFiles,
        CommandKind::CreateFile,
        CommandKind::CreateFolder,
        CommandKind::RemoveFile,
        CommandKind::RemoveFolder,
        CommandKind::CopyFile,
        CommandKind::CopyFolder,
        CommandKind::OpenFile,
        CommandKind::OpenFolder,
        CommandKind::ReadFile,
        CommandKind::Network,
    ];

    /// 从命令名称解析，调用方需保证名称已转为小写
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "process" => Some(Self::Process),
            "shut down" => Some(Self::ShutDown),
            "restart" => Some(Self::Restart),
            "show files" => Some(Self::ShowFiles),
            "create file" => Some(Self::CreateFile),
            "create folder" => Some(Self::CreateFolder),
            "remove file" => Some(Self::RemoveFile),
            "remove folder" => Some(Self::RemoveFolder),
            "copy file" => Some(Self::CopyFile),
            "copy folder" => Some(Self::CopyFolder),
            "open file" => Some(Self::OpenFile),
            "open folder" => Some(Self::OpenFolder),
            "read file" => Some(Self::ReadFile),
            "network" => Some(Self::Network),
            _ => None,
        }
    }

    /// 命令的规范名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::ShutDown => "shut down",
            Self::Restart => "restart",
            Self::ShowFiles => "show files",
            Self::CreateFile => "create file",
            Self::CreateFolder => "create folder",
            Self::RemoveFile => "remove file",
            Self::RemoveFolder => "remove folder",
            Self::CopyFile => "copy file",
            Self::CopyFolder => "copy folder",
            Self::OpenFile => "open file",
            Self::OpenFolder => "open folder",
            Self::ReadFile => "read file",
            Self::Network => "network",
        }
    }

    /// 必需参数表，顺序即缺参提示中的列出顺序
    pub fn required_args(&self) -> &'static [&'static str] {
        match self {
            Self::Process
            | Self::ShowFiles
            | Self::CreateFile
            | Self::CreateFolder
            | Self::RemoveFile
            | Self::RemoveFolder
            | Self::OpenFile
            | Self::OpenFolder
            | Self::ReadFile => &["target"],
            Self::CopyFile | Self::CopyFolder => &["source", "destination"],
            Self::ShutDown | Self::Restart | Self::Network => &[],
        }
    }

    /// 列出缺失的必需参数，保持声明顺序
    pub fn missing_args(&self, args: &HashMap<String, String>) -> Vec<&'static str> {
        self.required_args()
            .iter()
            .filter(|name| !args.contains_key(**name))
            .copied()
            .collect()
    }
}
