//! 命令执行错误类型
//!
//! 枚举成员的 Display 文本就是返回给调用方的失败消息，
//! 修改模板字符串会直接改变对外接口。

use thiserror::Error;

/// 命令执行错误
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Process {0} not found")]
    ProcessNotFound(String),

    #[error("Failed to terminate {0}")]
    KillFailed(String),

    #[error("Admin rights required")]
    AdminRequired,

    #[error("Path {0} not found")]
    PathNotFound(String),

    #[error("File {0} not found")]
    FileNotFound(String),

    #[error("Folder {0} not found")]
    FolderNotFound(String),

    #[error("Source file {0} not found")]
    SourceFileNotFound(String),

    #[error("Source folder {0} not found")]
    SourceFolderNotFound(String),

    #[error("Network issues")]
    NetworkUnreachable,

    #[error("shutdown command failed: {0}")]
    PowerFailure(std::process::ExitStatus),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Speech(String),
}
