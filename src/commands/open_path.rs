/*!
 * 系统默认程序打开命令
 *
 * 将文件或目录交给操作系统的默认关联程序打开。
 */

use crate::commands::error::CommandError;
use crate::commands::fs_ops::resolve;
use std::path::Path;
use tracing::info;

/// 用默认程序打开文件
pub async fn open_file(base: &Path, target: &str) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    if !path.is_file() {
        return Err(CommandError::FileNotFound(target.to_string()));
    }
    open::that(&path)?;

    info!("已打开文件: {}", path.display());
    Ok(format!("Opened file {}", target))
}

/// 用文件管理器打开目录
pub async fn open_folder(base: &Path, target: &str) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    if !path.is_dir() {
        return Err(CommandError::FolderNotFound(target.to_string()));
    }
    open::that(&path)?;

    info!("已打开目录: {}", path.display());
    Ok(format!("Opened folder {}", target))
}
