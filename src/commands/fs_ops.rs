/*!
 * 文件系统命令
 *
 * 实现目录列举、文件与目录的创建、删除和复制。所有目标路径
 * 都相对于配置的基准目录解析，结果消息中保留调用方传入的
 * 原始路径（目录列举使用解析后的完整路径）。
 */

use crate::commands::error::CommandError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

/// 将请求中的目标路径解析到基准目录下
///
/// 目标路径先去除首尾空白再与基准目录拼接。拼接遵循
/// `PathBuf::join` 的语义：绝对路径会完整替换基准目录，
/// `..` 分段原样保留。
pub fn resolve(base: &Path, raw: &str) -> PathBuf {
    base.join(raw.trim())
}

/// 列出目录内容
pub async fn show_files(base: &Path, target: &str) -> Result<String, CommandError> {
    let path = resolve(base, target);

    if !path.is_dir() {
        return Err(CommandError::PathNotFound(path.display().to_string()));
    }

    let mut names = Vec::new();
    let mut entries = fs::read_dir(&path).await?;
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().to_string());
    }

    debug!("目录 {} 下共 {} 个条目", path.display(), names.len());
    Ok(format!("Files in {}: {}", path.display(), names.join(", ")))
}

/// 创建空文件，父目录不存在时一并创建
pub async fn create_file(base: &Path, target: &str) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&path, b"").await?;

    info!("已创建文件: {}", path.display());
    Ok(format!("Created file {}", target))
}

/// 创建目录，已存在时视为成功
pub async fn create_folder(base: &Path, target: &str) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    fs::create_dir_all(&path).await?;

    info!("已创建目录: {}", path.display());
    Ok(format!("Created folder {}", target))
}

/// 删除文件
pub async fn remove_file(base: &Path, target: &str) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    if !path.is_file() {
        return Err(CommandError::FileNotFound(target.to_string()));
    }
    fs::remove_file(&path).await?;

    info!("已删除文件: {}", path.display());
    Ok(format!("Removed file {}", target))
}

/// 删除目录及其全部内容
pub async fn remove_folder(base: &Path, target: &str) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    if !path.is_dir() {
        return Err(CommandError::FolderNotFound(target.to_string()));
    }
    fs::remove_dir_all(&path).await?;

    info!("已删除目录: {}", path.display());
    Ok(format!("Removed folder {}", target))
}

/// 复制单个文件
///
/// 目标父目录不存在时一并创建；目标是已存在的目录时，
/// 文件以源文件名复制到该目录内。
pub async fn copy_file(base: &Path, source: &str, destination: &str) -> Result<String, CommandError> {
    let source = source.trim();
    let destination = destination.trim();

    let source_path = resolve(base, source);
    if !source_path.is_file() {
        return Err(CommandError::SourceFileNotFound(source.to_string()));
    }

    let mut destination_path = resolve(base, destination);
    if destination_path.is_dir() {
        if let Some(file_name) = source_path.file_name() {
            destination_path.push(file_name);
        }
    }
    if let Some(parent) = destination_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::copy(&source_path, &destination_path).await?;

    info!(
        "已复制文件: {} -> {}",
        source_path.display(),
        destination_path.display()
    );
    Ok(format!("Copied file from {} to {}", source, destination))
}

/// 递归复制目录
///
/// 目标目录已存在时按合并方式写入，既有的无关文件保持不动，
/// 同名文件会被源内容覆盖。
pub async fn copy_folder(base: &Path, source: &str, destination: &str) -> Result<String, CommandError> {
    let source = source.trim();
    let destination = destination.trim();

    let source_path = resolve(base, source);
    if !source_path.is_dir() {
        return Err(CommandError::SourceFolderNotFound(source.to_string()));
    }

    let destination_path = resolve(base, destination);
    copy_tree(&source_path, &destination_path)?;

    info!(
        "已复制目录: {} -> {}",
        source_path.display(),
        destination_path.display()
    );
    Ok(format!("Copied folder from {} to {}", source, destination))
}

/// 逐条目复制目录树
fn copy_tree(source: &Path, destination: &Path) -> Result<(), CommandError> {
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
