/*!
 * 文件朗读命令
 *
 * 读取文本文件并通过语音引擎朗读。语音引擎抽象为 Speaker trait，
 * 默认实现调用平台自带的命令行引擎，朗读结束后命令才返回。
 */

use crate::commands::error::CommandError;
use crate::commands::fs_ops::resolve;
use crate::utils::error::AppResult;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

/// 语音引擎抽象
#[async_trait]
pub trait Speaker: Send + Sync {
    /// 朗读一段文本，完成后返回
    async fn speak(&self, text: &str) -> AppResult<()>;
}

/// 调用平台命令行语音引擎的默认实现
///
/// Windows 使用 PowerShell 的 System.Speech，macOS 使用 say，
/// 其余平台使用 espeak。文本通过标准输入传递。
pub struct SubprocessSpeaker;

impl SubprocessSpeaker {
    pub fn new() -> Self {
        Self
    }

    /// 构造平台对应的语音引擎命令
    fn engine_command() -> Command {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("powershell");
            command.args([
                "-NoProfile",
                "-Command",
                "Add-Type -AssemblyName System.Speech; \
                 (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak([Console]::In.ReadToEnd())",
            ]);
            command
        } else if cfg!(target_os = "macos") {
            Command::new("say")
        } else {
            let mut command = Command::new("espeak");
            command.arg("--stdin");
            command
        }
    }
}

impl Default for SubprocessSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Speaker for SubprocessSpeaker {
    async fn speak(&self, text: &str) -> AppResult<()> {
        let mut child = Self::engine_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            crate::app_bail!("speech engine failed: {}", status);
        }

        debug!("语音引擎朗读完成，文本长度: {}", text.len());
        Ok(())
    }
}

/// 读取文件内容并朗读
///
/// 文件必须是有效的 UTF-8 文本，朗读结束后才返回结果消息。
pub async fn read_file_aloud(
    base: &Path,
    target: &str,
    speaker: &dyn Speaker,
) -> Result<String, CommandError> {
    let target = target.trim();
    let path = resolve(base, target);

    if !path.is_file() {
        return Err(CommandError::FileNotFound(target.to_string()));
    }

    let content = tokio::fs::read_to_string(&path).await?;
    info!("开始朗读文件: {} ({} 字节)", path.display(), content.len());

    speaker
        .speak(&content)
        .await
        .map_err(|e| CommandError::Speech(e.to_string()))?;

    Ok(format!("Reading content of {}", target))
}
