/*!
 * 命令分发器
 *
 * 统一的命令处理规范：
 * 1. 命令名称解析失败返回 "Invalid command type"
 * 2. 必需参数检查失败返回 "Missing arguments: ..."，按声明顺序列出
 * 3. 执行器的成功与失败消息统一加 "Computer: " 前缀
 * 4. 执行器错误不向外传播，全部折叠进结果消息
 */

use crate::commands::error::CommandError;
use crate::commands::kind::CommandKind;
use crate::commands::power::PowerAction;
use crate::commands::speech::Speaker;
use crate::commands::{fs_ops, network, open_path, power, process, speech};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// 单次命令执行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub message: String,
}

impl CommandResult {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// 命令分发器
///
/// 持有命令执行所需的全部共享状态：路径解析的基准目录和
/// 朗读命令使用的语音引擎。自身不可变，可在任务间共享。
pub struct CommandDispatcher {
    base_dir: PathBuf,
    speaker: Arc<dyn Speaker>,
}

impl CommandDispatcher {
    pub fn new(base_dir: PathBuf, speaker: Arc<dyn Speaker>) -> Self {
        info!("命令分发器初始化完成，基准目录: {}", base_dir.display());
        Self { base_dir, speaker }
    }

    /// 命令操作的基准目录
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// 执行一条命令
    ///
    /// 调用方需保证命令名称已转为小写。验证失败的消息不带前缀，
    /// 执行器产生的消息统一带 "Computer: " 前缀。
    pub async fn execute(&self, name: &str, args: &HashMap<String, String>) -> CommandResult {
        let Some(kind) = CommandKind::parse(name) else {
            error!("未知命令类型: {}", name);
            return CommandResult::failure("Invalid command type");
        };

        let missing = kind.missing_args(args);
        if !missing.is_empty() {
            error!("命令 {} 缺少参数: {:?}", kind.name(), missing);
            return CommandResult::failure(format!("Missing arguments: {}", missing.join(", ")));
        }

        info!("开始执行命令: {}", kind.name());
        match self.run(kind, args).await {
            Ok(message) => {
                info!("命令执行成功: {} -> {}", kind.name(), message);
                CommandResult {
                    success: true,
                    message: format!("Computer: {}", message),
                }
            }
            Err(e) => {
                error!("命令执行失败: {} -> {}", kind.name(), e);
                CommandResult {
                    success: false,
                    message: format!("Computer: {}", e),
                }
            }
        }
    }

    /// 调用命令对应的执行器
    async fn run(
        &self,
        kind: CommandKind,
        args: &HashMap<String, String>,
    ) -> Result<String, CommandError> {
        let arg = |name: &str| args.get(name).map(String::as_str).unwrap_or("");

        match kind {
            CommandKind::Process => process::kill_process(arg("target")).await,
            CommandKind::ShutDown => power::run_power_action(PowerAction::Shutdown).await,
            CommandKind::Restart => power::run_power_action(PowerAction::Restart).await,
            CommandKind::ShowFiles => fs_ops::show_files(&self.base_dir, arg("target")).await,
            CommandKind::CreateFile => fs_ops::create_file(&self.base_dir, arg("target")).await,
            CommandKind::CreateFolder => fs_ops::create_folder(&self.base_dir, arg("target")).await,
            CommandKind::RemoveFile => fs_ops::remove_file(&self.base_dir, arg("target")).await,
            CommandKind::RemoveFolder => fs_ops::remove_folder(&self.base_dir, arg("target")).await,
            CommandKind::CopyFile => {
                fs_ops::copy_file(&self.base_dir, arg("source"), arg("destination")).await
            }
            CommandKind::CopyFolder => {
                fs_ops::copy_folder(&self.base_dir, arg("source"), arg("destination")).await
            }
            CommandKind::OpenFile => open_path::open_file(&self.base_dir, arg("target")).await,
            CommandKind::OpenFolder => open_path::open_folder(&self.base_dir, arg("target")).await,
            CommandKind::ReadFile => {
                speech::read_file_aloud(&self.base_dir, arg("target"), self.speaker.as_ref()).await
            }
            CommandKind::Network => network::check_network().await,
        }
    }
}
