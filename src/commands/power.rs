/*!
 * 电源控制命令
 *
 * 关机与重启共用同一执行路径：先做管理员权限检查，
 * 再调用系统 shutdown 命令，延迟固定为零。
 */

use crate::commands::error::CommandError;
use tokio::process::Command;
use tracing::{info, warn};

/// 电源动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Shutdown,
    Restart,
}

impl PowerAction {
    /// 动作的描述名称，与对应的命令名称一致，用于结果消息
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Shutdown => "shut down",
            Self::Restart => "restart",
        }
    }
}

/// 执行关机或重启
///
/// shutdown 命令发出后立即返回，不等待系统实际断电。
pub async fn run_power_action(action: PowerAction) -> Result<String, CommandError> {
    if !has_admin_rights() {
        warn!("电源命令被拒绝: 缺少管理员权限");
        return Err(CommandError::AdminRequired);
    }

    info!("执行电源命令: {}", action.verb());
    let status = build_power_command(action).status().await?;
    if !status.success() {
        return Err(CommandError::PowerFailure(status));
    }

    Ok(format!("Initiating {}", action.verb()))
}

/// 构造平台对应的 shutdown 命令
fn build_power_command(action: PowerAction) -> Command {
    let mut command = Command::new("shutdown");

    if cfg!(windows) {
        let flag = match action {
            PowerAction::Shutdown => "/s",
            PowerAction::Restart => "/r",
        };
        command.args([flag, "/t", "0"]);
    } else {
        let flag = match action {
            PowerAction::Shutdown => "-h",
            PowerAction::Restart => "-r",
        };
        command.args([flag, "now"]);
    }

    command
}

/// 检查当前进程是否具有管理员权限
#[cfg(unix)]
fn has_admin_rights() -> bool {
    nix::unistd::Uid::effective().is_root()
}

#[cfg(windows)]
fn has_admin_rights() -> bool {
    use windows::Win32::UI::Shell::IsUserAnAdmin;

    unsafe { IsUserAnAdmin() }.as_bool()
}
