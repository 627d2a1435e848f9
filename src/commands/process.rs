/*!
 * 进程终止命令
 *
 * 按名称查找并终止进程：
 * 1. 名称匹配不区分大小写
 * 2. 缺少平台可执行文件后缀时自动补全
 * 3. 只终止第一个匹配的进程
 * 4. 终止信号无法送达时按执行失败处理
 */

use crate::commands::error::CommandError;
use sysinfo::System;
use tracing::{debug, info, warn};

/// 终止指定名称的进程
pub async fn kill_process(target: &str) -> Result<String, CommandError> {
    let name = normalize_process_name(target);
    debug!("开始查找进程: {}", name);

    let system = System::new_all();

    for process in system.processes().values() {
        let process_name = process.name().to_string_lossy().to_lowercase();
        if process_name == name {
            let delivered = process.kill();
            if delivered {
                info!("已终止进程: {} (pid={})", name, process.pid());
            } else {
                warn!("终止信号发送失败: {} (pid={})", name, process.pid());
            }
            return kill_result(name, delivered);
        }
    }

    Err(CommandError::ProcessNotFound(name))
}

/// 将终止信号的发送结果映射为命令结果
fn kill_result(name: String, delivered: bool) -> Result<String, CommandError> {
    if delivered {
        Ok(format!("Terminated {}", name))
    } else {
        Err(CommandError::KillFailed(name))
    }
}

/// 归一化进程名称：小写、去除首尾空白、补全平台可执行文件后缀
fn normalize_process_name(target: &str) -> String {
    let mut name = target.trim().to_lowercase();

    let suffix = std::env::consts::EXE_SUFFIX;
    if !suffix.is_empty() && !name.ends_with(suffix) {
        name.push_str(suffix);
    }

    name
}
