/*!
 * 网络连通性命令
 *
 * 向公共 DNS 地址发送单次 ICMP 回显请求，以 ping 命令的
 * 退出码作为网络可用的判定依据。
 */

use crate::commands::error::CommandError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// 连通性探测的目标地址
const PROBE_HOST: &str = "8.8.8.8";

/// 检查网络连通性
pub async fn check_network() -> Result<String, CommandError> {
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };

    let status = Command::new("ping")
        .args([count_flag, "1", PROBE_HOST])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;

    debug!("ping {} 退出码: {:?}", PROBE_HOST, status.code());

    if status.success() {
        Ok("Network active".to_string())
    } else {
        Err(CommandError::NetworkUnreachable)
    }
}
