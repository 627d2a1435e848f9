/*!
 * 错误处理模块
 *
 * 网关的错误分为两层：命令执行失败由 commands::error 的专用类型
 * 表达并直接进入响应消息，其余启动和服务层面的错误统一走 anyhow，
 * 通过 context 携带出错位置的信息。
 */

use anyhow::Result as AnyhowResult;

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;

// ============================================================================
// 便捷的错误创建宏
// ============================================================================

/// 构造错误并立即返回
#[macro_export]
macro_rules! app_bail {
    ($msg:literal $(,)?) => {
        return Err(anyhow::anyhow!($msg))
    };
    ($err:expr $(,)?) => {
        return Err(anyhow::anyhow!($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err(anyhow::anyhow!($fmt, $($arg)*))
    };
}

/// 构造错误值，常用于 map_err
#[macro_export]
macro_rules! app_error_msg {
    ($msg:literal $(,)?) => {
        anyhow::anyhow!($msg)
    };
    ($err:expr $(,)?) => {
        anyhow::anyhow!($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        anyhow::anyhow!($fmt, $($arg)*)
    };
}
