/*!
 * 命令处理模块
 *
 * 这个模块包含网关支持的全部命令执行器，按功能分类组织。
 * 所有命令经由 CommandDispatcher 统一分发，执行器只负责
 * 单一动作并返回结果消息。
 */

/// 命令分发与结果类型
pub mod dispatcher;

/// 命令执行错误类型
pub mod error;

/// 文件系统命令
pub mod fs_ops;

/// 命令类型与参数表
pub mod kind;

/// 网络连通性命令
pub mod network;

/// 系统默认程序打开命令
pub mod open_path;

/// 电源控制命令
pub mod power;

/// 进程终止命令
pub mod process;

/// 文件朗读命令
pub mod speech;

// 重新导出核心类型，使它们可以在 lib.rs 中直接使用
pub use dispatcher::{CommandDispatcher, CommandResult};
pub use error::CommandError;
pub use kind::CommandKind;
pub use power::PowerAction;
pub use speech::{Speaker, SubprocessSpeaker};
