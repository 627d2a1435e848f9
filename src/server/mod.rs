/*!
 * HTTP 服务模块
 *
 * 承载命令网关的对外 HTTP 接口。
 */

pub mod http;

pub use http::GatewayServer;
