/*!
 * HTTP 服务实现
 *
 * 基于 tiny_http 的阻塞接收循环运行在专用阻塞线程上，
 * 每个请求交给独立的 tokio 任务处理，任务之间只共享
 * 只读的允许列表与分发器。对外暴露单一的 POST /commands
 * 端点，所有响应附带 CORS 头。
 */

use crate::app_error_msg;
use crate::commands::{CommandDispatcher, CommandResult};
use crate::config::AllowList;
use crate::utils::error::AppResult;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, info, warn};

/// CORS 相关响应头
const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// POST /commands 的请求体
#[derive(Debug, Deserialize)]
struct CommandRequest {
    command: String,
    #[serde(default)]
    args: HashMap<String, String>,
}

/// 网关 HTTP 服务器
pub struct GatewayServer {
    server: Server,
}

impl GatewayServer {
    /// 绑定监听地址
    pub fn bind(addr: &str) -> AppResult<Self> {
        let server =
            Server::http(addr).map_err(|e| app_error_msg!("Failed to bind {}: {}", addr, e))?;

        info!("Command gateway listening on {}", addr);
        Ok(Self { server })
    }

    /// 实际绑定的监听地址
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// 运行请求循环，直到服务器被关闭
    pub async fn serve(
        self,
        allow_list: Arc<AllowList>,
        dispatcher: Arc<CommandDispatcher>,
    ) -> AppResult<()> {
        let handle = tokio::runtime::Handle::current();

        tokio::task::spawn_blocking(move || {
            for request in self.server.incoming_requests() {
                let allow_list = allow_list.clone();
                let dispatcher = dispatcher.clone();
                handle.spawn(async move {
                    handle_request(request, allow_list, dispatcher).await;
                });
            }
        })
        .await
        .map_err(|e| app_error_msg!("HTTP accept loop terminated: {}", e))?;

        Ok(())
    }
}

/// 处理单个 HTTP 请求
async fn handle_request(
    mut request: Request,
    allow_list: Arc<AllowList>,
    dispatcher: Arc<CommandDispatcher>,
) {
    let method = request.method().clone();
    let path = request.url().split('?').next().unwrap_or("/").to_string();
    debug!("{} {}", method, path);

    let response = if method == Method::Options {
        preflight_response()
    } else if path == "/commands" {
        if method == Method::Post {
            let mut body = String::new();
            match request.as_reader().read_to_string(&mut body) {
                Ok(_) => handle_command(&body, &allow_list, &dispatcher).await,
                Err(e) => {
                    warn!("Failed to read request body: {}", e);
                    json_response(&json!({"error": "Invalid request"}), 400)
                }
            }
        } else {
            json_response(&json!({"error": "Method not allowed"}), 405)
        }
    } else {
        json_response(&json!({"error": "Not found"}), 404)
    };

    if let Err(e) = request.respond(response) {
        warn!("Failed to send response: {}", e);
    }
}

/// 处理 /commands 的请求体
///
/// 请求体缺失、不是合法 JSON 或缺少 command 字段都按无效请求
/// 处理。命令名称先转为小写，再做允许列表检查和分发。
async fn handle_command(
    body: &str,
    allow_list: &AllowList,
    dispatcher: &CommandDispatcher,
) -> Response<Cursor<Vec<u8>>> {
    let Ok(request) = serde_json::from_str::<CommandRequest>(body) else {
        return json_response(&json!({"error": "Invalid request"}), 400);
    };

    let command = request.command.to_lowercase();

    if !allow_list.contains(&command) {
        warn!("Rejected command outside allow list: {}", command);
        return json_response(&json!({"error": "Command not allowed"}), 403);
    }

    let CommandResult { success, message } = dispatcher.execute(&command, &request.args).await;
    let status = if success { 200 } else { 500 };

    json_response(
        &json!({
            "command": command,
            "success": success,
            "message": message,
        }),
        status,
    )
}

/// 构造 JSON 响应
fn json_response(payload: &serde_json::Value, status: u16) -> Response<Cursor<Vec<u8>>> {
    let mut response =
        Response::from_data(payload.to_string().into_bytes()).with_status_code(status);

    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response = response.with_header(header);
    }

    with_cors(response)
}

/// OPTIONS 预检响应
fn preflight_response() -> Response<Cursor<Vec<u8>>> {
    with_cors(Response::from_data(Vec::new()).with_status_code(204))
}

fn with_cors(mut response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
    for (name, value) in CORS_HEADERS {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response = response.with_header(header);
        }
    }
    response
}
