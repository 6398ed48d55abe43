//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use employee_directory_client::{
    ClientConfig, EmployeeApi, RestEmployeeClient, RetryPolicy, create_client,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// One canned HTTP response.
#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Scripted {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn too_many_requests(retry_after: Option<&str>) -> Self {
        Self {
            status: 429,
            headers: retry_after
                .map(|v| vec![("Retry-After".to_string(), v.to_string())])
                .unwrap_or_default(),
            body: r#"{"message":"Too Many Attempts."}"#.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self::json(404, r#"{"message":"Not Found"}"#)
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Minimal HTTP/1.1 responder replaying scripted responses in order.
///
/// Each connection serves one request and is closed. When the script runs
/// out, every further request gets HTTP 500.
pub struct ScriptedServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedServer {
    pub async fn start(script: Vec<Scripted>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("bind failed: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("local_addr failed: {e}"));
        let script = Arc::new(Mutex::new(VecDeque::from(script)));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let script = script.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0_u8; 1024];
                    loop {
                        let Ok(n) = socket.read(&mut chunk).await else {
                            return;
                        };
                        if n == 0 {
                            break;
                        }
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let head = String::from_utf8_lossy(&buf);
                    let request_line = head.lines().next().unwrap_or_default().to_string();
                    if let Ok(mut seen) = seen.lock() {
                        seen.push(request_line);
                    }

                    let next = script
                        .lock()
                        .ok()
                        .and_then(|mut s| s.pop_front())
                        .unwrap_or_else(|| Scripted::json(500, r#"{"message":"script exhausted"}"#));

                    let mut response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                        next.status,
                        reason(next.status),
                        next.body.len()
                    );
                    for (name, value) in &next.headers {
                        response.push_str(&format!("{name}: {value}\r\n"));
                    }
                    response.push_str("\r\n");
                    response.push_str(&next.body);

                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Request lines received so far, e.g. `GET /api/v1/employees HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Client pointed at this server with a fast retry policy.
    pub fn client(&self, max_attempts: u32) -> RestEmployeeClient {
        let config = ClientConfig::default()
            .with_base_url(self.base_url())
            .with_retry(RetryPolicy {
                max_attempts,
                default_delay: Duration::from_millis(20),
                max_delay: Duration::from_millis(50),
            });
        require_client(config)
    }
}

/// 真实服务客户端（配置取自环境变量）
pub fn live_client() -> Arc<dyn EmployeeApi> {
    match create_client(ClientConfig::from_env()) {
        Ok(client) => client,
        Err(e) => panic!("创建客户端失败: {e}"),
    }
}

fn require_client(config: ClientConfig) -> RestEmployeeClient {
    RestEmployeeClient::new(config).unwrap_or_else(|e| panic!("client build failed: {e}"))
}

pub const TWO_EMPLOYEES: &str = r#"{"status":"success","data":[
    {"id":1,"employee_name":"Tiger Nixon","employee_salary":320800,"employee_age":61,"profile_image":""},
    {"id":2,"employee_name":"Garrett Winters","employee_salary":170750,"employee_age":63,"profile_image":""}
],"message":"Successfully! All records has been fetched."}"#;

pub const ONE_EMPLOYEE: &str = r#"{"status":"success","data":
    {"id":1,"employee_name":"Tiger Nixon","employee_salary":320800,"employee_age":61,"profile_image":""},
"message":"Successfully! Record has been fetched."}"#;
