use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use ci_notify::structs::run_context::RunContext;
use serde_json::Value;
use warp::http::{HeaderMap, Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::Filter;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub raw_len: usize,
    pub body: Value,
}

/// Local HTTP endpoint answering every request with a fixed status and body.
pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(status: u16, reply: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&requests);

        let route = warp::any()
            .and(warp::method())
            .and(warp::path::full())
            .and(warp::header::headers_cloned())
            .and(warp::body::bytes())
            .map(move |method: Method, path: warp::path::FullPath, headers: HeaderMap, bytes: Bytes| {
                let headers = headers
                    .iter()
                    .map(|(name, value)| (name.as_str().to_string(), value.to_str().unwrap_or_default().to_string()))
                    .collect();

                sink.lock().unwrap().push(RecordedRequest {
                    method: method.to_string(),
                    path: path.as_str().to_string(),
                    headers,
                    raw_len: bytes.len(),
                    body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
                });

                warp::reply::with_status(reply, StatusCode::from_u16(status).unwrap())
            });

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self {
            url: format!("http://{}/hook", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn context() -> RunContext {
    RunContext::new("o/r", "2024", "8", "https://github.com")
}

/// A loopback URL nothing listens on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/hook", port)
}
