//! In-process HTTP stub used by the adapter tests.
//!
//! Accepts plain HTTP/1.1 connections on a random local port, records every
//! request and answers through a caller-supplied handler.

use crate::api::{CompletionError, CompletionService};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of a query parameter, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = url::Url::parse(&format!("http://stub{}", self.target)).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        StubResponse {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Handler = dyn Fn(&RecordedRequest) -> StubResponse + Send + Sync;

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> StubResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<Handler> = Arc::new(handler);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    let _ = serve(stream, recorded, handler).await;
                });
            }
        });

        StubServer {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(
    mut stream: TcpStream,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    handler: Arc<Handler>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < head_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[head_end..]).to_string();

    let request = RecordedRequest {
        method,
        target,
        headers,
        body,
    };
    recorded.lock().unwrap().push(request.clone());

    let response = handler(&request);
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }
    let reply = format!(
        "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}

/// HTTP client that never routes through a proxy from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Completion stub answering through a closure, optionally after a
/// per-prompt delay. Every prompt it receives is recorded.
pub struct FnCompletion<F> {
    reply: F,
    delay: fn(&str) -> Duration,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

type Reply = Box<dyn Fn(&str) -> Result<String, CompletionError>>;

impl<F> FnCompletion<F>
where
    F: Fn(&str) -> Result<String, CompletionError>,
{
    pub fn new(reply: F) -> Self {
        FnCompletion {
            reply,
            delay: |_| Duration::ZERO,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: fn(&str) -> Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl FnCompletion<Reply> {
    /// Answers with `replies` in order, then reports the service unavailable.
    pub fn scripted(replies: Vec<Result<String, CompletionError>>) -> Self {
        let queue = Mutex::new(VecDeque::from(replies));
        let reply: Reply = Box::new(move |_: &str| {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(CompletionError::Unavailable("no reply scripted".into())))
        });
        FnCompletion::new(reply)
    }
}

impl<F> CompletionService for FnCompletion<F>
where
    F: Fn(&str) -> Result<String, CompletionError>,
{
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        let delay = (self.delay)(prompt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        (self.reply)(prompt)
    }
}
