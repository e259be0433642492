use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Behaviour of a scripted server for one query.
#[derive(Clone)]
pub enum Reply {
    Text(String),
    /// Accepts the query and keeps the connection open without answering.
    Silent,
}

/// Minimal WHOIS server on 127.0.0.1: reads one query line, answers, closes.
pub struct MockWhoisServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockWhoisServer {
    pub async fn start(replies: HashMap<String, Reply>, fallback: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let queries = Arc::new(Mutex::new(Vec::new()));
        let recorded = queries.clone();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let replies = replies.clone();
                let fallback = fallback.clone();
                let recorded = recorded.clone();

                tokio::spawn(async move {
                    let mut reader = BufReader::new(stream);
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.is_err() {
                        return;
                    }
                    let query = line.trim_end().to_string();
                    recorded.lock().unwrap().push(query.clone());

                    match replies.get(&query).cloned().unwrap_or(fallback) {
                        Reply::Text(text) => {
                            let mut stream = reader.into_inner();
                            let _ = stream.write_all(text.as_bytes()).await;
                            let _ = stream.shutdown().await;
                        }
                        Reply::Silent => {
                            tokio::time::sleep(Duration::from_secs(30)).await;
                        }
                    }
                });
            }
        });

        Self {
            addr,
            queries,
            handle,
        }
    }

    /// Server answering every query with the same text.
    pub async fn answering(text: &str) -> Self {
        Self::start(HashMap::new(), Reply::Text(text.to_string())).await
    }

    pub async fn silent() -> Self {
        Self::start(HashMap::new(), Reply::Silent).await
    }

    /// `host:port` form accepted by the loader.
    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Queries received so far, without the line terminator.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl Drop for MockWhoisServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address of a port nothing listens on.
pub async fn closed_port_host() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}
