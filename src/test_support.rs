//! Shared fixtures for the async tests: a local HTTP stub standing in for the
//! World Bank API and an in-memory `Storage`.

use crate::domain::storage::Storage;
use crate::domain::{CountryScoreRecord, Manifest, RawIndicators};
use crate::error::{NeedMapError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) struct StubApi {
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl StubApi {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves every request with `respond(path)`, one connection per request.
pub(crate) async fn spawn_api<F>(respond: F) -> StubApi
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let respond = Arc::new(respond);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let respond = Arc::clone(&respond);
            let counter = Arc::clone(&counter);
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&request);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                counter.fetch_add(1, Ordering::SeqCst);

                let (status, body) = respond(&path);
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    StubApi {
        base: format!("http://{}", addr),
        hits,
    }
}

/// World Bank style body with a single observation.
pub(crate) fn observation_body(value: f64) -> String {
    format!(r#"[{{"page":1,"pages":1}},[{{"date":"2022","value":{}}}]]"#, value)
}

/// Country code out of `/country/{iso3}/indicator/{code}?...`.
pub(crate) fn iso3_from_path(path: &str) -> &str {
    path.split('/').nth(2).unwrap_or_default()
}

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    pub indicators: Mutex<HashMap<String, RawIndicators>>,
    pub records: Mutex<Vec<CountryScoreRecord>>,
    pub fail_saves: bool,
    pub unreadable: HashSet<String>,
}

impl MemoryStore {
    pub fn cached(&self, iso3: &str) -> Option<RawIndicators> {
        self.indicators.lock().unwrap().get(iso3).cloned()
    }

    pub fn seed(&self, iso3: &str, indicators: RawIndicators) {
        self.indicators
            .lock()
            .unwrap()
            .insert(iso3.to_string(), indicators);
    }
}

impl Storage for MemoryStore {
    fn load_indicators(&self, iso3: &str) -> Result<Option<RawIndicators>> {
        if self.unreadable.contains(iso3) {
            return Err(NeedMapError::Other(format!("cache entry for {iso3} is corrupt")));
        }
        Ok(self.cached(iso3))
    }

    fn save_indicators(&self, iso3: &str, indicators: &RawIndicators) -> Result<()> {
        if self.fail_saves {
            return Err(NeedMapError::Other("disk full".to_string()));
        }
        self.seed(iso3, indicators.clone());
        Ok(())
    }

    fn load_records(&self) -> Result<Vec<CountryScoreRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn upsert_records(&self, records: &[CountryScoreRecord]) -> Result<usize> {
        let mut stored = self.records.lock().unwrap();
        for record in records {
            stored.retain(|r| r.iso3() != record.iso3());
            stored.push(record.clone());
        }
        Ok(stored.len())
    }

    fn save_manifest(&self, _manifest: &Manifest) -> Result<()> {
        Ok(())
    }
}
