use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::UpstreamError;
use crate::upstream::{Request, Upstream};

struct Entry {
    stored_at: Instant,
    body: Value,
}

/// Reuses successful upstream responses for a bounded time.
///
/// Best effort: concurrent misses for the same request may both reach the
/// upstream API, and failures are never stored.
pub struct CachedUpstream<U> {
    inner: U,
    ttl: Duration,
    entries: Mutex<HashMap<Request, Entry>>,
}

impl<U: Upstream> CachedUpstream<U> {
    pub fn new(inner: U, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &U {
        &self.inner
    }
}

#[async_trait]
impl<U: Upstream> Upstream for CachedUpstream<U> {
    async fn get(&self, request: &Request) -> Result<Value, UpstreamError> {
        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(request) {
                if entry.stored_at.elapsed() < self.ttl {
                    debug!("Cache hit for {}", request);
                    return Ok(entry.body.clone());
                }
            }
        }

        // The lock is not held across the outbound call.
        let body = self.inner.get(request).await?;

        let mut entries = self.entries.lock().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            request.clone(),
            Entry {
                stored_at: Instant::now(),
                body: body.clone(),
            },
        );

        Ok(body)
    }
}
