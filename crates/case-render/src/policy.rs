//! Política de ejecución del renderizador: timeout por intento y un número
//! acotado de reintentos para fallos transitorios.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;

use crate::{DocumentRenderer, RenderConfig, RenderError};

#[derive(Debug, Clone)]
pub struct RenderPolicy<R> {
    inner: R,
    timeout: Duration,
    retries: u32,
}

impl<R: DocumentRenderer> RenderPolicy<R> {
    pub fn new(inner: R, timeout: Duration, retries: u32) -> Self {
        Self { inner, timeout, retries }
    }

    pub fn from_config(inner: R, config: &RenderConfig) -> Self {
        Self::new(inner, config.timeout, config.retries)
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    async fn attempt(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        match tokio::time::timeout(self.timeout, self.inner.render_url(url)).await {
            Ok(result) => result,
            Err(_) => Err(RenderError::Timeout(self.timeout.as_secs())),
        }
    }
}

#[async_trait]
impl<R: DocumentRenderer> DocumentRenderer for RenderPolicy<R> {
    async fn render_url(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        let mut attempts = 0;
        loop {
            match self.attempt(url).await {
                Err(e) if e.is_retryable() && attempts < self.retries => {
                    attempts += 1;
                    warn!("render of {} failed (attempt {}): {} -> retrying", url, attempts, e);
                }
                r => return r,
            }
        }
    }
}
