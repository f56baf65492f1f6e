//! Renderer basado en subproceso: `<bin> --quiet <url> -` escribe el PDF
//! por stdout.

use std::process::Stdio;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::process::Command;

use crate::{DocumentRenderer, RenderError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRenderer {
    bin: String,
    args: Vec<String>,
}

impl CommandRenderer {
    pub fn new(bin: &str) -> Self {
        Self { bin: bin.to_string(),
               args: vec!["--quiet".to_string()] }
    }

    /// Sustituye los argumentos previos a la URL.
    pub fn with_args<I, S>(mut self, args: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }
}

#[async_trait]
impl DocumentRenderer for CommandRenderer {
    async fn render_url(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        debug!("rendering {} with {}", url, self.bin);
        let output = Command::new(&self.bin).args(&self.args)
                                            .arg(url)
                                            .arg("-")
                                            .stdin(Stdio::null())
                                            .kill_on_drop(true)
                                            .output()
                                            .await
                                            .map_err(|e| RenderError::Spawn { bin: self.bin.clone(),
                                                                              reason: e.to_string() })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("{} failed for {}: {}", self.bin, url, stderr);
            return Err(RenderError::ExitStatus { code: output.status.code(),
                                                 stderr });
        }
        if output.stdout.is_empty() {
            return Err(RenderError::Empty);
        }
        Ok(output.stdout)
    }
}
