//! Blocking HTTP GET used for both the metadata request and the image download.

use crate::prelude::*;

/// Raw bytes of one HTTP response body, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBuffer {
    data: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ResponseBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Anything that can fetch a URL into a [`ResponseBuffer`].
///
/// An `Ok` buffer is never empty; implementations report an empty body as
/// [`AppError::EmptyResponse`].
pub trait HttpGet {
    fn get(&self, url: &str) -> Result<ResponseBuffer, AppError>;
}

/// Wrapper around a blocking reqwest client, built once and shared by reference.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout());
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| AppError::ClientInit(e.to_string()))?;
        debug!(
            "HTTP client ready (agent {:?}, timeout {:?})",
            config.user_agent,
            config.timeout()
        );
        Ok(Self { client })
    }
}

impl HttpGet for HttpClient {
    fn get(&self, url: &str) -> Result<ResponseBuffer, AppError> {
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Network(format!("Failed to GET {}: {}", url, e)))?;

        if !resp.status().is_success() {
            return Err(AppError::HttpStatus {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().map_err(|e| {
            AppError::Network(format!("Failed to read bytes from {}: {}", url, e))
        })?;

        let buf = ResponseBuffer::new(bytes.to_vec());
        if buf.is_empty() {
            return Err(AppError::EmptyResponse(url.to_string()));
        }
        debug!("Received {} bytes from {}", buf.len(), url);
        Ok(buf)
    }
}
