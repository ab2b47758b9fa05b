//! A model provider for the Sarvam AI chat, translation and language
//! detection APIs.

#[macro_use]
extern crate tracing;

mod config;
mod error;
mod proto;

use std::sync::Arc;
use std::time::Duration;

use mufasa_model::{
    CompletionRequest, CompletionResult, DetectionResult, ModelProvider,
    TranslationRequest, TranslationResult,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;

pub use config::{SarvamConfig, SarvamConfigBuilder};

const SUBSCRIPTION_KEY_HEADER: &str = "api-subscription-key";

/// Sarvam AI model provider.
///
/// Every call carries its own time bound taken from [`SarvamConfig`], and
/// no call is ever retried.
#[derive(Clone, Debug)]
pub struct SarvamProvider {
    client: Client,
    config: Arc<SarvamConfig>,
}

impl SarvamProvider {
    /// Creates a new `SarvamProvider` with the given configuration.
    #[inline]
    pub fn new(config: SarvamConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Returns the configuration of this provider.
    #[inline]
    pub fn config(&self) -> &SarvamConfig {
        &self.config
    }

    fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        timeout: Duration,
    ) -> RequestBuilder {
        debug!("POST {path} (timeout {timeout:?})");
        self.client
            .post(format!("{}{}", self.config.base_url, path))
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .timeout(timeout)
            .json(body)
    }
}

/// Awaits a response and reads its whole body.
async fn read_response(
    resp_fut: impl Future<Output = reqwest::Result<Response>>,
) -> reqwest::Result<(StatusCode, Vec<u8>)> {
    let resp = resp_fut.await?;
    let status = resp.status();
    let body = resp.bytes().await?;
    trace!("got response: {status}, {} bytes", body.len());
    Ok((status, body.to_vec()))
}

impl ModelProvider for SarvamProvider {
    fn complete_chat(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = CompletionResult> + Send + 'static {
        let payload = proto::create_completion_request(req, &self.config);
        let resp_fut = self
            .post("/chat/completions", &payload, self.config.completion_timeout)
            .send();

        async move {
            let (status, body) = match read_response(resp_fut).await {
                Ok(resp) => resp,
                Err(err) => {
                    warn!("completion request failed: {err}");
                    return Err(error::completion_transport(&err));
                }
            };
            if status != StatusCode::OK {
                warn!("completion endpoint returned {status}");
                return Err(error::completion_status(status, &body));
            }
            proto::parse_completion(&body)
        }
    }

    fn translate(
        &self,
        req: &TranslationRequest,
    ) -> impl Future<Output = TranslationResult> + Send + 'static {
        let payload = proto::create_translate_request(req, &self.config);
        let resp_fut = self
            .post("/translate", &payload, self.config.translation_timeout)
            .send();

        async move {
            let (status, body) = match read_response(resp_fut).await {
                Ok(resp) => resp,
                Err(err) => {
                    warn!("translation request failed: {err}");
                    return Err(error::auxiliary_transport("Translation", &err));
                }
            };
            if status != StatusCode::OK {
                warn!("translation endpoint returned {status}");
                return Err(error::auxiliary_status("Translation", status));
            }
            proto::parse_translation(&body)
        }
    }

    fn detect_language(
        &self,
        text: &str,
    ) -> impl Future<Output = DetectionResult> + Send + 'static {
        let payload = proto::create_detect_request(text);
        let resp_fut = self
            .post("/detect-language", &payload, self.config.detection_timeout)
            .send();

        async move {
            let (status, body) = match read_response(resp_fut).await {
                Ok(resp) => resp,
                Err(err) => {
                    return Err(error::auxiliary_transport(
                        "Language detection",
                        &err,
                    ));
                }
            };
            if status != StatusCode::OK {
                return Err(error::auxiliary_status(
                    "Language detection",
                    status,
                ));
            }
            proto::parse_detection(&body)
        }
    }
}
