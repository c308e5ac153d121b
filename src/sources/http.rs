//! Key terms REST API source.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::links::encode_course_id;
use crate::models::KeyTerm;
use crate::sources::{TermSource, TermSourceError};
use crate::utils::{with_retry, HttpClient, RetryConfig};

const COURSE_TERMS_PATH: &str = "/api/v1/course_terms";

/// Key terms service source
///
/// Issues `GET {base}/api/v1/course_terms?course_id={id}` and expects a JSON
/// array of key terms.
#[derive(Debug, Clone)]
pub struct HttpTermSource {
    client: Arc<HttpClient>,
    api_base: String,
    retry: RetryConfig,
}

impl HttpTermSource {
    /// Create a source for the given service settings
    pub fn new(service: &ServiceConfig) -> Result<Self, TermSourceError> {
        let client = HttpClient::with_timeout(Duration::from_secs(service.timeout_secs.max(1)))?;
        let retry = RetryConfig {
            max_attempts: service.max_attempts.max(1),
            ..RetryConfig::default()
        };

        Ok(Self::with_client(Arc::new(client), &service.api_base_url).retry_config(retry))
    }

    /// Create a source around an existing client
    pub fn with_client(client: Arc<HttpClient>, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry behaviour
    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// URL fetched for a course.
    ///
    /// The `+` separators of the encoded course id stay literal in the query,
    /// so the service decodes them as spaces; everything else is percent-encoded.
    pub fn terms_url(&self, course_id: &str) -> String {
        let query_value = encode_course_id(course_id)
            .split('+')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("+");

        format!(
            "{}{}?course_id={}",
            self.api_base, COURSE_TERMS_PATH, query_value
        )
    }
}

#[async_trait]
impl TermSource for HttpTermSource {
    fn id(&self) -> &str {
        "http"
    }

    fn name(&self) -> &str {
        "Key Terms API"
    }

    async fn fetch_terms(&self, course_id: &str) -> Result<Vec<KeyTerm>, TermSourceError> {
        self.validate_course_id(course_id)?;

        let url = self.terms_url(course_id);
        tracing::debug!("Fetching key terms from {}", url);

        let client = Arc::clone(&self.client);
        let response = with_retry(self.retry, || {
            let client = Arc::clone(&client);
            let url = url.clone();
            async move {
                let response = client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.trim().parse::<u64>().ok());
                    return Err(TermSourceError::RateLimit(retry_after));
                }

                if status.is_server_error() {
                    return Err(TermSourceError::Server(format!(
                        "Key terms API returned status: {}",
                        status
                    )));
                }

                if !status.is_success() {
                    return Err(TermSourceError::Api(format!(
                        "Key terms API returned status: {}",
                        status
                    )));
                }

                Ok(response)
            }
        })
        .await?;

        let body = response.text().await?;
        let terms: Vec<KeyTerm> = serde_json::from_str(&body)?;

        tracing::info!("Fetched {} key terms for {}", terms.len(), course_id);
        Ok(terms)
    }
}
