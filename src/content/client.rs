use crate::config::SiteConfig;
use crate::content::traits::GraphQlExecutor;
use crate::content::types::{GraphQlRequest, GraphQlResponse, QueryOptions};
use crate::error::ContentError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the DatoCMS Content Delivery API
pub struct DatoClient {
    client: Client,
    endpoint: String,
    token: String,
    environment: Option<String>,
}

impl DatoClient {
    pub fn new(config: &SiteConfig) -> Result<Self, ContentError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            token: config.api_token.clone(),
            environment: config.environment.clone(),
        })
    }
}

#[async_trait]
impl GraphQlExecutor for DatoClient {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        options: QueryOptions,
    ) -> Result<GraphQlResponse, ContentError> {
        debug!(
            operation = %request.operation_name,
            include_drafts = options.include_drafts,
            "Querying content API"
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .header("X-Exclude-Invalid", "true")
            .json(request);
        if options.include_drafts {
            builder = builder.header("X-Include-Drafts", "true");
        }
        if let Some(environment) = &self.environment {
            builder = builder.header("X-Environment", environment);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(operation = %request.operation_name, %status, "Content API rejected request");
            return Err(ContentError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        debug!(operation = %request.operation_name, "Received {} bytes", bytes.len());

        serde_json::from_slice(&bytes).map_err(|source| ContentError::Decode {
            operation: request.operation_name.clone(),
            source,
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
