use crate::content::types::{GraphQlRequest, GraphQlResponse, QueryOptions};
use crate::error::ContentError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Transport for GraphQL documents.
/// Implementations return the raw envelope; GraphQL-level errors are handled by
/// [`execute_query`](crate::content::execute_query).
#[async_trait]
pub trait GraphQlExecutor: Send + Sync {
    async fn execute(
        &self,
        request: &GraphQlRequest,
        options: QueryOptions,
    ) -> Result<GraphQlResponse, ContentError>;

    /// Where requests go, for log lines
    fn endpoint(&self) -> &str;
}

/// A GraphQL operation together with the Rust shape of its variables and result.
pub trait Query {
    const OPERATION: &'static str;
    const DOCUMENT: &'static str;
    /// Fragment definitions the document spreads, transitive ones included
    const FRAGMENTS: &'static [&'static str] = &[];

    type Variables: Serialize + Send + Sync;
    type Data: DeserializeOwned;

    /// Operation text followed by every fragment it needs
    fn document() -> String {
        let mut document = Self::DOCUMENT.trim().to_string();
        for fragment in Self::FRAGMENTS {
            document.push_str("\n\n");
            document.push_str(fragment.trim());
        }
        document
    }
}
