pub mod client;
pub mod queries;
pub mod traits;
pub mod types;

pub use client::DatoClient;
pub use traits::{GraphQlExecutor, Query};
pub use types::{GraphQlRequest, GraphQlResponse, NoVariables, QueryOptions};

use crate::error::ContentError;
use tracing::warn;

/// Run `Q` against `executor` and decode its `data` member.
///
/// Any entry in the response's `errors` array fails the whole call, even when
/// partial `data` came back with it.
pub async fn execute_query<Q, E>(
    executor: &E,
    variables: &Q::Variables,
    options: QueryOptions,
) -> Result<Q::Data, ContentError>
where
    Q: Query,
    E: GraphQlExecutor + ?Sized,
{
    let variables = serde_json::to_value(variables).map_err(|source| ContentError::Encode {
        operation: Q::OPERATION.to_string(),
        source,
    })?;
    let request = GraphQlRequest {
        query: Q::document(),
        variables,
        operation_name: Q::OPERATION.to_string(),
    };

    let response = executor.execute(&request, options).await?;

    if !response.errors.is_empty() {
        warn!(
            operation = Q::OPERATION,
            endpoint = executor.endpoint(),
            count = response.errors.len(),
            "Content API returned GraphQL errors"
        );
        return Err(ContentError::GraphQl {
            operation: Q::OPERATION.to_string(),
            errors: response.errors,
        });
    }

    let data = response
        .data
        .ok_or_else(|| ContentError::MissingData(Q::OPERATION.to_string()))?;

    serde_json::from_value(data).map_err(|source| ContentError::Decode {
        operation: Q::OPERATION.to_string(),
        source,
    })
}
