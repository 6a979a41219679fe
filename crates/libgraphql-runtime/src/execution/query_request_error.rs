use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryRequestError {
    #[error("The request body is not a valid GraphQL request: {0}")]
    InvalidRequestBody(#[from] serde_json::Error),

    #[error("The request does not contain a query")]
    MissingQuery,
}
