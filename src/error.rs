use thiserror::Error;

/// Every variant is raised synchronously, before any navigation happens.
/// On `Err` the caller stays on the current page and no side effect occurred.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("client_id is empty")]
    MissingClientID,
    #[error("redirect_uri is empty")]
    MissingRedirectURI,
    #[error("redirect_uri is not an absolute URI")]
    InvalidRedirectURI,
    #[error("scope is empty")]
    EmptyScope,
    #[error("Failed to generate state token")]
    GenToken,
    #[error("Failed to parse authorization endpoint url")]
    URL,
}
