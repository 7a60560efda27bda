#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedirectError {
    #[error("This response does not support redirection.")]
    RedirectNotSupported,
    #[error("Invalid redirect method \"{0}\".")]
    InvalidRedirectMethod(String),
    #[error("Invalid redirect URL \"{0}\".")]
    InvalidRedirectUrl(String),
}
