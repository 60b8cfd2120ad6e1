//! Error types.

/// Any range of errors encountered when making requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An unexpected response containing a message was received.
    #[error("Unexpected response: {}", .0)]
    Response(String),
    /// An error was encountered making a request.
    #[error("reqwest error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error was encountered within the request middleware.
    #[error("reqwest middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// An error was encountered parsing a JSON response body.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// An error was encountered on response. This is a response with an HTTP code other than
    /// 200.
    #[error("Error {}", .0)]
    Http(reqwest::StatusCode),
    /// You are not logged in.
    #[error("Not logged in")]
    NotLoggedIn,
    /// Steam returned an error page for the trade.
    #[error("Trade error: {}", .0)]
    Trade(String),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An error occurred when building a session from cookies.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetCookiesError {
    /// The cookies are missing the `sessionid` cookie.
    #[error("Missing sessionid cookie")]
    MissingSessionID,
    /// The cookies are missing a login cookie (`steamLogin` or `steamLoginSecure`).
    #[error("Missing login cookie")]
    MissingLogin,
}

/// Result type for the crate's requests.
pub type Result<T, E = Error> = std::result::Result<T, E>;
