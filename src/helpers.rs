use std::sync::Arc;
use reqwest_middleware::{
    ClientBuilder,
    ClientWithMiddleware
};
use reqwest::{
    header,
    cookie::CookieStore
};
use serde::de::DeserializeOwned;
use lazy_regex::{
    regex_is_match,
    regex_captures
};
use crate::error::Error;
use crate::serialize::is_true_value;

pub const COMMUNITY_HOSTNAME: &str = "steamcommunity.com";
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

/// Creates a client which stores cookies in `cookie_store`. Requests are not retried.
pub fn get_default_client<T>(
    cookie_store: Arc<T>,
    user_agent_string: &'static str,
) -> ClientWithMiddleware
where
    T: CookieStore + 'static,
{
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .cookie_provider(cookie_store)
        .default_headers(headers)
        .build()
        .unwrap_or_else(|error| panic!("Client could not be built: {error}"));

    ClientBuilder::new(client).build()
}

fn is_login(location_option: Option<&header::HeaderValue>) -> bool {
    match location_option {
        Some(location) => {
            if let Ok(location_str) = location.to_str() {
                regex_is_match!("/login", location_str)
            } else {
                false
            }
        },
        None => false,
    }
}

/// Checks the status of a response and reads its body.
pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = &response.status();

    match status.as_u16() {
        300..=399 if is_login(response.headers().get("location")) => {
            Err(Error::NotLoggedIn)
        },
        400..=599 => {
            Err(Error::Http(*status))
        },
        _ => {
            Ok(response.bytes().await?)
        }
    }
}

/// Parses a JSON response body. When the body is not the expected JSON, Steam's HTML error
/// pages are checked for a more useful error.
pub fn parses_body<D>(body: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            let html = String::from_utf8_lossy(body);

            if regex_is_match!(r#"<h1>Sorry!</h1>"#, &html) {
                if let Some((_, message)) = regex_captures!("<h3>(.+)</h3>", &html) {
                    Err(Error::Response(message.into()))
                } else {
                    Err(Error::Response("Unexpected error".into()))
                }
            } else if regex_is_match!(r#"<h1>Sign In</h1>"#, &html) && regex_is_match!(r#"g_steamID = false;"#, &html) {
                Err(Error::NotLoggedIn)
            } else if let Some((_, message)) = regex_captures!(r#"<div id="error_msg">\s*([^<]+)\s*</div>"#, &html) {
                Err(Error::Trade(message.trim().into()))
            } else {
                Err(Error::Parse(parse_error))
            }
        }
    }
}

pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    parses_body(&body)
}

/// Reduces a command response body to whether it reported success. Bodies which are not JSON
/// or lack a true `success` field are unsuccessful.
pub fn is_success_body(body: &[u8]) -> bool {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(json) => json.get("success").is_some_and(is_true_value),
        Err(error) => {
            log::warn!("Command response could not be parsed: {error}");
            false
        },
    }
}
