use crate::error::SetCookiesError;
use crate::enums::Language;
use crate::types::{AppId, ContextId};

/// Session data from cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// The session ID. Sent with every trade request.
    pub sessionid: String,
    /// The login cookie value.
    pub steam_login: String,
}

impl Session {
    /// Creates a new [`Session`].
    pub fn new<S, T>(sessionid: S, steam_login: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            sessionid: sessionid.into(),
            steam_login: steam_login.into(),
        }
    }

    /// Reads the session from raw cookie strings e.g. `"sessionid=abc123"`. Either
    /// `steamLogin` or `steamLoginSecure` is accepted as the login cookie.
    pub fn from_cookies(cookies: &[String]) -> Result<Self, SetCookiesError> {
        let mut sessionid = None;
        let mut steam_login = None;

        for cookie in cookies {
            let pair = cookie.split(';').next().unwrap_or_default();

            if let Some((name, value)) = pair.split_once('=') {
                match name.trim() {
                    "sessionid" => sessionid = Some(value.trim().to_string()),
                    "steamLogin" | "steamLoginSecure" => steam_login = Some(value.trim().to_string()),
                    _ => {},
                }
            }
        }

        Ok(Self {
            sessionid: sessionid.ok_or(SetCookiesError::MissingSessionID)?,
            steam_login: steam_login.ok_or(SetCookiesError::MissingLogin)?,
        })
    }

    /// The session ID as sent in request forms. The cookie value is percent-encoded.
    pub(crate) fn unescaped_sessionid(&self) -> String {
        url::form_urlencoded::parse(self.sessionid.as_bytes())
            .next()
            .map(|(sessionid, _)| sessionid.into_owned())
            .unwrap_or_default()
    }

    /// The cookies the trade page expects, as raw cookie strings.
    pub(crate) fn trade_cookies(
        &self,
        appid: AppId,
        contextid: ContextId,
        language: Language,
    ) -> Vec<String> {
        vec![
            format!("sessionid={}", self.sessionid),
            format!("steamLogin={}", self.steam_login),
            String::from("bCompletedTradeTutorial=true"),
            format!("strTradeLastInventoryContext={appid}_{contextid}"),
            format!("recentlyVisitedAppHubs={appid}"),
            format!("Steam_Language={}", language.api_language_code()),
            String::from("fakeCC=US"),
            // -14400,0 url-encoded
            String::from("timezoneOffset=-14400%2C0"),
        ]
    }
}
