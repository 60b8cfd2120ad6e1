use super::TradeSession;
use crate::SteamID;
use crate::enums::Language;
use crate::helpers::{
    COMMUNITY_HOSTNAME,
    USER_AGENT_STRING,
};
use crate::session::Session;
use crate::types::{AppId, ContextId};
use std::sync::Arc;
use reqwest::cookie::Jar;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

/// Team Fortress 2.
pub const DEFAULT_APPID: AppId = 440;
/// The backpack context of Team Fortress 2.
pub const DEFAULT_CONTEXTID: ContextId = 2;

/// Builder for constructing a [`TradeSession`].
#[derive(Debug, Clone)]
pub struct TradeSessionBuilder {
    /// The partner of the trade.
    pub(crate) partner: SteamID,
    /// The session from the logged in account's cookies.
    pub(crate) session: Session,
    /// The app of the items being traded.
    pub(crate) appid: AppId,
    /// The inventory context of the items being traded.
    pub(crate) contextid: ContextId,
    /// The language of the trade page.
    pub(crate) language: Language,
    /// Additional raw cookies.
    pub(crate) cookies: Vec<String>,
    /// Request cookies.
    pub(crate) cookie_jar: Option<Arc<Jar>>,
    /// Client to use for requests. Remember to also include the cookies connected to this client.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
    /// Origin of the trade pages.
    pub(crate) community_url: Url,
}

impl TradeSessionBuilder {
    /// Creates a new [`TradeSessionBuilder`].
    pub fn new(partner: SteamID, session: Session) -> Self {
        Self {
            partner,
            session,
            appid: DEFAULT_APPID,
            contextid: DEFAULT_CONTEXTID,
            language: Language::default(),
            cookies: Vec::new(),
            cookie_jar: None,
            client: None,
            user_agent: USER_AGENT_STRING,
            community_url: default_community_url(),
        }
    }

    /// The app of the items being traded. Defaults to 440.
    pub fn app_id(mut self, appid: AppId) -> Self {
        self.appid = appid;
        self
    }

    /// The inventory context of the items being traded. Defaults to 2.
    pub fn context_id(mut self, contextid: ContextId) -> Self {
        self.contextid = contextid;
        self
    }

    /// The language of the trade page.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Additional raw cookies to send with requests, e.g. `steamLoginSecure`.
    pub fn cookies(mut self, cookies: Vec<String>) -> Self {
        self.cookies = cookies;
        self
    }

    /// User agent for requests. Ignored when a client is supplied.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Client to use for requests. It is also required to include the associated cookies with this
    /// client so that the session's cookies are sent.
    pub fn client(mut self, client: ClientWithMiddleware, cookies: Arc<Jar>) -> Self {
        self.client = Some(client);
        self.cookie_jar = Some(cookies);
        self
    }

    /// Origin of the trade pages. Defaults to `https://steamcommunity.com`; only the scheme,
    /// host and port are used.
    pub fn community_url(mut self, community_url: Url) -> Self {
        self.community_url = community_url;
        self
    }

    /// Builds the [`TradeSession`].
    pub fn build(self) -> TradeSession {
        self.into()
    }
}

fn default_community_url() -> Url {
    // Should not panic since the URL is hardcoded.
    format!("https://{}", COMMUNITY_HOSTNAME).parse::<Url>()
        .unwrap_or_else(|error| panic!("URL could not be parsed from {}: {}", COMMUNITY_HOSTNAME, error))
}
