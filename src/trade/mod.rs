//! A live trade with another user through the trade page.
//!
//! The trade log is polled with [`TradeSession::poll_status`]. Each poll sends the log position
//! and version from the previous poll so that only new events are returned.

mod builder;
mod command;

pub use builder::{TradeSessionBuilder, DEFAULT_APPID, DEFAULT_CONTEXTID};
use command::Command;

use crate::SteamID;
use crate::error::Result;
use crate::helpers::{
    check_response,
    get_default_client,
    is_success_body,
    parses_response,
};
use crate::inventory::ForeignInventory;
use crate::response::TradeStatus;
use crate::session::Session;
use crate::types::{
    AppId,
    AssetId,
    ContextId,
    HttpClient,
    LogPosition,
    TradeVersion,
};
use std::sync::Arc;
use reqwest::{
    cookie::Jar,
    header::REFERER,
};
use serde::Serialize;
use url::Url;

/// The log position before any events have been read.
pub const INITIAL_LOG_POSITION: LogPosition = 0;
/// The version of a trade before any changes.
pub const INITIAL_VERSION: TradeVersion = 1;

/// A live trade with one partner. Not meant to be shared; create one per trade.
#[derive(Debug)]
pub struct TradeSession {
    /// The partner of the trade.
    partner: SteamID,
    /// The session ID sent with every request form.
    sessionid: String,
    /// The app of the items being traded.
    appid: AppId,
    /// The inventory context of the items being traded.
    contextid: ContextId,
    /// The log position echoed by the last status poll.
    log_pos: LogPosition,
    /// The version echoed by the last status poll.
    version: TradeVersion,
    /// The client for making requests.
    client: HttpClient,
    /// The cookies to make requests with. Since the requests are made with the provided client,
    /// the cookies should be the same as what the client uses.
    cookies: Arc<Jar>,
    /// Origin of the trade pages.
    community_url: Url,
}

impl TradeSession {
    /// Builder for constructing a [`TradeSession`].
    pub fn builder(partner: SteamID, session: Session) -> TradeSessionBuilder {
        TradeSessionBuilder::new(partner, session)
    }

    /// The partner of the trade.
    pub fn partner(&self) -> SteamID {
        self.partner
    }

    /// The log position that will be sent with the next poll.
    pub fn log_pos(&self) -> LogPosition {
        self.log_pos
    }

    /// The version that will be sent with the next poll.
    pub fn version(&self) -> TradeVersion {
        self.version
    }

    /// The URL of the trade page. Endpoints are relative to this URL.
    pub fn trade_url(&self) -> String {
        format!(
            "{}/trade/{}/",
            self.community_url.origin().ascii_serialization(),
            u64::from(self.partner),
        )
    }

    /// Adds raw cookies for requests e.g. `"steamLoginSecure=..."`.
    pub fn set_cookies(&self, cookies: &[String]) {
        for cookie_str in cookies {
            self.cookies.add_cookie_str(cookie_str, &self.community_url);
        }
    }

    /// Loads the trade page. Steam expects the page to be visited before the trade endpoints
    /// are used.
    pub async fn open(&self) -> Result<()> {
        let response = self.client.get(self.trade_url())
            .send()
            .await?;

        check_response(response).await?;

        Ok(())
    }

    /// Polls the status of the trade. The log position and version in the response are kept
    /// for the next poll.
    pub async fn poll_status(&mut self) -> Result<TradeStatus> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
            logpos: LogPosition,
            version: TradeVersion,
        }

        let uri = self.get_url(Command::TradeStatus);
        let response = self.client.post(&uri)
            .header(REFERER, self.trade_url())
            .form(&Form {
                sessionid: &self.sessionid,
                logpos: self.log_pos,
                version: self.version,
            })
            .send()
            .await?;
        let status: TradeStatus = parses_response(response).await?;

        log::debug!(
            "Polled trade with {}: {} events, logpos {:?}, version {:?}",
            u64::from(self.partner),
            status.events.len(),
            status.logpos,
            status.version,
        );

        self.apply_status(&status);

        Ok(status)
    }

    /// Stores the log position and version echoed in `status` for the next poll. Fields absent
    /// from the status leave the stored values unchanged.
    pub fn apply_status(&mut self, status: &TradeStatus) {
        if let Some(logpos) = status.logpos {
            if logpos < self.log_pos {
                log::warn!("Log position went backwards from {} to {logpos}", self.log_pos);
            }

            self.log_pos = logpos;
        }

        if let Some(version) = status.version {
            if version < self.version {
                log::warn!("Trade version went backwards from {} to {version}", self.version);
            }

            self.version = version;
        }
    }

    /// Sends a chat message to the partner.
    pub async fn send_message(&self, message: &str) -> Result<bool> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
            message: &'a str,
            logpos: LogPosition,
            version: TradeVersion,
        }

        self.send_command(Command::Chat, &Form {
            sessionid: &self.sessionid,
            message,
            logpos: self.log_pos,
            version: self.version,
        }).await
    }

    /// Adds one of our items to the trade in `slot`. Returns `false` if Steam did not accept
    /// the item, e.g. when it is not in our inventory.
    pub async fn add_item(&self, item_id: AssetId, slot: u32) -> Result<bool> {
        self.send_item_command(Command::AddItem, item_id, slot).await
    }

    /// Removes one of our items from the trade. Returns `false` if the item is not in the
    /// trade.
    pub async fn remove_item(&self, item_id: AssetId, slot: u32) -> Result<bool> {
        self.send_item_command(Command::RemoveItem, item_id, slot).await
    }

    /// Sets whether we are ready.
    pub async fn set_ready(&self, ready: bool) -> Result<bool> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
            ready: bool,
            version: TradeVersion,
        }

        self.send_command(Command::ToggleReady, &Form {
            sessionid: &self.sessionid,
            ready,
            version: self.version,
        }).await
    }

    /// Accepts the trade.
    pub async fn accept_trade(&self) -> Result<bool> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
            version: TradeVersion,
        }

        self.send_command(Command::Confirm, &Form {
            sessionid: &self.sessionid,
            version: self.version,
        }).await
    }

    /// Cancels the trade.
    pub async fn cancel_trade(&self) -> Result<bool> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
        }

        self.send_command(Command::Cancel, &Form {
            sessionid: &self.sessionid,
        }).await
    }

    /// Gets the partner's inventory for the trade's app and context.
    pub async fn get_foreign_inventory(&self) -> Result<ForeignInventory> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
            steamid: u64,
            appid: AppId,
            contextid: ContextId,
        }

        let uri = self.get_url(Command::ForeignInventory);
        let response = self.client.post(&uri)
            .header(REFERER, self.trade_url())
            .form(&Form {
                sessionid: &self.sessionid,
                steamid: u64::from(self.partner),
                appid: self.appid,
                contextid: self.contextid,
            })
            .send()
            .await?;
        let inventory: ForeignInventory = parses_response(response).await?;

        if !inventory.is_valid() {
            log::debug!("Inventory of {} was not loaded successfully", u64::from(self.partner));
        }

        Ok(inventory)
    }

    async fn send_item_command(
        &self,
        command: Command,
        item_id: AssetId,
        slot: u32,
    ) -> Result<bool> {
        #[derive(Serialize)]
        struct Form<'a> {
            sessionid: &'a str,
            appid: AppId,
            contextid: ContextId,
            itemid: AssetId,
            slot: u32,
        }

        self.send_command(command, &Form {
            sessionid: &self.sessionid,
            appid: self.appid,
            contextid: self.contextid,
            itemid: item_id,
            slot,
        }).await
    }

    /// Sends a command and reduces the response to whether it succeeded. Only transport errors
    /// are returned as errors.
    async fn send_command<T>(
        &self,
        command: Command,
        form: &T,
    ) -> Result<bool>
    where
        T: Serialize + ?Sized,
    {
        let uri = self.get_url(command);
        let response = self.client.post(&uri)
            .header(REFERER, self.trade_url())
            .form(form)
            .send()
            .await?;
        let body = check_response(response).await?;
        let success = is_success_body(&body);

        log::debug!("Command {command} for trade with {}: success={success}", u64::from(self.partner));

        Ok(success)
    }

    fn get_url(&self, command: Command) -> String {
        format!("{}{}", self.trade_url(), command.pathname())
    }
}

impl From<TradeSessionBuilder> for TradeSession {
    fn from(builder: TradeSessionBuilder) -> Self {
        let cookies = builder.cookie_jar
            .unwrap_or_else(|| Arc::new(Jar::default()));
        let client = builder.client
            .unwrap_or_else(|| get_default_client(
                Arc::clone(&cookies),
                builder.user_agent,
            ));
        let trade_cookies = builder.session.trade_cookies(
            builder.appid,
            builder.contextid,
            builder.language,
        );
        let trade = Self {
            partner: builder.partner,
            sessionid: builder.session.unescaped_sessionid(),
            appid: builder.appid,
            contextid: builder.contextid,
            log_pos: INITIAL_LOG_POSITION,
            version: INITIAL_VERSION,
            client,
            cookies,
            community_url: builder.community_url,
        };

        trade.set_cookies(&trade_cookies);
        trade.set_cookies(&builder.cookies);
        trade
    }
}
