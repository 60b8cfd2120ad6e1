use super::{TradeEvent, TradeUser};
use crate::enums::TradeSessionStatus;
use crate::serialize::{
    hashmap_or_vec,
    option_string_or_number,
    string_or_number,
    true_value,
};
use crate::types::{LogPosition, TradeVersion};
use serde::Deserialize;

/// The response from polling the status of a trade. Contains the events since the log position
/// that was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TradeStatus {
    /// An error message, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// Whether the request was successful.
    #[serde(default, deserialize_with = "true_value")]
    pub success: bool,
    /// Whether the trade version changed since the version that was sent.
    #[serde(default, deserialize_with = "true_value")]
    pub newversion: bool,
    /// The raw status of the trade. See [`TradeStatus::status`].
    #[serde(default, deserialize_with = "string_or_number")]
    pub trade_status: i64,
    /// The current version of the trade.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub version: Option<TradeVersion>,
    /// The current log position of the trade.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub logpos: Option<LogPosition>,
    /// Our status.
    #[serde(default)]
    pub me: Option<TradeUser>,
    /// The partner's status.
    #[serde(default)]
    pub them: Option<TradeUser>,
    /// Events since the log position that was sent.
    #[serde(default, deserialize_with = "hashmap_or_vec")]
    pub events: Vec<TradeEvent>,
}

impl TradeStatus {
    /// The status of the trade, if it is a known status.
    pub fn status(&self) -> Option<TradeSessionStatus> {
        TradeSessionStatus::try_from(self.trade_status).ok()
    }
}
