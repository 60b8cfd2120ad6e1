use crate::serialize::{into_bool, string_or_number};
use serde::Deserialize;

/// The status of one party of the trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TradeUser {
    /// Whether the user is ready.
    #[serde(default, deserialize_with = "into_bool")]
    pub ready: bool,
    /// Whether the user has accepted the trade.
    #[serde(default, deserialize_with = "into_bool")]
    pub confirmed: bool,
    /// Seconds since the user last interacted with the trade. Steam sends `-1` before the
    /// user has touched the trade.
    #[serde(default, rename = "sec_since_touch", deserialize_with = "string_or_number")]
    pub seconds_since_touch: i32,
}
