use num_enum::{TryFromPrimitive, IntoPrimitive};
use strum_macros::{Display, EnumString};

/// The status of a live trade, from the `trade_status` field of a status poll.
#[derive(Debug, Display, EnumString, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Clone, Copy)]
#[repr(i64)]
pub enum TradeSessionStatus {
    OnGoing = 0,
    CompletedSuccessfully = 1,
    Empty = 2,
    TradeCancelled = 3,
    SessionExpired = 4,
    TradeFailed = 5,
    PendingConfirmation = 6,
}

impl TradeSessionStatus {
    /// Whether the trade is over and no more commands will be accepted.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::OnGoing)
    }
}
