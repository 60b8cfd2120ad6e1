//! Models for responses.

mod trade_event;
mod trade_status;
mod trade_user;

pub use trade_event::TradeEvent;
pub use trade_status::TradeStatus;
pub use trade_user::TradeUser;
