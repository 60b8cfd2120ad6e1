//! Enumerated types.

mod language;
mod trade_event_action;
mod trade_session_status;

pub use language::Language;
pub use trade_event_action::TradeEventAction;
pub use trade_session_status::TradeSessionStatus;
