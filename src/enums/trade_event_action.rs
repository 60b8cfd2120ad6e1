use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

/// The action of a [`crate::response::TradeEvent`]. The codes are Steam's; there is no
/// action for 5 or 6.
#[derive(Debug, Serialize, Deserialize, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(from = "i32", into = "i32")]
#[repr(i32)]
pub enum TradeEventAction {
    ItemAdded = 0,
    ItemRemoved = 1,
    UserSetReady = 2,
    UserSetUnready = 3,
    UserAccept = 4,
    UserChat = 7,
    /// An action code not covered by the other variants.
    #[num_enum(catch_all)]
    Unknown(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_codes() {
        assert_eq!(TradeEventAction::from(0), TradeEventAction::ItemAdded);
        assert_eq!(TradeEventAction::from(4), TradeEventAction::UserAccept);
        assert_eq!(TradeEventAction::from(7), TradeEventAction::UserChat);
        assert_eq!(TradeEventAction::from(5), TradeEventAction::Unknown(5));
        assert_eq!(TradeEventAction::from(300), TradeEventAction::Unknown(300));
        assert_eq!(i32::from(TradeEventAction::UserChat), 7);
    }

    #[test]
    fn deserializes_from_number() {
        let action: TradeEventAction = serde_json::from_str("3").unwrap();

        assert_eq!(action, TradeEventAction::UserSetUnready);
    }
}
