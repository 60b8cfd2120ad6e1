use crate::enums::TradeEventAction;
use crate::serialize::{string_or_number, option_string_or_number};
use crate::time::timestamp_to_server_time;
use crate::types::{AppId, AssetId, ContextId, ServerTime};
use serde::{Deserialize, Deserializer};
use steamid_ng::SteamID;

/// An event from the trade log. Two events are equal when all of their fields are equal, which
/// is used to recognize events already seen in a previous poll.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct TradeEvent {
    /// The 64-bit SteamID of the user who performed the action.
    #[serde(deserialize_with = "string_or_number")]
    pub steamid: u64,
    /// What happened.
    #[serde(deserialize_with = "deserialize_action")]
    pub action: TradeEventAction,
    /// Unix timestamp of the event.
    #[serde(deserialize_with = "string_or_number")]
    pub timestamp: u64,
    /// The app of the item for item events.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub appid: Option<AppId>,
    /// The message for chat events.
    #[serde(default)]
    pub text: Option<String>,
    /// The context of the item for item events.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub contextid: Option<ContextId>,
    /// The item for item events.
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub assetid: Option<AssetId>,
}

impl TradeEvent {
    /// The [`SteamID`] of the user who performed the action.
    pub fn sender(&self) -> SteamID {
        SteamID::from(self.steamid)
    }

    /// The time of the event.
    pub fn time(&self) -> Option<ServerTime> {
        timestamp_to_server_time(self.timestamp)
    }

    /// Whether the event added or removed an item.
    pub fn is_item_event(&self) -> bool {
        matches!(self.action, TradeEventAction::ItemAdded | TradeEventAction::ItemRemoved)
    }
}

fn deserialize_action<'de, D>(deserializer: D) -> Result<TradeEventAction, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_number::<_, i32>(deserializer).map(TradeEventAction::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_added() -> TradeEvent {
        serde_json::from_str(r#"{
            "steamid": "76561198000000000",
            "action": "0",
            "timestamp": 1370000000,
            "appid": 440,
            "contextid": "2",
            "assetid": "1234567890"
        }"#).unwrap()
    }

    #[test]
    fn parses_item_event() {
        let event = item_added();

        assert_eq!(event.steamid, 76561198000000000);
        assert_eq!(event.sender(), SteamID::from(76561198000000000));
        assert_eq!(event.action, TradeEventAction::ItemAdded);
        assert_eq!(event.appid, Some(440));
        assert_eq!(event.contextid, Some(2));
        assert_eq!(event.assetid, Some(1234567890));
        assert_eq!(event.text, None);
        assert!(event.is_item_event());
        assert_eq!(event.time().unwrap().timestamp(), 1370000000);
    }

    #[test]
    fn parses_chat_event() {
        let event: TradeEvent = serde_json::from_str(r#"{
            "steamid": "76561198000000000",
            "action": 7,
            "timestamp": "1370000005",
            "text": "hello"
        }"#).unwrap();

        assert_eq!(event.action, TradeEventAction::UserChat);
        assert_eq!(event.text.as_deref(), Some("hello"));
        assert_eq!(event.assetid, None);
        assert!(!event.is_item_event());
    }

    #[test]
    fn unknown_action_is_kept() {
        let event: TradeEvent = serde_json::from_str(r#"{
            "steamid": "76561198000000000",
            "action": "6",
            "timestamp": 1370000000
        }"#).unwrap();

        assert_eq!(event.action, TradeEventAction::Unknown(6));
    }

    #[test]
    fn out_of_range_actions_are_unknown() {
        for (action, code) in [("300", 300), ("-1", -1), ("70000", 70000)] {
            let body = format!(r#"{{"steamid":"76561198000000000","action":{action},"timestamp":1370000000}}"#);
            let event: TradeEvent = serde_json::from_str(&body).unwrap();

            assert_eq!(event.action, TradeEventAction::Unknown(code));
        }
    }

    #[test]
    fn events_with_same_fields_are_equal() {
        assert_eq!(item_added(), item_added());
    }

    #[test]
    fn changing_any_field_breaks_equality() {
        let event = item_added();
        let changes: Vec<Box<dyn Fn(&mut TradeEvent)>> = vec![
            Box::new(|e: &mut TradeEvent| e.steamid += 1),
            Box::new(|e: &mut TradeEvent| e.action = TradeEventAction::ItemRemoved),
            Box::new(|e: &mut TradeEvent| e.timestamp += 1),
            Box::new(|e: &mut TradeEvent| e.appid = Some(730)),
            Box::new(|e: &mut TradeEvent| e.text = Some(String::from("hi"))),
            Box::new(|e: &mut TradeEvent| e.contextid = Some(6)),
            Box::new(|e: &mut TradeEvent| e.assetid = Some(1)),
        ];

        for change in changes {
            let mut changed = event.clone();

            change(&mut changed);

            assert_ne!(event, changed);
        }
    }
}
