use strum::{Display, IntoStaticStr};

/// An endpoint of the trade page. The name of each variant in lowercase is its path.
#[derive(Debug, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    TradeStatus,
    Chat,
    AddItem,
    RemoveItem,
    ToggleReady,
    Confirm,
    Cancel,
    ForeignInventory,
}

impl Command {
    /// The path of the endpoint relative to the trade URL.
    pub fn pathname(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gets_pathnames() {
        assert_eq!(Command::TradeStatus.pathname(), "tradestatus");
        assert_eq!(Command::Chat.pathname(), "chat");
        assert_eq!(Command::AddItem.pathname(), "additem");
        assert_eq!(Command::RemoveItem.pathname(), "removeitem");
        assert_eq!(Command::ToggleReady.pathname(), "toggleready");
        assert_eq!(Command::Confirm.pathname(), "confirm");
        assert_eq!(Command::Cancel.pathname(), "cancel");
        assert_eq!(Command::ForeignInventory.pathname(), "foreigninventory");
        assert_eq!(Command::AddItem.to_string(), "additem");
    }
}
