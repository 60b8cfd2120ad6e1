use steam_trade_session::{
    TradeSession,
    Session,
    SteamID,
    enums::TradeEventAction,
    response::TradeEvent,
};
use std::collections::HashSet;
use std::time::Duration;

/// Reads an environment variable, loaded from `.env` if present.
fn env(key: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(key).map_err(|error| format!("{key}: {error}").into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let partner = SteamID::from(env("PARTNER_STEAMID")?.parse::<u64>()?);
    let session = Session::new(env("SESSIONID")?, env("STEAM_LOGIN")?);
    let mut trade = TradeSession::builder(partner, session).build();

    trade.open().await?;

    let inventory = trade.get_foreign_inventory().await?;
    let mut seen: HashSet<TradeEvent> = HashSet::new();

    println!("Partner has {} items", inventory.len());

    loop {
        let status = trade.poll_status().await?;

        for event in &status.events {
            if !seen.insert(event.clone()) {
                continue;
            }

            match (event.action, event.assetid) {
                (TradeEventAction::ItemAdded, Some(assetid)) => {
                    println!("Added item {assetid} (def_index {:?})", inventory.def_index_for(assetid));
                },
                (TradeEventAction::ItemRemoved, Some(assetid)) => {
                    println!("Removed item {assetid}");
                },
                (TradeEventAction::UserChat, _) => {
                    println!("Chat: {}", event.text.as_deref().unwrap_or_default());
                },
                (TradeEventAction::UserSetReady, _) => {
                    trade.set_ready(true).await?;
                },
                (TradeEventAction::UserAccept, _) => {
                    if trade.accept_trade().await? {
                        println!("Accepted trade");
                    }
                },
                (action, _) => {
                    println!("Event {action:?}");
                },
            }
        }

        if status.status().is_some_and(|status| status.is_finished()) {
            println!("Trade finished: {:?}", status.status());
            break;
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Ok(())
}
