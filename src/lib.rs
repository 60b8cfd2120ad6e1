//! Client for live trades on the Steam Community trade page.
//!
//! A [`TradeSession`] polls the trade log for new events and sends trade commands. The
//! partner's inventory is loaded into a [`ForeignInventory`] to describe the items they add.
//!
//! ```no_run
//! use steam_trade_session::{TradeSession, Session, SteamID};
//!
//! # async fn run() -> Result<(), steam_trade_session::error::Error> {
//! let session = Session::new("sessionid", "steamLogin");
//! let mut trade = TradeSession::builder(SteamID::from(76561198000000000), session).build();
//! let inventory = trade.get_foreign_inventory().await?;
//!
//! for event in trade.poll_status().await?.events {
//!     if let Some(assetid) = event.assetid {
//!         println!("{:?} {:?}", event.action, inventory.def_index_for(assetid));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod enums;
pub mod error;
pub mod inventory;
pub mod response;
pub mod trade;
pub mod types;

mod helpers;
mod serialize;
mod session;
mod time;

pub use error::Error;
pub use inventory::ForeignInventory;
pub use session::Session;
pub use trade::{TradeSession, TradeSessionBuilder};
pub use steamid_ng::SteamID;
