//! Types for common values in Steam responses.

pub use crate::time::ServerTime;

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination. The trade endpoints call
/// this an item ID.
pub type AssetId = u64;
/// The template of an item. Together with an [`InstanceId`] it keys the item's description.
pub type ClassId = u32;
/// A more specific instance of a [`ClassId`], for example a Team Fortress 2 item which is
/// painted. `0` is a valid instance ID.
pub type InstanceId = u64;
/// The app-specific item type, read from a description's `app_data.def_index`.
pub type DefIndex = u16;
/// The number of trade events already consumed from the trade log.
pub type LogPosition = u32;
/// The version of a trade. Incremented by Steam whenever the trade's state changes.
pub type TradeVersion = u32;

// Types internally used by the crate.
use reqwest_middleware::ClientWithMiddleware;

pub(crate) type HttpClient = ClientWithMiddleware;
