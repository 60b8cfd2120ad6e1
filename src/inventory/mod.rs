//! The partner's inventory as returned by the trade page.

use crate::serialize::{
    lenient_number,
    map_or_empty_seq,
    true_value,
    Lenient,
};
use crate::types::{AssetId, ClassId, DefIndex, InstanceId};
use std::collections::HashMap;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
struct RawItem {
    #[serde(default, deserialize_with = "lenient_number")]
    classid: Option<ClassId>,
    #[serde(default, deserialize_with = "lenient_number")]
    instanceid: Option<InstanceId>,
}

#[derive(Deserialize, Debug, Clone)]
struct RawDescription {
    #[serde(default)]
    app_data: Option<RawAppData>,
}

#[derive(Deserialize, Debug, Clone)]
struct RawAppData {
    #[serde(default, deserialize_with = "lenient_number")]
    def_index: Option<DefIndex>,
}

/// The partner's inventory for one app and context, loaded once from the `foreigninventory`
/// endpoint.
///
/// Items (`rgInventory`) are keyed by item ID and point to a description (`rgDescriptions`)
/// keyed by `"{classid}_{instanceid}"`. Lookups resolve this join. Missing or malformed data
/// is a lookup miss, never an error.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ForeignInventory {
    #[serde(default, deserialize_with = "true_value")]
    success: bool,
    #[serde(default, rename = "rgInventory", deserialize_with = "map_or_empty_seq")]
    items: HashMap<String, Lenient<RawItem>>,
    #[serde(default, rename = "rgDescriptions", deserialize_with = "map_or_empty_seq")]
    descriptions: HashMap<String, Lenient<RawDescription>>,
}

impl ForeignInventory {
    /// Parses an inventory from a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Builds the key of a description from its class ID and instance ID.
    pub fn description_key(classid: ClassId, instanceid: InstanceId) -> String {
        format!("{classid}_{instanceid}")
    }

    /// Whether the inventory was loaded successfully. Lookups on an invalid inventory always
    /// return `None`.
    pub fn is_valid(&self) -> bool {
        self.success
    }

    /// The number of items in the inventory.
    pub fn len(&self) -> usize {
        if !self.success {
            return 0;
        }

        self.items.len()
    }

    /// Whether the inventory has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the class ID of an item.
    pub fn class_id_for(&self, item_id: AssetId) -> Option<ClassId> {
        self.get_item(item_id)?.classid
    }

    /// Gets the instance ID of an item.
    pub fn instance_id_for(&self, item_id: AssetId) -> Option<InstanceId> {
        self.get_item(item_id)?.instanceid
    }

    /// Gets both the class ID and instance ID of an item.
    pub fn class_and_instance_for(&self, item_id: AssetId) -> Option<(ClassId, InstanceId)> {
        let item = self.get_item(item_id)?;

        Some((item.classid?, item.instanceid?))
    }

    /// Gets the definition index of an item from its description.
    pub fn def_index_for(&self, item_id: AssetId) -> Option<DefIndex> {
        let (classid, instanceid) = self.class_and_instance_for(item_id)?;
        let key = Self::description_key(classid, instanceid);
        let def_index = self.descriptions
            .get(&key)
            .and_then(|description| description.0.as_ref())
            .and_then(|description| description.app_data.as_ref())
            .and_then(|app_data| app_data.def_index);

        if def_index.is_none() {
            log::debug!("No def_index in description {key} for item {item_id}");
        }

        def_index
    }

    /// Gets the IDs of all items with the given definition index, in ascending order.
    pub fn item_ids_with_def_index(&self, def_index: DefIndex) -> Vec<AssetId> {
        if !self.success {
            return Vec::new();
        }

        let mut item_ids = self.items
            .keys()
            .filter_map(|key| key.parse::<AssetId>().ok())
            .filter(|item_id| self.def_index_for(*item_id) == Some(def_index))
            .collect::<Vec<_>>();

        item_ids.sort_unstable();
        item_ids
    }

    fn get_item(&self, item_id: AssetId) -> Option<&RawItem> {
        if !self.success {
            return None;
        }

        let item = self.items
            .get(&item_id.to_string())
            .and_then(|item| item.0.as_ref());

        if item.is_none() {
            log::debug!("Item {item_id} is not in the inventory");
        }

        item
    }
}
