//! Navigation domain module.
//!
//! # Module Structure
//!
//! - `item` - NavigationItem and NavigationGroup
//! - `resolver` - NavigationResolver merge algorithm
//! - `active` - Active-item detection for the current path

mod active;
mod item;
mod resolver;

pub use active::{active_item, active_trail, is_item_active, ActiveTrail};
pub use item::{NavigationGroup, NavigationItem};
pub use resolver::{
    resolve_navigation, NavigationResolver, MAIN_GROUP_ID, SETTINGS_GROUP_ID, TOOLS_GROUP_ID,
};
