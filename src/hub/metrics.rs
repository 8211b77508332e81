use std::collections::BTreeMap;

use serde::Serialize;

use super::breadcrumb::{
    Breadcrumb, CATEGORY_CLICK, CATEGORY_FOCUS, CATEGORY_KEY, CATEGORY_SCROLL, CATEGORY_SWIPE,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionSnapshot {
    pub total: u64,
    pub clicks: u64,
    pub scrolls: u64,
    pub swipes: u64,
    pub keys: u64,
    pub focus_changes: u64,
    pub other: u64,
    /// Scroll and swipe counts keyed by direction.
    pub directions: BTreeMap<String, u64>,
    /// Click counts keyed by target id.
    pub click_targets: BTreeMap<String, u64>,
}

pub fn compute_snapshot(breadcrumbs: &[Breadcrumb]) -> InteractionSnapshot {
    let mut snap = InteractionSnapshot::default();

    for crumb in breadcrumbs {
        snap.total += 1;
        match crumb.category.as_str() {
            CATEGORY_CLICK => {
                snap.clicks += 1;
                if let Some(target) = crumb.target() {
                    *snap.click_targets.entry(target.to_string()).or_default() += 1;
                }
            }
            CATEGORY_SCROLL | CATEGORY_SWIPE => {
                if crumb.category == CATEGORY_SCROLL {
                    snap.scrolls += 1;
                } else {
                    snap.swipes += 1;
                }
                if let Some(direction) = crumb.data.get("direction").and_then(|v| v.as_str()) {
                    *snap.directions.entry(direction.to_string()).or_default() += 1;
                }
            }
            CATEGORY_KEY => snap.keys += 1,
            CATEGORY_FOCUS => snap.focus_changes += 1,
            _ => snap.other += 1,
        }
    }

    snap
}
