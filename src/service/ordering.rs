//! Display ordering for roadmap items.

use crate::models::{RoadmapItem, RoadmapStatus};
use std::cmp::Ordering;

/// Within one priority tier, shipped work is shown before work in flight, then planned work.
pub fn status_rank(status: RoadmapStatus) -> u8 {
    match status {
        RoadmapStatus::Completed => 0,
        RoadmapStatus::InProgress => 1,
        RoadmapStatus::Planned => 2,
    }
}

/// Priority ascending, then status rank, then creation time ascending. Id breaks exact ties.
pub fn roadmap_display_order(a: &RoadmapItem, b: &RoadmapItem) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| status_rank(a.status).cmp(&status_rank(b.status)))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_roadmap(items: &mut [RoadmapItem]) {
    items.sort_by(roadmap_display_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn item(id: i32, priority: i32, status: RoadmapStatus, offset_secs: i64) -> RoadmapItem {
        let at = Utc::now() + TimeDelta::seconds(offset_secs);
        RoadmapItem {
            id,
            title: format!("item {}", id),
            description: String::new(),
            status,
            expected_date: None,
            priority,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn priority_then_status() {
        let mut items = vec![
            item(1, 1, RoadmapStatus::InProgress, 0),
            item(2, 3, RoadmapStatus::Planned, 1),
            item(3, 2, RoadmapStatus::Completed, 2),
            item(4, 1, RoadmapStatus::Completed, 3),
        ];
        sort_roadmap(&mut items);
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 1, 3, 2]);
    }

    #[test]
    fn status_tiers_within_priority() {
        let mut items = vec![
            item(1, 1, RoadmapStatus::Planned, 0),
            item(2, 1, RoadmapStatus::InProgress, 1),
            item(3, 1, RoadmapStatus::Completed, 2),
        ];
        sort_roadmap(&mut items);
        let statuses: Vec<RoadmapStatus> = items.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![RoadmapStatus::Completed, RoadmapStatus::InProgress, RoadmapStatus::Planned]
        );
    }

    #[test]
    fn older_first_on_full_tie() {
        let mut items = vec![
            item(7, 2, RoadmapStatus::Planned, 10),
            item(8, 2, RoadmapStatus::Planned, -10),
        ];
        sort_roadmap(&mut items);
        assert_eq!(items[0].id, 8);
    }
}
