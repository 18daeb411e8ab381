use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Class, Event, EventResult, SoloPlacing};

/// One leaderboard row. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StandingsEntry {
    pub class_id: Uuid,
    pub class_name: String,
    pub total_points: i64,
}

/// A declared outcome paired with the solo placings attached to it (empty for
/// group results, which carry their ranking in `placings`).
#[derive(Debug, Clone)]
pub struct DeclaredResult {
    pub result: EventResult,
    pub solo_placings: Vec<SoloPlacing>,
}

/// Computes the leaderboard for one category and year from immutable
/// snapshots of the inputs.
///
/// Every class appears exactly once, starting at zero. For each result the
/// event's points table is resolved; a class ranked at 0-based ordinal `i`
/// earns `points[i]`, and ordinals beyond the table earn nothing. Solo
/// placings carry a 1-indexed position and go through the same lookup at
/// `position - 1`. Results whose event has no points table, and placings
/// that reference a class outside the supplied set, contribute nothing —
/// declaration-time validation is responsible for rejecting the latter.
///
/// Ordering: total points descending, ties broken by class name ascending,
/// so identical inputs always produce identical output.
pub fn aggregate(
    classes: &[Class],
    events: &[Event],
    results: &[DeclaredResult],
) -> Vec<StandingsEntry> {
    let points_tables: HashMap<Uuid, &[i32]> = events
        .iter()
        .filter(|event| event.is_scored())
        .map(|event| (event.event_id, event.points.as_slice()))
        .collect();

    let mut totals: HashMap<Uuid, i64> =
        classes.iter().map(|class| (class.class_id, 0)).collect();

    for declared in results {
        let Some(table) = points_tables.get(&declared.result.event_id) else {
            continue;
        };

        for (ordinal, class_id) in declared.result.placings.iter().enumerate() {
            award(&mut totals, table, *class_id, ordinal);
        }

        for placing in &declared.solo_placings {
            if placing.position >= 1 {
                award(
                    &mut totals,
                    table,
                    placing.class_id,
                    (placing.position - 1) as usize,
                );
            }
        }
    }

    let mut standings: Vec<StandingsEntry> = classes
        .iter()
        .map(|class| StandingsEntry {
            class_id: class.class_id,
            class_name: class.name.clone(),
            total_points: totals[&class.class_id],
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.class_name.cmp(&b.class_name))
    });

    standings
}

fn award(totals: &mut HashMap<Uuid, i64>, table: &[i32], class_id: Uuid, ordinal: usize) {
    let Some(points) = table.get(ordinal) else {
        return;
    };
    if let Some(total) = totals.get_mut(&class_id) {
        *total += *points as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> Class {
        Class {
            class_id: Uuid::new_v4(),
            name: name.to_string(),
            category: "Senior".to_string(),
            contact_email: None,
            is_active: true,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn event(points: Vec<i32>) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            name: "Quiz".to_string(),
            category: "Senior".to_string(),
            participation: "Group".to_string(),
            description: "General knowledge quiz".to_string(),
            rules: vec!["Teams of two".to_string()],
            min_students: 1,
            max_students: 5,
            location: "Main hall".to_string(),
            points,
            is_active: true,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn ranking(event_id: Uuid, placings: Vec<Uuid>) -> DeclaredResult {
        DeclaredResult {
            result: EventResult {
                result_id: Uuid::new_v4(),
                event_id,
                year: 2025,
                placings,
                created_at: chrono::NaiveDateTime::default(),
            },
            solo_placings: vec![],
        }
    }

    fn totals_by_name(standings: &[StandingsEntry]) -> Vec<(&str, i64)> {
        standings
            .iter()
            .map(|entry| (entry.class_name.as_str(), entry.total_points))
            .collect()
    }

    #[test]
    fn test_points_attributed_by_rank() {
        let (a, b, c) = (class("A"), class("B"), class("C"));
        let e = event(vec![10, 6, 3]);
        let results = vec![ranking(e.event_id, vec![a.class_id, b.class_id, c.class_id])];

        let standings = aggregate(&[a, b, c], &[e], &results);

        assert_eq!(totals_by_name(&standings), vec![("A", 10), ("B", 6), ("C", 3)]);
    }

    #[test]
    fn test_classes_without_results_appear_with_zero() {
        let (a, b) = (class("A"), class("B"));
        let e = event(vec![10, 6, 3]);
        let results = vec![ranking(e.event_id, vec![a.class_id])];

        let standings = aggregate(&[a, b], &[e], &results);

        assert_eq!(totals_by_name(&standings), vec![("A", 10), ("B", 0)]);
    }

    #[test]
    fn test_two_event_season() {
        // E1 points [10,6,3] ranked A,B,C; E2 points [5,3,1] ranked B,C,A.
        // A = 10+1 = 11, B = 6+5 = 11, C = 3+3 = 6; tie broken by name.
        let (a, b, c) = (class("A"), class("B"), class("C"));
        let e1 = event(vec![10, 6, 3]);
        let e2 = event(vec![5, 3, 1]);
        let results = vec![
            ranking(e1.event_id, vec![a.class_id, b.class_id, c.class_id]),
            ranking(e2.event_id, vec![b.class_id, c.class_id, a.class_id]),
        ];

        let standings = aggregate(&[a, b, c], &[e1, e2], &results);

        assert_eq!(totals_by_name(&standings), vec![("A", 11), ("B", 11), ("C", 6)]);
    }

    #[test]
    fn test_unscored_event_contributes_nothing() {
        let (a, b) = (class("A"), class("B"));
        let unscored = event(vec![]);
        let results = vec![ranking(unscored.event_id, vec![a.class_id, b.class_id])];

        let standings = aggregate(&[a, b], &[unscored], &results);

        assert_eq!(totals_by_name(&standings), vec![("A", 0), ("B", 0)]);
    }

    #[test]
    fn test_ordinal_beyond_points_table_earns_nothing() {
        let (a, b, c, d) = (class("A"), class("B"), class("C"), class("D"));
        let e = event(vec![10, 6, 3]);
        let results = vec![ranking(
            e.event_id,
            vec![a.class_id, b.class_id, c.class_id, d.class_id],
        )];

        let standings = aggregate(&[a, b, c, d], &[e], &results);

        assert_eq!(
            totals_by_name(&standings),
            vec![("A", 10), ("B", 6), ("C", 3), ("D", 0)]
        );
    }

    #[test]
    fn test_solo_placings_use_one_indexed_positions() {
        let (a, b) = (class("A"), class("B"));
        let e = event(vec![10, 6, 3]);
        let result = DeclaredResult {
            result: EventResult {
                result_id: Uuid::new_v4(),
                event_id: e.event_id,
                year: 2025,
                placings: vec![],
                created_at: chrono::NaiveDateTime::default(),
            },
            solo_placings: vec![
                SoloPlacing {
                    result_id: Uuid::new_v4(),
                    class_id: b.class_id,
                    student: "Bela".to_string(),
                    position: 1,
                },
                SoloPlacing {
                    result_id: Uuid::new_v4(),
                    class_id: a.class_id,
                    student: "Asha".to_string(),
                    position: 3,
                },
            ],
        };

        let standings = aggregate(&[a, b], &[e], &[result]);

        assert_eq!(totals_by_name(&standings), vec![("B", 10), ("A", 3)]);
    }

    #[test]
    fn test_placing_for_unknown_class_is_ignored() {
        let a = class("A");
        let e = event(vec![10, 6, 3]);
        let results = vec![ranking(e.event_id, vec![Uuid::new_v4(), a.class_id])];

        let standings = aggregate(std::slice::from_ref(&a), &[e], &results);

        assert_eq!(totals_by_name(&standings), vec![("A", 6)]);
    }

    #[test]
    fn test_no_events_yields_all_zero_board() {
        let (a, b) = (class("A"), class("B"));

        let standings = aggregate(&[a, b], &[], &[]);

        assert_eq!(totals_by_name(&standings), vec![("A", 0), ("B", 0)]);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let (a, b, c) = (class("A"), class("B"), class("C"));
        let e = event(vec![10, 6, 3]);
        let results = vec![ranking(e.event_id, vec![c.class_id, a.class_id, b.class_id])];
        let classes = [a, b, c];
        let events = [e];

        let first = aggregate(&classes, &events, &results);
        let second = aggregate(&classes, &events, &results);

        assert_eq!(first, second);
    }
}
