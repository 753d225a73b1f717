// src/views/statistics.rs
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::load::AssignmentTable;
use crate::render::Metric;

/// A name with its count, for the two ranked listings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatisticsView {
    pub title: String,
    pub metrics: Vec<Metric>,
    /// Distinct users per agent, descending by count.
    pub users_per_agent: Vec<CountEntry>,
    /// Row occurrences per role (not distinct users), descending by count.
    pub role_counts: Vec<CountEntry>,
}

pub fn statistics(table: &AssignmentTable) -> StatisticsView {
    let mut user_ids: HashSet<&str> = HashSet::new();
    let mut agent_names: HashSet<&str> = HashSet::new();
    let mut role_names: HashSet<&str> = HashSet::new();
    let mut per_agent: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    let mut per_role: BTreeMap<&str, usize> = BTreeMap::new();

    for a in table.rows() {
        user_ids.insert(&a.user_id);
        agent_names.insert(&a.agent_name);
        role_names.insert(&a.role);
        per_agent
            .entry(&a.agent_name)
            .or_default()
            .insert(&a.user_id);
        *per_role.entry(&a.role).or_default() += 1;
    }

    let users_per_agent = rank(per_agent.into_iter().map(|(name, users)| (name, users.len())));
    let role_counts = rank(per_role.into_iter());

    StatisticsView {
        title: "📊 General Statistics".to_string(),
        metrics: vec![
            Metric::new("Total Unique Users", user_ids.len()),
            Metric::new("Total Unique Agents", agent_names.len()),
            Metric::new("Total Unique Roles", role_names.len()),
        ],
        users_per_agent,
        role_counts,
    }
}

/// Descending by count; ties broken by name so output is deterministic.
fn rank<'a>(entries: impl Iterator<Item = (&'a str, usize)>) -> Vec<CountEntry> {
    let mut out: Vec<CountEntry> = entries
        .map(|(name, count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::Assignment;

    fn row(code: &str, agent: &str, uid: &str, user: &str, role: &str) -> Assignment {
        Assignment {
            agent_code: code.to_string(),
            agent_name: agent.to_string(),
            user_id: uid.to_string(),
            user_name: user.to_string(),
            role: role.to_string(),
        }
    }

    fn sample() -> AssignmentTable {
        AssignmentTable::from_rows(vec![
            row("A1", "Agt1", "U1", "Alice", "Admin"),
            row("A1", "Agt1", "U1", "Alice", "Viewer"),
            row("A2", "Agt2", "U2", "Bob", "Admin"),
        ])
    }

    #[test]
    fn num_users_equals_distinct_user_ids() {
        let view = statistics(&sample());
        assert_eq!(view.metrics[0].label, "Total Unique Users");
        assert_eq!(view.metrics[0].value, 2);
        assert_eq!(view.metrics[1].value, 2); // agents
        assert_eq!(view.metrics[2].value, 2); // roles
    }

    #[test]
    fn role_counts_are_row_occurrences_not_distinct_users() {
        let view = statistics(&sample());
        // Admin appears in two rows even though one user holds it twice over
        // different agents; occurrence counting is intentional here.
        assert_eq!(
            view.role_counts,
            vec![
                CountEntry {
                    name: "Admin".to_string(),
                    count: 2
                },
                CountEntry {
                    name: "Viewer".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn users_per_agent_counts_distinct_users_descending() {
        let mut rows = vec![
            row("A1", "Agt1", "U1", "Alice", "Admin"),
            row("A1", "Agt1", "U1", "Alice", "Viewer"),
            row("A1", "Agt1", "U3", "Carol", "Admin"),
            row("A2", "Agt2", "U2", "Bob", "Admin"),
        ];
        rows.rotate_left(1); // input order must not matter
        let view = statistics(&AssignmentTable::from_rows(rows));

        assert_eq!(
            view.users_per_agent,
            vec![
                CountEntry {
                    name: "Agt1".to_string(),
                    count: 2
                },
                CountEntry {
                    name: "Agt2".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn empty_table_yields_zero_metrics() {
        let view = statistics(&AssignmentTable::default());
        assert!(view.metrics.iter().all(|m| m.value == 0));
        assert!(view.users_per_agent.is_empty());
        assert!(view.role_counts.is_empty());
    }
}
