// src/views/agent_counts.rs
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::load::AssignmentTable;
use crate::render::{GridColumn, GridModel, GridPage};

#[derive(Debug, Serialize)]
pub struct AgentCountsView {
    pub title: String,
    pub grid: GridPage,
}

/// Distinct User ID count per agent, one row per agent ordered by name.
/// Takes no selection; the whole table is grouped.
pub fn agent_counts(table: &AssignmentTable, page: usize) -> AgentCountsView {
    let mut per_agent: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for a in table.rows() {
        if a.agent_name.is_empty() {
            continue;
        }
        per_agent
            .entry(&a.agent_name)
            .or_default()
            .insert(&a.user_id);
    }

    let mut grid = GridModel::new(vec![
        GridColumn::new("Agent Name").bold().width(250),
        GridColumn::new("Number of Users").width(150),
    ]);
    for (agent, users) in &per_agent {
        grid.push_row(vec![agent.to_string(), users.len().to_string()]);
    }

    AgentCountsView {
        title: "Agents and Their Number of Users".to_string(),
        grid: grid.page_view(page),
    }
}
