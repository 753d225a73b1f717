// src/views/agent_roles.rs
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::load::AssignmentTable;
use crate::render::{GridColumn, GridModel, GridPage};

#[derive(Debug, Serialize)]
pub struct AgentRolesView {
    pub title: String,
    pub subtitle: String,
    pub agent: String,
    pub total_users: usize,
    pub grid: GridPage,
}

/// One grid row per distinct user under `agent`: the user's distinct roles
/// sorted lexicographically and newline-joined, plus their count. Users are
/// ordered by name (sorted group keys).
pub fn agent_roles(table: &AssignmentTable, agent: &str, page: usize) -> AgentRolesView {
    let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for a in table.rows().iter().filter(|a| a.agent_name == agent) {
        grouped.entry(&a.user_name).or_default().insert(&a.role);
    }

    let mut grid = GridModel::new(vec![
        GridColumn::new("User Name").bold().width(200),
        GridColumn::new("Roles").header("Assigned Roles").wrap(),
        GridColumn::new("Number of Roles").bold().width(120),
    ]);
    for (user, roles) in &grouped {
        let joined = roles.iter().copied().collect::<Vec<_>>().join("\n");
        grid.push_row(vec![user.to_string(), joined, roles.len().to_string()]);
    }

    let total_users = grid.rows.len();
    AgentRolesView {
        title: "Agent → Users → Assigned Roles".to_string(),
        subtitle: format!("All users and their assigned roles under agent: {agent}"),
        agent: agent.to_string(),
        total_users,
        grid: grid.page_view(page),
    }
}
