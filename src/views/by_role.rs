// src/views/by_role.rs
use serde::Serialize;
use std::collections::HashSet;

use crate::load::AssignmentTable;
use crate::render::{GridColumn, GridModel, GridPage};

#[derive(Debug, Serialize)]
pub struct RoleUsersView {
    pub title: String,
    pub subtitle: String,
    pub role: String,
    pub total_users: usize,
    pub grid: GridPage,
}

/// Users holding `role`, deduplicated on the (User ID, User Name, Agent Name)
/// triple in first-occurrence order. An unknown or empty role renders a
/// zero-result page, not an error.
pub fn by_role(table: &AssignmentTable, role: &str, page: usize) -> RoleUsersView {
    let mut grid = GridModel::new(vec![
        GridColumn::new("User ID"),
        GridColumn::new("User Name"),
        GridColumn::new("Agent Name"),
    ]);

    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    for a in table.rows().iter().filter(|a| a.role == role) {
        if seen.insert((&a.user_id, &a.user_name, &a.agent_name)) {
            grid.push_row(vec![
                a.user_id.clone(),
                a.user_name.clone(),
                a.agent_name.clone(),
            ]);
        }
    }

    let total_users = grid.rows.len();
    RoleUsersView {
        title: "🔍 Filter Users by Role".to_string(),
        subtitle: format!("Users assigned to role: {role}"),
        role: role.to_string(),
        total_users,
        grid: grid.page_view(page),
    }
}
