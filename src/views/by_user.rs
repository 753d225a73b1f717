// src/views/by_user.rs
use serde::Serialize;
use std::collections::HashSet;

use crate::load::AssignmentTable;

#[derive(Debug, Serialize)]
pub struct UserRolesView {
    pub title: String,
    pub subtitle: String,
    pub user: String,
    pub total_roles: usize,
    /// Distinct roles in first-occurrence order, rendered as an itemized
    /// list rather than a grid.
    pub roles: Vec<String>,
}

pub fn by_user(table: &AssignmentTable, user: &str) -> UserRolesView {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut roles = Vec::new();
    for a in table.rows().iter().filter(|a| a.user_name == user) {
        if seen.insert(&a.role) {
            roles.push(a.role.clone());
        }
    }

    UserRolesView {
        title: "🔎 Filter Roles by User".to_string(),
        subtitle: format!("Roles assigned to user: {user}"),
        user: user.to_string(),
        total_roles: roles.len(),
        roles,
    }
}
