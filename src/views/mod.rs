// src/views/mod.rs
pub mod agent_counts;
pub mod agent_roles;
pub mod by_role;
pub mod by_user;
pub mod statistics;

use serde::{Deserialize, Serialize};

use crate::load::AssignmentTable;

/// The five fixed navigation pages, mirroring the sidebar radio of the
/// original report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Statistics,
    FilterByRole,
    FilterByUser,
    AgentUsersRoles,
    AgentsUserCounts,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Statistics,
        Page::FilterByRole,
        Page::FilterByUser,
        Page::AgentUsersRoles,
        Page::AgentsUserCounts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Statistics => "Statistics",
            Page::FilterByRole => "Filter by Role",
            Page::FilterByUser => "Filter by User",
            Page::AgentUsersRoles => "Agent Users & Roles",
            Page::AgentsUserCounts => "Agents User Counts",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// The user's current UI selection: at most one dropdown value plus the grid
/// page. Unused fields are simply ignored by the active view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    pub role: Option<String>,
    pub user: Option<String>,
    pub agent: Option<String>,
    pub page: Option<usize>,
}

impl Selection {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(0)
    }
}

/// Render model for one page, tagged by view kind.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewModel {
    Statistics(statistics::StatisticsView),
    RoleUsers(by_role::RoleUsersView),
    UserRoles(by_user::UserRolesView),
    AgentRoles(agent_roles::AgentRolesView),
    AgentCounts(agent_counts::AgentCountsView),
}

/// The single dispatch: selection state in, render model out. Pure; shares
/// nothing across invocations beyond the table itself.
pub fn render(table: &AssignmentTable, page: Page, sel: &Selection) -> ViewModel {
    match page {
        Page::Statistics => ViewModel::Statistics(statistics::statistics(table)),
        Page::FilterByRole => ViewModel::RoleUsers(by_role::by_role(
            table,
            sel.role.as_deref().unwrap_or(""),
            sel.page(),
        )),
        Page::FilterByUser => ViewModel::UserRoles(by_user::by_user(
            table,
            sel.user.as_deref().unwrap_or(""),
        )),
        Page::AgentUsersRoles => ViewModel::AgentRoles(agent_roles::agent_roles(
            table,
            sel.agent.as_deref().unwrap_or(""),
            sel.page(),
        )),
        Page::AgentsUserCounts => {
            ViewModel::AgentCounts(agent_counts::agent_counts(table, sel.page()))
        }
    }
}
