// src/serve/mod.rs
use serde::Serialize;
use tracing::warn;
use warp::{reject::Rejection, reply::Reply, Filter};

use crate::load::{self, AssignmentTable};
use crate::views::{self, Page, Selection};

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: Option<String>,
}

async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "userreport"
    })))
}

/// The five fixed sidebar labels, in navigation order.
async fn nav_pages() -> Result<impl Reply, Rejection> {
    let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
    Ok(warp::reply::json(&labels))
}

fn with_table<T: Serialize>(f: impl FnOnce(&'static AssignmentTable) -> T) -> warp::reply::Json {
    match load::table() {
        Some(table) => warp::reply::json(&f(table)),
        None => {
            warn!("request before report load");
            warp::reply::json(&ErrorResponse {
                error: "report not loaded".to_string(),
                details: None,
            })
        }
    }
}

fn view_reply(page: Page, sel: Selection) -> warp::reply::Json {
    with_table(|table| views::render(table, page, &sel))
}

async fn statistics_view() -> Result<impl Reply, Rejection> {
    Ok(view_reply(Page::Statistics, Selection::default()))
}

async fn by_role_view(sel: Selection) -> Result<impl Reply, Rejection> {
    Ok(view_reply(Page::FilterByRole, sel))
}

async fn by_user_view(sel: Selection) -> Result<impl Reply, Rejection> {
    Ok(view_reply(Page::FilterByUser, sel))
}

async fn agent_roles_view(sel: Selection) -> Result<impl Reply, Rejection> {
    Ok(view_reply(Page::AgentUsersRoles, sel))
}

async fn agent_counts_view(sel: Selection) -> Result<impl Reply, Rejection> {
    Ok(view_reply(Page::AgentsUserCounts, sel))
}

async fn role_options() -> Result<impl Reply, Rejection> {
    Ok(with_table(|t| t.roles()))
}

async fn user_options() -> Result<impl Reply, Rejection> {
    Ok(with_table(|t| t.user_names()))
}

async fn agent_options() -> Result<impl Reply, Rejection> {
    Ok(with_table(|t| t.agent_names()))
}

/// All routes of the reporting surface. Every endpoint is a GET over the
/// cached table; nothing here mutates anything.
pub fn routes() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let health = warp::path!("health").and(warp::get()).and_then(health_check);
    let pages = warp::path!("pages").and(warp::get()).and_then(nav_pages);

    let options = warp::path!("options" / "roles")
        .and(warp::get())
        .and_then(role_options)
        .or(warp::path!("options" / "users")
            .and(warp::get())
            .and_then(user_options))
        .or(warp::path!("options" / "agents")
            .and(warp::get())
            .and_then(agent_options));

    let view = warp::path!("view" / "statistics")
        .and(warp::get())
        .and_then(statistics_view)
        .or(warp::path!("view" / "by-role")
            .and(warp::get())
            .and(warp::query::<Selection>())
            .and_then(by_role_view))
        .or(warp::path!("view" / "by-user")
            .and(warp::get())
            .and(warp::query::<Selection>())
            .and_then(by_user_view))
        .or(warp::path!("view" / "agent-roles")
            .and(warp::get())
            .and(warp::query::<Selection>())
            .and_then(agent_roles_view))
        .or(warp::path!("view" / "agent-counts")
            .and(warp::get())
            .and(warp::query::<Selection>())
            .and_then(agent_counts_view));

    health.or(pages).or(options).or(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
agent_code,agent_name,user_id,user_name,role
A1,Agt1,U1,Alice,Admin
,,,,Viewer
A2,Agt2,U2,Bob,Admin
";

    // All route tests share the one process-wide table, so they load the
    // same fixture.
    fn init_table() {
        let mut tmp = NamedTempFile::new().expect("create temp file");
        tmp.write_all(SAMPLE.as_bytes()).expect("write fixture");
        load::init(tmp.path()).expect("load fixture");
    }

    #[tokio::test]
    async fn test_health_check() {
        let result = health_check().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn nav_pages_lists_the_five_labels() {
        let res = warp::test::request()
            .path("/pages")
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let labels: Vec<String> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(
            labels,
            vec![
                "Statistics",
                "Filter by Role",
                "Filter by User",
                "Agent Users & Roles",
                "Agents User Counts"
            ]
        );
    }

    #[tokio::test]
    async fn role_filter_route_returns_deduplicated_users() {
        init_table();
        let res = warp::test::request()
            .path("/view/by-role?role=Admin")
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["kind"], "role_users");
        assert_eq!(body["total_users"], 2);
        assert_eq!(body["grid"]["rows"][0][1], "Alice");
        assert_eq!(body["grid"]["rows"][1][1], "Bob");
    }

    #[tokio::test]
    async fn statistics_route_reports_distinct_counts() {
        init_table();
        let res = warp::test::request()
            .path("/view/statistics")
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["kind"], "statistics");
        assert_eq!(body["metrics"][0]["label"], "Total Unique Users");
        assert_eq!(body["metrics"][0]["value"], 2);
    }

    #[tokio::test]
    async fn option_routes_serve_sorted_dropdowns() {
        init_table();
        let res = warp::test::request()
            .path("/options/roles")
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let roles: Vec<String> = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(roles, vec!["Admin", "Viewer"]);
    }

    #[tokio::test]
    async fn empty_selection_is_a_zero_result_state_not_an_error() {
        init_table();
        let res = warp::test::request()
            .path("/view/by-user")
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["kind"], "user_roles");
        assert_eq!(body["total_roles"], 0);
    }
}
