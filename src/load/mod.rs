// src/load/mod.rs
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Canonical column names, assigned positionally. Whatever the source header
/// claims is discarded.
pub const COLUMNS: [&str; 5] = ["Agent Code", "Agent Name", "User ID", "User Name", "Role"];

/// One cleaned assignment row. After loading, every field is populated
/// (identifying columns via forward-fill, role because role-less rows are
/// dropped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub agent_code: String,
    pub agent_name: String,
    pub user_id: String,
    pub user_name: String,
    pub role: String,
}

/// The cleaned report table. Immutable for the process lifetime; every view
/// is a pure read over it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentTable {
    rows: Vec<Assignment>,
}

impl AssignmentTable {
    pub fn from_rows(rows: Vec<Assignment>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct roles, for the role dropdown.
    pub fn roles(&self) -> Vec<String> {
        self.distinct(|a| &a.role)
    }

    /// Sorted distinct user names, for the user dropdown.
    pub fn user_names(&self) -> Vec<String> {
        self.distinct(|a| &a.user_name)
    }

    /// Sorted distinct non-empty agent names, for the agent dropdown.
    pub fn agent_names(&self) -> Vec<String> {
        self.distinct(|a| &a.agent_name)
    }

    fn distinct<F: Fn(&Assignment) -> &String>(&self, f: F) -> Vec<String> {
        let set: BTreeSet<&String> = self.rows.iter().map(f).filter(|s| !s.is_empty()).collect();
        set.into_iter().cloned().collect()
    }
}

/// Load and clean the assignment report:
/// - header row is consumed and must have exactly five columns;
/// - the four identifying columns forward-fill independently (each empty
///   field takes the most recent non-empty value in the same column);
/// - rows with an empty Role are dropped;
/// - surviving rows keep their source order.
///
/// Any I/O or parse failure is fatal; there is no partial load.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<AssignmentTable> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open report file: {}", path.as_ref().display()))?;

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let header_len = rdr
        .headers()
        .with_context(|| format!("failed to read header of {}", path.as_ref().display()))?
        .len();
    if header_len != COLUMNS.len() {
        bail!(
            "expected {} columns ({}), found {} in {}",
            COLUMNS.len(),
            COLUMNS.join(", "),
            header_len,
            path.as_ref().display()
        );
    }

    // Forward-fill carry for the four identifying columns.
    let mut carry: [String; 4] = Default::default();
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| {
            format!(
                "CSV parse error in {} at record {}",
                path.as_ref().display(),
                idx
            )
        })?;

        for (col, slot) in carry.iter_mut().enumerate() {
            let field = record.get(col).unwrap_or("");
            if !field.is_empty() {
                *slot = field.to_string();
            }
        }

        let role = record.get(4).unwrap_or("");
        if role.is_empty() {
            dropped += 1;
            continue;
        }

        rows.push(Assignment {
            agent_code: carry[0].clone(),
            agent_name: carry[1].clone(),
            user_id: carry[2].clone(),
            user_name: carry[3].clone(),
            role: role.to_string(),
        });
    }

    info!(rows = rows.len(), dropped, "report cleaned");
    Ok(AssignmentTable::from_rows(rows))
}

static TABLE: OnceCell<AssignmentTable> = OnceCell::new();

/// One-time fail-fast load into the process-wide cache. The first successful
/// call wins; later calls return the cached table untouched. Restart is the
/// only refresh mechanism.
pub fn init<P: AsRef<Path>>(path: P) -> Result<&'static AssignmentTable> {
    TABLE.get_or_try_init(|| load_report(path))
}

/// The cached table, or `None` before `init` has succeeded.
pub fn table() -> Option<&'static AssignmentTable> {
    TABLE.get()
}
