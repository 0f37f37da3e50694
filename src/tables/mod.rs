//! Local table store
//!
//! Per-user spreadsheet-like grids of string cells, kept entirely on the
//! client. Every operation is synchronous and persisted immediately under a
//! key derived from the owner's email, so switching identity switches the
//! whole visible set. There is no conflict detection: the last write wins.
//!
//! Invariant: every row of a [`Table`] has the same number of cells.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{DashError, Result};
use crate::session::Session;
use crate::storage::SqliteStorage;

pub mod summary;
pub mod templates;

pub use summary::{parse_number, summarize, ColumnSummary};
pub use templates::TableTemplate;

/// Rows of a freshly created blank table
pub const DEFAULT_ROWS: usize = 5;
/// Columns of a freshly created blank table
pub const DEFAULT_COLS: usize = 5;
/// Blank rows added below the header of a template table
pub const DEFAULT_TEMPLATE_ROWS: usize = 10;

/// A named grid owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Cells by row; row 0 is usually treated as the header
    pub data: Vec<Vec<String>>,
}

impl Table {
    fn new(name: String, data: Vec<Vec<String>>) -> Self {
        let now = Utc::now();
        Self {
            id: Ulid::new().to_string(),
            name,
            created_at: now,
            updated_at: now,
            data,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.first().map(Vec::len).unwrap_or(0)
    }

    /// Returns `true` if every row has the same length
    pub fn is_rectangular(&self) -> bool {
        let cols = self.cols();
        self.data.iter().all(|row| row.len() == cols)
    }

    /// Pad short rows so the grid is rectangular again
    ///
    /// Only records written by something else can be ragged; the store
    /// applies this when loading.
    fn normalize(&mut self) -> bool {
        let width = self.data.iter().map(Vec::len).max().unwrap_or(0);
        let mut changed = false;
        for row in &mut self.data {
            if row.len() < width {
                row.resize(width, String::new());
                changed = true;
            }
        }
        changed
    }

    fn add_row(&mut self) -> bool {
        let cols = match self.cols() {
            0 => DEFAULT_COLS,
            n => n,
        };
        self.data.push(vec![String::new(); cols]);
        true
    }

    fn remove_row(&mut self) -> bool {
        if self.data.len() <= 1 {
            return false;
        }
        self.data.pop();
        true
    }

    fn add_column(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }
        for row in &mut self.data {
            row.push(String::new());
        }
        true
    }

    fn remove_column(&mut self) -> bool {
        if self.cols() <= 1 {
            return false;
        }
        for row in &mut self.data {
            row.pop();
        }
        true
    }

    fn set_cell(&mut self, row: usize, col: usize, value: String) -> Result<bool> {
        let (rows, cols) = (self.rows(), self.cols());
        let cell = self
            .data
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(DashError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })?;
        if *cell == value {
            return Ok(false);
        }
        *cell = value;
        Ok(true)
    }
}

fn blank_grid(rows: usize, cols: usize) -> Vec<Vec<String>> {
    vec![vec![String::new(); cols]; rows]
}

/// Tables of one user, loaded from and written back to durable storage
#[derive(Debug)]
pub struct TableStore {
    storage: SqliteStorage,
    owner: String,
    tables: Vec<Table>,
    selected: Option<String>,
}

impl TableStore {
    /// Storage key of the table list for `email`
    pub fn tables_key(email: &str) -> String {
        format!("userTables:{}", email)
    }

    /// Storage key of the selected table id for `email`
    pub fn selection_key(email: &str) -> String {
        format!("userTablesSelected:{}", email)
    }

    /// Load the tables of the signed-in user
    ///
    /// The stored selection is kept if it still names a table; otherwise the
    /// first table is selected.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the stored list cannot be read or parsed.
    /// [`TableStore::reset`] clears an unreadable list.
    pub fn open(storage: SqliteStorage, session: &Session) -> Result<Self> {
        let owner = session.email.clone();
        let mut tables: Vec<Table> = storage
            .get_json(&Self::tables_key(&owner))
            .with_context(|| {
                format!(
                    "Cannot load the tables of {}; `tables reset --yes` discards them",
                    owner
                )
            })?
            .unwrap_or_default();

        for table in &mut tables {
            if table.normalize() {
                tracing::warn!(table = %table.id, "Padded ragged rows of stored table");
            }
        }

        let stored_selection = match storage
            .get_json::<Option<String>>(&Self::selection_key(&owner))
        {
            Ok(selection) => selection.flatten(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable table selection: {}", e);
                None
            }
        };
        let selected = stored_selection
            .filter(|id| tables.iter().any(|t| &t.id == id))
            .or_else(|| tables.first().map(|t| t.id.clone()));

        tracing::debug!(owner = %owner, count = tables.len(), "Loaded tables");

        Ok(Self {
            storage,
            owner,
            tables,
            selected,
        })
    }

    /// Remove every stored table of the signed-in user, and the selection
    ///
    /// Works without loading the list, so it also clears a corrupt record.
    pub fn reset(storage: &SqliteStorage, session: &Session) -> Result<()> {
        storage.remove(&Self::tables_key(&session.email))?;
        storage.remove(&Self::selection_key(&session.email))?;
        tracing::info!(owner = %session.email, "Cleared stored tables");
        Ok(())
    }

    /// Email of the user owning these tables
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// All tables, in creation order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by id
    pub fn get(&self, id: &str) -> Result<&Table> {
        self.tables
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DashError::TableNotFound(id.to_string()).into())
    }

    /// The selected table, if any
    pub fn selected(&self) -> Option<&Table> {
        let id = self.selected.as_deref()?;
        self.tables.iter().find(|t| t.id == id)
    }

    /// Select the table with `id`
    pub fn select(&mut self, id: &str) -> Result<()> {
        self.get(id)?;
        self.selected = Some(id.to_string());
        self.persist()
    }

    /// Create a blank `rows` x `cols` table and select it
    ///
    /// # Errors
    ///
    /// Returns a validation error if either dimension is zero
    pub fn create_empty(&mut self, rows: usize, cols: usize) -> Result<&Table> {
        if rows == 0 || cols == 0 {
            return Err(DashError::Validation(
                "a table needs at least one row and one column".to_string(),
            )
            .into());
        }
        let name = format!("Table {}", self.tables.len() + 1);
        self.push(Table::new(name, blank_grid(rows, cols)))
    }

    /// Create a table whose first row copies `headers`, followed by `rows`
    /// blank rows, and select it
    pub fn create_from_template(
        &mut self,
        name: &str,
        headers: &[String],
        rows: usize,
    ) -> Result<&Table> {
        if headers.is_empty() {
            return Err(DashError::Validation("a template needs at least one header".into()).into());
        }
        let mut data = Vec::with_capacity(rows + 1);
        data.push(headers.to_vec());
        data.extend(blank_grid(rows, headers.len()));
        self.push(Table::new(name.to_string(), data))
    }

    fn push(&mut self, table: Table) -> Result<&Table> {
        tracing::info!(table = %table.id, name = %table.name, "Created table");
        self.selected = Some(table.id.clone());
        self.tables.push(table);
        self.persist()?;
        self.tables
            .last()
            .ok_or_else(|| DashError::Storage("table list unexpectedly empty".into()).into())
    }

    /// Rename a table
    pub fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        let name = name.to_string();
        self.mutate(id, |t| {
            if t.name == name {
                return Ok(false);
            }
            t.name = name;
            Ok(true)
        })
        .map(|_| ())
    }

    /// Overwrite one cell
    ///
    /// # Errors
    ///
    /// Returns [`DashError::CellOutOfRange`] when the coordinate is outside
    /// the grid
    pub fn set_cell(&mut self, id: &str, row: usize, col: usize, value: &str) -> Result<()> {
        let value = value.to_string();
        self.mutate(id, |t| t.set_cell(row, col, value)).map(|_| ())
    }

    /// Append a blank row
    pub fn add_row(&mut self, id: &str) -> Result<bool> {
        self.mutate(id, |t| Ok(t.add_row()))
    }

    /// Drop the last row; returns `false` at the one-row floor
    pub fn remove_row(&mut self, id: &str) -> Result<bool> {
        self.mutate(id, |t| Ok(t.remove_row()))
    }

    /// Append a blank column
    pub fn add_column(&mut self, id: &str) -> Result<bool> {
        self.mutate(id, |t| Ok(t.add_column()))
    }

    /// Drop the last column; returns `false` at the one-column floor
    pub fn remove_column(&mut self, id: &str) -> Result<bool> {
        self.mutate(id, |t| Ok(t.remove_column()))
    }

    /// Delete a table
    ///
    /// Deleting the selected table moves the selection to the first
    /// remaining table, or clears it when none is left.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let idx = self
            .tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DashError::TableNotFound(id.to_string()))?;
        let removed = self.tables.remove(idx);

        if self.tables.is_empty() {
            self.selected = None;
        } else if self.selected.as_deref() == Some(id) {
            self.selected = self.tables.first().map(|t| t.id.clone());
        }

        tracing::info!(table = %removed.id, name = %removed.name, "Deleted table");
        self.persist()
    }

    /// Numeric summary of a table
    pub fn summarize(&self, id: &str) -> Result<Vec<ColumnSummary>> {
        Ok(summarize(self.get(id)?))
    }

    /// Apply `change` to one table; refresh its timestamp and persist when
    /// the change reports that something was modified
    fn mutate<F>(&mut self, id: &str, change: F) -> Result<bool>
    where
        F: FnOnce(&mut Table) -> Result<bool>,
    {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DashError::TableNotFound(id.to_string()))?;

        if !change(table)? {
            tracing::debug!(table = %id, "Table unchanged");
            return Ok(false);
        }
        table.updated_at = Utc::now();
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        self.storage
            .set_json(&Self::tables_key(&self.owner), &self.tables)?;
        self.storage
            .set_json(&Self::selection_key(&self.owner), &self.selected)
    }
}
