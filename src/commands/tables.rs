//! Table handlers
//!
//! Tables are stored locally per user; none of these commands talk to the
//! backend.

use colored::Colorize;

use super::{to_json, AppContext};
use crate::cli::TablesCommand;
use crate::error::{DashError, Result};
use crate::tables::{TableStore, DEFAULT_TEMPLATE_ROWS};
use crate::views::tables::{render_list, render_summary, render_table};

/// Handle table commands for the signed-in user
pub fn handle_tables(ctx: &AppContext, command: TablesCommand) -> Result<String> {
    let session = ctx.session()?;
    // Reset must work even when the stored list no longer loads
    if let TablesCommand::Reset { yes } = command {
        return reset(ctx, yes);
    }
    let mut store = TableStore::open(ctx.sessions.storage().clone(), session)?;

    match command {
        TablesCommand::List { json } => {
            if json {
                return to_json(store.tables());
            }
            Ok(render_list(
                store.tables(),
                store.selected().map(|t| t.id.as_str()),
            ))
        }
        TablesCommand::Show { id, json } => {
            let table = match id {
                Some(id) => store.get(&id)?,
                None => store.selected().ok_or_else(|| {
                    DashError::Validation(
                        "No table selected: pass an id or create a table first".to_string(),
                    )
                })?,
            };
            if json {
                return to_json(table);
            }
            Ok(render_table(table, &crate::tables::summarize(table)))
        }
        TablesCommand::New { rows, cols } => {
            let table = store.create_empty(rows, cols)?;
            Ok(format!("Created {} {}", table.name.bold(), table.id.cyan()))
        }
        TablesCommand::Template { kind } => {
            let table =
                store.create_from_template(kind.name(), &kind.headers(), DEFAULT_TEMPLATE_ROWS)?;
            Ok(format!("Created {} {}", table.name.bold(), table.id.cyan()))
        }
        TablesCommand::Rename { id, name } => {
            store.rename(&id, &name)?;
            Ok(format!("Renamed {} to {}", id.cyan(), name.bold()))
        }
        TablesCommand::Set {
            id,
            row,
            col,
            value,
        } => {
            store.set_cell(&id, row, col, &value)?;
            Ok(format!("Set ({}, {}) in {}", row, col, id.cyan()))
        }
        TablesCommand::AddRow { id } => shape_change(&mut store, &id, TableStore::add_row),
        TablesCommand::RemoveRow { id } => shape_change(&mut store, &id, TableStore::remove_row),
        TablesCommand::AddColumn { id } => shape_change(&mut store, &id, TableStore::add_column),
        TablesCommand::RemoveColumn { id } => {
            shape_change(&mut store, &id, TableStore::remove_column)
        }
        TablesCommand::Delete { id } => {
            store.delete(&id)?;
            let selected = match store.selected() {
                Some(t) => format!("selected {}", t.name.bold()),
                None => "no tables left".to_string(),
            };
            Ok(format!("Deleted {}, {}", id.cyan(), selected))
        }
        TablesCommand::Select { id } => {
            store.select(&id)?;
            Ok(format!("Selected {}", id.cyan()))
        }
        TablesCommand::Summary { id, json } => {
            let summary = store.summarize(&id)?;
            if json {
                return to_json(&summary);
            }
            Ok(render_summary(&summary))
        }
        TablesCommand::Reset { yes } => reset(ctx, yes),
    }
}

fn reset(ctx: &AppContext, yes: bool) -> Result<String> {
    if !yes {
        return Err(DashError::Validation(
            "Resetting deletes every table: pass --yes to confirm".to_string(),
        )
        .into());
    }
    TableStore::reset(ctx.sessions.storage(), ctx.session()?)?;
    Ok("Removed all tables".to_string())
}

/// Apply a row or column change and report the resulting size
fn shape_change<F>(store: &mut TableStore, id: &str, change: F) -> Result<String>
where
    F: FnOnce(&mut TableStore, &str) -> Result<bool>,
{
    let changed = change(store, id)?;
    let table = store.get(id)?;
    let size = format!("{}x{}", table.rows(), table.cols());
    Ok(if changed {
        format!("{} is now {}", table.name, size)
    } else {
        format!("{} is already at its minimum size ({})", table.name, size)
    })
}
