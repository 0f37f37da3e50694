//! Dashboard, registry, content detail and compare handlers

use super::{to_json, AppContext};
use crate::error::{DashError, Result};
use crate::views::compare::{parse_id_list, NO_VALID_IDS};
use crate::views::dashboard::{DashboardFilters, DashboardReport};
use crate::views::{compare, dashboard, registry};

/// Dashboard page
pub async fn dashboard(ctx: &AppContext, filters: DashboardFilters, json: bool) -> Result<String> {
    let stats = ctx.api.get_summary().await?;
    let today = chrono::Local::now().date_naive();
    if json {
        return to_json(&DashboardReport::new(&stats, filters, today));
    }
    Ok(dashboard::render(&stats, filters, today))
}

/// Content registry, optionally filtered by platform
pub async fn registry(ctx: &AppContext, platform: Option<&str>, json: bool) -> Result<String> {
    let items = ctx.api.get_content().await?;
    let visible = registry::filter_by_platform(&items, platform);
    tracing::debug!(total = items.len(), shown = visible.len(), "Loaded registry");
    if json {
        return to_json(&visible);
    }
    Ok(registry::render_list(&visible))
}

/// Detail view of one content item
pub async fn content(ctx: &AppContext, id: i64, json: bool) -> Result<String> {
    let item = ctx.api.get_content_by_id(id).await?;
    if json {
        return to_json(&item);
    }
    Ok(registry::render_detail(&item))
}

/// Compare the items named in a free-text id list
///
/// Nothing is sent when the list holds no valid id.
pub async fn compare(ctx: &AppContext, input: &str, json: bool) -> Result<String> {
    let ids = parse_id_list(input);
    if ids.is_empty() {
        return Err(DashError::Validation(NO_VALID_IDS.to_string()).into());
    }

    let items = ctx.api.compare(&ids).await?;
    if json {
        return to_json(&items);
    }
    Ok(compare::render(&items))
}
