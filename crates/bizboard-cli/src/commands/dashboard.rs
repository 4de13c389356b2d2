//! `bizboard dashboard`.

use std::sync::Arc;

use anyhow::{Result, bail};

use bizboard_client::ApiClient;
use bizboard_widgets::widgets::{self, IDS};
use bizboard_widgets::{Dashboard, QueryCache, Widget, WidgetContext};

use crate::render;

/// Resolve widget ids; an empty selection means every widget.
pub fn select(ids: &[String]) -> Result<Vec<Arc<dyn Widget>>> {
    if ids.is_empty() {
        return Ok(widgets::all());
    }
    ids.iter()
        .map(|id| match widgets::by_id(id) {
            Some(widget) => Ok(widget),
            None => bail!("Unknown widget '{id}'. Available: {}", IDS.join(", ")),
        })
        .collect()
}

pub async fn run(client: ApiClient, ids: &[String], json: bool) -> Result<()> {
    let selected = select(ids)?;
    let ctx = WidgetContext::new(client).with_cache(Arc::new(QueryCache::default()));
    let panels = Dashboard::new(ctx).with_widgets(selected).load_all().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&panels)?);
    } else {
        print!("{}", render::panels(&panels));
    }
    Ok(())
}
