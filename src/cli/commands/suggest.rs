//! searchable suggest - Show short-query suggestions

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::view::Row;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial query; suggestions only appear while it is short
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Serialize)]
struct SuggestData {
    query: String,
    threshold: usize,
    text_suggestions: Vec<String>,
    item_suggestions: Vec<Row>,
}

pub fn run(ctx: &AppContext, args: &SuggestArgs) -> Result<()> {
    let data = ctx.block_on(async {
        let view = ctx.open_view();
        view.appear().await;
        view.set_query(args.query.as_str());
        let snapshot = view.settled().await;
        Ok(SuggestData {
            query: snapshot.query.clone(),
            threshold: view.engine().settings().short_query_threshold,
            text_suggestions: snapshot.text_suggestions.clone(),
            item_suggestions: snapshot.item_suggestions.iter().map(Row::from).collect(),
        })
    })?;

    if ctx.robot_mode() {
        return emit_json(&robot_ok(data));
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Suggestions")
        .kv("Query", &data.query)
        .kv("Threshold", &format!("< {} chars", data.threshold))
        .blank()
        .section("Completions");
    if data.text_suggestions.is_empty() {
        layout.bullet("(query too long for suggestions)");
    }
    for suggestion in &data.text_suggestions {
        layout.bullet(suggestion);
    }
    if !data.item_suggestions.is_empty() {
        layout.blank().section("Items").rows(&data.item_suggestions);
    }
    emit_human(layout);
    Ok(())
}
