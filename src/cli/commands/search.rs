//! searchable search - Filter the catalog by text and scope

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::search::SearchScope;
use crate::view::Row;

use super::parse_scope;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text (matched against titles and categories, ignoring case)
    pub query: String,

    /// Restrict to one category: all, russian, georgian, italian, french, japanese
    #[arg(long, short, default_value = "all")]
    pub scope: String,
}

#[derive(Serialize)]
struct SearchData {
    query: String,
    scope: SearchScope,
    is_searching: bool,
    count: usize,
    rows: Vec<Row>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let scope = parse_scope(&args.scope)?;

    let data = ctx.block_on(async {
        let view = ctx.open_view();
        view.appear().await;
        view.set_scope(scope);
        view.set_query(args.query.as_str());
        let snapshot = view.settled().await;
        let rows: Vec<Row> = snapshot.displayed_items().iter().map(Row::from).collect();
        Ok(SearchData {
            query: snapshot.query.clone(),
            scope: snapshot.scope,
            is_searching: snapshot.is_searching(),
            count: rows.len(),
            rows,
        })
    })?;

    if ctx.robot_mode() {
        return emit_json(&robot_ok(data));
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Search")
        .kv("Query", &data.query)
        .kv("Scope", &data.scope.title())
        .kv("Matches", &data.count.to_string())
        .blank()
        .rows(&data.rows);
    emit_human(layout);
    Ok(())
}
