//! searchable list - Show the whole catalog

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::view::Row;

#[derive(Args, Debug)]
pub struct ListArgs {}

#[derive(Serialize)]
struct ListData {
    title: String,
    count: usize,
    rows: Vec<Row>,
}

pub fn run(ctx: &AppContext, _args: &ListArgs) -> Result<()> {
    debug!(target: "list", mode = ?ctx.output_format, "output mode selected");

    let (title, rows) = ctx.block_on(async {
        let view = ctx.open_view();
        view.appear().await;
        Ok((view.title().to_string(), view.rows()))
    })?;

    if ctx.robot_mode() {
        let mut response = robot_ok(ListData {
            title,
            count: rows.len(),
            rows,
        });
        if response.data.count == 0 {
            response = response.with_warning("catalog is empty");
        }
        return emit_json(&response);
    }

    let mut layout = HumanLayout::new();
    layout.title(&title).rows(&rows);
    emit_human(layout);
    Ok(())
}
