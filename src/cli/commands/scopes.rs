//! searchable scopes - Show the scopes offered by the catalog

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ScopesArgs {}

pub fn run(ctx: &AppContext, _args: &ScopesArgs) -> Result<()> {
    let options = ctx.block_on(async {
        let view = ctx.open_view();
        view.appear().await;
        Ok(view.scope_options())
    })?;

    if ctx.robot_mode() {
        return emit_json(&robot_ok(options));
    }

    let mut layout = HumanLayout::new();
    layout.title("Scopes");
    for option in &options {
        layout.kv(&option.title, &option.scope.to_string());
    }
    emit_human(layout);
    Ok(())
}
