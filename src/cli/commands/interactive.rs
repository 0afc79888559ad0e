//! searchable interactive - Drive the view from stdin
//!
//! Each stdin line is one input event:
//! - `:scope <name>` switches the scope (`all` or a category)
//! - `:pick <n>` selects the n-th displayed row
//! - `:complete <n>` accepts the n-th text suggestion
//! - `:quit` stops reading
//! - anything else replaces the query text
//!
//! Every snapshot the engine publishes is printed as it arrives.

use clap::Args;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::app::AppContext;
use crate::catalog::{Item, StaticCatalog};
use crate::cli::output::{HumanLayout, emit_human, emit_json_line};
use crate::error::Result;
use crate::search::{SearchScope, Snapshot};
use crate::view::{Row, SearchView};

use super::parse_scope;

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Hide the suggestion block while the query is short
    #[arg(long)]
    pub no_suggestions: bool,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Query(String),
    Scope(SearchScope),
    Pick(usize),
    Complete(usize),
    Quit,
}

impl InputEvent {
    /// Parse a stdin line. Positions are 1-based as printed.
    pub fn parse(line: &str) -> Result<Self> {
        let Some(directive) = line.strip_prefix(':') else {
            return Ok(Self::Query(line.to_string()));
        };
        let (name, argument) = directive
            .split_once(char::is_whitespace)
            .map_or((directive, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "scope" => parse_scope(argument).map(Self::Scope),
            "pick" => parse_position(argument).map(Self::Pick),
            "complete" => parse_position(argument).map(Self::Complete),
            "quit" | "q" => Ok(Self::Quit),
            other => Err(crate::error::SearchableError::InvalidInput(format!(
                "unknown directive :{other}"
            ))),
        }
    }
}

fn parse_position(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(crate::error::SearchableError::InvalidInput(format!(
            "expected a position starting at 1, got {value:?}"
        ))),
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum StreamEvent<'a> {
    Snapshot {
        query: &'a str,
        scope: SearchScope,
        is_searching: bool,
        rows: Vec<Row>,
        text_suggestions: &'a [String],
        item_suggestions: Vec<Row>,
    },
    Selected {
        row: Row,
    },
}

pub fn run(ctx: &AppContext, args: &InteractiveArgs) -> Result<()> {
    let robot = ctx.robot_mode();
    let show_suggestions = !args.no_suggestions;

    ctx.block_on(async {
        let view = ctx.open_view().on_select(move |item| report_selection(item, robot));
        view.appear().await;

        if !robot {
            let mut layout = HumanLayout::new();
            layout.title(view.title()).kv("Prompt", view.prompt());
            emit_human(layout);
        }

        let mut updates = view.subscribe();
        render(&updates.borrow_and_update(), robot, show_suggestions)?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match InputEvent::parse(line.trim_end()) {
                        Ok(InputEvent::Quit) => break,
                        Ok(event) => dispatch(&view, event),
                        Err(err) => warn!(error = %err, "ignoring input line"),
                    }
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = updates.borrow_and_update().clone();
                    render(&snapshot, robot, show_suggestions)?;
                }
            }
        }

        // Flush input still inside its quiet period.
        let snapshot = view.settled().await;
        if updates.has_changed().unwrap_or(false) {
            render(&snapshot, robot, show_suggestions)?;
        }
        Ok(())
    })
}

fn dispatch(view: &SearchView<StaticCatalog>, event: InputEvent) {
    match event {
        InputEvent::Query(text) => view.set_query(text),
        InputEvent::Scope(scope) => view.set_scope(scope),
        InputEvent::Pick(index) => {
            if view.select_row(index).is_none() {
                warn!(position = index + 1, "no row at that position");
            }
        }
        InputEvent::Complete(index) => match view.text_suggestions().get(index) {
            Some(suggestion) => view.accept_suggestion(suggestion),
            None => warn!(position = index + 1, "no suggestion at that position"),
        },
        InputEvent::Quit => {}
    }
}

fn report_selection(item: &Item, robot: bool) {
    let row = Row::from(item);
    if robot {
        if let Err(err) = emit_json_line(&StreamEvent::Selected { row }) {
            warn!(error = %err, "failed to emit selection");
        }
    } else {
        println!("-> {} ({})", row.title, row.subtitle);
    }
}

fn render(snapshot: &Snapshot, robot: bool, show_suggestions: bool) -> Result<()> {
    let rows: Vec<Row> = snapshot.displayed_items().iter().map(Row::from).collect();
    let item_suggestions: Vec<Row> = snapshot.item_suggestions.iter().map(Row::from).collect();

    if robot {
        return emit_json_line(&StreamEvent::Snapshot {
            query: &snapshot.query,
            scope: snapshot.scope,
            is_searching: snapshot.is_searching(),
            rows,
            text_suggestions: &snapshot.text_suggestions,
            item_suggestions,
        });
    }

    let mut layout = HumanLayout::new();
    layout
        .blank()
        .kv("Query", &snapshot.query)
        .kv("Scope", &snapshot.scope.title())
        .rows(&rows);
    if show_suggestions && snapshot.is_searching() && !snapshot.text_suggestions.is_empty() {
        layout.kv("Try", &snapshot.text_suggestions.join(", "));
    }
    if show_suggestions && !item_suggestions.is_empty() {
        layout.section("Suggested").rows(&item_suggestions);
    }
    emit_human(layout);
    Ok(())
}
