//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod interactive;
pub mod list;
pub mod scopes;
pub mod search;
pub mod suggest;

use crate::app::AppContext;
use crate::error::{Result, SearchableError};
use crate::search::SearchScope;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Suggest(args) => suggest::run(ctx, args),
        Commands::Scopes(args) => scopes::run(ctx, args),
        Commands::Interactive(args) => interactive::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the whole catalog
    List(list::ListArgs),
    /// Filter the catalog by text, optionally within one category
    Search(search::SearchArgs),
    /// Show short-query suggestions
    Suggest(suggest::SuggestArgs),
    /// Show the scopes offered by the loaded catalog
    Scopes(scopes::ScopesArgs),
    /// Read input events from stdin and print every result update
    Interactive(interactive::InteractiveArgs),
}

pub(crate) fn parse_scope(value: &str) -> Result<SearchScope> {
    value.parse().map_err(SearchableError::InvalidInput)
}
