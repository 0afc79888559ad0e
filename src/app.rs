use std::future::Future;

use crate::catalog::StaticCatalog;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::search::{EngineSettings, SearchEngine};
use crate::view::SearchView;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        Ok(Self {
            config,
            output_format: cli.output_format(),
        })
    }

    #[must_use]
    pub const fn robot_mode(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }

    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::from(&self.config.search)
    }

    /// Drive `future` on a single-threaded runtime; the engine and every
    /// view call share that one processing context.
    pub fn block_on<F, T>(&self, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(future)
    }

    /// Spawn an engine over the built-in catalog and wrap it in a view.
    ///
    /// Must run inside [`block_on`](Self::block_on).
    #[must_use]
    pub fn open_view(&self) -> SearchView<StaticCatalog> {
        let engine = SearchEngine::spawn(StaticCatalog::new(), self.engine_settings());
        SearchView::new(engine, &self.config.view)
    }
}
