use std::sync::{Arc, Mutex};

use searchable::catalog::{Category, StaticCatalog};
use searchable::config::ViewConfig;
use searchable::search::{EngineSettings, SearchEngine, SearchScope};
use searchable::view::{Row, SearchView};

fn open_view() -> SearchView<StaticCatalog> {
    let engine = SearchEngine::spawn(StaticCatalog::new(), EngineSettings::default());
    SearchView::new(engine, &ViewConfig::default())
}

#[tokio::test(start_paused = true)]
async fn view_carries_configured_labels() {
    let config = ViewConfig {
        title: "Menu".to_string(),
        prompt: "Find a dish...".to_string(),
    };
    let engine = SearchEngine::spawn(StaticCatalog::new(), EngineSettings::default());
    let view = SearchView::new(engine, &config);
    assert_eq!(view.title(), "Menu");
    assert_eq!(view.prompt(), "Find a dish...");
}

#[tokio::test(start_paused = true)]
async fn rows_show_everything_until_searching() {
    let view = open_view();
    assert!(view.rows().is_empty());

    view.appear().await;
    let rows = view.rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0],
        Row {
            id: "1".to_string(),
            title: "Khinkali".to_string(),
            subtitle: "Georgian".to_string(),
        }
    );

    view.set_query("tat");
    view.settled().await;
    let titles: Vec<String> = view.rows().into_iter().map(|row| row.title).collect();
    assert_eq!(titles, vec!["Ratatouille"]);
}

#[tokio::test(start_paused = true)]
async fn searching_with_no_matches_shows_no_rows() {
    let view = open_view();
    view.appear().await;

    view.set_query("pizza");
    view.settled().await;
    assert!(view.is_searching());
    assert!(view.rows().is_empty());
    assert_eq!(view.all_items().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn picking_a_row_reaches_the_handler() {
    let picked = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&picked);
    let view = open_view().on_select(move |item| {
        sink.lock().unwrap().push(item.title.clone());
    });
    view.appear().await;

    view.set_scope(SearchScope::ByCategory(Category::Japanese));
    view.set_query("a");
    view.settled().await;

    let item = view.select_row(0).expect("one row");
    assert_eq!(item.title, "Ramen");
    assert!(view.select_row(1).is_none());
    assert_eq!(*picked.lock().unwrap(), vec!["Ramen".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn accepting_a_suggestion_completes_the_query() {
    let view = open_view();
    view.appear().await;

    view.set_query("sy");
    view.settled().await;
    let suggestion = view.text_suggestions()[0].clone();
    assert_eq!(suggestion, "Syrniki");

    view.accept_suggestion(&suggestion);
    let snapshot = view.settled().await;
    assert_eq!(snapshot.query, "Syrniki");
    assert_eq!(view.filtered_items().len(), 1);
    assert!(view.text_suggestions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn scope_options_follow_the_loaded_catalog() {
    let view = open_view();
    assert_eq!(view.scope_options().len(), 1);

    view.appear().await;
    let options = view.scope_options();
    assert_eq!(options[0].scope, SearchScope::All);
    assert_eq!(options[0].title, "All");
    assert_eq!(options[5].scope, SearchScope::ByCategory(Category::Japanese));
    assert_eq!(options[5].title, "Japanese");
}
