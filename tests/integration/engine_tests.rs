use std::time::Duration;

use searchable::catalog::{Category, Item, StaticCatalog};
use searchable::search::{EngineSettings, SearchEngine, SearchScope, filter_items};

fn titles(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

async fn loaded_engine() -> SearchEngine<StaticCatalog> {
    let engine = SearchEngine::spawn(StaticCatalog::new(), EngineSettings::default());
    engine.load().await;
    engine
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_collapses_into_one_recomputation() {
    let engine = loaded_engine().await;
    let before = engine.snapshot().revision;

    for partial in ["r", "ra", "ram"] {
        engine.set_query(partial);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(engine.snapshot().revision, before, "recomputed during typing");
    }

    let snapshot = engine.settled().await;
    assert_eq!(snapshot.revision, before + 1);
    assert_eq!(snapshot.query, "ram");
    assert_eq!(titles(&snapshot.filtered_items), vec!["Ramen"]);
}

#[tokio::test(start_paused = true)]
async fn results_wait_for_the_full_quiet_period() {
    let engine = loaded_engine().await;

    engine.set_query("ramen");
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert_eq!(engine.query(), "");
    assert!(!engine.is_settled());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(engine.query(), "ramen");
    assert!(engine.is_settled());
}

#[tokio::test(start_paused = true)]
async fn quiet_period_is_configurable() {
    let settings = EngineSettings {
        quiet_period: Duration::from_millis(20),
        ..EngineSettings::default()
    };
    let engine = SearchEngine::spawn(StaticCatalog::new(), settings);
    engine.load().await;

    engine.set_query("kh");
    tokio::time::sleep(Duration::from_millis(25)).await;
    assert_eq!(titles(&engine.filtered_items()), vec!["Khinkali"]);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_resets_scope_to_all() {
    let engine = loaded_engine().await;
    let japanese = SearchScope::ByCategory(Category::Japanese);

    engine.set_scope(japanese);
    engine.set_query("ra");
    let snapshot = engine.settled().await;
    assert_eq!(snapshot.scope, japanese);
    assert_eq!(titles(&snapshot.filtered_items), vec!["Ramen"]);

    engine.set_query("");
    let snapshot = engine.settled().await;
    assert_eq!(snapshot.scope, SearchScope::All);
    assert!(snapshot.filtered_items.is_empty());
    assert!(!snapshot.is_searching());
    assert_eq!(snapshot.displayed_items().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn scope_without_query_does_not_stick() {
    let engine = loaded_engine().await;

    engine.set_scope(SearchScope::ByCategory(Category::French));
    let snapshot = engine.settled().await;
    assert_eq!(snapshot.scope, SearchScope::All);
    assert!(snapshot.filtered_items.is_empty());
}

#[tokio::test(start_paused = true)]
async fn scope_change_alone_refilters_the_current_query() {
    let engine = loaded_engine().await;

    engine.set_query("a");
    let everything = engine.settled().await;
    assert_eq!(everything.filtered_items.len(), 5);

    engine.set_scope(SearchScope::ByCategory(Category::Italian));
    let narrowed = engine.settled().await;
    assert_eq!(titles(&narrowed.filtered_items), vec!["Lasania"]);
    assert_eq!(narrowed.revision, everything.revision + 1);
}

#[tokio::test(start_paused = true)]
async fn short_query_carries_suggestions() {
    let engine = loaded_engine().await;

    engine.set_query("ra");
    let snapshot = engine.settled().await;
    assert_eq!(titles(&snapshot.filtered_items), vec!["Ratatouille", "Ramen"]);
    assert_eq!(snapshot.text_suggestions.first().map(String::as_str), Some("Ramen"));
    assert!(snapshot.item_suggestions.is_empty());

    engine.set_query("ramen");
    let snapshot = engine.settled().await;
    assert!(snapshot.text_suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn wider_threshold_enables_category_hints() {
    let settings = EngineSettings {
        short_query_threshold: 4,
        ..EngineSettings::default()
    };
    let engine = SearchEngine::spawn(StaticCatalog::new(), settings);
    engine.load().await;

    engine.set_query("geo");
    let snapshot = engine.settled().await;
    assert_eq!(titles(&snapshot.item_suggestions), vec!["Khinkali"]);
}

#[tokio::test(start_paused = true)]
async fn every_published_snapshot_is_internally_consistent() {
    let engine = loaded_engine().await;
    let mut updates = engine.subscribe();

    let inputs: [(&str, SearchScope); 4] = [
        ("a", SearchScope::All),
        ("a", SearchScope::ByCategory(Category::Russian)),
        ("ni", SearchScope::ByCategory(Category::Russian)),
        ("", SearchScope::ByCategory(Category::Russian)),
    ];
    for (query, scope) in inputs {
        engine.set_scope(scope);
        engine.set_query(query);
        engine.settled().await;

        let snapshot = updates.borrow_and_update().clone();
        assert_eq!(
            snapshot.filtered_items,
            filter_items(&snapshot.all_items, &snapshot.query, snapshot.scope)
        );
        assert_eq!(snapshot.available_scopes[0], SearchScope::All);
    }
}

#[tokio::test(start_paused = true)]
async fn engine_task_stops_once_handles_are_dropped() {
    let engine = loaded_engine().await;
    let mut updates = engine.subscribe();
    updates.borrow_and_update();
    drop(engine);

    assert!(updates.changed().await.is_err());
}

#[test]
fn input_after_the_runtime_is_gone_is_dropped_with_a_warning() {
    let capture = searchable::test_utils::logging::LogCapture::install();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let engine = runtime.block_on(async {
        SearchEngine::spawn(StaticCatalog::new(), EngineSettings::default())
    });
    drop(runtime);

    engine.set_query("ra");
    engine.set_scope(SearchScope::ByCategory(Category::Japanese));

    assert_eq!(engine.query(), "");
    assert!(!engine.is_settled());
    let warnings = capture.at_level(tracing::Level::WARN);
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].message.contains("no longer running"));
}
