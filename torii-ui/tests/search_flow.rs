//! End-to-end flow: fixture catalog, debounced typing, keyboard
//! navigation, and the navigation commit.

use std::time::Duration;

use tokio::sync::mpsc;

use torii_core::{FixtureProvider, NavigationTarget, ToriiConfig};
use torii_search::SearchIndex;
use torii_ui::{InputEvent, QueryDebouncer, SuggestionController, SuggestionSink, SuggestionState};

#[derive(Default)]
struct RecordingSink {
    states: Vec<SuggestionState>,
    targets: Vec<NavigationTarget>,
}

impl SuggestionSink for RecordingSink {
    fn suggestions_changed(&mut self, state: &SuggestionState) {
        self.states.push(state.clone());
    }

    fn navigate(&mut self, target: NavigationTarget) {
        self.targets.push(target);
    }
}

async fn populated_controller() -> SuggestionController {
    let mut index = SearchIndex::new();
    index.populate(&FixtureProvider::new()).await;
    assert!(!index.is_empty(), "bundled fixture should load");
    SuggestionController::new(index)
}

#[tokio::test(start_paused = true)]
async fn typed_burst_to_navigation_commit() {
    let config = ToriiConfig::default();
    let mut controller = populated_controller().await;
    let mut sink = RecordingSink::default();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debouncer = QueryDebouncer::new(config.ui.debounce, tx);

    // The user types "narto" one keystroke at a time; only the final
    // text survives the quiescence window.
    for text in ["n", "na", "nar", "nart", "narto"] {
        debouncer.submit(text);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(config.ui.debounce).await;

    let settled = rx.recv().await.expect("debounced query");
    assert_eq!(settled, "narto");
    assert!(rx.try_recv().is_err(), "earlier keystrokes were superseded");

    controller.handle_event(InputEvent::QueryChanged(settled), &mut sink);

    // The typo still reaches Naruto through the fuzzy tier.
    let SuggestionState::Visible { suggestions, selected } = controller.state() else {
        panic!("expected suggestions for 'narto'");
    };
    assert_eq!(selected, &None);
    assert_eq!(suggestions[0].title, "Naruto");

    // Arrow down onto the first suggestion, then commit with Enter.
    controller.handle_event(InputEvent::ArrowDown, &mut sink);
    let consumed = controller.handle_event(InputEvent::Enter, &mut sink);

    assert!(consumed, "Enter on a selection suppresses form submission");
    assert_eq!(sink.targets.len(), 1);
    let target = &sink.targets[0];
    assert_eq!(target.anime_id.as_str(), "naruto");
    assert_eq!(target.season_number, 1);
    assert_eq!(target.episode_number, 1);
}

#[tokio::test]
async fn entries_without_episodes_never_surface() {
    let mut controller = populated_controller().await;
    let mut sink = RecordingSink::default();

    // "Mononoke Chronicle" ships in the fixture with no seasons.
    controller.handle_event(InputEvent::QueryChanged("mononoke".into()), &mut sink);

    assert_eq!(controller.state(), &SuggestionState::Hidden);
    assert!(sink.states.is_empty());
}

#[tokio::test]
async fn search_before_catalog_load_degrades_to_no_results() {
    // Startup order: the widget can receive keystrokes before the
    // catalog fetch resolves. Searches just come back empty.
    let mut controller = SuggestionController::new(SearchIndex::new());
    let mut sink = RecordingSink::default();

    controller.handle_event(InputEvent::QueryChanged("naruto".into()), &mut sink);
    assert_eq!(controller.state(), &SuggestionState::Hidden);

    // Once the snapshot lands, the same keystrokes work.
    controller.index_mut().populate(&FixtureProvider::new()).await;
    assert!(!controller.index().is_empty());
    controller.handle_event(InputEvent::QueryChanged("naruto".into()), &mut sink);
    assert!(matches!(
        controller.state(),
        SuggestionState::Visible { .. }
    ));
}

#[tokio::test]
async fn click_on_suggestion_routes_directly() {
    let mut controller = populated_controller().await;
    let mut sink = RecordingSink::default();

    controller.handle_event(InputEvent::QueryChanged("one".into()), &mut sink);

    let SuggestionState::Visible { suggestions, .. } = controller.state() else {
        panic!("expected suggestions for 'one'");
    };
    // Shorter title first within the substring tier.
    assert_eq!(suggestions[0].title, "One Piece");
    assert_eq!(suggestions[1].title, "One Punch Man");

    let consumed = controller.handle_event(InputEvent::SuggestionClicked(1), &mut sink);

    assert!(consumed);
    assert_eq!(sink.targets.len(), 1);
    assert_eq!(sink.targets[0].anime_id.as_str(), "one-punch-man");
}
