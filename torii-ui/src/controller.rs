//! Suggestion list state machine for the search widget.
//!
//! Translates discrete input events into suggestion state and navigation
//! signals. The controller owns the search index and the selection cursor;
//! collaborators render and route through [`SuggestionSink`].

use tracing::debug;

use torii_core::{CatalogEntry, NavigationTarget};
use torii_search::SearchIndex;

/// Rendered state of the suggestion list.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionState {
    /// No suggestion list is shown.
    Hidden,
    /// Suggestions are shown, with an optional keyboard cursor.
    Visible {
        suggestions: Vec<CatalogEntry>,
        selected: Option<usize>,
    },
}

/// Discrete input events the embedder feeds into the controller.
///
/// `QueryChanged` is expected post-debounce (see
/// [`QueryDebouncer`](crate::debounce::QueryDebouncer)); everything else
/// maps one-to-one onto raw widget events.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// The (debounced) query text changed.
    QueryChanged(String),
    /// The search input gained focus with the given current text.
    Focused(String),
    /// ArrowDown keypress.
    ArrowDown,
    /// ArrowUp keypress.
    ArrowUp,
    /// Enter keypress.
    Enter,
    /// Escape keypress.
    Escape,
    /// Pointer interaction outside the search widget.
    OutsideClick,
    /// Pointer click on the suggestion at this list position.
    SuggestionClicked(usize),
}

/// Collaborator interface for rendering and routing.
///
/// The controller only signals: the embedder re-renders the suggestion
/// list on `suggestions_changed` and performs the actual route change on
/// `navigate`.
pub trait SuggestionSink {
    /// Called whenever the suggestion state changes. Not called for
    /// events that leave the state untouched.
    fn suggestions_changed(&mut self, state: &SuggestionState);

    /// Called when the user commits a suggestion via Enter or click.
    fn navigate(&mut self, target: NavigationTarget);
}

/// Binds input events to the search index and tracks the selection cursor.
#[derive(Debug)]
pub struct SuggestionController {
    index: SearchIndex,
    state: SuggestionState,
}

impl SuggestionController {
    /// Creates a controller over an already-populated (or still empty)
    /// search index, starting hidden.
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            state: SuggestionState::Hidden,
        }
    }

    /// Current suggestion state, for embedders that re-render from scratch.
    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// The underlying search index.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Mutable access to the index, for startup population.
    pub fn index_mut(&mut self) -> &mut SearchIndex {
        &mut self.index
    }

    /// Feeds one input event through the state machine.
    ///
    /// Returns `true` when the event committed a navigation, so the
    /// embedder can suppress the default action (form submission on
    /// Enter). All side effects flow through `sink`.
    pub fn handle_event(&mut self, event: InputEvent, sink: &mut dyn SuggestionSink) -> bool {
        match event {
            InputEvent::QueryChanged(query) => {
                self.refresh(&query, sink);
                false
            }
            InputEvent::Focused(query) => {
                // Focus only re-opens the list once the text is long
                // enough to search; a shorter query leaves the state
                // untouched.
                if query.chars().count() >= self.index.config().min_query_len {
                    self.refresh(&query, sink);
                }
                false
            }
            InputEvent::ArrowDown => {
                self.move_cursor(1, sink);
                false
            }
            InputEvent::ArrowUp => {
                self.move_cursor(-1, sink);
                false
            }
            InputEvent::Enter => self.commit_selection(sink),
            InputEvent::Escape | InputEvent::OutsideClick => {
                self.transition(SuggestionState::Hidden, sink);
                false
            }
            InputEvent::SuggestionClicked(position) => self.commit_click(position, sink),
        }
    }

    /// Recomputes suggestions for `query` and shows or hides the list.
    fn refresh(&mut self, query: &str, sink: &mut dyn SuggestionSink) {
        let suggestions = self.index.search(query);
        let next = if suggestions.is_empty() {
            SuggestionState::Hidden
        } else {
            SuggestionState::Visible {
                suggestions,
                selected: None,
            }
        };
        self.transition(next, sink);
    }

    /// Moves the keyboard cursor, clamped to the list without wraparound.
    fn move_cursor(&mut self, delta: isize, sink: &mut dyn SuggestionSink) {
        let changed = match &mut self.state {
            SuggestionState::Hidden => false,
            SuggestionState::Visible {
                suggestions,
                selected,
            } => {
                let last = suggestions.len().saturating_sub(1);
                let next = match (*selected, delta > 0) {
                    // First ArrowDown lands on the top suggestion.
                    (None, true) => Some(0),
                    // ArrowUp without a cursor has nowhere to go.
                    (None, false) => None,
                    (Some(current), _) => {
                        let moved = current.saturating_add_signed(delta).min(last);
                        Some(moved)
                    }
                };
                let moved = next != *selected;
                *selected = next;
                moved
            }
        };

        if changed {
            sink.suggestions_changed(&self.state);
        }
    }

    /// Emits the cursor's navigation target, if there is one.
    fn commit_selection(&mut self, sink: &mut dyn SuggestionSink) -> bool {
        if let SuggestionState::Visible {
            suggestions,
            selected: Some(position),
        } = &self.state
            && let Some(target) = suggestions.get(*position).and_then(CatalogEntry::first_target)
        {
            debug!(anime = %target.anime_id, "selection committed");
            sink.navigate(target);
            return true;
        }
        false
    }

    /// Emits the clicked suggestion's target, ignoring the cursor.
    fn commit_click(&mut self, position: usize, sink: &mut dyn SuggestionSink) -> bool {
        if let SuggestionState::Visible { suggestions, .. } = &self.state
            && let Some(target) = suggestions.get(position).and_then(CatalogEntry::first_target)
        {
            debug!(anime = %target.anime_id, position, "suggestion clicked");
            sink.navigate(target);
            return true;
        }
        false
    }

    /// Applies `next` and notifies the sink when it differs.
    fn transition(&mut self, next: SuggestionState, sink: &mut dyn SuggestionSink) {
        if next != self.state {
            self.state = next;
            sink.suggestions_changed(&self.state);
        }
    }
}
