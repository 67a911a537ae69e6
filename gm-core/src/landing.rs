//! Landing page state: the one-way loading gate, the search box and the
//! rotating fact panel.

use crate::search::{suggestions, validate_submission, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingPhase {
    #[default]
    Loading,
    Ready,
}

/// Cycles through `len` facts with a fade between each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactRotation {
    index: usize,
    len: usize,
    visible: bool,
}

impl FactRotation {
    pub fn new(len: usize) -> FactRotation {
        FactRotation {
            index: 0,
            len,
            visible: true,
        }
    }

    /// Index of the fact on screen, `None` when there are no facts.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Start fading the current fact out.
    pub fn fade_out(&mut self) {
        if self.len > 0 {
            self.visible = false;
        }
    }

    /// Show the next fact, wrapping after the last.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.visible = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingAction {
    LoadingElapsed,
    QueryChanged(String),
    SuggestionPicked(String),
    ClearQuery,
    FactTick,
    FactFaded,
}

/// Snapshot of the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingState {
    pub phase: LandingPhase,
    pub query: String,
    pub suggestions: Vec<String>,
    pub facts: FactRotation,
}

impl LandingState {
    pub fn new(fact_count: usize) -> LandingState {
        LandingState {
            phase: LandingPhase::Loading,
            query: String::new(),
            suggestions: Vec::new(),
            facts: FactRotation::new(fact_count),
        }
    }

    /// Apply `action`, consulting `names` for autocomplete.
    pub fn reduce<S: AsRef<str>>(&self, action: LandingAction, names: &[S]) -> LandingState {
        let mut next = self.clone();
        match action {
            // Loading -> Ready only; there is no way back.
            LandingAction::LoadingElapsed => next.phase = LandingPhase::Ready,
            LandingAction::QueryChanged(query) => {
                next.suggestions = suggestions(names, &query);
                next.query = query;
            }
            LandingAction::SuggestionPicked(name) => {
                if !name.is_empty() {
                    next.query = name;
                    next.suggestions.clear();
                }
            }
            LandingAction::ClearQuery => {
                next.query.clear();
                next.suggestions.clear();
            }
            LandingAction::FactTick => next.facts.fade_out(),
            LandingAction::FactFaded => next.facts.advance(),
        }
        next
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LandingPhase::Ready
    }

    /// Location to carry to the dashboard.
    pub fn submit(&self) -> Result<String, SearchError> {
        validate_submission(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["Rishikesh", "Varanasi", "Rajmahal"];

    #[test]
    fn loading_gate_is_one_way() {
        let state = LandingState::new(3);
        assert_eq!(state.phase, LandingPhase::Loading);
        let ready = state.reduce(LandingAction::LoadingElapsed, &NAMES);
        assert!(ready.is_ready());
        let again = ready
            .reduce(LandingAction::LoadingElapsed, &NAMES)
            .reduce(LandingAction::ClearQuery, &NAMES)
            .reduce(LandingAction::FactTick, &NAMES);
        assert!(again.is_ready());
    }

    #[test]
    fn typing_filters_and_picking_clears_suggestions() {
        let state = LandingState::new(0).reduce(LandingAction::QueryChanged("Ri".into()), &NAMES);
        assert_eq!(state.suggestions, vec!["Rishikesh".to_string()]);
        let picked = state.reduce(LandingAction::SuggestionPicked("Rishikesh".into()), &NAMES);
        assert_eq!(picked.query, "Rishikesh");
        assert!(picked.suggestions.is_empty());
        assert_eq!(picked.submit().unwrap(), "Rishikesh");
    }

    #[test]
    fn clearing_empties_query_and_suggestions() {
        let state = LandingState::new(0)
            .reduce(LandingAction::QueryChanged("r".into()), &NAMES)
            .reduce(LandingAction::ClearQuery, &NAMES);
        assert!(state.query.is_empty());
        assert!(state.suggestions.is_empty());
        assert_eq!(state.submit(), Err(SearchError::EmptyLocation));
    }

    #[test]
    fn free_text_is_submitted_even_without_a_match() {
        let state = LandingState::new(0).reduce(LandingAction::QueryChanged("Kanpur".into()), &NAMES);
        assert!(state.suggestions.is_empty());
        assert_eq!(state.submit().unwrap(), "Kanpur");
    }

    #[test]
    fn facts_wrap_after_a_full_cycle() {
        let n = 5;
        let mut state = LandingState::new(n);
        assert_eq!(state.facts.index(), Some(0));
        for step in 1..=n {
            state = state.reduce(LandingAction::FactTick, &NAMES);
            assert!(!state.facts.is_visible());
            state = state.reduce(LandingAction::FactFaded, &NAMES);
            assert!(state.facts.is_visible());
            assert_eq!(state.facts.index(), Some(step % n));
        }
        assert_eq!(state.facts.index(), Some(0));
    }

    #[test]
    fn no_facts_is_inert() {
        let mut rotation = FactRotation::new(0);
        rotation.fade_out();
        rotation.advance();
        assert_eq!(rotation.index(), None);
        assert!(rotation.is_visible());
    }
}
