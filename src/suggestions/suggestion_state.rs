use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Flowers offered as one-key picks, in display order
pub const POPULAR_FLOWERS: [&str; 11] = [
    "Roses",
    "Lilies",
    "Tulip",
    "Sunflowers",
    "Peonies",
    "Lavender",
    "Daisies",
    "Orchids",
    "Snapdragons",
    "Statice",
    "Lisianthus",
];

pub struct SuggestionState {
    matcher: SkimMatcherV2,
    visible: Vec<&'static str>,
    selected: Option<usize>,
}

impl fmt::Debug for SuggestionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionState")
            .field("visible", &self.visible)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionState {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
            visible: POPULAR_FLOWERS.to_vec(),
            selected: None,
        }
    }

    /// Re-rank pills against the current input and drop the selection.
    ///
    /// Blank input shows every pill in its fixed order.
    pub fn update(&mut self, query: &str) {
        self.selected = None;

        let query = query.trim();
        if query.is_empty() {
            self.visible = POPULAR_FLOWERS.to_vec();
            return;
        }

        let mut scored: Vec<(usize, i64)> = POPULAR_FLOWERS
            .iter()
            .enumerate()
            .filter_map(|(idx, name)| {
                self.matcher
                    .fuzzy_match(name, query)
                    .map(|score| (idx, score))
            })
            .collect();

        // Stable sort keeps display order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        self.visible = scored
            .into_iter()
            .map(|(idx, _)| POPULAR_FLOWERS[idx])
            .collect();
    }

    pub fn items(&self) -> &[&'static str] {
        &self.visible
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected.and_then(|idx| self.visible.get(idx).copied())
    }

    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(idx) => (idx + 1) % self.visible.len(),
        });
    }

    pub fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.selected = Some(match self.selected {
            None | Some(0) => last,
            Some(idx) => idx - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
