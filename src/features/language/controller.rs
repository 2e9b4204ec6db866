//! Language Grid Controller
//!
//! Layout and selection dispatch for the language grid, independent of GPUI.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::constants::GRID_COLUMNS;
use crate::domain::language::{LanguageCatalog, LanguageRecord};

type SelectHandler = dyn Fn(&str, &str) + 'static;

/// Receiver of `(identifier, label)` when a card is tapped
///
/// Owned by the embedding application. The default sink does nothing.
#[derive(Clone, Default)]
pub struct SelectionSink {
    handler: Option<Rc<SelectHandler>>,
}

impl SelectionSink {
    pub fn new(handler: impl Fn(&str, &str) + 'static) -> Self {
        Self {
            handler: Some(Rc::new(handler)),
        }
    }

    /// A sink that ignores every selection
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.handler.is_none()
    }

    /// Forward a selection to the handler
    pub fn select(&self, identifier: &str, label: &str) {
        match &self.handler {
            Some(handler) => handler(identifier, label),
            None => debug!(identifier, label, "Selection dropped: no sink installed"),
        }
    }
}

impl fmt::Debug for SelectionSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSink")
            .field("noop", &self.is_noop())
            .finish()
    }
}

/// Element id of the card for `identifier`
pub fn card_element_id(identifier: &str) -> String {
    format!("language-card-{identifier}")
}

/// Split the catalog into rows of `columns` records, in catalog order
pub fn grid_rows(catalog: &LanguageCatalog, columns: usize) -> Vec<&[LanguageRecord]> {
    catalog.records().chunks(columns.max(1)).collect()
}

/// Grid of selectable languages
#[derive(Debug, Clone)]
pub struct SelectableGrid {
    catalog: Arc<LanguageCatalog>,
    sink: SelectionSink,
    columns: usize,
}

impl SelectableGrid {
    pub fn new(catalog: Arc<LanguageCatalog>, sink: SelectionSink) -> Self {
        Self {
            catalog,
            sink,
            columns: GRID_COLUMNS,
        }
    }

    pub fn catalog(&self) -> &Arc<LanguageCatalog> {
        &self.catalog
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows of cards, left-to-right then top-to-bottom
    pub fn rows(&self) -> Vec<&[LanguageRecord]> {
        grid_rows(&self.catalog, self.columns)
    }

    /// Card element ids in display order
    pub fn card_keys(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|r| card_element_id(&r.identifier))
            .collect()
    }

    /// Place one item per record into the grid's rows
    ///
    /// `lookup` maps an identifier to its item; records without one are skipped.
    pub fn arrange<T>(&self, mut lookup: impl FnMut(&str) -> Option<T>) -> Vec<Vec<T>> {
        self.rows()
            .into_iter()
            .map(|row| row.iter().filter_map(|r| lookup(&r.identifier)).collect())
            .collect()
    }

    /// Dispatch a completed tap on the card keyed by `identifier`
    ///
    /// Returns `false` when no such card exists.
    pub fn tap(&self, identifier: &str) -> bool {
        let Some(record) = self.catalog.get(identifier) else {
            debug!(identifier, "Tap on unknown card ignored");
            return false;
        };
        self.sink.select(&record.identifier, &record.label);
        true
    }

    pub fn sink(&self) -> &SelectionSink {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_sink() -> (SelectionSink, Rc<RefCell<Vec<(String, String)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = calls.clone();
        let sink = SelectionSink::new(move |id, label| {
            recorded.borrow_mut().push((id.to_string(), label.to_string()));
        });
        (sink, calls)
    }

    #[test]
    fn test_default_grid_rows() {
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), SelectionSink::noop());
        let rows = grid.rows();
        let sizes: Vec<usize> = rows.iter().map(|row| row.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        let labels: Vec<&str> = rows
            .iter()
            .flat_map(|row| row.iter().map(|r| r.label.as_str()))
            .collect();
        assert_eq!(labels, vec!["English", "Hindi", "Marathi", "Gujarati", "Bengali"]);
    }

    #[test]
    fn test_grid_rows_zero_columns() {
        let catalog = LanguageCatalog::default();
        assert_eq!(grid_rows(&catalog, 0).len(), catalog.len());
    }

    #[test]
    fn test_card_keys_unique() {
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), SelectionSink::noop());
        let keys = grid.card_keys();
        assert_eq!(
            keys,
            vec![
                "language-card-en",
                "language-card-hi",
                "language-card-mr",
                "language-card-gu",
                "language-card-bn",
            ]
        );
    }

    #[test]
    fn test_arrange_follows_rows() {
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), SelectionSink::noop());
        let rows = grid.arrange(|id| Some(card_element_id(id)));

        assert_eq!(
            rows,
            vec![
                vec!["language-card-en".to_string(), "language-card-hi".to_string()],
                vec!["language-card-mr".to_string(), "language-card-gu".to_string()],
                vec!["language-card-bn".to_string()],
            ]
        );
        let flat: Vec<String> = rows.into_iter().flatten().collect();
        assert_eq!(flat, grid.card_keys());
    }

    #[test]
    fn test_arrange_skips_missing_items() {
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), SelectionSink::noop());
        let rows = grid.arrange(|id| (id != "hi").then(|| id.to_string()));
        let sizes: Vec<usize> = rows.iter().map(|row| row.len()).collect();
        assert_eq!(sizes, vec![1, 2, 1]);
    }

    #[test]
    fn test_tap_dispatches_once() {
        let (sink, calls) = recording_sink();
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), sink);

        assert!(grid.tap("hi"));
        assert_eq!(
            calls.borrow().as_slice(),
            &[("hi".to_string(), "Hindi".to_string())]
        );
    }

    #[test]
    fn test_tap_unknown_card() {
        let (sink, calls) = recording_sink();
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), sink);

        assert!(!grid.tap("fr"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_tap_without_sink() {
        let grid = SelectableGrid::new(Arc::new(LanguageCatalog::default()), SelectionSink::default());
        assert!(grid.sink().is_noop());
        assert!(grid.tap("en"));
    }
}
