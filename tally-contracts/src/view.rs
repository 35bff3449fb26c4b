use tally_model::{Record, SortState};

/// Receives the ordered rows every time the table re-sorts.
///
/// Implementors only paint; they never reorder `rows` themselves.
pub trait TableView {
    fn present(&mut self, rows: &[Record], state: SortState);
}

impl<V: TableView + ?Sized> TableView for &mut V {
    fn present(&mut self, rows: &[Record], state: SortState) {
        (**self).present(rows, state)
    }
}

impl<V: TableView + ?Sized> TableView for Box<V> {
    fn present(&mut self, rows: &[Record], state: SortState) {
        (**self).present(rows, state)
    }
}

/// A view that drops every frame. Handy for headless sorting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl TableView for NullView {
    fn present(&mut self, _rows: &[Record], _state: SortState) {}
}
