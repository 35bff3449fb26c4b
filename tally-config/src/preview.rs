//! Plain-text rendering of a sorted table for the preview tool.

use std::fmt::Write as _;

use tally_contracts::view::TableView;
use tally_model::{Record, SortColumn, SortState};

use crate::models::DisplayConfig;

/// A [`TableView`] that keeps the latest frame as aligned text.
#[derive(Debug, Clone, Default)]
pub struct TextTableView {
    display: DisplayConfig,
    frame: String,
    frames_presented: usize,
}

impl TextTableView {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            display,
            frame: String::new(),
            frames_presented: 0,
        }
    }

    /// The most recently presented frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }
}

impl TableView for TextTableView {
    fn present(&mut self, rows: &[Record], state: SortState) {
        self.frame = render_text(rows, state, &self.display);
        self.frames_presented += 1;
    }
}

fn header(column: SortColumn, state: SortState) -> String {
    let label = match column {
        SortColumn::Location => "Location",
        SortColumn::Month => "Month",
        SortColumn::Year => "Year",
        SortColumn::Total => "Total",
    };
    if column == state.column {
        format!("{label} {}", state.direction.arrow())
    } else {
        label.to_string()
    }
}

fn cell(record: &Record, column: SortColumn, precision: usize) -> String {
    match column {
        SortColumn::Location => record.location().to_string(),
        SortColumn::Month => record.month().to_string(),
        SortColumn::Year => record.year().to_string(),
        SortColumn::Total => format!("{:.*}", precision, record.total()),
    }
}

/// Renders `rows` as a left/right aligned text table with a sort indicator
/// on the active column.
pub fn render_text(
    rows: &[Record],
    state: SortState,
    display: &DisplayConfig,
) -> String {
    let mut headers = Vec::with_capacity(SortColumn::ALL.len() + 1);
    if display.show_ids {
        headers.push("Id".to_string());
    }
    headers.extend(SortColumn::ALL.iter().map(|c| header(*c, state)));

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|record| {
            let mut line = Vec::with_capacity(headers.len());
            if display.show_ids {
                line.push(record.id().to_string());
            }
            line.extend(
                SortColumn::ALL
                    .iter()
                    .map(|c| cell(record, *c, display.total_precision)),
            );
            line
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            body.iter()
                .map(|line| line[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Text columns (id, location) are left aligned, numbers right aligned.
    let text_columns = if display.show_ids { 2 } else { 1 };
    let mut out = String::new();
    for line in std::iter::once(&headers).chain(body.iter()) {
        let rendered: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let pad = widths[i].saturating_sub(value.chars().count());
                if i < text_columns {
                    format!("{value}{}", " ".repeat(pad))
                } else {
                    format!("{}{value}", " ".repeat(pad))
                }
            })
            .collect();
        let _ = writeln!(out, "{}", rendered.join("  ").trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::normalize;
    use tally_model::RawRecord;

    #[test]
    fn marks_active_column_and_aligns() {
        let rows = normalize(vec![
            RawRecord::new("Oslo", 3, 2021, 7.0),
            RawRecord::new("Bodø", 12, 2020, 19.5),
        ]);

        let text = render_text(
            &rows,
            SortState::descending(SortColumn::Total),
            &DisplayConfig::default(),
        );

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Location  Month  Year  Total ↓");
        assert_eq!(lines[1], "Oslo          3  2021     7.00");
        assert_eq!(lines[2], "Bodø         12  2020    19.50");
    }

    #[test]
    fn optional_id_column() {
        let rows = normalize(vec![RawRecord::new("Alta", 1, 2019, 0.0)]);
        let display = DisplayConfig {
            show_ids: true,
            total_precision: 0,
        };

        let text = render_text(&rows, SortState::default(), &display);

        assert!(text.starts_with("Id           Location ↑"));
        assert!(text.lines().nth(1).is_some_and(|l| l.ends_with("0")));
    }

    #[test]
    fn counts_presented_frames() {
        let mut view = TextTableView::new(DisplayConfig::default());
        view.present(&[], SortState::default());
        view.present(&[], SortState::descending(SortColumn::Location));
        assert_eq!(view.frames_presented(), 2);
        assert_eq!(view.frame(), "Location ↓  Month  Year  Total\n");
    }
}
