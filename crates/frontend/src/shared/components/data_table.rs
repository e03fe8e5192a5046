use super::pagination_controls::PaginationControls;
use contracts::dashboards::d405_app_level_retn_rem::columns::label_for;
use contracts::dashboards::d405_app_level_retn_rem::dto::cell_text;
use contracts::dashboards::d405_app_level_retn_rem::TabularDataset;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Click position in grid coordinates: row 0 is the header row, data rows
/// start at 1. `column_index` is `None` when the click did not land on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowActivation {
    pub row_index: usize,
    pub column_index: Option<usize>,
}

impl RowActivation {
    pub fn cell(row_index: usize, column_index: usize) -> Self {
        Self {
            row_index,
            column_index: Some(column_index),
        }
    }

    /// Zero-based data row, if this is a click on a data cell
    pub fn data_row(&self) -> Option<usize> {
        match (self.row_index, self.column_index) {
            (0, _) | (_, None) => None,
            (row, Some(_)) => Some(row - 1),
        }
    }
}

pub fn page_count(rows: usize, page_size: usize) -> usize {
    rows.div_ceil(page_size.max(1)).max(1)
}

/// Index range of the rows shown on a 1-based page
pub fn page_bounds(rows: usize, page: usize, page_size: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(rows);
    let end = start.saturating_add(page_size).min(rows);
    (start, end)
}

/// Paged table over a [`TabularDataset`]. Headers use catalog labels.
#[component]
pub fn DataTable(
    #[prop(into)] dataset: Signal<TabularDataset>,
    /// `data-testid` of the table container
    test_id: &'static str,
    /// Fired on a data cell click with grid coordinates
    #[prop(optional)]
    on_row_activate: Option<Callback<RowActivation>>,
) -> impl IntoView {
    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);

    let total_rows = Signal::derive(move || dataset.with(|d| d.len()));
    let total_pages =
        Signal::derive(move || page_count(total_rows.get(), page_size.get()));

    let header = move || {
        dataset.with(|d| {
            d.columns
                .iter()
                .map(|c| {
                    let label = label_for(c).to_string();
                    view! {
                        <TableHeaderCell resizable=true min_width=120.0>
                            {label}
                        </TableHeaderCell>
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let (start, end) = page_bounds(total_rows.get(), page.get(), page_size.get());
        dataset.with(|d| {
            let width = d.columns.len();
            d.rows[start..end]
                .iter()
                .enumerate()
                .map(|(offset, row)| {
                    let row_index = start + offset + 1;
                    let clickable = on_row_activate.is_some();
                    let cells = (0..width)
                        .map(|col| {
                            let text = row.get(col).map(cell_text).unwrap_or_default();
                            view! {
                                <TableCell on:click=move |_| {
                                    if let Some(cb) = on_row_activate {
                                        cb.run(RowActivation::cell(row_index, col));
                                    }
                                }>
                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    view! {
                        <TableRow attr:style=if clickable { "cursor: pointer;" } else { "" }>
                            {cells}
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="data-table" data-testid=test_id>
            <div class="data-table__scroll">
                <Table>
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
            <PaginationControls
                total_pages=total_pages
                total_count=total_rows
                page_size=page_size
                on_page_change=Callback::new(move |p: usize| page.set(p))
                on_page_size_change=Callback::new(move |size: usize| page_size.set(size))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_row_uses_grid_addressing() {
        assert_eq!(RowActivation::cell(1, 0).data_row(), Some(0));
        assert_eq!(RowActivation::cell(5, 3).data_row(), Some(4));
        // header row
        assert_eq!(RowActivation::cell(0, 2).data_row(), None);
        // not a cell
        let outside = RowActivation {
            row_index: 3,
            column_index: None,
        };
        assert_eq!(outside.data_row(), None);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(10, 0), 10);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(60, 1, 25), (0, 25));
        assert_eq!(page_bounds(60, 3, 25), (50, 60));
        // page past the end yields an empty slice instead of panicking
        assert_eq!(page_bounds(60, 9, 25), (60, 60));
        assert_eq!(page_bounds(0, 1, 25), (0, 0));
    }
}
