//! Results table with descending sort on sortable headers.

use dioxus::prelude::*;
use transit_views::table::Table;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// DOM id of the table element
    pub id: String,
    pub table: Signal<Table>,
}

const HEADER_STYLE: &str = "text-align: left; padding: 6px 8px; border-bottom: 2px solid #ccc;";
const SORTABLE_STYLE: &str =
    "text-align: left; padding: 6px 8px; border-bottom: 2px solid #ccc; cursor: pointer; color: #1565C0;";
const CELL_STYLE: &str = "padding: 4px 8px; border-bottom: 1px solid #eee;";

/// Renders the view's current table. Clicking a sortable header reorders the
/// rows already on screen; nothing is refetched.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut table = props.table;
    let snapshot = table.read().clone();

    rsx! {
        div {
            style: "overflow-x: auto; margin: 8px 0;",
            table {
                id: "{props.id}",
                style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                thead {
                    tr {
                        for column in snapshot.columns.iter() {
                            if let Some(key) = column.sort_key.clone() {
                                th {
                                    style: SORTABLE_STYLE,
                                    title: "Sort descending",
                                    onclick: move |_| {
                                        table.write().sort_desc_by(&key);
                                    },
                                    "{column.label} ▼"
                                }
                            } else {
                                th { style: HEADER_STYLE, "{column.label}" }
                            }
                        }
                    }
                }
                tbody {
                    for row in snapshot.rows.iter() {
                        tr {
                            for cell in row.cells.iter() {
                                td { style: CELL_STYLE, "{cell.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
