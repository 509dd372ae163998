//! Loading indicator.

use dioxus::prelude::*;

/// Shown while a view has a request in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "padding: 6px 0; font-size: 13px; color: #666;",
            "Loading query results..."
        }
    }
}
