//! Container for content drawn by the JS bridge (maps, chart stacks).

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelContainerProps {
    /// The DOM id the bridge renders into
    pub id: String,
    /// Fixed height in pixels; `0` lets the content decide
    #[props(default = 0)]
    pub height: u32,
}

/// An empty div owned by Dioxus and filled by Leaflet or Chart.js.
#[component]
pub fn PanelContainer(props: PanelContainerProps) -> Element {
    let style = if props.height > 0 {
        format!("height: {}px; width: 100%; margin: 8px 0;", props.height)
    } else {
        "width: 100%; margin: 8px 0;".to_string()
    };

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
