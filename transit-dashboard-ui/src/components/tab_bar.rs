//! Tab strip switching between the four query views.

use dioxus::prelude::*;
use transit_core::params::Endpoint;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    pub active: Signal<Endpoint>,
}

fn tab_style(selected: bool) -> &'static str {
    if selected {
        "padding: 8px 14px; border: 1px solid #ccc; border-bottom: none; background: #fff; font-weight: bold; cursor: pointer;"
    } else {
        "padding: 8px 14px; border: 1px solid transparent; background: #f5f5f5; color: #555; cursor: pointer;"
    }
}

#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let mut active = props.active;
    let current = active();

    rsx! {
        nav {
            style: "display: flex; gap: 4px; border-bottom: 1px solid #ccc; margin-bottom: 12px;",
            for endpoint in Endpoint::ALL {
                button {
                    key: "{endpoint.key()}",
                    r#type: "button",
                    style: tab_style(endpoint == current),
                    onclick: move |_| active.set(endpoint),
                    "{endpoint.title()}"
                }
            }
        }
    }
}
