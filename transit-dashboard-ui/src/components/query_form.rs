//! Service and limit selectors with a submit button.

use crate::state::QueryState;
use dioxus::prelude::*;
use transit_core::params::{Limit, ServiceId};

#[derive(Props, Clone, PartialEq)]
pub struct QueryFormProps {
    /// DOM id of the form element
    pub id: String,
    pub state: QueryState,
    /// Called on submit; the browser's default submission is suppressed
    pub on_submit: EventHandler<()>,
}

fn limit_label(choice: &str) -> &str {
    if choice == "all" {
        "All"
    } else {
        choice
    }
}

/// Form driving one query view. Changing a selector only updates the state;
/// the view reloads on submit.
#[component]
pub fn QueryForm(props: QueryFormProps) -> Element {
    let mut state = props.state;
    let service = (state.service)();
    let limit = (state.limit)().to_string();
    let on_submit = props.on_submit;

    let on_service_change = move |evt: Event<FormData>| match evt.value().parse::<ServiceId>() {
        Ok(service) => state.service.set(service),
        Err(err) => log::warn!("{}", err),
    };

    let on_limit_change = move |evt: Event<FormData>| match evt.value().parse::<Limit>() {
        Ok(limit) => state.limit.set(limit),
        Err(err) => log::warn!("{}", err),
    };

    rsx! {
        form {
            id: "{props.id}",
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                on_submit.call(());
            },
            label {
                style: "font-weight: bold;",
                "Service: "
                select {
                    name: "service_id",
                    onchange: on_service_change,
                    for choice in ServiceId::ALL {
                        option {
                            value: "{choice.as_str()}",
                            selected: choice == service,
                            "{choice.name()}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Limit: "
                select {
                    name: "limit",
                    onchange: on_limit_change,
                    for choice in Limit::CHOICES {
                        option {
                            value: "{choice}",
                            selected: choice == limit,
                            "{limit_label(choice)}"
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                "Run query"
            }
        }
    }
}
