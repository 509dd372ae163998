use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoBannerProps {
    pub message: String,
}

/// Informational line above a view's results.
#[component]
pub fn InfoBanner(props: InfoBannerProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #E3F2FD; color: #0D47A1; border-radius: 4px; border: 1px solid #90CAF9;",
            "{props.message}"
        }
    }
}
