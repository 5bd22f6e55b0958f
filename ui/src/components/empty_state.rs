use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    message: String,
    #[props(optional)]
    hint: Option<String>,
    /// Fixed height, so a chart area keeps its size while empty.
    #[props(optional)]
    height: Option<String>,
}

/// Shown instead of a zero-row table or an all-zero chart.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    let height = props.height.unwrap_or_else(|| "auto".to_string());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                height: {height};
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                background-color: var(--pico-card-sectioning-background-color);
                margin: 1rem 0;
            ",
            h5 {
                style: "margin-bottom: 0.5rem; color: var(--pico-muted-color);",
                "{props.message}"
            }
            if let Some(hint) = props.hint {
                small { "{hint}" }
            }
        }
    }
}
