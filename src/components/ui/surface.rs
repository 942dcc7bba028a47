use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SurfaceProps {
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

/// Rounded, elevated container colored from the theme.
#[component]
pub fn Surface(props: SurfaceProps) -> Element {
    let base = "rounded-lg shadow-md bg-[var(--color-secondary-container)] text-[var(--color-on-secondary-container)]";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    };

    rsx! {
        div { class, {props.children} }
    }
}
