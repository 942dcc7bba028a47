use dioxus::prelude::*;

/// Fixed-size circular avatar with a themed ring.
///
/// Renders the image when a source is given, otherwise falls back to a
/// gradient circle showing the first initial of the name.
#[component]
pub fn Avatar(name: String, src: Option<String>) -> Element {
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();

    rsx! {
        if let Some(src) = src {
            img {
                class: "w-10 h-10 rounded-full object-cover border-[1.5px] border-[var(--color-primary)] flex-shrink-0",
                src: "{src}",
                alt: "{name}",
            }
        } else {
            div {
                class: "w-10 h-10 rounded-full border-[1.5px] border-[var(--color-primary)] bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center text-white font-semibold flex-shrink-0",
                "{initial}"
            }
        }
    }
}
