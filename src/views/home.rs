//! The single screen of the app: one message card with hoisted expansion
//! state.

use dioxus::prelude::*;

use crate::components::MessageCard;
use crate::models::Message;

/// Hosting screen. Owns the expansion flag for its whole lifetime and hands
/// the card a callback that flips it; the card itself stays stateless, so
/// the toolkit re-renders it whenever the signal changes.
#[component]
pub fn Home() -> Element {
    let mut is_expanded = use_signal(|| false);

    let msg = Message::new(
        "sarah",
        "Declarative UIs describe what the screen should look like for the \
         current state and let the toolkit work out the updates. Click this \
         message to expand and collapse the body.",
    );

    rsx! {
        div { class: "min-h-screen bg-[var(--color-surface)] text-[var(--color-on-surface)] p-4",
            MessageCard {
                msg,
                is_expanded: is_expanded(),
                on_toggle: move |_| {
                    let expanded = !is_expanded();
                    crate::log_debug!("message card expanded: {expanded}");
                    is_expanded.set(expanded);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let mut dom = VirtualDom::new(Home);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("sarah"));
        assert!(html.contains("-webkit-line-clamp: 1"));
    }

    // The toggle passed to the card is an involution: one call flips the
    // flag, a second call restores it.
    #[test]
    fn toggling_twice_restores_the_original_state() {
        fn toggle(expanded: &mut bool) {
            *expanded = !*expanded;
        }

        let mut expanded = false;
        toggle(&mut expanded);
        assert!(expanded);
        toggle(&mut expanded);
        assert!(!expanded);
    }
}
