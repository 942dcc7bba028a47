//! The expandable message card.

use dioxus::prelude::*;

use crate::components::ui::{Avatar, Surface};
use crate::models::Message;

/// MessageCard - one chat message with a click-to-expand body.
///
/// ```text
/// +---------------------------------------------+
/// |  (o)  author                                |
/// |       +-------------------------------+     |
/// |       | body: one line when folded,   |     |
/// |       | the full text when expanded   |     |
/// |       +-------------------------------+     |
/// +---------------------------------------------+
/// ```
///
/// The card owns no state. The caller passes the current expansion flag and
/// a callback that flips it, so identical props always produce identical
/// output. The author+body column is the sole click target.
#[component]
pub fn MessageCard(msg: Message, is_expanded: bool, on_toggle: EventHandler<()>) -> Element {
    // One displayed line until expanded, unbounded after. The transition
    // between the two sizes is animated by the `message-body` CSS rules.
    let clamp_class = if is_expanded { "expanded" } else { "collapsed" };
    let clamp_style = if is_expanded {
        ""
    } else {
        "display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: 1;"
    };

    rsx! {
        div { class: "flex gap-2 p-2",
            Avatar {
                name: msg.author.clone(),
                src: crate::PROFILE_PICTURE.to_string(),
            }
            div {
                class: "flex-1 min-w-0 cursor-pointer",
                onclick: move |_| on_toggle.call(()),
                span { class: "text-sm font-semibold text-[var(--color-secondary)]", "{msg.author}" }
                Surface { class: "mt-1",
                    p {
                        class: "message-body {clamp_class} px-2 py-1 text-sm",
                        style: "{clamp_style}",
                        "{msg.body}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Fixture(msg: Message, is_expanded: bool) -> Element {
        rsx! {
            MessageCard { msg, is_expanded, on_toggle: move |_| {} }
        }
    }

    fn render(msg: Message, is_expanded: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Fixture, FixtureProps { msg, is_expanded });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn collapsed_body_is_clamped_to_one_line() {
        let html = render(Message::new("Android", "Jetpack Compose"), false);

        assert!(html.contains("Android"));
        assert!(html.contains("Jetpack Compose"));
        assert!(html.contains("-webkit-line-clamp: 1"));
        assert!(html.contains("collapsed"));
    }

    #[test]
    fn expanded_body_has_no_line_clamp() {
        let html = render(Message::new("Android", "Jetpack Compose"), true);

        assert!(html.contains("Jetpack Compose"));
        assert!(!html.contains("-webkit-line-clamp"));
        assert!(html.contains("expanded"));
    }

    #[test]
    fn expanding_changes_the_clamp_but_not_the_text() {
        let msg = Message::new(
            "sarah",
            "A longer body that would wrap across several lines on a narrow screen.",
        );
        let folded = render(msg.clone(), false);
        let expanded = render(msg.clone(), true);

        assert!(folded.contains(&msg.body));
        assert!(expanded.contains(&msg.body));
        assert!(folded.contains("-webkit-line-clamp: 1"));
        assert!(!expanded.contains("-webkit-line-clamp"));
    }

    #[test]
    fn rendering_is_referentially_stable() {
        let msg = Message::new("sarah", "hello there");

        assert_eq!(render(msg.clone(), false), render(msg.clone(), false));
        assert_eq!(render(msg.clone(), true), render(msg, true));
    }
}
