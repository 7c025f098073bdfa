use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible {
                set_shown.set(true);
            }
        },
        false,
    );

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if shown.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!("{class} transition-all duration-700 ease-out {state}")
            }
        >
            {children()}
        </div>
    }
}
