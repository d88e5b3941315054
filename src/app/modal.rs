use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::icons::{Icon, IconKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn class(self) -> &'static str {
        match self {
            ModalSize::Sm => "max-w-md",
            ModalSize::Md => "max-w-lg",
            ModalSize::Lg => "max-w-2xl",
            ModalSize::Xl => "max-w-4xl",
        }
    }
}

/// Only an open dialog reacts to Escape.
fn closes_on_key(open: bool, key: &str) -> bool {
    open && key == "Escape"
}

/// Inline `overflow` for `<body>`; `None` removes the property.
fn body_overflow(open: bool) -> Option<&'static str> {
    open.then_some("hidden")
}

/// Overlay dialog. Escape, the backdrop and the close button all call
/// `on_close`; the page does not scroll while it is open.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(into, optional)] size: MaybeProp<ModalSize>,
    children: ChildrenFn,
) -> impl IntoView {
    let _ = use_event_listener(use_document(), ev::keydown, move |e: ev::KeyboardEvent| {
        if closes_on_key(open.get_untracked(), &e.key()) {
            on_close.run(());
        }
    });

    Effect::new(move |_| set_body_overflow(body_overflow(open.get())));
    on_cleanup(|| set_body_overflow(body_overflow(false)));

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center">
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                    on:click=move |_| on_close.run(())
                ></div>
                <div class=move || {
                    format!(
                        "relative w-full {} mx-4 max-h-[90vh] overflow-y-auto bg-onyx-metallic/95 backdrop-blur-md border border-metallic-silver/20 rounded-xl shadow-2xl",
                        size.get().unwrap_or_default().class(),
                    )
                }>
                    <div class="flex items-center justify-between p-6 border-b border-metallic-silver/10">
                        <h2 class="text-xl font-bold text-champagne">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="p-2 text-metallic-silver hover:text-champagne transition-colors rounded-lg hover:bg-metallic-silver/10"
                            on:click=move |_| on_close.run(())
                        >
                            <Icon kind=IconKind::X />
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn set_body_overflow(overflow: Option<&str>) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let res = match overflow {
        Some(value) => style.set_property("overflow", value),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(e) = res {
        log::warn!("could not update body scroll lock: {e:?}");
    }
}

#[cfg(not(feature = "csr"))]
fn set_body_overflow(_overflow: Option<&str>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_only_open_dialog() {
        assert!(closes_on_key(true, "Escape"));
        assert!(!closes_on_key(false, "Escape"));
        assert!(!closes_on_key(true, "Enter"));
        assert!(!closes_on_key(true, "Esc"));
    }

    #[test]
    fn test_scroll_lock_follows_open_state() {
        assert_eq!(body_overflow(true), Some("hidden"));
        assert_eq!(body_overflow(false), None);
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(ModalSize::default(), ModalSize::Md);
        assert_eq!(ModalSize::Sm.class(), "max-w-md");
        assert_eq!(ModalSize::Lg.class(), "max-w-2xl");
        assert_eq!(ModalSize::Xl.class(), "max-w-4xl");
    }
}
