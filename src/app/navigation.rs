use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use super::{
    icons::{Icon, IconKind},
    use_content,
};
use crate::filters::is_active;

static NAV_ITEMS: [(&str, &str, IconKind); 5] = [
    ("/", "Home", IconKind::Home),
    ("/experience", "Experience", IconKind::Briefcase),
    ("/projects", "Projects", IconKind::Code),
    ("/skills", "Skills", IconKind::User),
    ("/contact", "Contact", IconKind::Mail),
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let profile = &use_content().profile;
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;
    let active = move |path: &str| pathname.with(|current| is_active(current, path));

    view! {
        <nav class="fixed top-0 w-full bg-onyx-pure/80 backdrop-blur-md border-b border-metallic-silver/10 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center space-x-2">
                        <span class="text-2xl font-bold text-gradient">{initials(&profile.name)}</span>
                        <span class="text-metallic-silver">{profile.name.clone()}</span>
                    </A>

                    <div class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|(path, label, _)| {
                                view! {
                                    <A
                                        href=*path
                                        attr:class=move || {
                                            if active(path) {
                                                "transition-colors duration-300 text-champagne"
                                            } else {
                                                "transition-colors duration-300 text-metallic-silver hover:text-platinum"
                                            }
                                        }
                                    >
                                        {*label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        type="button"
                        aria-label="Toggle menu"
                        class="md:hidden text-metallic-silver hover:text-white"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                Either::Left(view! { <Icon kind=IconKind::X class="w-6 h-6" /> })
                            } else {
                                Either::Right(view! { <Icon kind=IconKind::Menu class="w-6 h-6" /> })
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-onyx-metallic/95 backdrop-blur-md border-b border-metallic-silver/10">
                    <div class="px-4 pt-2 pb-3 space-y-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|(path, label, icon)| {
                                view! {
                                    <A
                                        href=*path
                                        on:click=move |_| set_menu_open.set(false)
                                        attr:class=move || {
                                            if active(path) {
                                                "flex items-center space-x-3 px-3 py-2 rounded-lg transition-colors duration-300 bg-champagne/20 text-champagne"
                                            } else {
                                                "flex items-center space-x-3 px-3 py-2 rounded-lg transition-colors duration-300 text-metallic-silver hover:bg-metallic-silver/10 hover:text-white"
                                            }
                                        }
                                    >
                                        <Icon kind=*icon />
                                        <span>{*label}</span>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Vince Vasile"), "VV");
        assert_eq!(initials("Ada"), "A");
        assert_eq!(initials(""), "");
    }
}
