use leptos::{either::Either, prelude::*};

use super::icons::{Icon, IconKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Text,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

pub fn button_class(variant: ButtonVariant, size: Size, extra: &str) -> String {
    let size = match size {
        Size::Sm => "px-4 py-2 text-sm",
        Size::Md => "px-6 py-3 text-base",
        Size::Lg => "px-8 py-4 text-lg",
    };
    let variant = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-to-r from-champagne to-[#E6D7B8] text-onyx-pure hover:shadow-lg hover:scale-105"
        }
        ButtonVariant::Secondary => {
            "bg-gradient-to-r from-platinum to-[#7A8BA8] text-white hover:shadow-lg hover:scale-105"
        }
        ButtonVariant::Ghost => {
            "border border-metallic-silver/30 text-metallic-silver hover:bg-metallic-silver/10 hover:border-metallic-silver/50"
        }
        ButtonVariant::Text => {
            "text-platinum hover:text-champagne underline-offset-4 hover:underline px-0"
        }
    };
    join_classes(&[
        "font-medium rounded-lg transition-all duration-300 inline-flex items-center justify-center",
        size,
        variant,
        extra,
    ])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] icon: Option<IconKind>,
    #[prop(optional)] icon_position: IconPosition,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let base = button_class(variant, size, &class);
    let is_disabled = move || disabled.get().unwrap_or(false);
    let icon_view = move |position: IconPosition| {
        icon.filter(|_| icon_position == position).map(|kind| {
            let class = if position == IconPosition::Left {
                "mr-2 h-5 w-5"
            } else {
                "ml-2 h-5 w-5"
            };
            view! { <Icon kind class /> }
        })
    };
    view! {
        <button
            type="button"
            class=move || {
                if is_disabled() {
                    format!("{base} opacity-50 cursor-not-allowed")
                } else {
                    base.clone()
                }
            }
            disabled=is_disabled
            on:click=move |_| {
                if disabled.get_untracked().unwrap_or(false) {
                    return;
                }
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {icon_view(IconPosition::Left)}
            {children()}
            {icon_view(IconPosition::Right)}
        </button>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Glass,
}

pub fn card_class(variant: CardVariant, clickable: bool, extra: &str) -> String {
    let variant = match variant {
        CardVariant::Default => "bg-onyx-metallic/50 border border-metallic-silver/10",
        CardVariant::Elevated => {
            "bg-onyx-metallic/70 shadow-xl hover:shadow-2xl hover:scale-[1.02]"
        }
        CardVariant::Glass => "bg-white/5 backdrop-blur-md border border-white/10",
    };
    join_classes(&[
        "rounded-xl p-6 transition-all duration-300",
        variant,
        if clickable { "cursor-pointer" } else { "" },
        extra,
    ])
}

#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(into, optional)] class: MaybeProp<String>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let clickable = on_click.is_some();
    view! {
        <div
            class=move || card_class(variant, clickable, &class.get().unwrap_or_default())
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=join_classes(&["mb-4", &class])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=join_classes(&["text-xl font-bold text-white", &class])>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <p class=join_classes(&["text-metallic-silver/80 mt-1", &class])>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardFooter(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=join_classes(&["mt-4 pt-4 border-t border-metallic-silver/10", &class])>
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Skill,
    Metric,
    Status,
    Highlight,
}

pub fn badge_class(variant: BadgeVariant, size: Size, extra: &str) -> String {
    let size = match size {
        Size::Sm => "px-2 py-0.5 text-xs",
        Size::Md => "px-3 py-1 text-sm",
        Size::Lg => "px-4 py-1.5 text-base",
    };
    let variant = match variant {
        BadgeVariant::Skill => "bg-platinum/20 text-platinum border border-platinum/30",
        BadgeVariant::Metric => "bg-champagne/20 text-champagne border border-champagne/30",
        BadgeVariant::Status => {
            "bg-metallic-silver/20 text-metallic-silver border border-metallic-silver/30"
        }
        BadgeVariant::Highlight => {
            "bg-gradient-to-r from-champagne/20 to-platinum/20 text-white border border-white/30"
        }
    };
    join_classes(&[
        "inline-flex items-center rounded-full font-medium",
        size,
        variant,
        extra,
    ])
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: Size,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=badge_class(variant, size, &class)>{children()}</span> }
}

#[component]
pub fn Section(
    #[prop(into, optional)] id: Option<String>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=join_classes(&["py-20 px-4 sm:px-6 lg:px-8", &class])>
            <div class="max-w-7xl mx-auto">{children()}</div>
        </section>
    }
}

#[component]
pub fn SectionTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <h2 class=join_classes(&["text-4xl md:text-5xl font-bold text-gradient mb-4", &class])>
            {children()}
        </h2>
    }
}

#[component]
pub fn SectionSubtitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <p class=join_classes(&["text-lg md:text-xl text-metallic-silver/80 mb-12", &class])>
            {children()}
        </p>
    }
}

/// Full-height spinner shown while something loads.
#[component]
pub fn Spinner(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-96">
            <div class="text-center">
                <div class="animate-spin w-8 h-8 border-2 border-champagne border-t-transparent rounded-full mx-auto mb-4"></div>
                <p class="text-metallic-silver/80">{label}</p>
            </div>
        </div>
    }
}

/// Link that opens external targets in a new tab.
#[component]
pub fn SmartLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    if href.starts_with("http") {
        Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {children()}
            </a>
        })
    } else {
        Either::Right(view! { <a href=href class=class>{children()}</a> })
    }
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
