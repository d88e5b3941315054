use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    icons::{Icon, IconKind},
    ui::{Badge, BadgeVariant, Card, CardVariant, Section, SectionSubtitle, SectionTitle, Size},
    use_content,
};
use crate::{
    content::{Skill, SkillCategory, SkillLevel},
    filters::Accordion,
};

const INITIALLY_EXPANDED: &str = "ai-ml";

fn category_icon(id: &str) -> IconKind {
    match id {
        "ai-ml" => IconKind::Brain,
        "backend" => IconKind::Server,
        "frontend" => IconKind::Code,
        "devops" => IconKind::Cloud,
        "automation" => IconKind::Terminal,
        "security" => IconKind::Shield,
        _ => IconKind::Code,
    }
}

fn level_classes(level: &SkillLevel) -> &'static str {
    match level {
        SkillLevel::Expert => "text-champagne border-champagne/30 bg-champagne/10",
        SkillLevel::Advanced => "text-platinum border-platinum/30 bg-platinum/10",
        SkillLevel::Intermediate => {
            "text-metallic-silver border-metallic-silver/30 bg-metallic-silver/10"
        }
        SkillLevel::Other(_) => "text-metallic-silver/70 border-metallic-silver/20",
    }
}

#[component]
pub fn SkillsPage() -> impl IntoView {
    let skills = &use_content().skills;
    let accordion = RwSignal::new(Accordion::new(Some(INITIALLY_EXPANDED)));

    view! {
        <Title text="Skills" />
        <Section class="pt-24">
            <SectionTitle>"Technical Skills"</SectionTitle>
            <SectionSubtitle>
                "A decade of hands-on experience across the full technology stack"
            </SectionSubtitle>

            <div class="grid gap-6 mb-16">
                {skills
                    .categories
                    .iter()
                    .map(|category| view! { <CategoryPanel category accordion /> })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <Card variant=CardVariant::Glass>
                    <h3 class="text-xl font-bold text-white mb-4">"Programming Languages"</h3>
                    <div class="flex flex-wrap gap-2">
                        {skills
                            .languages
                            .iter()
                            .map(|lang| view! { <Badge>{lang.clone()}</Badge> })
                            .collect_view()}
                    </div>
                </Card>

                <Card variant=CardVariant::Glass>
                    <h3 class="text-xl font-bold text-white mb-4 flex items-center">
                        <Icon kind=IconKind::Award class="w-5 h-5 mr-2 text-champagne" />
                        "Certifications"
                    </h3>
                    <div class="space-y-3">
                        {skills
                            .certifications
                            .iter()
                            .map(|cert| {
                                let variant = if cert.is_in_progress() {
                                    BadgeVariant::Metric
                                } else {
                                    BadgeVariant::Status
                                };
                                view! {
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <div class="text-white font-medium">{cert.name.clone()}</div>
                                            <div class="text-sm text-metallic-silver/60">
                                                {cert.target.clone()}
                                            </div>
                                        </div>
                                        <Badge variant size=Size::Sm>{cert.status.clone()}</Badge>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </Section>
    }
}

#[component]
fn CategoryPanel(
    category: &'static SkillCategory,
    accordion: RwSignal<Accordion>,
) -> impl IntoView {
    let id = category.id.as_str();
    let expanded = Memo::new(move |_| accordion.with(|a| a.is_expanded(id)));

    view! {
        <Card variant=CardVariant::Glass class="overflow-hidden">
            <button
                type="button"
                class="w-full flex items-center justify-between text-left"
                on:click=move |_| accordion.update(|a| a.toggle(id))
            >
                <div class="flex items-center">
                    <Icon kind=category_icon(id) class="w-6 h-6 mr-3 text-champagne" />
                    <h3 class="text-xl font-bold text-white">{category.name.clone()}</h3>
                </div>
                <span class=move || {
                    if expanded.get() {
                        "text-metallic-silver transition-transform duration-300 rotate-90"
                    } else {
                        "text-metallic-silver transition-transform duration-300"
                    }
                }>
                    <Icon kind=IconKind::ChevronRight />
                </span>
            </button>

            <div class=move || {
                if expanded.get() {
                    "mt-6 grid md:grid-cols-2 gap-4 transition-all duration-500"
                } else {
                    "mt-6 grid md:grid-cols-2 gap-4 transition-all duration-500 max-h-32 overflow-hidden"
                }
            }>
                {category
                    .skills
                    .iter()
                    .map(|skill| view! { <SkillRow skill expanded /> })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn SkillRow(skill: &'static Skill, expanded: Memo<bool>) -> impl IntoView {
    let filled = skill.level.stars();

    view! {
        <div class="p-4 rounded-lg bg-onyx-metallic/30 border border-metallic-silver/10">
            <div class="flex items-center justify-between mb-2">
                <span class="text-white font-medium">{skill.name.clone()}</span>
                <span class=format!(
                    "text-xs px-2 py-0.5 rounded-full border capitalize {}",
                    level_classes(&skill.level),
                )>{skill.level.label().to_string()}</span>
            </div>
            <div class="flex items-center justify-between text-sm">
                <div class="flex">
                    {(0..SkillLevel::MAX_STARS)
                        .map(|i| {
                            let class = if i < filled {
                                "w-4 h-4 text-champagne fill-current"
                            } else {
                                "w-4 h-4 text-metallic-silver/30"
                            };
                            view! { <Icon kind=IconKind::Star class /> }
                        })
                        .collect_view()}
                </div>
                <span class="text-metallic-silver/60">{format!("{} years", skill.years)}</span>
            </div>
            <Show when=move || expanded.get() && !skill.details.is_empty()>
                <div class="flex flex-wrap gap-1 mt-3">
                    {skill
                        .details
                        .iter()
                        .map(|detail| {
                            view! { <Badge size=Size::Sm>{detail.clone()}</Badge> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
