use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    icons::{Icon, IconKind},
    ui::{Badge, BadgeVariant, Card, CardVariant, Section, SectionSubtitle, SectionTitle, Size},
    use_content,
};
use crate::content::ExperienceEntry;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let experience = &use_content().experience;

    view! {
        <Title text="Experience" />
        <Section class="pt-24">
            <SectionTitle>"Professional Experience"</SectionTitle>
            <SectionSubtitle>
                "From full-stack development to applied AI, building systems that scale"
            </SectionSubtitle>

            <div class="relative">
                <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-champagne via-platinum to-transparent hidden md:block"></div>
                <div class="space-y-12">
                    {experience.iter().map(|entry| view! { <TimelineEntry entry /> }).collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn TimelineEntry(entry: &'static ExperienceEntry) -> impl IntoView {
    let (marker, variant) = if entry.current {
        ("bg-champagne animate-pulse", CardVariant::Elevated)
    } else {
        ("bg-platinum", CardVariant::Default)
    };

    view! {
        <div class="relative">
            <div class=format!(
                "absolute left-6 w-4 h-4 rounded-full border-4 border-onyx-pure hidden md:block {marker}",
            )></div>
            <div class="md:ml-20">
                <Card variant class="hover:border-champagne/30">
                    <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-2">{entry.role.clone()}</h3>
                            <div class="flex items-center text-champagne mb-2">
                                <Icon kind=IconKind::Building class="w-4 h-4 mr-2" />
                                <span class="font-medium">{entry.company.clone()}</span>
                            </div>
                        </div>
                        <div class="flex flex-col items-start md:items-end space-y-2">
                            <div class="flex items-center text-metallic-silver/80 text-sm">
                                <Icon kind=IconKind::Calendar class="w-4 h-4 mr-2" />
                                {entry.duration.clone()}
                            </div>
                            <div class="flex items-center text-metallic-silver/80 text-sm">
                                <Icon kind=IconKind::MapPin class="w-4 h-4 mr-2" />
                                {entry.location.clone()}
                            </div>
                            {entry.current.then(|| view! {
                                <Badge variant=BadgeVariant::Highlight size=Size::Sm>"Current"</Badge>
                            })}
                        </div>
                    </div>

                    <ul class="space-y-2 mb-6">
                        {entry
                            .highlights
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <li class="flex items-start text-metallic-silver/90">
                                        <span class="text-champagne mr-2 mt-1">"•"</span>
                                        <span>{highlight.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="flex flex-wrap gap-2">
                        {entry
                            .technologies
                            .iter()
                            .map(|tech| view! { <Badge size=Size::Sm>{tech.clone()}</Badge> })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}
