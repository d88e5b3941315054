use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    icons::{Icon, IconKind},
    ui::{
        button_class, Badge, BadgeVariant, ButtonVariant, Card, CardContent, CardDescription,
        CardFooter, CardHeader, CardTitle, CardVariant, Section, SectionSubtitle, SectionTitle,
        Size,
    },
    use_content,
};
use crate::{content::Project, filters::CategoryFilter};

const VISIBLE_METRICS: usize = 3;
const VISIBLE_HIGHLIGHTS: usize = 3;
const VISIBLE_TECHNOLOGIES: usize = 6;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = &use_content().projects;
    let filter = RwSignal::new(CategoryFilter::All);
    let choices = CategoryFilter::choices(projects);

    view! {
        <Title text="Projects" />
        <Section class="pt-24">
            <SectionTitle>"Featured Projects"</SectionTitle>
            <SectionSubtitle>
                "Production systems serving real users with measurable impact"
            </SectionSubtitle>

            <div class="flex items-center gap-2 mb-4">
                <Icon kind=IconKind::Filter class="w-5 h-5 text-platinum" />
                <h3 class="text-lg font-semibold text-champagne">"Filter by Category"</h3>
            </div>
            <div class="flex flex-wrap gap-2 mb-12">
                {choices
                    .into_iter()
                    .map(|choice| {
                        let label = choice.label().to_string();
                        let key = choice.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    let variant = if filter.with(|f| *f == key) {
                                        ButtonVariant::Primary
                                    } else {
                                        ButtonVariant::Ghost
                                    };
                                    button_class(variant, Size::Sm, "")
                                }
                                on:click=move |_| filter.set(choice.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                {move || {
                    filter
                        .with(|f| f.apply(projects))
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let hidden_technologies = project.technologies.len().saturating_sub(VISIBLE_TECHNOLOGIES);

    view! {
        <Card variant=CardVariant::Elevated class="h-full flex flex-col">
            <CardHeader>
                <div class="flex items-start justify-between mb-2">
                    <CardTitle>{project.title.clone()}</CardTitle>
                    <Badge variant=BadgeVariant::Status size=Size::Sm>
                        {project.status.clone()}
                    </Badge>
                </div>
                <CardDescription>{project.description.clone()}</CardDescription>
            </CardHeader>

            <CardContent class="flex-grow">
                {project
                    .metrics
                    .as_ref()
                    .filter(|metrics| !metrics.is_empty())
                    .map(|metrics| {
                        view! {
                            <div class="grid grid-cols-3 gap-4 mb-6">
                                {metrics
                                    .iter()
                                    .take(VISIBLE_METRICS)
                                    .map(|metric| {
                                        view! {
                                            <div class="text-center">
                                                <Icon
                                                    kind=IconKind::from(metric.kind())
                                                    class="w-4 h-4 text-champagne mx-auto mb-1"
                                                />
                                                <div class="text-lg font-bold text-white">
                                                    {metric.value.to_string()}
                                                </div>
                                                <div class="text-xs text-metallic-silver/60 capitalize">
                                                    {metric.label()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}

                <ul class="space-y-2 mb-6">
                    {project
                        .highlights
                        .iter()
                        .take(VISIBLE_HIGHLIGHTS)
                        .map(|highlight| {
                            view! {
                                <li class="flex items-start text-sm text-metallic-silver/80">
                                    <span class="text-champagne mr-2">"▸"</span>
                                    {highlight.clone()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </CardContent>

            <CardFooter>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .take(VISIBLE_TECHNOLOGIES)
                        .map(|tech| view! { <Badge size=Size::Sm>{tech.clone()}</Badge> })
                        .collect_view()}
                    {(hidden_technologies > 0)
                        .then(|| {
                            view! {
                                <Badge variant=BadgeVariant::Status size=Size::Sm>
                                    {format!("+{hidden_technologies} more")}
                                </Badge>
                            }
                        })}
                </div>
            </CardFooter>
        </Card>
    }
}
