use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{
    icons::{Icon, IconKind},
    resume::ResumeRequestModal,
    ui::{Button, ButtonVariant, IconPosition, Section},
    use_content,
};
use crate::config::build_year;

struct HeadlineMetric {
    label: &'static str,
    value: String,
    description: String,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = &use_content().profile;
    let (resume_open, set_resume_open) = signal(false);

    let mut metrics = Vec::with_capacity(4);
    if let (Some(years), Some(start)) = (
        build_year().and_then(|year| profile.years_of_experience(year)),
        profile.career_start_year,
    ) {
        metrics.push(HeadlineMetric {
            label: "Years Experience",
            value: format!("{years}+"),
            description: format!("{start} - Present"),
        });
    }
    metrics.extend([
        HeadlineMetric {
            label: "Lines of Code",
            value: "322K+".to_string(),
            description: "Production Ready".to_string(),
        },
        HeadlineMetric {
            label: "System Uptime",
            value: "99.95%".to_string(),
            description: "Enterprise Grade".to_string(),
        },
        HeadlineMetric {
            label: "AI Sessions",
            value: "261+".to_string(),
            description: "Multi-LLM Expertise".to_string(),
        },
    ]);

    view! {
        <Title text="Home" />
        <Section class="min-h-[calc(100vh-4rem)] flex items-center">
            <div class="w-full">
                <div class="mb-8">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">
                        <span class="text-white">{profile.name.clone()}</span>
                        <br />
                        <span class="text-gradient">{profile.title.clone()}</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-metallic-silver/80 max-w-3xl">
                        {profile.tagline.clone()}
                    </p>
                </div>

                <div class="flex flex-wrap gap-4 mb-12">
                    <A href="/projects">
                        <Button icon=IconKind::ArrowRight icon_position=IconPosition::Right>
                            "View My Work"
                        </Button>
                    </A>
                    <A href="/contact">
                        <Button variant=ButtonVariant::Ghost>"Get In Touch"</Button>
                    </A>
                    <Button
                        variant=ButtonVariant::Text
                        icon=IconKind::FileText
                        on_click=move |_| set_resume_open.set(true)
                    >
                        "Request Resume"
                    </Button>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {metrics
                        .into_iter()
                        .map(|metric| {
                            view! {
                                <div class="card-glass p-4">
                                    <div class="text-3xl md:text-4xl font-bold text-champagne">
                                        {metric.value}
                                    </div>
                                    <div class="text-sm text-metallic-silver">{metric.label}</div>
                                    <div class="text-xs text-metallic-silver/60 mt-1">
                                        {metric.description}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>

        <Section class="pb-20">
            <div class="grid md:grid-cols-3 gap-8">
                <Highlight icon=IconKind::Brain accent="text-platinum" title="AI Expertise">
                    "Multi-LLM coordination with Claude, OpenAI, and Ollama. Production MCP architectures and RAG systems processing 10,000+ documents."
                </Highlight>
                <Highlight icon=IconKind::Code accent="text-champagne" title="Full-Stack Development">
                    "React, TypeScript, Python, and Go expertise. Building scalable applications from mobile apps to enterprise SaaS platforms."
                </Highlight>
                <Highlight icon=IconKind::Server accent="text-platinum" title="Enterprise Scale">
                    "Managing systems with $50K+ monthly revenue. HIPAA-compliant architectures and 99.95% uptime achievements."
                </Highlight>
            </div>
        </Section>

        <ResumeRequestModal open=resume_open on_close=move |_| set_resume_open.set(false) />
    }
}

#[component]
fn Highlight(
    icon: IconKind,
    accent: &'static str,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card-default">
            <div class="flex items-center mb-4">
                <Icon kind=icon class=format!("{accent} mr-3 w-8 h-8") />
                <h3 class="text-xl font-bold text-white">{title}</h3>
            </div>
            <p class="text-metallic-silver/80">{children()}</p>
        </div>
    }
}
