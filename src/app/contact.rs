use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::{
    booking::BookingModal,
    icons::{Icon, IconKind},
    ui::{
        Button, ButtonVariant, Card, CardVariant, IconPosition, Section, SectionTitle, Size,
        SmartLink,
    },
    use_content,
};
use crate::mailto::{self, MailLink};

struct ContactMethod {
    icon: IconKind,
    label: &'static str,
    value: String,
    href: Option<String>,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let profile = &use_content().profile;
    let (booking_open, set_booking_open) = signal(false);

    let methods = [
        ContactMethod {
            icon: IconKind::Mail,
            label: "Email",
            value: profile.email.clone(),
            href: Some(format!("mailto:{}", profile.email)),
        },
        ContactMethod {
            icon: IconKind::Linkedin,
            label: "LinkedIn",
            value: "Connect on LinkedIn".to_string(),
            href: Some(profile.linkedin.clone()),
        },
        ContactMethod {
            icon: IconKind::Github,
            label: "GitHub",
            value: "View My Code".to_string(),
            href: Some(profile.github.clone()),
        },
        ContactMethod {
            icon: IconKind::MapPin,
            label: "Location",
            value: profile.location.clone(),
            href: None,
        },
    ];

    view! {
        <Title text="Contact" />
        <Section class="pt-24 pb-16">
            <SectionTitle>"Let's Connect"</SectionTitle>

            <div class="max-w-4xl mx-auto mt-12">
                <Card variant=CardVariant::Glass class="mb-12 text-center">
                    <h3 class="text-2xl font-bold text-champagne mb-4">
                        "Ready to Build Something Amazing?"
                    </h3>
                    <p class="text-metallic-silver/90 leading-relaxed max-w-2xl mx-auto">
                        "Whether you're looking for AI solutions, enterprise automation, or technical leadership, I'm here to help transform your ideas into production-ready systems."
                    </p>
                </Card>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                    {methods.into_iter().map(|method| view! { <MethodCard method /> }).collect_view()}
                </div>

                <div class="text-center space-y-6">
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button
                            size=Size::Lg
                            icon=IconKind::Send
                            on_click=move |_| mailto::open(&MailLink::to(profile.email.as_str()))
                        >
                            "Send Me an Email"
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            size=Size::Lg
                            icon=IconKind::Calendar
                            icon_position=IconPosition::Right
                            on_click=move |_| set_booking_open.set(true)
                        >
                            "Schedule a Call"
                        </Button>
                    </div>
                    <p class="text-sm text-metallic-silver/70">
                        "Available for freelance projects, consulting, and full-time opportunities"
                    </p>
                </div>

                <Card variant=CardVariant::Glass class="mt-12 text-center">
                    <div class="flex items-center justify-center gap-2 mb-2">
                        <div class="w-2 h-2 bg-champagne rounded-full animate-pulse"></div>
                        <span class="text-sm font-medium text-platinum uppercase tracking-wider">
                            "Currently Available"
                        </span>
                    </div>
                    <p class="text-sm text-metallic-silver/80">"Typical response time: Within 24 hours"</p>
                </Card>
            </div>

            <BookingModal open=booking_open on_close=move |_| set_booking_open.set(false) />
        </Section>
    }
}

#[component]
fn MethodCard(method: ContactMethod) -> impl IntoView {
    let ContactMethod {
        icon,
        label,
        value,
        href,
    } = method;

    view! {
        <Card variant=CardVariant::Elevated class="group hover:border-champagne/30">
            <div class="flex items-start gap-4">
                <div class="p-3 rounded-lg bg-gradient-to-br from-champagne/20 to-platinum/20 group-hover:from-champagne/30 group-hover:to-platinum/30 transition-all">
                    <Icon kind=icon />
                </div>
                <div class="flex-1">
                    <h4 class="text-sm font-semibold text-platinum/80 uppercase tracking-wider mb-1">
                        {label}
                    </h4>
                    {match href {
                        Some(href) => {
                            let external = href.starts_with("http");
                            Either::Left(view! {
                                <SmartLink
                                    href
                                    class="text-metallic-silver hover:text-champagne transition-colors inline-flex items-center gap-2"
                                >
                                    <span>{value}</span>
                                    {external.then(|| view! { <Icon kind=IconKind::ExternalLink class="w-4 h-4" /> })}
                                </SmartLink>
                            })
                        }
                        None => Either::Right(view! { <p class="text-metallic-silver">{value}</p> }),
                    }}
                </div>
            </div>
        </Card>
    }
}
