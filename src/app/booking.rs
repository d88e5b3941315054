mod widget;

use leptos::{either::EitherOf4, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{
    icons::{Icon, IconKind},
    modal::{Modal, ModalSize},
    ui::{Button, ButtonVariant, Card, CardVariant, Size, Spinner},
    use_content,
};
use crate::{
    booking::{
        BookingFlow, BookingView, CancelToken, LoadOutcome, LoadTicket, ScriptLoader, ScriptState,
    },
    config::{CALENDLY_CONTAINER_ID, SCRIPT_LOAD_TIMEOUT},
    content::BookingOption,
    mailto::{self, MailLink},
};

const CUSTOM_REQUEST_SUBJECT: &str = "Custom Booking Request";
const DEFAULT_TITLE: &str = "Schedule a Consultation";

/// Meeting scheduler. Paid plans pick a consultation first; free plans go
/// straight to the default one. The widget script is fetched on first use.
#[component]
pub fn BookingModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let content = use_content();
    let catalog = &content.booking;
    let email = content.profile.email.as_str();

    let flow = RwSignal::new(BookingFlow::from_catalog(catalog));
    let token = CancelToken::new();
    let loader = RwSignal::new(ScriptLoader::new(token.clone()));
    on_cleanup(move || token.cancel());

    let view_state =
        Memo::new(move |_| flow.with(|f| f.view(loader.with(ScriptLoader::state))));

    Effect::watch(
        move || open.get(),
        move |is_open, _, _| {
            if *is_open {
                flow.update(BookingFlow::open);
            } else {
                flow.update(BookingFlow::close);
            }
        },
        true,
    );

    let close = Callback::new(move |_: ()| {
        flow.update(BookingFlow::close);
        on_close.run(());
    });

    let UseTimeoutFnReturn {
        start: start_timer,
        stop: stop_timer,
        ..
    } = use_timeout_fn(
        move |ticket: LoadTicket| {
            let timed_out = loader.try_update(|l| l.settle(&ticket, LoadOutcome::TimedOut));
            if timed_out.unwrap_or(false) {
                log::warn!(
                    "scheduling script did not load within {}s",
                    SCRIPT_LOAD_TIMEOUT.as_secs()
                );
            }
        },
        SCRIPT_LOAD_TIMEOUT.as_millis() as f64,
    );

    let start_load = Callback::new(move |_: ()| {
        if widget::api_available() {
            loader.update(ScriptLoader::mark_ready);
            return;
        }
        let Some(ticket) = loader.try_update(ScriptLoader::begin).flatten() else {
            return;
        };
        log::debug!("injecting scheduling script, attempt {}", ticket.generation());

        let on_settled = {
            let ticket = ticket.clone();
            let stop_timer = stop_timer.clone();
            move |loaded: bool| {
                if ticket.is_cancelled() {
                    return;
                }
                let outcome = LoadOutcome::from_event(loaded, widget::api_available());
                // a replaced tag settling late must leave the retry's timer running
                if !loader.try_update(|l| l.settle(&ticket, outcome)).unwrap_or(false) {
                    return;
                }
                stop_timer();
                match outcome {
                    LoadOutcome::Loaded => log::debug!("scheduling script loaded"),
                    LoadOutcome::MissingApi => log::error!("{}", widget::WidgetError::ApiMissing),
                    LoadOutcome::Errored | LoadOutcome::TimedOut => {
                        log::error!("scheduling script failed to load")
                    }
                }
            }
        };

        match widget::inject_script(on_settled) {
            Ok(()) => start_timer(ticket),
            Err(e) => {
                log::error!("could not inject scheduling script: {e}");
                loader.update(|l| {
                    l.settle(&ticket, LoadOutcome::Errored);
                });
            }
        }
    });

    Effect::new(move |_| {
        let loading = matches!(view_state.get(), BookingView::Loading(_));
        if loading && loader.with_untracked(|l| l.state() == ScriptState::Unloaded) {
            start_load.run(());
        }
    });

    let container = NodeRef::<html::Div>::new();
    Effect::new(move |_| {
        let BookingView::Widget(option) = view_state.get() else {
            return;
        };
        let (Some(parent), Some(url)) = (container.get(), option.booking_url()) else {
            return;
        };
        match widget::init_inline_widget(url, &parent) {
            Ok(()) => log::debug!("scheduling widget ready for {}", option.id),
            Err(e) => log::error!("could not initialize scheduling widget: {e}"),
        }
    });

    let title = Signal::derive(move || {
        flow.with(|f| f.selected().map(|option| option.title.clone()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    });
    let size = Signal::derive(move || {
        if view_state.with(|v| *v == BookingView::Selecting) {
            ModalSize::Lg
        } else {
            ModalSize::Xl
        }
    });

    let email_me = Callback::new(move |_: ()| {
        mailto::open(&MailLink::to(email).subject(CUSTOM_REQUEST_SUBJECT));
        close.run(());
    });

    view! {
        <Modal open on_close=close title size>
            {move || match view_state.get() {
                BookingView::Closed | BookingView::Selecting => {
                    EitherOf4::A(
                        view! {
                            <OptionPicker
                                options=catalog.available_options()
                                on_select=move |option: BookingOption| {
                                    flow.update(|f| {
                                        f.select(option);
                                    })
                                }
                                on_close=close
                                on_email=email_me
                            />
                        },
                    )
                }
                BookingView::Loading(option) => {
                    EitherOf4::B(
                        view! {
                            <WidgetHeader option flow />
                            <Spinner label="Loading booking calendar..." />
                        },
                    )
                }
                BookingView::Failed(option) => {
                    EitherOf4::C(
                        view! {
                            <WidgetHeader option flow />
                            <LoadFailed on_retry=start_load on_email=email_me />
                        },
                    )
                }
                BookingView::Widget(option) => {
                    EitherOf4::D(
                        view! {
                            <WidgetHeader option flow />
                            <div
                                id=CALENDLY_CONTAINER_ID
                                node_ref=container
                                class="min-h-[600px] w-full"
                            ></div>
                        },
                    )
                }
            }}
        </Modal>
    }
}

#[component]
fn OptionPicker(
    options: Vec<BookingOption>,
    #[prop(into)] on_select: Callback<BookingOption>,
    on_close: Callback<()>,
    on_email: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <p class="text-metallic-silver/90 leading-relaxed">
                "Choose the type of consultation that best fits your needs. Each session is designed to provide maximum value and actionable insights."
            </p>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 max-h-96 overflow-y-auto custom-scrollbar">
            {options
                .into_iter()
                .map(|option| {
                    let icon = IconKind::from(option.icon);
                    let title = option.title.clone();
                    let duration = option.duration.clone();
                    let description = option.description.clone();
                    view! {
                        <Card
                            variant=CardVariant::Glass
                            class="group hover:border-champagne/30"
                            on_click=move |_| on_select.run(option.clone())
                        >
                            <div class="flex items-start gap-3 mb-3">
                                <div class="p-2 rounded-lg bg-gradient-to-br from-champagne/20 to-platinum/20 group-hover:from-champagne/30 group-hover:to-platinum/30 transition-all">
                                    <Icon kind=icon />
                                </div>
                                <div class="flex-1">
                                    <h3 class="font-semibold text-champagne">{title}</h3>
                                    <div class="flex items-center gap-1 text-xs text-metallic-silver/70 mt-1">
                                        <Icon kind=IconKind::Clock class="w-3 h-3" />
                                        <span>{duration}</span>
                                    </div>
                                </div>
                            </div>
                            <p class="text-sm text-metallic-silver/80 leading-relaxed mb-4">
                                {description}
                            </p>
                            <div class="text-xs text-platinum/60 group-hover:text-platinum/80 transition-colors">
                                "Click to continue →"
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </div>

        <div class="mt-6 pt-6 border-t border-metallic-silver/10">
            <div class="flex flex-col sm:flex-row gap-3 justify-center">
                <Button variant=ButtonVariant::Ghost on_click=on_close>
                    "Close"
                </Button>
                <Button variant=ButtonVariant::Text on_click=on_email>
                    "Need something else? Email me"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn WidgetHeader(option: BookingOption, flow: RwSignal<BookingFlow>) -> impl IntoView {
    let can_go_back = flow.with_untracked(BookingFlow::can_go_back);

    view! {
        <div class="flex items-center gap-3 mb-6 pb-4 border-b border-metallic-silver/10">
            {can_go_back
                .then(|| {
                    view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            size=Size::Sm
                            icon=IconKind::ArrowLeft
                            on_click=move |_| {
                                flow.update(|f| {
                                    f.back();
                                })
                            }
                        >
                            "Back"
                        </Button>
                    }
                })}
            <div class="flex-1">
                <div class="flex items-center gap-2 text-sm text-metallic-silver/80">
                    <Icon kind=IconKind::Clock class="w-4 h-4" />
                    <span>{option.duration}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LoadFailed(on_retry: Callback<()>, on_email: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-96">
            <div class="text-center max-w-md">
                <p class="text-champagne font-semibold mb-2">
                    "The booking calendar could not be loaded."
                </p>
                <p class="text-metallic-silver/80 mb-6">
                    "Check your connection or any content blockers, then try again."
                </p>
                <div class="flex flex-col sm:flex-row gap-3 justify-center">
                    <Button icon=IconKind::RefreshCw on_click=on_retry>
                        "Retry"
                    </Button>
                    <Button variant=ButtonVariant::Text on_click=on_email>
                        "Email me instead"
                    </Button>
                </div>
            </div>
        </div>
    }
}
