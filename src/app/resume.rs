use leptos::prelude::*;

use super::{
    icons::{Icon, IconKind},
    modal::{Modal, ModalSize},
    ui::{Button, ButtonVariant, Card, CardVariant},
    use_content,
};
use crate::{
    mailto,
    resume::{ResumeField, ResumeRequest},
};

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-onyx-metallic/50 border border-metallic-silver/20 rounded-lg text-metallic-silver placeholder-metallic-silver/50 focus:outline-none focus:border-champagne/50 transition-colors";

#[component]
pub fn ResumeRequestModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let profile = &use_content().profile;
    let form = RwSignal::new(ResumeRequest::default());
    let is_valid = Signal::derive(move || form.with(ResumeRequest::is_valid));

    // fields are cleared on every way out of the dialog
    let close = Callback::new(move |_: ()| {
        form.update(ResumeRequest::reset);
        on_close.run(());
    });

    let submit = move |_: ()| {
        let link = form.with_untracked(|f| {
            if !f.is_valid() {
                return None;
            }
            Some(f.mail_link(&profile.email, profile.first_name()))
        });
        if let Some(link) = link {
            mailto::open(&link);
            close.run(());
        }
    };

    view! {
        <Modal open on_close=close title="Request Tailored Resume" size=ModalSize::Lg>
            <div class="mb-6">
                <div class="flex items-center gap-2 mb-3">
                    <Icon kind=IconKind::FileText class="w-5 h-5 text-champagne" />
                    <p class="text-metallic-silver/90 leading-relaxed">
                        "I'll create a customized resume specifically tailored to your opportunity. Please provide the details below."
                    </p>
                </div>
                <div class="text-sm text-platinum/60 bg-onyx-metallic/30 rounded-lg p-3 border border-metallic-silver/10">
                    <strong>"Pro tip:"</strong>
                    " The more details you provide, the better I can tailor the resume to match the role!"
                </div>
            </div>

            <div class="space-y-6">
                <Card variant=CardVariant::Glass class="p-4">
                    <h3 class="text-champagne font-semibold mb-4 flex items-center gap-2">
                        <Icon kind=IconKind::Building class="w-4 h-4" />
                        "Job Information"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <FormInput
                            form
                            field=ResumeField::JobTitle
                            label="Job Title *"
                            placeholder="e.g. Senior AI Engineer"
                        />
                        <FormInput
                            form
                            field=ResumeField::CompanyName
                            label="Company Name *"
                            placeholder="e.g. OpenAI"
                        />
                    </div>
                    <div class="mt-4">
                        <FormInput
                            form
                            field=ResumeField::JobLink
                            label="Job Posting Link (Optional)"
                            placeholder="https://..."
                            input_type="url"
                        />
                    </div>
                </Card>

                <Card variant=CardVariant::Glass class="p-4">
                    <h3 class="text-champagne font-semibold mb-4 flex items-center gap-2">
                        <Icon kind=IconKind::User class="w-4 h-4" />
                        "Your Contact Information"
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <FormInput
                            form
                            field=ResumeField::ApplicantName
                            label="Your Name *"
                            placeholder="e.g. John Smith"
                        />
                        <FormInput
                            form
                            field=ResumeField::ApplicantEmail
                            label="Your Email *"
                            placeholder="e.g. john@example.com"
                            input_type="email"
                        />
                    </div>
                </Card>

                <Card variant=CardVariant::Glass class="p-4">
                    <h3 class="text-champagne font-semibold mb-4">"Additional Information (Optional)"</h3>
                    <label class="block text-sm font-medium text-metallic-silver mb-2">
                        "Specific requirements, key skills to highlight, or other details"
                    </label>
                    <textarea
                        rows=4
                        placeholder="e.g. Focus on ML/AI experience, mention specific frameworks, highlight leadership experience, etc."
                        class=format!("{INPUT_CLASS} resize-y")
                        prop:value=move || form.with(|f| f.additional_info.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set(ResumeField::AdditionalInfo, event_target_value(&ev)))
                        }
                    ></textarea>
                </Card>
            </div>

            <div class="flex flex-col sm:flex-row gap-3 justify-end mt-8 pt-6 border-t border-metallic-silver/10">
                <Button variant=ButtonVariant::Ghost on_click=move |_| close.run(())>
                    "Cancel"
                </Button>
                <Button icon=IconKind::Send disabled=Signal::derive(move || !is_valid.get()) on_click=submit>
                    "Send Request"
                </Button>
            </div>

            <Show when=move || !is_valid.get()>
                <p class="text-sm text-metallic-silver/60 text-center mt-2">
                    "Please fill in all required fields (marked with *)"
                </p>
            </Show>
        </Modal>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ResumeRequest>,
    field: ResumeField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-metallic-silver mb-2">{label}</label>
            <input
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
