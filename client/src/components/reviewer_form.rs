//! "About you" inputs plus the optional general comment.

use leptos::prelude::*;
use reviews::{ReviewScope, ReviewerIdentityForm};

fn email_label(scope: ReviewScope) -> &'static str {
    if scope.requires_email() { "Your Email *" } else { "Your Email (Optional)" }
}

#[component]
pub fn ReviewerForm(
    form: RwSignal<ReviewerIdentityForm>,
    general_comment: RwSignal<String>,
    scope: ReviewScope,
) -> impl IntoView {
    view! {
        <div class="reviewer-form">
            <div class="callout callout--blue">
                <h4>"About You"</h4>
                <p>
                    "Your background helps us understand the perspective of your review. "
                    "Email is used to ensure one review per code per user."
                </p>
            </div>
            <label class="field">
                <span class="field__label">{email_label(scope)}</span>
                <input
                    type="email"
                    placeholder="Enter your email address"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Your Name *"</span>
                <input
                    type="text"
                    placeholder="Enter your full name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Years of Programming Experience *"</span>
                <input
                    type="number"
                    min="0"
                    max="50"
                    placeholder="e.g., 3"
                    prop:value=move || form.with(|f| f.years_of_experience.clone())
                    on:input=move |ev| form.update(|f| f.years_of_experience = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Your Role/Position *"</span>
                <input
                    type="text"
                    placeholder="e.g., Senior Developer, Student, Tech Lead"
                    prop:value=move || form.with(|f| f.position.clone())
                    on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"General Comments (Optional)"</span>
                <textarea
                    rows="3"
                    placeholder="Overall thoughts about the code..."
                    prop:value=move || general_comment.get()
                    on:input=move |ev| general_comment.set(event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}
