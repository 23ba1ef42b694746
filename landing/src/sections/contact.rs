use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::content::SectionId;
use crate::state::{ContactField, ContactForm, ContactSubmission};

#[component]
pub fn Contact(form: RwSignal<ContactForm>) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        // Stay on the page; there is nowhere to post to.
        ev.prevent_default();
        if let Some(submission) = form.try_update(ContactForm::submit) {
            log_submission(&submission);
        }
    };

    let value = move |field: ContactField| form.with(|f| f.get(field).to_string());

    view! {
        <section id=SectionId::Contact.anchor() class="contact-section">
            <h2>"Contact Us"</h2>
            <p>
                "If you have any questions or would like to get in touch, please fill out the form below:"
            </p>
            <form class="contact-form" on:submit=on_submit>
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || value(ContactField::Name)
                    on:input=move |ev| form.update(|f| f.set(ContactField::Name, event_target_value(&ev)))
                />

                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="Your Email"
                    prop:value=move || value(ContactField::Email)
                    on:input=move |ev| form.update(|f| f.set(ContactField::Email, event_target_value(&ev)))
                />

                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Your Message"
                    prop:value=move || value(ContactField::Message)
                    on:input=move |ev| form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                ></textarea>

                <button type="submit" class="contact-button hover-grow">
                    "Send Message"
                </button>
            </form>
        </section>
    }
}

fn log_submission(submission: &ContactSubmission) {
    match serde_json::to_string(submission) {
        Ok(payload) => tracing::info!(%payload, "contact form submission"),
        Err(err) => tracing::warn!(error = %err, "contact form submission not serializable"),
    }
}
