use leptos::{ev::SubmitEvent, prelude::*};

use super::{theme::use_theme, SectionHeading, SocialIcon};
use crate::contact::{ContactForm, SubmitOutcome};
use crate::content::{SocialKind, EMAIL, LOCATION, RESUME_PATH, SOCIALS};
use crate::section::Section;

#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    let form = ContactForm::new(name, email, subject, message);
    crate::contact::deliver(&reqwest::Client::new(), &form)
        .await
        .map_err(|e| {
            tracing::error!("contact message not sent: {e}");
            ServerFnError::new(e)
        })
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::Contact.id()
            class=move || format!("py-20 {}", theme.palette().section)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a question or want to work together? Feel free to contact me!"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-8">
                        <ContactInfo />
                        <div class=move || format!("p-6 rounded-xl shadow-sm {}", theme.palette().card)>
                            <h3 class=move || {
                                format!("text-xl font-semibold mb-4 {}", theme.palette().heading)
                            }>"Resume / CV"</h3>
                            <p class=move || format!("mb-4 {}", theme.palette().text)>
                                "Download my resume to learn more about my experience and skills."
                            </p>
                            <a
                                href=RESUME_PATH
                                download=""
                                class=move || {
                                    format!(
                                        "px-4 py-2 rounded-lg inline-flex items-center gap-2 transition-colors {}",
                                        theme.palette().accent_bg,
                                    )
                                }
                            >
                                "⬇ Download CV"
                            </a>
                        </div>
                    </div>
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let theme = use_theme();
    let label = move || format!("text-lg font-medium {}", theme.palette().heading);
    let badge = move || {
        format!(
            "flex-shrink-0 w-10 h-10 rounded-full flex items-center justify-center {}",
            theme.palette().accent_soft,
        )
    };

    view! {
        <div class=move || format!("p-6 rounded-xl shadow-sm {}", theme.palette().card)>
            <h3 class=move || {
                format!("text-xl font-semibold mb-6 {}", theme.palette().heading)
            }>"Contact Information"</h3>
            <div class="space-y-6">
                <div class="flex items-start gap-4">
                    <div class=badge>"✉"</div>
                    <div>
                        <h4 class=label>"Email"</h4>
                        <a
                            href=format!("mailto:{EMAIL}")
                            class=move || format!("hover:underline {}", theme.palette().accent)
                        >
                            {EMAIL}
                        </a>
                    </div>
                </div>
                <div class="flex items-start gap-4">
                    <div class=badge>"📍"</div>
                    <div>
                        <h4 class=label>"Location"</h4>
                        <p class=move || theme.palette().text>{LOCATION}</p>
                    </div>
                </div>
            </div>
            <div class="mt-8">
                <h3 class=move || {
                    format!("text-lg font-medium mb-4 {}", theme.palette().heading)
                }>"Connect With Me"</h3>
                <div class="flex space-x-4 text-2xl">
                    {SOCIALS
                        .iter()
                        .filter(|s| s.kind != SocialKind::Email)
                        .map(|link| view! { <SocialIcon link /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let theme = use_theme();
    let send = ServerAction::<SendMessage>::new();
    let pending = send.pending();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (outcome, set_outcome) = signal(None::<SubmitOutcome>);

    Effect::watch(
        move || send.value().get(),
        move |res, _, _| {
            let Some(res) = res else {
                return;
            };
            let result = SubmitOutcome::from_result(res);
            if result.success {
                log::info!("contact message sent");
                set_name.set(String::new());
                set_email.set(String::new());
                set_subject.set(String::new());
                set_message.set(String::new());
            } else if let Err(e) = res {
                log::error!("contact message failed: {e}");
            }
            set_outcome.set(Some(result));
        },
        false,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_outcome.set(None);
        let form = ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            subject.get_untracked(),
            message.get_untracked(),
        );
        if let Err(e) = form.validate() {
            log::warn!("contact form rejected: {e}");
            set_outcome.set(Some(SubmitOutcome::from_result(&Err::<(), _>(e))));
            return;
        }
        send.dispatch(SendMessage {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        });
    };

    let field_label = move || format!("block text-sm font-medium mb-1 {}", theme.palette().text);
    let field_input = move || {
        format!(
            "w-full px-4 py-2 border rounded-lg focus:ring-2 {}",
            theme.palette().input,
        )
    };

    view! {
        <div class=move || format!("p-8 rounded-xl shadow-sm {}", theme.palette().card)>
            <h3 class=move || {
                format!("text-xl font-semibold mb-6 {}", theme.palette().heading)
            }>"Send Me a Message"</h3>
            {move || {
                outcome
                    .get()
                    .map(|o| {
                        let tone = if o.success {
                            "bg-green-100 text-green-700"
                        } else {
                            "bg-red-100 text-red-700"
                        };
                        view! { <div class=format!("p-4 mb-6 rounded-lg {tone}")>{o.message}</div> }
                    })
            }}
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="name" class=field_label>"Your Name"</label>
                    <input
                        type="text"
                        id="name"
                        name="from_name"
                        class=field_input
                        placeholder="Enter your name"
                        required=true
                        bind:value=(name, set_name)
                    />
                </div>
                <div>
                    <label for="email" class=field_label>"Your Email"</label>
                    <input
                        type="email"
                        id="email"
                        name="from_email"
                        class=field_input
                        placeholder="Enter your email"
                        required=true
                        bind:value=(email, set_email)
                    />
                </div>
                <div>
                    <label for="subject" class=field_label>"Subject"</label>
                    <input
                        type="text"
                        id="subject"
                        name="subject"
                        class=field_input
                        placeholder="Enter subject"
                        required=true
                        bind:value=(subject, set_subject)
                    />
                </div>
                <div>
                    <label for="message" class=field_label>"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        class=field_input
                        placeholder="Enter your message"
                        required=true
                        bind:value=(message, set_message)
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class=move || {
                        let busy = if pending.get() { "opacity-70 cursor-not-allowed" } else { "" };
                        format!(
                            "w-full px-6 py-3 font-medium rounded-lg shadow-md transition-colors {} {busy}",
                            theme.palette().accent_bg,
                        )
                    }
                >
                    <Show when=move || pending.get() fallback=|| "Send Message">
                        <span class="flex items-center justify-center">
                            <svg class="animate-spin -ml-1 mr-2 h-4 w-4" fill="none" viewBox="0 0 24 24">
                                <circle
                                    class="opacity-25"
                                    cx="12"
                                    cy="12"
                                    r="10"
                                    stroke="currentColor"
                                    stroke-width="4"
                                ></circle>
                                <path
                                    class="opacity-75"
                                    fill="currentColor"
                                    d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
                                ></path>
                            </svg>
                            "Sending..."
                        </span>
                    </Show>
                </button>
            </form>
        </div>
    }
}
