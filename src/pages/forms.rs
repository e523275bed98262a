//! Form components
//!
//! The forms post back to the server and render with their current values
//! and inline errors. The parts that react before submission (registration
//! email check, consent gate, mailto fallbacks) are mounted again in the
//! browser from the JSON in their root's `data-props`.

use std::collections::BTreeMap;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::forms::{
    ApplicationForm, ContactForm, EmailStatus, FieldErrors, MailtoLink, RegistrationForm,
    RegistrationInput, RegistrationMode,
};
use crate::shell::notice::{Notice, NoticeBanner, COPY_DISMISS};
use crate::site::SiteKey;
use crate::widgets::{props_json, CONSENT_ROOT, MAILTO_ROOT, REGISTRATION_ROOT};

#[cfg(feature = "hydrate")]
use crate::forms::email_check::{is_checkable, CHECK_FAILED, DEBOUNCE_WINDOW};

/// Calling codes offered by the phone pickers
pub const COUNTRY_CODES: &[&str] = &["+45", "+46", "+47", "+91", "+1"];

fn categories(site: SiteKey) -> &'static [&'static str] {
    match site {
        SiteKey::Software => &["Web Development", "Mobile Apps", "Cloud Solutions", "Consulting"],
        SiteKey::Guidance => &["Admission", "Visa", "Accommodation", "Other"],
        SiteKey::ItSupport => &["IT Support", "Software", "Data Engineering", "Other"],
        SiteKey::FlowSupport => &["Dishwashing", "Cleaning", "Hygiene Audit", "Other"],
    }
}

fn field_error(errors: &FieldErrors, name: &str) -> Option<String> {
    errors.get(name).map(str::to_string)
}

fn field_class(error: &Option<String>) -> &'static str {
    if error.is_some() {
        "field invalid"
    } else {
        "field"
    }
}

fn error_line(error: Option<String>) -> impl IntoView {
    error.map(|e| view! { <span class="field-error">{e}</span> })
}

fn input_field(
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    value: String,
    error: Option<String>,
    required: bool,
) -> impl IntoView {
    view! {
        <label class=field_class(&error)>
            {label}
            <input type=kind name=name value=value required=required />
            {error_line(error)}
        </label>
    }
}

fn textarea(name: &'static str, label: &'static str, value: String, error: Option<String>) -> impl IntoView {
    view! {
        <label class=field_class(&error)>
            {label}
            <textarea name=name rows="5" required=true>{value}</textarea>
            {error_line(error)}
        </label>
    }
}

fn select(name: &'static str, label: &'static str, options: &'static [&'static str], selected: String) -> impl IntoView {
    view! {
        <label class="field">
            {label}
            <select name=name>
                <option value="">"Select…"</option>
                {options
                    .iter()
                    .map(|o| view! { <option value=*o selected={*o == selected}>{*o}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

fn country_select(name: &'static str, selected: String) -> impl IntoView {
    view! {
        <select name=name class="country-code">
            {COUNTRY_CODES
                .iter()
                .map(|c| view! { <option value=*c selected={*c == selected}>{*c}</option> })
                .collect_view()}
        </select>
    }
}

/// Fallbacks shown after an email was composed.
///
/// In the browser the link is handed to the mail client in a new tab when
/// the component mounts; the link and the copy button stay for visitors
/// without a mail client.
#[component]
pub fn MailtoResult(link: MailtoLink) -> impl IntoView {
    let href = link.href();
    let text = link.clipboard_text();
    let copied = create_rw_signal(false);

    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(&href, "_blank") {
                logging::warn!("Could not open mail client: {:?}", e);
            }
        }
    }

    #[cfg(feature = "hydrate")]
    let clipboard_text = text.clone();
    let on_copy = move |_: ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Some(clipboard) = window.navigator().clipboard() {
                    let _ = clipboard.write_text(&clipboard_text);
                    copied.set(true);
                    set_timeout(move || copied.set(false), COPY_DISMISS);
                }
            }
        }
    };

    view! {
        <div class="mailto-result">
            <p>
                "Your mail app should open with the message ready. If it did not, "
                <a class="mailto-link" href=href target="_blank" rel="noopener">"open it here"</a>
                " or copy the text below."
            </p>
            <textarea class="clipboard" readonly=true rows="8">{text}</textarea>
            <button type="button" class="copy-button" on:click=on_copy>"Copy"</button>
            <Show when=move || copied.get()>
                <NoticeBanner notice=Notice::success("Email content copied!").dismiss_after(COPY_DISMISS) />
            </Show>
        </div>
    }
}

/// Mount point for [`MailtoResult`]
#[component]
pub fn MailtoMount(link: MailtoLink) -> impl IntoView {
    view! {
        <div id=MAILTO_ROOT data-props=props_json(&link)>
            <MailtoResult link=link />
        </div>
    }
}

/// `mailto:` contact form
#[component]
pub fn ContactFormView(site: SiteKey, form: ContactForm) -> impl IntoView {
    let errors = form.errors().clone();
    let input = form.input;

    view! {
        <form class="contact-form" method="post" action=site.path("contact") novalidate=true>
            {input_field("name", "Name", "text", input.name, field_error(&errors, "name"), true)}
            {input_field("email", "Email", "email", input.email, field_error(&errors, "email"), true)}
            {select("category", "Category", categories(site), input.category)}
            <div class="phone-row">
                {country_select("countrycode", input.countrycode)}
                {input_field("phone", "Phone (optional)", "tel", input.phone, field_error(&errors, "phone"), false)}
            </div>
            {textarea("message", "Message", input.message, field_error(&errors, "message"))}
            <button type="submit" class="submit-button">"Send Message"</button>
        </form>
    }
}

/// What the registration fields need to render, on the server or in the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
    pub input: RegistrationInput,
    pub errors: BTreeMap<String, String>,
    pub follow_up: bool,
    pub status: EmailStatus,
}

impl From<&RegistrationForm> for RegistrationState {
    fn from(form: &RegistrationForm) -> Self {
        let follow_up = form.mode() == RegistrationMode::FollowUp;
        let status = match form.email_status() {
            EmailStatus::Unknown if follow_up => EmailStatus::Exists,
            status => status.clone(),
        };
        Self {
            input: form.input.clone(),
            errors: form
                .errors()
                .iter()
                .map(|(field, message)| (field.to_string(), message.to_string()))
                .collect(),
            follow_up,
            status,
        }
    }
}

/// Registration fields with the debounced known-email check.
///
/// A known email hides the name and phone fields and switches the posted
/// `mode` to `follow_up`; only the latest input's answer is applied.
#[component]
pub fn RegistrationFields(state: RegistrationState) -> impl IntoView {
    let follow_up = create_rw_signal(state.follow_up);
    let status = create_rw_signal(state.status);
    let error = |name: &str| state.errors.get(name).cloned();
    let input = state.input;

    #[cfg(feature = "hydrate")]
    let on_email = {
        use gloo_timers::callback::Timeout;

        let source = input.website_source.clone();
        let generation = store_value(0u64);
        let pending = store_value(None::<Timeout>);

        move |ev: ev::Event| {
            let email = event_target_value(&ev);
            let mine = generation.get_value() + 1;
            generation.set_value(mine);
            // Dropping the timer cancels it
            pending.set_value(None);

            if !is_checkable(&email) {
                status.set(EmailStatus::Unknown);
                follow_up.set(false);
                return;
            }

            let source = source.clone();
            let timer = Timeout::new(DEBOUNCE_WINDOW.as_millis() as u32, move || {
                if generation.get_value() == mine {
                    status.set(EmailStatus::Checking);
                }
                spawn_local(async move {
                    let result =
                        crate::widgets::api::check_email_status(email.trim().to_string(), source).await;
                    if generation.get_value() != mine {
                        return;
                    }
                    let next = result.unwrap_or_else(|e| {
                        logging::warn!("Email check failed: {}", e);
                        EmailStatus::Failed(CHECK_FAILED.to_string())
                    });
                    follow_up.set(next == EmailStatus::Exists);
                    status.set(next);
                });
            });
            pending.set_value(Some(timer));
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_email = |_: ev::Event| {};

    let email_error = error("email");
    let fname_error = error("clientfname");
    let lname_error = error("clientlname");
    let mobile_error = error("mobile");

    view! {
        <input type="hidden" name="mode" value={move || if follow_up.get() { "follow_up" } else { "full" }} />
        <label class=field_class(&email_error)>
            "Email"
            <input type="email" name="email" value=input.email required=true on:input=on_email />
            {error_line(email_error)}
        </label>
        <p class="email-status">{move || status.with(|s| s.message().map(str::to_string))}</p>
        <div class="full-only" hidden=move || follow_up.get()>
            <label class=field_class(&fname_error)>
                "First name"
                <input type="text" name="clientfname" value=input.clientfname required=move || !follow_up.get() />
                {error_line(fname_error)}
            </label>
            <label class=field_class(&lname_error)>
                "Last name"
                <input type="text" name="clientlname" value=input.clientlname required=move || !follow_up.get() />
                {error_line(lname_error)}
            </label>
            <div class="phone-row">
                {country_select("countrycode", input.countrycode)}
                {input_field("mobile", "Mobile (optional)", "tel", input.mobile, mobile_error, false)}
            </div>
        </div>
        {textarea("query", "How can we help?", input.query, error("query"))}
    }
}

/// Backend-posting registration form
#[component]
pub fn RegistrationFormView(site: SiteKey, form: RegistrationForm) -> impl IntoView {
    let state = RegistrationState::from(&form);
    let props = props_json(&state);

    view! {
        <form id="registration-form" class="contact-form" method="post" action=site.path("contact") novalidate=true>
            <input type="hidden" name="website_source" value=form.input.website_source.clone() />
            <div id=REGISTRATION_ROOT data-props=props>
                <RegistrationFields state=state />
            </div>
            <button type="submit" class="submit-button">"Submit"</button>
        </form>
    }
}

/// Consent checkbox and the submit button it unlocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
    pub accepted: bool,
    pub error: Option<String>,
}

#[component]
pub fn ConsentGate(state: ConsentState) -> impl IntoView {
    let accepted = create_rw_signal(state.accepted);
    let class = if state.error.is_some() {
        "field consent invalid"
    } else {
        "field consent"
    };

    view! {
        <label class=class>
            <input
                type="checkbox"
                name="consent"
                value="on"
                checked=state.accepted
                on:change=move |ev| accepted.set(event_target_checked(&ev))
            />
            "I agree that my data is processed for recruitment and hiring purposes."
            {error_line(state.error)}
        </label>
        <button type="submit" class="submit-button" disabled=move || !accepted.get()>
            "Send Application"
        </button>
    }
}

/// Careers application form with the consent gate
#[component]
pub fn ApplicationFormView(form: ApplicationForm) -> impl IntoView {
    let errors = form.errors().clone();
    let position_id = form.posting().map(|p| p.id).unwrap_or_default();
    let heading = form
        .posting()
        .map(|p| format!("Apply for {}", p.title))
        .unwrap_or_else(|| "General Application".to_string());
    let consent = ConsentState {
        accepted: form.can_submit(),
        error: field_error(&errors, "consent"),
    };
    let props = props_json(&consent);
    let input = form.input;
    let err = |name: &str| field_error(&errors, name);

    view! {
        <form class="application-form" method="post" action="/itsupport/careers/apply" novalidate=true>
            <h3>{heading}</h3>
            <input type="hidden" name="position_id" value=position_id />
            {input_field("full_name", "Full name", "text", input.full_name, err("full_name"), true)}
            {input_field("email", "Email", "email", input.email, err("email"), true)}
            {input_field("phone", "Phone", "tel", input.phone, err("phone"), true)}
            {input_field("current_company", "Current company", "text", input.current_company, err("current_company"), false)}
            {input_field("current_position", "Current position", "text", input.current_position, err("current_position"), false)}
            {input_field("linkedin_url", "LinkedIn profile", "url", input.linkedin_url, err("linkedin_url"), false)}
            {input_field("portfolio_url", "Portfolio / website", "url", input.portfolio_url, err("portfolio_url"), false)}
            {input_field("salary_expectation", "Salary expectation", "text", input.salary_expectation, err("salary_expectation"), false)}
            {input_field("notice_period", "Notice period (days)", "number", input.notice_period, err("notice_period"), false)}
            {input_field("referral_source", "How did you hear about us?", "text", input.referral_source, err("referral_source"), false)}
            {textarea("cover_letter", "Cover letter", input.cover_letter, err("cover_letter"))}
            <div id=CONSENT_ROOT data-props=props>
                <ConsentGate state=consent />
            </div>
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::forms::ContactInput;
    use crate::shell::render_html;

    /// The opening tag that contains `marker`
    fn tag_with<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).unwrap();
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn test_contact_form_shows_inline_error() {
        let mut form = ContactForm::with_input(
            SiteKey::Guidance,
            "x@example.com",
            ContactInput {
                name: "A <B>".into(),
                email: "a@b.com".into(),
                ..ContactInput::default()
            },
        );
        let _ = form.submit();
        let html = render_html(move || view! { <ContactFormView site=SiteKey::Guidance form=form /> });

        assert!(html.contains(r#"action="/guidance/contact""#));
        assert!(html.contains("Message is required"));
        assert!(!html.contains("A <B>"));
        assert!(html.contains("A &lt;B"));
        assert!(html.contains("Admission"));
    }

    #[test]
    fn test_registration_follow_up_hides_full_fields() {
        let mut form = RegistrationForm::new("itsupport");
        form.set_email("known@example.com");
        form.apply_email_status(EmailStatus::Exists);
        let html = render_html(move || view! { <RegistrationFormView site=SiteKey::ItSupport form=form /> });

        assert!(tag_with(&html, r#"class="full-only""#).contains("hidden"));
        assert!(tag_with(&html, r#"name="mode""#).contains(r#"value="follow_up""#));
        assert!(html.contains("Welcome back! Just tell us your new query."));
        assert!(html.contains(r#"id="registration-root""#));
        assert!(html.contains("data-props="));
    }

    #[test]
    fn test_registration_full_mode_requires_names() {
        let form = RegistrationForm::new("itsupport");
        let html = render_html(move || view! { <RegistrationFormView site=SiteKey::ItSupport form=form /> });

        assert!(!tag_with(&html, r#"class="full-only""#).contains("hidden"));
        assert!(tag_with(&html, r#"name="mode""#).contains(r#"value="full""#));
        assert!(tag_with(&html, r#"name="clientfname""#).contains("required"));
    }

    #[test]
    fn test_registration_state_round_trips_through_props() {
        let mut form = RegistrationForm::new("itsupport");
        form.set_email("known@example.com");
        form.apply_email_status(EmailStatus::Exists);
        let state = RegistrationState::from(&form);

        let parsed: RegistrationState = serde_json::from_str(&props_json(&state)).unwrap();
        assert_eq!(parsed, state);
        assert!(parsed.follow_up);
    }

    #[test]
    fn test_application_submit_disabled_until_consent() {
        let form = ApplicationForm::new("careers@example.com", None);
        let html = render_html(move || view! { <ApplicationFormView form=form /> });
        assert!(tag_with(&html, r#"class="submit-button""#).contains("disabled"));
        assert!(!tag_with(&html, r#"name="consent""#).contains("checked"));

        let mut form = ApplicationForm::new("careers@example.com", None);
        form.accept_consent(chrono::Utc::now());
        let html = render_html(move || view! { <ApplicationFormView form=form /> });
        assert!(!tag_with(&html, r#"class="submit-button""#).contains("disabled"));
        assert!(tag_with(&html, r#"name="consent""#).contains("checked"));
    }

    #[test]
    fn test_mailto_result_links_new_tab_without_form_post() {
        let link = MailtoLink::new("x@example.com", "Hi", "Body");
        let html = render_html(move || view! { <MailtoMount link=link /> });

        assert!(html.contains(r#"id="mailto-root""#));
        assert!(tag_with(&html, r#"class="mailto-link""#).contains(r#"target="_blank""#));
        assert!(html.contains("mailto:x@example.com?subject=Hi"));
        assert!(!html.contains(r#"method="post""#));
        assert!(!html.contains("<form"));
        assert!(html.contains("copy-button"));
    }
}
