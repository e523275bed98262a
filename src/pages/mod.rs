//! Page Components
//!
//! The body of each brand page. The shared chrome around it comes from
//! [`crate::shell`].

pub mod careers;
pub mod content;
pub mod forms;
pub mod links;

use std::sync::Arc;

use leptos::*;

use crate::forms::{ApplicationForm, ContactForm, MailtoLink, RegistrationForm};
use crate::router::Page;
use crate::site::{SiteConfig, SiteKey};
use content::Offering;
use forms::{ApplicationFormView, ContactFormView, MailtoMount, RegistrationFormView};

/// Where visitors reach a human
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub inbox: String,
    pub careers_inbox: String,
    pub phone: String,
    pub whatsapp: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            inbox: "customercare@nordisksupport.com".to_string(),
            careers_inbox: "careers@nordisksupport.com".to_string(),
            phone: "+4566776951".to_string(),
            whatsapp: "+4566776951".to_string(),
        }
    }
}

/// Form state to render in place of a fresh form
#[derive(Debug, Clone)]
pub enum FormView {
    Contact(ContactForm, Option<MailtoLink>),
    Registration(RegistrationForm),
    Application(ApplicationForm, Option<MailtoLink>),
}

/// Whether a brand's contact page posts to the backend instead of `mailto:`
pub fn uses_registration(site: SiteKey) -> bool {
    site == SiteKey::ItSupport
}

/// Document title of a page
pub fn page_title(page: Page) -> &'static str {
    match page {
        Page::Home => "Home",
        Page::About => "About Us",
        Page::Services => "Services",
        Page::Facilities => "Facilities",
        Page::Requirements => "Requirements",
        Page::ItServices => "IT Support",
        Page::SwServices => "Software Solutions",
        Page::DataServices => "Data Engineering",
        Page::WebDevelop => "Web Development",
        Page::Careers => "Careers",
        Page::Contact => "Contact",
    }
}

pub const NOT_FOUND_TITLE: &str = "Page Not Found";

#[component]
fn Heading(#[prop(into)] title: String, #[prop(into)] intro: String) -> impl IntoView {
    view! {
        <section class="page-heading">
            <h1>{title}</h1>
            <p>{intro}</p>
        </section>
    }
}

#[component]
fn Cards(items: &'static [Offering]) -> impl IntoView {
    view! {
        <div class="card-grid">
            {items
                .iter()
                .map(|o| view! {
                    <article class="card">
                        <h3>{o.title}</h3>
                        <p>{o.description}</p>
                    </article>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Bullets(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullets">
            {items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn QuickContact(details: ContactDetails) -> impl IntoView {
    let tel = links::tel_href(&details.phone);
    let whatsapp = links::whatsapp_href(&details.whatsapp, Some("Hello! I have a question."));
    let mail = format!("mailto:{}", details.inbox);

    view! {
        <aside class="quick-contact">
            <a class="call-link" href=tel>{format!("Call {}", details.phone)}</a>
            <a class="whatsapp-link" href=whatsapp target="_blank" rel="noopener">"WhatsApp"</a>
            <a class="mail-link" href=mail>{details.inbox}</a>
        </aside>
    }
}

#[component]
fn Home(config: Arc<SiteConfig>) -> impl IntoView {
    let highlights: &'static [Offering] = match config.key {
        SiteKey::Software => content::SOFTWARE_SERVICES,
        SiteKey::Guidance => content::GUIDANCE_FACILITIES,
        SiteKey::ItSupport => content::IT_SERVICES,
        SiteKey::FlowSupport => content::FLOW_SERVICES,
    };

    view! {
        <section class="hero">
            <h1>{config.hero_title.clone()}</h1>
            <p>{config.hero_subtitle.clone()}</p>
        </section>
        <Cards items=highlights />
        <p class="cta">
            <a class="button" href=config.key.path(Page::Contact.slug())>"Get in touch"</a>
        </p>
    }
}

#[component]
fn Careers(details: ContactDetails, form: Option<FormView>) -> impl IntoView {
    let (form, result) = match form {
        Some(FormView::Application(form, result)) => (form, result),
        _ => (ApplicationForm::new(details.careers_inbox.clone(), None), None),
    };

    view! {
        <Heading title="Careers" intro="Join a team that keeps businesses across Denmark running." />
        <div class="card-grid">
            {careers::JOB_POSTINGS
                .iter()
                .map(|p| view! {
                    <article class="card job">
                        <h3>{p.title}</h3>
                        <p class="job-meta">{format!("{} · {} · {}", p.department, p.location, p.job_type)}</p>
                        <p>{p.summary}</p>
                        <a class="button" href=format!("/itsupport/careers?position={}#apply", p.id)>"Apply"</a>
                    </article>
                })
                .collect_view()}
        </div>
        <section class="hiring-steps">
            <h2>"How we hire"</h2>
            <ol>
                {careers::HIRING_STEPS
                    .iter()
                    .map(|(title, desc)| view! { <li><strong>{*title}</strong>" "{*desc}</li> })
                    .collect_view()}
            </ol>
        </section>
        <section id="apply">
            {result.map(|link| view! { <MailtoMount link=link /> })}
            <ApplicationFormView form=form />
        </section>
    }
}

#[component]
fn Contact(config: Arc<SiteConfig>, details: ContactDetails, form: Option<FormView>) -> impl IntoView {
    let site = config.key;
    let body = match form {
        Some(FormView::Registration(form)) => view! { <RegistrationFormView site=site form=form /> }.into_view(),
        Some(FormView::Contact(form, result)) => view! {
            {result.map(|link| view! { <MailtoMount link=link /> })}
            <ContactFormView site=site form=form />
        }
        .into_view(),
        _ if uses_registration(site) => {
            let form = RegistrationForm::new(site.as_str());
            view! { <RegistrationFormView site=site form=form /> }.into_view()
        }
        _ => {
            let form = ContactForm::new(site, details.inbox.clone());
            view! { <ContactFormView site=site form=form /> }.into_view()
        }
    };

    view! {
        <Heading
            title="Contact Us"
            intro="Send us a message and we will get back to you within one business day."
        />
        <div class="contact-layout">
            {body}
            <QuickContact details=details />
        </div>
    }
}

/// Body of `page` for a brand
#[component]
pub fn PageContent(
    config: Arc<SiteConfig>,
    page: Page,
    details: ContactDetails,
    #[prop(optional_no_strip)] form: Option<FormView>,
) -> impl IntoView {
    match page {
        Page::Home => view! { <Home config=config /> }.into_view(),
        Page::About => view! {
            <Heading title="About Us" intro=config.name.clone() />
            <Bullets items=content::about(config.key) />
        }
        .into_view(),
        Page::Services => {
            let offerings = match config.key {
                SiteKey::FlowSupport => content::FLOW_SERVICES,
                SiteKey::ItSupport => content::IT_SERVICES,
                _ => content::SOFTWARE_SERVICES,
            };
            view! {
                <Heading title="Our Services" intro=config.hero_subtitle.clone() />
                <Cards items=offerings />
            }
            .into_view()
        }
        Page::Facilities => {
            let offerings = match config.key {
                SiteKey::Guidance => content::GUIDANCE_FACILITIES,
                _ => content::SOFTWARE_FACILITIES,
            };
            view! {
                <Heading title="Facilities" intro="What we offer." />
                <Cards items=offerings />
            }
            .into_view()
        }
        Page::Requirements => view! {
            <Heading title="Requirements" intro="What you need before applying." />
            <Bullets items=content::GUIDANCE_REQUIREMENTS />
        }
        .into_view(),
        Page::ItServices => view! {
            <Heading title="IT Support Services" intro="Fast help when technology fails." />
            <Cards items=content::IT_SERVICES />
        }
        .into_view(),
        Page::SwServices => view! {
            <Heading title="Software Solutions" intro="Software built around your business." />
            <Cards items=content::SOFTWARE_SERVICES />
        }
        .into_view(),
        Page::DataServices => view! {
            <Heading title="Data Engineering" intro="Turn scattered data into decisions." />
            <Cards items=content::DATA_SERVICES />
        }
        .into_view(),
        Page::WebDevelop => view! {
            <Heading title="Web Development" intro="Websites that work as hard as you do." />
            <Cards items=content::WEB_DEVELOPMENT />
        }
        .into_view(),
        Page::Careers => view! { <Careers details=details form=form /> }.into_view(),
        Page::Contact => view! { <Contact config=config details=details form=form /> }.into_view(),
    }
}

/// Body of the not-found page
#[component]
pub fn NotFoundContent(#[prop(into)] path: String, config: Arc<SiteConfig>) -> impl IntoView {
    view! {
        <Heading title=NOT_FOUND_TITLE intro=format!("Nothing lives at {}.", path) />
        <p class="cta">
            <a class="button" href=config.key.path(Page::Home.slug())>"Back to home"</a>
        </p>
    }
}
