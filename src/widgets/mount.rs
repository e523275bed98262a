//! Browser entry point

use leptos::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{CHAT_ROOT, CONSENT_ROOT, MAILTO_ROOT, REGISTRATION_ROOT};
use crate::forms::MailtoLink;
use crate::pages::forms::{ConsentGate, ConsentState, MailtoResult, RegistrationFields, RegistrationState};
use crate::shell::ChatWidget;

/// Replace each server-rendered widget with its interactive version
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some((root, ())) = take_root(&document, CHAT_ROOT, false) {
        mount_to(root, || view! { <ChatWidget /> });
    }
    if let Some((root, state)) = take_root::<RegistrationState>(&document, REGISTRATION_ROOT, true) {
        mount_to(root, move || view! { <RegistrationFields state=state /> });
    }
    if let Some((root, state)) = take_root::<ConsentState>(&document, CONSENT_ROOT, true) {
        mount_to(root, move || view! { <ConsentGate state=state /> });
    }
    if let Some((root, link)) = take_root::<MailtoLink>(&document, MAILTO_ROOT, true) {
        mount_to(root, move || view! { <MailtoResult link=link /> });
    }
}

/// Find a mount root, decode its props and clear the server markup
fn take_root<T: DeserializeOwned>(document: &Document, id: &str, with_props: bool) -> Option<(HtmlElement, T)> {
    let element = document.get_element_by_id(id)?;
    let raw = if with_props {
        element.get_attribute("data-props")?
    } else {
        "null".to_string()
    };
    let props = match serde_json::from_str(&raw) {
        Ok(props) => props,
        Err(e) => {
            logging::warn!("Skipping #{}: bad props: {}", id, e);
            return None;
        }
    };
    element.set_inner_html("");
    let root = element.dyn_into::<HtmlElement>().ok()?;
    Some((root, props))
}
