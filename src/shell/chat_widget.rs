//! Chat widget
//!
//! Floating assistant backed by the chat server functions. The send button
//! is disabled while a reply is pending. Failed requests show the bot's error
//! line; an expired session is reopened on the next toggle. Leaving the page
//! closes the session with a beacon.

use leptos::*;

use crate::chat::WidgetModel;

#[cfg(feature = "hydrate")]
use crate::widgets::api::{close_chat, open_chat, send_chat_message, ChatReply};

/// Path the page-exit beacon posts to
pub fn close_beacon_path(id: uuid::Uuid) -> String {
    format!("/api/chat/sessions/{}/close", id)
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let model = create_rw_signal(WidgetModel::default());
    let draft = create_rw_signal(String::new());

    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(ev::pagehide, move |_| {
            if let Some(id) = model.with_untracked(|m| m.session) {
                let _ = window().navigator().send_beacon(&close_beacon_path(id));
            }
        });
        on_cleanup(move || listener.remove());
    }

    let on_toggle = move |_: ev::MouseEvent| {
        let needs_session = model.try_update(|m| m.toggle_open()).unwrap_or(false);
        #[cfg(feature = "hydrate")]
        {
            if needs_session {
                spawn_local(async move {
                    match open_chat().await {
                        Ok(transcript) => model.update(|m| m.opened(transcript)),
                        Err(e) => {
                            logging::warn!("Chat session could not be opened: {}", e);
                            model.update(|m| m.failed(true));
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = needs_session;
        }
    };

    let on_minimize = move |_: ev::MouseEvent| {
        let closing = model.try_update(|m| m.minimize()).flatten();
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = closing {
                spawn_local(async move {
                    if let Err(e) = close_chat(id).await {
                        logging::warn!("Chat session close failed: {}", e);
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = closing;
        }
    };

    let on_send = move |_: ev::MouseEvent| {
        let text = draft.get_untracked();
        let Some((id, message)) = model.try_update(|m| m.begin_send(&text)).flatten() else {
            return;
        };
        draft.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            spawn_local(async move {
                match send_chat_message(id, message).await {
                    Ok(ChatReply::Delivered(outcome)) => model.update(|m| m.replied(outcome)),
                    Ok(ChatReply::Expired) => model.update(|m| m.failed(true)),
                    Err(e) => {
                        logging::warn!("Chat send failed: {}", e);
                        model.update(|m| m.failed(false));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, message);
        }
    };

    let widget_class = move || {
        if model.with(|m| m.open) {
            "chat-widget open"
        } else {
            "chat-widget"
        }
    };
    let messages = move || {
        model.with(|m| {
            m.messages
                .iter()
                .map(|msg| {
                    let class = format!("message-bubble {}-bubble", msg.sender.as_str());
                    view! { <div class=class>{msg.text.clone()}</div> }
                })
                .collect_view()
        })
    };

    view! {
        <div id="chat-widget" class=widget_class>
            <button class="chat-toggle-button" type="button" aria-label="Open chat" on:click=on_toggle>
                "💬"
            </button>
            <div class="chat-container">
                <div class="chat-header">
                    <span class="bot-name">"Assistant"</span>
                    <button class="minimize-btn" type="button" on:click=on_minimize>"✕"</button>
                </div>
                <div class="messages-container">
                    <div class="messages">{messages}</div>
                </div>
                <div class="input-area">
                    <textarea
                        class="chat-input"
                        rows="2"
                        placeholder="Your message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="send-button"
                        type="button"
                        disabled=move || model.with(|m| m.sending)
                        on:click=on_send
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
