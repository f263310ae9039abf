use crate::ai::{CompletionPort, EnvCompletion};
use crate::session::{ChatSession, TurnStart, resolve_remote};
use crate::storage::LocalStore;
use crate::types::Role;
use crate::voice::{self, SystemSpeech};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::sync::Arc;

fn connect_session() -> ChatSession {
    let completion: Arc<dyn CompletionPort> = Arc::new(EnvCompletion);
    ChatSession::restore(
        completion,
        Arc::new(LocalStore::new()),
        Arc::new(SystemSpeech),
    )
}

#[component]
pub fn ChatView() -> Element {
    let mut session = use_signal(connect_session);

    // Synchronous half under the signal lock; the remote half runs in a task
    // that re-acquires the session only to land the reply.
    let mut send_message = move || {
        let start = session.write().begin_turn();
        if let TurnStart::RemotePending(snapshot) = start {
            let completion = session.read().completion();
            spawn(async move {
                let reply = resolve_remote(completion.as_ref(), &snapshot).await;
                session.write().complete_turn(reply);
            });
        }
    };

    let start_capture = move |_| {
        let speech = session.read().speech();
        spawn(async move {
            if let Some(transcript) = voice::capture_once(speech.as_ref()).await {
                session.write().set_pending_input(transcript);
            }
        });
    };

    let messages_snapshot = session.read().messages().to_vec();
    let busy = session.read().is_busy();
    let input_value = session.read().pending_input().to_string();

    rsx! {
        div { class: "chat-list",
            for msg in messages_snapshot.iter() {
                div {
                    class: format_args!(
                        "bubble {}",
                        match msg.role {
                            Role::User => "user",
                            Role::Assistant => "assistant animate-reveal",
                        }
                    ),
                    "{msg.content}"
                }
            }
            if busy {
                div { class: "bubble assistant typing-bubble", aria_label: "Assistant is typing" }
            }
        }

        div { class: "composer",
            input {
                r#type: "text",
                placeholder: "Type your message...",
                value: "{input_value}",
                oninput: move |ev| session.write().set_pending_input(ev.value()),
                onkeydown: move |ev| {
                    if ev.key() == Key::Enter {
                        send_message();
                    }
                },
                autofocus: true,
            }
            button {
                class: "mic-btn",
                r#type: "button",
                title: "Use voice",
                onclick: start_capture,
                MicIcon {}
            }
            button {
                class: "btn",
                r#type: "button",
                disabled: busy || input_value.trim().is_empty(),
                onclick: move |_| send_message(),
                "Send"
            }
        }
    }
}

#[component]
fn MicIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M12 14a3 3 0 003-3V5a3 3 0 10-6 0v6a3 3 0 003 3z" }
            path { d: "M19 11a1 1 0 10-2 0 5 5 0 01-10 0 1 1 0 10-2 0 7 7 0 0014 0z" }
            path {
                d: "M12 17v4m-4 0h8",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
