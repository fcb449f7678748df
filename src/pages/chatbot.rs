//! Chatbot Page
//!
//! Conversation with the assistant. Stored history is loaded on mount and
//! every submission appends a user turn followed by exactly one bot turn.

use leptos::*;

use crate::api;
use crate::components::{TypingDots, TypingText};
use crate::state::{ChatEntry, ChatRole, ChatSession, GlobalState};

const EXAMPLE_PROMPTS: [(&str, &str); 4] = [
    ("🌦️", "What is the weather forecast for Tampines?"),
    ("🚕", "How many taxis are available near Orchard Road?"),
    ("🅿️", "Are there car park lots free around Marina Bay?"),
    ("🚦", "Show me traffic cameras on the PIE."),
];

/// Chatbot page component
#[component]
pub fn Chatbot() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = create_rw_signal(ChatSession::default());

    // Fetch stored history on mount
    let state_for_history = state.clone();
    create_effect(move |_| {
        let api_base = state_for_history.api_base.get_untracked();
        spawn_local(async move {
            match api::fetch_history(&api_base).await {
                Ok(history) => {
                    log::debug!("Loaded {} history entries", history.len());
                    let entries = history.into_iter().map(ChatEntry::from).collect();
                    session.update(|s| s.seed(entries));
                }
                Err(e) => {
                    log::error!("Failed to fetch chat history: {}", e);
                }
            }
        });
    });

    let submit = Callback::new(move |text: String| {
        let mut prompt = None;
        session.update(|s| prompt = s.begin(&text));
        let Some(prompt) = prompt else {
            return;
        };

        let api_base = state.api_base.get_untracked();
        spawn_local(async move {
            let reply = api::send_prompt(&api_base, &prompt).await;
            if let Err(e) = &reply {
                log::error!("Error fetching response: {}", e);
            }
            session.update(|s| s.finish(reply));
        });
    });

    view! {
        <div class="flex flex-col items-center justify-center h-[calc(100vh-48px)] w-full">
            <div class="w-full max-w-[700px] flex-1 overflow-y-auto p-4 space-y-3">
                <For
                    each=move || session.with(|s| s.turns().to_vec())
                    key=|turn| turn.id
                    children=move |turn| view! { <ChatBubble entry=turn.entry animate=turn.live /> }
                />

                {move || session.with(|s| s.is_loading()).then(|| view! { <TypingDots /> })}
            </div>

            {move || {
                session
                    .with(|s| s.is_empty() && !s.is_loading())
                    .then(|| view! { <Introduction on_pick=submit /> })
            }}

            <ChatInput on_submit=submit />
        </div>
    }
}

#[component]
fn ChatBubble(entry: ChatEntry, animate: bool) -> impl IntoView {
    match entry.role {
        ChatRole::User => view! {
            <div class="flex justify-end">
                <div class="max-w-[80%] bg-violet-500 text-white rounded-2xl rounded-br-sm px-4 py-2 whitespace-pre-wrap">
                    {entry.text}
                </div>
            </div>
        }
        .into_view(),
        ChatRole::Bot => view! {
            <div class="flex justify-start">
                <div class="max-w-[80%] bg-stone-100 text-stone-900 rounded-2xl rounded-bl-sm px-4 py-2">
                    <TypingText text=entry.text animate=animate />
                </div>
            </div>
        }
        .into_view(),
    }
}

/// Shown while the conversation is empty
#[component]
fn Introduction(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="w-full max-w-[700px] px-4 pb-4">
            <h1 class="text-2xl font-bold mb-1">"Hello there 👋"</h1>
            <p class="text-stone-500 mb-4">"Ask me about Singapore's weather, taxis, car parks or traffic."</p>
            <div class="grid grid-cols-2 gap-2">
                {EXAMPLE_PROMPTS.into_iter().map(|(icon, prompt)| view! {
                    <button
                        on:click=move |_| on_pick.call(prompt.to_string())
                        class="text-left text-sm border border-stone-300 rounded-lg px-3 py-2 hover:bg-stone-50"
                    >
                        <span class="mr-2">{icon}</span>
                        {prompt}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Prompt box; Enter sends, Shift+Enter adds a newline
#[component]
fn ChatInput(on_submit: Callback<String>) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());

    let send = move || {
        let value = text.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        set_text.set(String::new());
        on_submit.call(value);
    };

    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <form on:submit=on_form_submit class="w-full max-w-[700px] p-4 flex items-end gap-2">
            <textarea
                placeholder="Ask something..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=on_keydown
                rows="2"
                class="flex-1 bg-stone-100 rounded-lg px-4 py-3 border border-stone-300
                       focus:border-violet-500 focus:outline-none resize-none"
            />
            <button
                type="submit"
                disabled=move || text.get().trim().is_empty()
                class="px-5 py-3 bg-violet-500 hover:bg-violet-600 disabled:bg-stone-300
                       text-white rounded-lg font-medium transition-colors"
            >
                "Send"
            </button>
        </form>
    }
}
