//! History Page
//!
//! Chat turns stored by the service, in the order it returns them.

use leptos::*;

use crate::api::{self, HistoryEntry};
use crate::components::LoadingText;
use crate::state::{ChatRole, GlobalState};

fn role_label(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "User:",
        ChatRole::Bot => "Bot:",
    }
}

/// History page component
#[component]
pub fn History() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (entries, set_entries) = create_signal(None::<Vec<HistoryEntry>>);

    // Fetch once on mount; on failure the placeholder stays
    create_effect(move |_| {
        let api_base = state.api_base.get_untracked();
        spawn_local(async move {
            match api::fetch_history(&api_base).await {
                Ok(history) => set_entries.set(Some(history)),
                Err(e) => log::error!("Failed to fetch stored history: {}", e),
            }
        });
    });

    move || match entries.get() {
        None => view! { <LoadingText /> }.into_view(),
        Some(history) => view! {
            <div class="p-4">
                <h1 class="text-xl font-bold mb-2">"Chat History"</h1>
                {history.is_empty().then(|| view! {
                    <p class="text-stone-500 text-sm">"No stored conversations yet."</p>
                })}
                <ul class="flex flex-col space-y-2">
                    {history.into_iter().map(|entry| view! { <HistoryRow entry=entry /> }).collect_view()}
                </ul>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry) -> impl IntoView {
    let class = match entry.role {
        ChatRole::User => "p-2 rounded bg-blue-100 text-blue-800 self-end",
        ChatRole::Bot => "p-2 rounded bg-gray-200 text-gray-900 self-start",
    };
    let timestamp = entry.timestamp_label();

    view! {
        <li class=class>
            <strong>{role_label(entry.role)}</strong>
            " "
            {entry.text}
            {timestamp.map(|ts| view! { <span class="block text-xs opacity-60 mt-1">{ts}</span> })}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(role_label(ChatRole::User), "User:");
        assert_eq!(role_label(ChatRole::Bot), "Bot:");
    }
}
