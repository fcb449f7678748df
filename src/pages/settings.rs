//! Settings Page
//!
//! Where the dashboard service lives.

use leptos::*;

use crate::config;
use crate::state::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-xl font-bold">"Settings"</h1>
                <p class="text-stone-500 text-sm mt-1">"Configure the dashboard service connection"</p>
            </div>

            <ApiSettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());

    let state_for_save = state.clone();
    let save_url = move |_| {
        let url = api_url.get();
        if config::normalize_base(&url).is_empty() {
            state_for_save.show_error("API URL cannot be empty");
            return;
        }
        state_for_save.update_api_base(&url);
        log::info!("API base set to {}", state_for_save.api_base.get_untracked());
        state_for_save.show_success("API URL saved");
    };

    let state_for_reset = state.clone();
    let reset_url = move |_| {
        state_for_reset.reset_api_base();
        set_api_url.set(state_for_reset.api_base.get_untracked());
        state_for_reset.show_success("API URL reset to default");
    };

    view! {
        <section class="border border-stone-300 rounded p-4">
            <h2 class="text-base font-medium mb-3">"API Connection"</h2>

            <label class="block text-sm text-stone-500 mb-2">"Dashboard service URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-stone-100 rounded-lg px-4 py-2
                           border border-stone-300 focus:border-violet-500 focus:outline-none"
                />
                <button
                    on:click=reset_url
                    class="px-4 py-2 bg-stone-200 hover:bg-stone-300 rounded-lg font-medium transition-colors"
                >
                    "Reset"
                </button>
                <button
                    on:click=save_url
                    class="px-4 py-2 bg-violet-500 hover:bg-violet-600 text-white rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>

            <p class="text-xs text-stone-500 mt-2">
                {format!("Default: {}", config::default_api_base())}
            </p>
        </section>
    }
}
