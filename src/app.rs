//! App Root Component
//!
//! Layout, global providers and the dashboard shell that mounts the
//! selected view.

use leptos::*;

use crate::components::{Sidebar, Toast};
use crate::pages::{Chatbot, DengueMap, History, Overview, RainfallMap, Settings};
use crate::state::{provide_global_state, GlobalState, Route};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-stone-100 text-stone-950 grid gap-4 p-4 grid-cols-[240px,_1fr]">
            <Sidebar />

            <main class="bg-white rounded-lg pb-4 shadow min-w-0">
                <ViewHost />
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Mounts exactly one view for the selected route
#[component]
fn ViewHost() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let route = create_memo(move |_| state.route.get());

    move || match route.get() {
        Route::Dashboard => view! { <Overview /> }.into_view(),
        Route::Chatbot => view! { <Chatbot /> }.into_view(),
        Route::Map => view! { <DengueMap /> }.into_view(),
        Route::RainfallMap => view! { <RainfallMap /> }.into_view(),
        Route::Database => view! { <History /> }.into_view(),
        Route::Settings => view! { <Settings /> }.into_view(),
    }
}
