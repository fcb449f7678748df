//! Sidebar Component
//!
//! Brand header and the route selector.

use leptos::*;

use crate::state::{GlobalState, Route};

/// Sidebar with brand and route buttons
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-60 shrink-0">
            <div class="sticky top-4 space-y-4">
                // Brand
                <div class="flex items-center space-x-3 px-2 py-3 border-b border-stone-300">
                    <span class="text-2xl">"🇸🇬"</span>
                    <div>
                        <div class="text-sm font-bold text-stone-900">"SG Dashboard"</div>
                        <div class="text-xs text-stone-500">"City data at a glance"</div>
                    </div>
                </div>

                <RouteSelect />
            </div>
        </aside>
    }
}

/// One button per route; clicking writes the shared selection
#[component]
pub fn RouteSelect() -> impl IntoView {
    view! {
        <nav class="space-y-1">
            {Route::ALL
                .into_iter()
                .map(|route| view! { <RouteButton route=route /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn RouteButton(route: Route) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let is_selected = create_memo(move |_| state_for_memo.is_selected(route));

    view! {
        <button
            on:click=move |_| state.select(route)
            class=move || {
                let base = "flex items-center justify-start gap-2 w-full rounded px-2 py-1.5 text-sm \
                            transition-[box-shadow,_background-color,_color]";
                if is_selected.get() {
                    format!("{} bg-white text-stone-950 shadow", base)
                } else {
                    format!("{} hover:bg-stone-200 bg-transparent text-stone-500 shadow-none", base)
                }
            }
        >
            <span class=move || if is_selected.get() { "text-violet-500" } else { "" }>
                {route.icon()}
            </span>
            <span>{route.title()}</span>
        </button>
    }
}
