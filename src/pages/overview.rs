//! Overview Page
//!
//! Landing view: greeting, the series chart and shortcuts to the other views.

use leptos::*;

use crate::api::{self, ChartRow};
use crate::components::{BarChart, Loading};
use crate::state::{GlobalState, Route};

/// Greeting for the hour of day
fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Overview page component
#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <div>
            <TopBar />
            <div class="px-4 grid gap-3 grid-cols-12">
                <section class="col-span-12 lg:col-span-8 border border-stone-300 rounded p-4">
                    <h2 class="text-base font-medium mb-3">"Series overview"</h2>
                    <ChartCard />
                </section>

                <div class="col-span-12 lg:col-span-4 grid gap-3 content-start">
                    <ShortcutCard
                        route=Route::Chatbot
                        blurb="Ask about weather, taxis, car parks and traffic."
                    />
                    <ShortcutCard
                        route=Route::Map
                        blurb="Active dengue clusters across the island."
                    />
                    <ShortcutCard
                        route=Route::RainfallMap
                        blurb="Latest readings from rainfall stations."
                    />
                </div>
            </div>
        </div>
    }
}

/// Greeting and today's date
#[component]
fn TopBar() -> impl IntoView {
    use chrono::Timelike;

    let now = chrono::Local::now();

    view! {
        <div class="border-b px-4 mb-4 mt-2 pb-4 border-stone-200">
            <div class="flex items-center justify-between p-0.5">
                <div>
                    <span class="text-sm font-bold block">{format!("🚀 {}!", greeting(now.hour()))}</span>
                    <span class="text-xs block text-stone-500">{now.format("%A, %b %-d %Y").to_string()}</span>
                </div>
            </div>
        </div>
    }
}

/// Fetches `/chartdata` once and draws it
#[component]
fn ChartCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (rows, set_rows) = create_signal(Vec::<ChartRow>::new());
    let (loading, set_loading) = create_signal(true);
    let (failed, set_failed) = create_signal(false);

    // Fetch chart data on mount
    create_effect(move |_| {
        let api_base = state.api_base.get_untracked();
        spawn_local(async move {
            match api::fetch_chart_data(&api_base).await {
                Ok(data) => {
                    log::debug!("Loaded {} chart series", data.len());
                    set_rows.set(data);
                }
                Err(e) => {
                    log::error!("Failed to fetch chart data: {}", e);
                    set_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    });

    move || {
        if loading.get() {
            view! { <Loading label="Loading chart data..." /> }.into_view()
        } else if failed.get() {
            view! {
                <div class="h-64 flex items-center justify-center text-stone-500 text-sm">
                    "Chart data unavailable"
                </div>
            }
            .into_view()
        } else {
            view! { <BarChart rows=rows /> }.into_view()
        }
    }
}

#[component]
fn ShortcutCard(route: Route, blurb: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            on:click=move |_| state.select(route)
            class="text-left border border-stone-300 rounded p-4 hover:bg-stone-50 transition-colors"
        >
            <div class="flex items-center space-x-2 mb-1">
                <span class="text-xl">{route.icon()}</span>
                <span class="font-medium">{route.title()}</span>
            </div>
            <p class="text-sm text-stone-500">{blurb}</p>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(6), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(23), "Good evening");
        assert_eq!(greeting(2), "Good evening");
    }
}
