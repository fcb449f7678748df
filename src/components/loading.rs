//! Loading Component
//!
//! Spinners and placeholders shown while a fetch is in flight.

use leptos::*;

/// Spinner sized in Tailwind spacing units
#[component]
fn Spinner(#[prop(default = 8)] size: u8) -> impl IntoView {
    view! {
        <div
            class=format!("loading-spinner w-{0} h-{0}", size)
            role="status"
            aria-label="Loading"
        />
    }
}

/// Centred spinner for a card still waiting on data
#[component]
pub fn Loading(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-2 py-10 text-sm text-stone-500">
            <Spinner />
            {label}
        </div>
    }
}

/// Plain text placeholder
#[component]
pub fn LoadingText() -> impl IntoView {
    view! { <p class="p-4 text-stone-500">"Loading..."</p> }
}

/// Three bouncing dots, shown while the assistant is replying
#[component]
pub fn TypingDots() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-1 px-4 py-3" aria-label="Assistant is typing">
            {(0..3).map(|i| view! {
                <span
                    class="w-2 h-2 bg-stone-400 rounded-full animate-bounce"
                    style=format!("animation-delay: {}ms", i * 150)
                />
            }).collect_view()}
        </div>
    }
}

/// Dims `children` behind a spinner until `loading` turns false
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative w-fit max-w-full">
            {children()}
            <Show when=move || loading.get()>
                <div class="absolute inset-0 z-20 grid place-items-center rounded-lg bg-stone-100/60">
                    <Spinner size=10 />
                </div>
            </Show>
        </div>
    }
}
