//! Toast Notification Component
//!
//! Success and error banners raised through `GlobalState`. Click to dismiss.

use leptos::*;

use crate::state::GlobalState;

#[derive(Clone, Copy)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Success => ("✓", "bg-green-600"),
            ToastKind::Error => ("✕", "bg-red-600"),
        }
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-[1000] space-y-2">
            <ToastSlot message=state.success kind=ToastKind::Success />
            <ToastSlot message=state.error kind=ToastKind::Error />
        </div>
    }
}

#[component]
fn ToastSlot(message: RwSignal<Option<String>>, kind: ToastKind) -> impl IntoView {
    let (icon, bg_class) = kind.style();

    move || {
        message.get().map(|text| view! {
            <button
                on:click=move |_| message.set(None)
                class=format!(
                    "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                     transition-all duration-300 ease-out animate-slide-in",
                    bg_class
                )
            >
                <span class="text-lg">{icon}</span>
                <span class="text-sm font-medium">{text}</span>
            </button>
        })
    }
}
