//! Typing Text Component
//!
//! Reveals a bot reply one character at a time.

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

/// Delay between revealed characters
pub const TYPING_SPEED_MS: u32 = 20;

/// First `chars` characters of `text`, never splitting a character
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Characters to show after the next tick, or `None` once everything is shown
pub fn next_reveal(shown: usize, total: usize) -> Option<usize> {
    (shown < total).then_some(shown + 1)
}

#[component]
pub fn TypingText(
    #[prop(into)]
    text: String,
    /// Reveal the text character by character
    #[prop(default = true)]
    animate: bool,
    #[prop(default = TYPING_SPEED_MS)]
    speed_ms: u32,
) -> impl IntoView {
    let total = text.chars().count();
    let (shown, set_shown) = create_signal(if animate { 0 } else { total });

    if animate {
        // one pending timeout per character; none is scheduled after the last
        let pending = store_value(None::<TimeoutHandle>);
        create_effect(move |_| {
            if let Some(next) = next_reveal(shown.get(), total) {
                let handle = set_timeout_with_handle(
                    move || set_shown.set(next),
                    Duration::from_millis(u64::from(speed_ms)),
                );
                pending.set_value(handle.ok());
            }
        });
        on_cleanup(move || {
            pending.try_with_value(|handle| {
                if let Some(handle) = handle {
                    handle.clear();
                }
            });
        });
    }

    view! {
        <span class="whitespace-pre-wrap">
            {move || typed_prefix(&text, shown.get()).to_string()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_counts_characters() {
        assert_eq!(typed_prefix("hello", 0), "");
        assert_eq!(typed_prefix("hello", 3), "hel");
        assert_eq!(typed_prefix("hello", 10), "hello");
    }

    #[test]
    fn test_reveal_stops_at_the_end() {
        assert_eq!(next_reveal(0, 3), Some(1));
        assert_eq!(next_reveal(2, 3), Some(3));
        assert_eq!(next_reveal(3, 3), None);
        assert_eq!(next_reveal(0, 0), None);
    }

    #[test]
    fn test_prefix_respects_multibyte_characters() {
        let text = "⚠️ Error";
        // the warning sign is two chars: U+26A0 and a variation selector
        assert_eq!(typed_prefix(text, 1), "⚠");
        assert_eq!(typed_prefix(text, 2), "⚠️");
        assert_eq!(typed_prefix("天气晴", 2), "天气");
    }
}
