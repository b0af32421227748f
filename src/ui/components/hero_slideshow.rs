use std::time::Duration;

use dioxus::prelude::*;

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Stacked images; the visible one sits on top and the stack rotates on a timer.
#[component]
pub fn HeroSlideshow(slides: Vec<String>, interval_ms: u64, alt: String) -> Element {
    let mut current = use_signal(|| 0_usize);
    let len = slides.len();

    let _rotation = use_future(move || async move {
        // A single image never rotates.
        if len <= 1 {
            return;
        }
        let interval = Duration::from_millis(interval_ms.max(1));
        loop {
            tokio::time::sleep(interval).await;
            current.with_mut(|index| *index = next_slide(*index, len));
        }
    });

    let active = current();

    rsx! {
        div { class: "hero", "data-hero-slideshow": "true",
            for (idx, src) in slides.iter().enumerate() {
                img {
                    key: "{idx}",
                    class: if idx == active { "z-10" } else { "z-0" },
                    src: "{src}",
                    alt: "{alt}",
                    aria_hidden: "{idx != active}",
                }
            }
        }
    }
}
