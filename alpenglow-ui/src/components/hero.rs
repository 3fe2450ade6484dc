//! Hero section with the decorative shape layer the parallax and mouse
//! tracking controllers move.

use leptos::*;

use crate::app::SiteActions;

#[component]
pub fn Hero(actions: SiteActions) -> impl IntoView {
    view! {
        <section class="hero-container">
            <div class="shape shape-1"></div>
            <div class="shape shape-2"></div>
            <div class="shape shape-3"></div>
            <div class="sphere"></div>

            <div class="hero-content">
                <h1>"Design that catches the last light"</h1>
                <p>"Brand, motion, and product design for teams in the mountains and everywhere else."</p>
                <div id="hero-lottie" class="hero-lottie"></div>
            </div>

            <button
                class="scroll-down"
                aria-label="Scroll to next section"
                on:click=move |_| actions.scroll_to_next.call(())
            >
                "\u{2193}"
            </button>
        </section>
    }
}
