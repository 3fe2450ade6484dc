//! Page footer; revealed by its own observer once well inside the
//! viewport.

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"\u{00a9} 2026 Alpenglow Studio. Made above the treeline."</p>
        </footer>
    }
}
