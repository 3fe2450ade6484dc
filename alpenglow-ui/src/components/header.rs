//! Fixed page header. The `scrolled` treatment is applied by the effects
//! controller, not here.

use leptos::*;

use crate::app::SiteActions;

#[component]
pub fn Header(actions: SiteActions) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <a class="logo" href="/">"Alpenglow Studio"</a>
                <nav class="nav">
                    <a href="#what-we-do">"What We Do"</a>
                    <a href="#services">"Services"</a>
                    <a href="#art-direction">"Art Direction"</a>
                </nav>
                <button class="cta-button" on:click=move |_| actions.open_modal.call(())>
                    "Get in Touch"
                </button>
            </div>
        </header>
    }
}
