//! Content sections. Container ids here pair with the animation roster
//! in `site.json`; the reveal observer targets the section and card
//! classes.

use leptos::*;

use alpenglow_core::ContactConfig;

#[component]
pub fn WhatWeDo() -> impl IntoView {
    view! {
        <section id="what-we-do" class="what-we-do-section">
            <div class="section-copy">
                <h2>"What we do"</h2>
                <p>"We build identities and interfaces with the patience of a long approach and the payoff of a summit view."</p>
            </div>
            <div id="craft-lottie" class="section-lottie"></div>
            <div class="visual-shape"></div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services-section">
            <h2>"Services"</h2>
            <div class="services-grid">
                <div class="service-card">
                    <div id="vision-lottie" class="card-lottie"></div>
                    <h3>"Brand & Vision"</h3>
                    <p>"Positioning, naming, and visual systems that survive contact with real products."</p>
                </div>
                <div class="service-card">
                    <div id="process-lottie" class="card-lottie"></div>
                    <h3>"Product Design"</h3>
                    <p>"Interfaces designed in the open, shipped in small honest increments."</p>
                </div>
                <div class="service-card">
                    <div class="card-glyph"></div>
                    <h3>"Motion"</h3>
                    <p>"Animation that explains, not decorates. Mostly."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ArtDirection() -> impl IntoView {
    view! {
        <section id="art-direction" class="art-direction-section">
            <div class="cube"></div>
            <div class="floating-sphere"></div>
            <div class="section-copy">
                <h2>"Art direction"</h2>
                <p>"A steady hand on type, color, and pacing across everything that leaves the studio."</p>
            </div>
            <div id="studio-lottie" class="section-lottie"></div>
        </section>
    }
}

#[component]
pub fn ContactSection(contact: ContactConfig) -> impl IntoView {
    let tel_href = format!("tel:{}", contact.phone);
    view! {
        <section class="contact-section">
            <div id="get-in-touch-lottie" class="section-lottie"></div>
            <h2>"Say hello"</h2>
            <div class="contact-links">
                <a class="call-link" href=tel_href>{contact.phone.clone()}</a>
                <button id="emailBtn" class="email-link">{contact.email.clone()}</button>
            </div>
        </section>
    }
}
