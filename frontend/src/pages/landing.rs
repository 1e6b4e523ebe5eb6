use landing_page::error::report;
use log::info;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::effects::{icons, reveal, ripple, scroll};

const FEATURES: &[(&str, &str, &str)] = &[
    ("zap", "Fast by default", "Static pages served from the edge, no server round trips."),
    ("shield-check", "Validated input", "Every field is checked before anything leaves the page."),
    ("smartphone", "Works everywhere", "A responsive layout that reads well from phone to desktop."),
];

const LANDING_CSS: &str = r#"
    .feature-card, .section-header {
        opacity: 0;
        transform: translateY(20px);
    }
    .contact-form .form-group {
        display: flex;
        flex-direction: column;
        margin-bottom: 1rem;
    }
    .contact-form .form-input.has-error {
        border-color: #ef4444;
        box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
    }
    .contact-form .error-message {
        color: #ef4444;
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }
    .btn {
        position: relative;
        overflow: hidden;
    }
    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
    @media (prefers-reduced-motion: reduce) {
        .feature-card, .section-header {
            transition: none !important;
        }
    }
"#;

pub fn on_anchor_click() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| {
        report("smooth scroll", scroll::handle_anchor_click(&e));
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Page-level effects, set up once on mount
    {
        use_effect_with_deps(
            move |_| {
                report("initialize icons", icons::activate_icons());
                let observer = report("initialize animations", reveal::observe_reveals()).flatten();
                info!("✅ All features initialized");
                move || drop(observer)
            },
            (),
        );
    }

    let on_cta = Callback::from(|e: MouseEvent| {
        report("button ripple", ripple::spawn_ripple(&e));
        scroll::jump_to_contact_form();
    });

    let on_learn_more = Callback::from(|e: MouseEvent| {
        report("button ripple", ripple::spawn_ripple(&e));
        report("smooth scroll", scroll::handle_anchor_click(&e));
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <header class="hero" id="home">
                <div class="hero-content">
                    <h1 class="hero-title">{"Build something people remember"}</h1>
                    <p class="hero-subtitle">{"A small, fast landing page with a contact form that checks your input before it goes anywhere."}</p>
                    <div class="hero-cta-group">
                        <button id="primaryCta" class="btn btn-primary hero-cta" onclick={on_cta}>
                            <i data-lucide="send"></i>
                            {" Get in touch"}
                        </button>
                        <a href="#features" class="btn btn-secondary" onclick={on_learn_more}>
                            {"Learn more"}
                        </a>
                    </div>
                </div>
            </header>

            <section class="features-section" id="features">
                <div class="section-header">
                    <h2>{"Why it works"}</h2>
                    <p>{"Three things the page does for you."}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <i data-lucide={*icon}></i>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="contact-section" id="contact">
                <div class="section-header">
                    <h2>{"Contact us"}</h2>
                    <p>{"Leave a message and we'll get back to you."}</p>
                </div>
                <ContactForm />
            </section>

            <footer class="landing-footer">
                <a href="#home" onclick={on_anchor_click()}>{"Back to top"}</a>
            </footer>
        </div>
    }
}
