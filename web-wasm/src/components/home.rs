//! Landing page component

use leptos::prelude::*;

use crate::app::Page;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📈",
        title: "AI-Powered Analysis",
        description: "Upload brain MRI scans for instant AI analysis",
    },
    Feature {
        icon: "👥",
        title: "Expert Consultation",
        description: "Connect with specialized neurologists",
    },
    Feature {
        icon: "🛡",
        title: "Comprehensive Care",
        description: "Track your medical history",
    },
];

#[component]
pub fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <div class="home">
            <div class="hero">
                <div class="hero-icon">"🧠"</div>
                <h1>"NeuroScan AI Diagnostics"</h1>
                <p class="hero-subtitle">
                    "Advanced brain MRI analysis powered by artificial intelligence"
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| set_page.set(Page::Diagnosis)
                    >
                        "Start Diagnosis →"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| set_page.set(Page::Appointments)
                    >
                        "Book Appointment"
                    </button>
                </div>
            </div>

            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p class="text-muted">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
