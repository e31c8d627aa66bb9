//! Navigation bar component

use leptos::prelude::*;

use crate::app::Page;

const LINKS: [Page; 4] = [
    Page::Diagnosis,
    Page::Appointments,
    Page::MedicalHistory,
    Page::Dashboard,
];

#[component]
pub fn Navbar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a
                class="navbar-brand"
                on:click=move |_| set_page.set(Page::Home)
            >
                <span class="brand-icon">"🧠"</span>
                <span class="brand-name">"NeuroScan AI"</span>
            </a>

            <div class="navbar-links">
                {LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                class="nav-link"
                                class:active=move || page.get() == link
                                on:click=move |_| set_page.set(link)
                            >
                                {link.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
