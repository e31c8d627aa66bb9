//! Main application component

use leptos::prelude::*;

use crate::components::{
    appointments::AppointmentsPage, dashboard::DashboardPage, diagnosis::DiagnosisPage,
    home::HomePage, medical_history::MedicalHistoryPage, navbar::Navbar,
};

/// Top-level screens. Navigation is a plain signal; no router.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Diagnosis,
    Appointments,
    MedicalHistory,
    Dashboard,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Diagnosis => "Diagnosis",
            Page::Appointments => "Appointments",
            Page::MedicalHistory => "Medical History",
            Page::Dashboard => "Dashboard",
        }
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    view! {
        <div class="app">
            <Navbar page=page set_page=set_page />

            <main class="container">
                {move || match page.get() {
                    Page::Home => view! { <HomePage set_page=set_page /> }.into_any(),
                    Page::Diagnosis => view! { <DiagnosisPage /> }.into_any(),
                    Page::Appointments => view! { <AppointmentsPage /> }.into_any(),
                    Page::MedicalHistory => view! { <MedicalHistoryPage /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
