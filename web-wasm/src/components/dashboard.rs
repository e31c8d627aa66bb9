//! Patient dashboard
//!
//! Mock analytics only; every number here is static data.

use leptos::prelude::*;

struct Stat {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
}

struct Appointment {
    doctor: &'static str,
    date: &'static str,
    time: &'static str,
    status: &'static str,
}

struct Scan {
    kind: &'static str,
    date: &'static str,
    result: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { icon: "🧠", label: "Total Scans", value: "8" },
    Stat { icon: "📅", label: "Appointments", value: "3" },
    Stat { icon: "📄", label: "Reports", value: "12" },
    Stat { icon: "📈", label: "Health Score", value: "85%" },
];

const APPOINTMENTS: [Appointment; 2] = [
    Appointment { doctor: "Dr. Smith", date: "2024-04-15", time: "09:00 AM", status: "Upcoming" },
    Appointment { doctor: "Dr. Johnson", date: "2024-04-20", time: "02:30 PM", status: "Upcoming" },
];

const SCANS: [Scan; 2] = [
    Scan { kind: "MRI", date: "2024-03-10", result: "Normal" },
    Scan { kind: "CT", date: "2024-02-15", result: "Follow-up Required" },
];

const HEALTH_METRICS: [(&str, u8); 4] = [
    ("2024-01", 65),
    ("2024-02", 75),
    ("2024-03", 70),
    ("2024-04", 80),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <h1>"Patient Dashboard"</h1>

            <div class="stat-grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="card stat-card">
                                <span class="stat-icon">{stat.icon}</span>
                                <div>
                                    <p class="text-muted">{stat.label}</p>
                                    <p class="stat-value">{stat.value}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Health Metrics"</h2>
                <div class="metric-chart">
                    {HEALTH_METRICS
                        .iter()
                        .map(|(month, value)| {
                            view! {
                                <div class="metric-column">
                                    <div
                                        class="metric-bar"
                                        style=format!("height: {}%", value)
                                    />
                                    <span class="metric-label">{*month}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <h2>"Upcoming Appointments"</h2>
                {APPOINTMENTS
                    .iter()
                    .map(|a| {
                        view! {
                            <div class="list-row">
                                <div>
                                    <p class="list-title">{a.doctor}</p>
                                    <p class="text-muted">{a.date}" at "{a.time}</p>
                                </div>
                                <span class="list-status">{a.status}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Recent Scans"</h2>
                {SCANS
                    .iter()
                    .map(|scan| {
                        view! {
                            <div class="list-row">
                                <div>
                                    <p class="list-title">{scan.kind}" Scan"</p>
                                    <p class="text-muted">{scan.date}</p>
                                </div>
                                <span class="list-status">{scan.result}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
