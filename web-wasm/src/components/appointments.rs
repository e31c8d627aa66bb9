//! Appointment booking form
//!
//! Form state only; nothing is persisted or submitted anywhere.

use leptos::prelude::*;

const SPECIALISTS: [&str; 3] = ["Neurologist", "Radiologist", "Neurosurgeon"];
const TIME_SLOTS: [&str; 6] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM",
];

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let (booked, set_booked) = signal(false);

    view! {
        <div class="appointments">
            <h1>"Book an Appointment"</h1>

            <div class="form-grid">
                <div class="card">
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input type="text" id="name" placeholder="Enter your full name" />
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input type="email" id="email" placeholder="Enter your email" />
                    </div>
                    <div class="form-group">
                        <label for="phone">"Phone Number"</label>
                        <input type="text" id="phone" placeholder="Enter your phone number" />
                    </div>
                    <div class="form-group">
                        <label for="specialist">"Specialist"</label>
                        <select id="specialist">
                            {SPECIALISTS
                                .iter()
                                .map(|s| view! { <option>{*s}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="card">
                    <div class="form-group">
                        <label for="date">"Select Date"</label>
                        <input type="date" id="date" />
                    </div>
                    <div class="form-group">
                        <label for="time">"Preferred Time"</label>
                        <select id="time">
                            {TIME_SLOTS
                                .iter()
                                .map(|t| view! { <option>{*t}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <button
                        class="btn btn-primary btn-block"
                        on:click=move |_| set_booked.set(true)
                    >
                        "Book Appointment"
                    </button>
                    <Show when=move || booked.get()>
                        <p class="text-muted">"Appointment requested. We will be in touch."</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
