//! Medical history form
//!
//! Static intake form; nothing is persisted.

use leptos::prelude::*;

const CONDITIONS: [&str; 4] = [
    "Diabetes",
    "Hypertension",
    "Heart Disease",
    "Neurological Conditions",
];

#[component]
pub fn MedicalHistoryPage() -> impl IntoView {
    view! {
        <div class="medical-history">
            <h1>"Medical History Form"</h1>

            <div class="card">
                <h2>"Personal Information"</h2>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="age">"Age"</label>
                        <input type="number" id="age" placeholder="Enter your age" />
                    </div>
                    <div class="form-group">
                        <label for="gender">"Gender"</label>
                        <input type="text" id="gender" placeholder="Enter your gender" />
                    </div>
                    <div class="form-group">
                        <label for="height">"Height (cm)"</label>
                        <input type="number" id="height" placeholder="Enter your height" />
                    </div>
                    <div class="form-group">
                        <label for="weight">"Weight (kg)"</label>
                        <input type="number" id="weight" placeholder="Enter your weight" />
                    </div>
                </div>
            </div>

            <div class="card">
                <h2>"Medical Conditions"</h2>
                {CONDITIONS
                    .iter()
                    .map(|condition| {
                        view! {
                            <label class="checkbox-row">
                                <input type="checkbox" />
                                {*condition}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Current Symptoms"</h2>
                <div class="form-group">
                    <label for="symptoms">"Describe your current symptoms"</label>
                    <textarea
                        id="symptoms"
                        placeholder="Please describe any symptoms you are currently experiencing"
                    />
                </div>
                <div class="form-group">
                    <label for="duration">"Duration of Symptoms"</label>
                    <input
                        type="text"
                        id="duration"
                        placeholder="How long have you had these symptoms?"
                    />
                </div>
            </div>

            <div class="card">
                <h2>"Medications"</h2>
                <div class="form-group">
                    <label for="medications">"Current Medications"</label>
                    <textarea
                        id="medications"
                        placeholder="List any medications you are currently taking"
                    />
                </div>
                <div class="form-group">
                    <label for="allergies">"Allergies"</label>
                    <textarea id="allergies" placeholder="List any known allergies" />
                </div>
            </div>

            <button class="btn btn-primary btn-block">"Submit Medical History"</button>
        </div>
    }
}
