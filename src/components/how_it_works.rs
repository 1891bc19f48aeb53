use leptos::prelude::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <h2>"How instaclean works"</h2>
            <p class="section-lead">
                "The GTA favorite new way to clean. Book a cleaning service and a nearby expert will pick up the job."
            </p>
            <div class="steps">
                <div class="step">
                    <span class="step-number">"1"</span>
                    <div class="step-content">
                        <strong>"Tell us about the space"</strong>
                        <p>"Home, office, Airbnb or a fresh build. Rooms, bathrooms and extras."</p>
                    </div>
                </div>
                <div class="step">
                    <span class="step-number">"2"</span>
                    <div class="step-content">
                        <strong>"Pick a time"</strong>
                        <p>"Any day from tomorrow, morning or afternoon."</p>
                    </div>
                </div>
                <div class="step">
                    <span class="step-number">"3"</span>
                    <div class="step-content">
                        <strong>"We show up"</strong>
                        <p>"A nearby expert picks up the job and gets it done right."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
