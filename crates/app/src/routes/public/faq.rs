use dioxus::prelude::*;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "How is my fare calculated?",
        "Each vehicle type has a base fare and a per-kilometre rate. The estimate uses the straight-line \
         distance between pickup and destination and may include a small demand multiplier.",
    ),
    (
        "Can I cancel a ride?",
        "Yes, as long as no driver has accepted it yet.",
    ),
    (
        "How do I become a driver?",
        "Register as a driver with your vehicle details. An admin reviews and approves your account before \
         you can accept rides.",
    ),
    (
        "Why was I sent to the sign-in page?",
        "Dashboards require an active session. If your session expired or could not be checked, sign in \
         again and you will be taken back to the page you asked for.",
    ),
];

#[component]
pub fn Faq() -> Element {
    rsx! {
        section { class: "faq-page",
            h1 { "Frequently asked questions" }
            for (question, answer) in QUESTIONS.iter() {
                details { class: "faq-item", key: "{question}",
                    summary { "{question}" }
                    p { "{answer}" }
                }
            }
        }
    }
}
