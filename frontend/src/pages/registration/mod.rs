use leptos::*;

pub mod panel;
pub mod utils;

pub use panel::RegistrationPanel;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! { <RegistrationPanel /> }
}
