use super::utils::{validate_registration, RegistrationForm, GENDERS};
use crate::{
    api::{ApiClient, RegisterHrRequest},
    components::layout::{ErrorMessage, SuccessMessage},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "border p-2 w-full rounded";

#[component]
fn TextField(
    form: RwSignal<RegistrationForm>,
    #[prop(into)] placeholder: String,
    #[prop(optional)] input_type: Option<&'static str>,
    read: fn(&RegistrationForm) -> String,
    write: fn(&mut RegistrationForm, String),
) -> impl IntoView {
    view! {
        <input
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            class=INPUT_CLASS
            prop:value=move || form.with(read)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| write(f, value));
            }
        />
    }
}

#[component]
pub fn RegistrationPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let form = create_rw_signal(RegistrationForm::default());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);

    let register_action = create_action(move |request: &RegisterHrRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.register_hr(&request).await }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    success.set(Some("Registration successful!".into()));
                    form.update(RegistrationForm::reset);
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err.error));
                }
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        success.set(None);
        match form.with_untracked(validate_registration) {
            Ok(request) => {
                error.set(None);
                register_action.dispatch(request);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="bg-white p-6 rounded-2xl shadow-md w-full max-w-lg mt-10">
                <h1 class="text-2xl font-bold mb-4 text-center">"HR Registration"</h1>
                <form class="space-y-4" on:submit=on_submit>
                    <TextField form=form placeholder="Username"
                        read={|f| f.username.clone()} write={|f, v| f.username = v} />
                    <TextField form=form placeholder="Full Name"
                        read={|f| f.full_name.clone()} write={|f, v| f.full_name = v} />
                    <TextField form=form placeholder="Email" input_type="email"
                        read={|f| f.email.clone()} write={|f, v| f.email = v} />
                    <TextField form=form placeholder="Phone (11 digits)"
                        read={|f| f.phone.clone()} write={|f, v| f.phone = v} />
                    <TextField form=form placeholder="Password (min 8 chars, 1 uppercase, 1 special)"
                        input_type="password"
                        read={|f| f.password.clone()} write={|f, v| f.password = v} />
                    <textarea
                        placeholder="Address"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.address.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.address = value);
                        }
                    ></textarea>
                    <TextField form=form placeholder="Designation"
                        read={|f| f.designation.clone()} write={|f, v| f.designation = v} />
                    <TextField form=form placeholder="Salary"
                        read={|f| f.salary.clone()} write={|f, v| f.salary = v} />
                    <label class="flex items-center space-x-2">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_working)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.is_working = checked);
                            }
                        />
                        <span>"Currently Working"</span>
                    </label>
                    <TextField form=form placeholder="Age"
                        read={|f| f.age.clone()} write={|f, v| f.age = v} />
                    <div>
                        <p class="font-medium mb-2">"Gender:"</p>
                        {GENDERS
                            .iter()
                            .map(|gender| {
                                let gender = *gender;
                                view! {
                                    <label class="mr-4">
                                        <input
                                            type="radio"
                                            name="gender"
                                            value=gender
                                            class="mr-1"
                                            prop:checked=move || form.with(|f| f.gender == gender)
                                            on:change=move |_| form.update(|f| f.gender = gender.to_string())
                                        />
                                        {gender}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                    {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}

                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white py-2 rounded disabled:bg-gray-400"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Processing..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
