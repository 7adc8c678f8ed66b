use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <div class="max-w-3xl mx-auto py-16 px-4 text-center">
                <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl">
                    "Office Management"
                </h1>
                <p class="mt-4 text-lg text-gray-600">
                    "Employees, attendance and tasks for the HR back office."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <a href="/login" class="px-6 py-3 rounded-md text-white bg-blue-600 hover:bg-blue-700 font-medium">
                        "Sign In"
                    </a>
                    <a href="/registration" class="px-6 py-3 rounded-md text-gray-800 bg-white border border-gray-300 hover:bg-gray-50 font-medium">
                        "Register"
                    </a>
                </div>
            </div>
        </div>
    }
}
