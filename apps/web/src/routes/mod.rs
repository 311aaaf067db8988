mod dashboard;
mod not_found;
mod register;
mod reset_password;
mod sign_in;
mod verify_email;

pub(crate) use dashboard::DashboardPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use sign_in::SignInPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=SignInPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
