use gatehouse_common::auth::LoginRequest;
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::session::{self, use_session};
use crate::toast::use_toasts;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);

    let navigate = use_navigate();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_pending.set(true);

        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    session::sign_in(session, &response);
                    toasts.success("Signed in");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    logging::error!("login failed: {}", e);
                    toasts.error("Login failed");
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gatehouse Login"</h1>
                <p class="tagline">"Account Administration"</p>

                <form on:submit=submit>
                    <div class="form-group">
                        <label>"Username"</label>
                        <input
                            type="text"
                            required
                            placeholder="admin"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                        />
                    </div>

                    <div class="form-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            required
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
