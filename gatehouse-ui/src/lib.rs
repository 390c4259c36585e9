use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod pages;
mod session;
mod toast;

use pages::{Dashboard, Login};
use session::{provide_session, sign_out};
use toast::{provide_toasts, ToastHost};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = provide_session();
    provide_toasts();

    view! {
        <Stylesheet id="leptos" href="/pkg/gatehouse-ui.css"/>
        <Title text="Gatehouse - Account Administration"/>
        <Meta name="description" content="Gatehouse account administration console"/>

        <Router>
            <nav class="navbar">
                <div class="navbar-brand">
                    <h1>"Gatehouse"</h1>
                    <span class="tagline">"Account Administration"</span>
                </div>
                <div class="navbar-menu">
                    <A href="/" class="navbar-item">"Dashboard"</A>
                    {move || {
                        let current = session.get();
                        if current.is_authenticated() {
                            view! {
                                <div class="navbar-session">
                                    <span class="navbar-item username">
                                        {current.username.clone().unwrap_or_default()}
                                    </span>
                                    <button
                                        class="btn-link"
                                        on:click=move |_| sign_out(session)
                                    >
                                        "Sign out"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <A href="/login" class="navbar-item">"Sign in"</A>
                            }.into_view()
                        }
                    }}
                </div>
            </nav>

            <main class="container">
                <Routes>
                    <Route path="/" view=Dashboard/>
                    <Route path="/login" view=Login/>
                </Routes>
            </main>

            <footer class="footer">
                <p>"Gatehouse v0.1.0 - Built with Rust + Leptos"</p>
            </footer>

            <ToastHost/>
        </Router>
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
