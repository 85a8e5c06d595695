use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::Session;

use crate::services::api::ApiClient;

/// Account settings: shows who is signed in and offers sign-out. The
/// session store clears locally even when the revoke call fails, so the
/// app always returns to the sign-in path.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let session = use_context::<Session>().expect("Session context not found");

    let signing_out = use_state(|| false);

    let on_sign_out = {
        let api = api.clone();
        let signing_out = signing_out.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let signing_out = signing_out.clone();
            spawn_local(async move {
                signing_out.set(true);
                if let Err(error) = api.sign_out().await {
                    gloo::console::error!("Sign-out request failed:", error);
                }
                signing_out.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{"設定"}</h1>
            </div>

            <div class="card">
                <h2 class="card-title">{"アカウント"}</h2>
                <p class="account-email">{&session.user.email}</p>
                <button
                    type="button"
                    class="btn btn-danger"
                    onclick={on_sign_out}
                    disabled={*signing_out}
                >
                    {if *signing_out { "ログアウト中..." } else { "ログアウト" }}
                </button>
            </div>
        </div>
    }
}
