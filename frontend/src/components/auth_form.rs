use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::Credentials;

use crate::services::api::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Email/password sign-in and sign-up form. On success the session
/// store notifies subscribers and the app re-renders authenticated; the
/// form itself never navigates.
#[function_component(AuthForm)]
pub fn auth_form() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");

    let mode = use_state(|| AuthMode::SignIn);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);

    let on_email_change = {
        let email = email.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            form_error.set(None);
        })
    };

    let on_password_change = {
        let password = password.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            form_error.set(None);
        })
    };

    let toggle_mode = {
        let mode = mode.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            mode.set(match *mode {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            });
            form_error.set(None);
        })
    };

    let onsubmit = {
        let api = api.clone();
        let mode = mode.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api = api.clone();
            let mode = *mode;
            let email = email.clone();
            let password = password.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            spawn_local(async move {
                submitting.set(true);
                form_error.set(None);

                let credentials = Credentials {
                    email: (*email).clone(),
                    password: (*password).clone(),
                };
                let result = match mode {
                    AuthMode::SignIn => api.sign_in(&credentials).await,
                    AuthMode::SignUp => api.sign_up(&credentials).await,
                };
                match result {
                    Ok(_) => {
                        // The session store has already notified the app;
                        // this form is about to unmount
                        password.set(String::new());
                    }
                    Err(error) => {
                        gloo::console::error!("Authentication failed:", error);
                        form_error.set(Some(match mode {
                            AuthMode::SignIn => "ログインに失敗しました。メールアドレスとパスワードを確認してください。".to_string(),
                            AuthMode::SignUp => "新規登録に失敗しました。もう一度お試しください。".to_string(),
                        }));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let (submit_label, toggle_label) = match *mode {
        AuthMode::SignIn => ("ログイン", "アカウントをお持ちでない方は新規登録"),
        AuthMode::SignUp => ("新規登録", "すでにアカウントをお持ちの方はログイン"),
    };

    html! {
        <div class="card auth-card">
            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="auth-form" {onsubmit}>
                <div class="form-group">
                    <label for="email">{"メールアドレス"}</label>
                    <input
                        type="email"
                        id="email"
                        value={(*email).clone()}
                        onchange={on_email_change}
                        required={true}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"パスワード"}</label>
                    <input
                        type="password"
                        id="password"
                        value={(*password).clone()}
                        onchange={on_password_change}
                        required={true}
                        disabled={*submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "送信中..." } else { submit_label }}
                </button>
            </form>

            <button type="button" class="link-button" onclick={toggle_mode}>
                {toggle_label}
            </button>
        </div>
    }
}
