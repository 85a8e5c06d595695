use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{AuthEvent, Session};

use crate::services::api::ApiClient;

/// Session state exposed to the view layer. `None` renders the sign-in
/// path, whether signed out or the stored session failed to restore.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

/// Fetches the current session on mount and follows authentication
/// state changes for the lifetime of the component. The subscription is
/// torn down on unmount.
#[hook]
pub fn use_session(api: &ApiClient) -> SessionState {
    let session = use_state(|| Option::<Session>::None);

    use_effect_with((), {
        let api = api.clone();
        let session = session.clone();
        move |_| {
            let sessions = api.sessions().clone();

            let listener = sessions.subscribe(Callback::from({
                let session = session.clone();
                move |event: AuthEvent| match event {
                    AuthEvent::SignedIn(new_session) => session.set(Some(new_session)),
                    AuthEvent::SignedOut => session.set(None),
                }
            }));

            // Restore the stored session and confirm it against the auth
            // API. A failed fetch reads as "no session" and renders the
            // sign-in path; the failure itself is not surfaced.
            if let Some(restored) = sessions.restore() {
                let api = api.clone();
                let session = session.clone();
                spawn_local(async move {
                    match api.current_user().await {
                        Ok(_) => session.set(Some(restored)),
                        Err(error) => {
                            gloo::console::warn!("Session restore failed:", error);
                            session.set(None);
                        }
                    }
                });
            }

            move || sessions.unsubscribe(listener)
        }
    });

    SessionState {
        session: (*session).clone(),
    }
}
