use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared::{AuthEvent, Session};
use yew::Callback;

const STORAGE_KEY: &str = "kakeibo.session";

/// Handle returned by [`SessionStore::subscribe`]. Pass it back to
/// [`SessionStore::unsubscribe`] on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u32);

#[derive(Default)]
struct SessionStoreInner {
    session: Option<Session>,
    listeners: HashMap<u32, Callback<AuthEvent>>,
    next_listener: u32,
}

/// Holds the current session and fans authentication-state changes out
/// to subscribers. Clones share the same underlying store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<SessionStoreInner>>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if signed in.
    pub fn current(&self) -> Option<Session> {
        self.inner.borrow().session.clone()
    }

    /// Bearer token for table calls.
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .borrow()
            .session
            .as_ref()
            .map(|session| session.access_token.clone())
    }

    pub fn subscribe(&self, listener: Callback<AuthEvent>) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.insert(id, listener);
        ListenerId(id)
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.remove(&id.0);
    }

    /// Load the persisted session, if any. Every failure reads as "no
    /// session": the caller renders the signed-out path either way.
    pub fn restore(&self) -> Option<Session> {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok()??;
        let session = serde_json::from_str::<Session>(&raw).ok()?;
        self.inner.borrow_mut().session = Some(session.clone());
        Some(session)
    }

    /// Install a new session, persist it, and notify subscribers.
    pub fn set_session(&self, session: Session) {
        if let Some(storage) = local_storage() {
            if let Ok(raw) = serde_json::to_string(&session) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
        self.inner.borrow_mut().session = Some(session.clone());
        self.emit(AuthEvent::SignedIn(session));
    }

    /// Drop the session and notify subscribers.
    pub fn clear_session(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
        self.inner.borrow_mut().session = None;
        self.emit(AuthEvent::SignedOut);
    }

    fn emit(&self, event: AuthEvent) {
        // Collect first so a listener may unsubscribe during delivery
        let listeners: Vec<Callback<AuthEvent>> =
            self.inner.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener.emit(event.clone());
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}
