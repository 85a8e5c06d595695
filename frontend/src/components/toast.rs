use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Kind of notification; controls styling only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Shared handle for pushing notifications from any component. Toasts
/// dismiss themselves after three seconds.
#[derive(Clone)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl ToastHandle {
    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastKind::Error, title, message);
    }

    fn push(&self, kind: ToastKind, title: &str, message: &str) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher.dispatch(ToastAction::Push(Toast {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        }));

        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            TimeoutFuture::new(3000).await;
            dispatcher.dispatch(ToastAction::Dismiss(id));
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Provides [`ToastHandle`] via context and renders the toast stack.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0u32));
    let handle = ToastHandle {
        dispatcher: list.dispatcher(),
        next_id: next_id.clone(),
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <div class="toast-stack">
                {for list.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let dismiss = {
                        let dispatcher = list.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! {
                        <div key={toast.id} {class} onclick={dismiss}>
                            <strong class="toast-title">{&toast.title}</strong>
                            <span class="toast-message">{&toast.message}</span>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast {
            id,
            kind: ToastKind::Success,
            title: "成功".to_string(),
            message: "登録しました。".to_string(),
        }
    }

    #[test]
    fn test_push_and_dismiss() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast(0)));
        let list = list.reduce(ToastAction::Push(toast(1)));
        assert_eq!(list.toasts.len(), 2);

        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].id, 1);
    }

    #[test]
    fn test_dismiss_unknown_id_is_a_no_op() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Dismiss(42));
        assert!(list.toasts.is_empty());
    }
}
