use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    /// Prompt shown in the dialog body.
    pub message: String,
    /// Receives `true` on confirm, `false` on cancel. The caller issues
    /// its delete call only on `true`.
    pub on_result: Callback<bool>,
}

/// Explicit confirmation step for destructive actions, decoupled from
/// any platform-native blocking dialog.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let confirm = {
        let on_result = props.on_result.clone();
        Callback::from(move |_| on_result.emit(true))
    };
    let cancel = {
        let on_result = props.on_result.clone();
        Callback::from(move |_| on_result.emit(false))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal confirm-dialog">
                <p class="confirm-message">{&props.message}</p>
                <div class="confirm-actions">
                    <button type="button" class="btn" onclick={cancel}>{"キャンセル"}</button>
                    <button type="button" class="btn btn-danger" onclick={confirm}>{"削除する"}</button>
                </div>
            </div>
        </div>
    }
}
