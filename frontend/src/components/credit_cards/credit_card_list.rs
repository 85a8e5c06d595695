use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{format_yen, payment_total, CreditCardPayment};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::credit_cards::credit_card_form::CreditCardForm;
use crate::components::credit_cards::credit_card_row::CreditCardRow;
use crate::components::toast::ToastHandle;
use crate::hooks::use_table_rows::use_table_rows;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Credit-card payment history with the overall total paid.
#[function_component(CreditCardList)]
pub fn credit_card_list() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let state = use_table_rows::<CreditCardPayment>(&api, &cache, QueryKey::CreditCardPayments);
    let show_form = use_state(|| false);
    let pending_delete = use_state(|| Option::<Uuid>::None);

    let total = payment_total(&state.rows);

    let open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(true))
    };
    let close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };
    let on_form_success = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let on_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |id: Uuid| pending_delete.set(Some(id)))
    };

    let on_confirm_result = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |confirmed: bool| {
            let id = *pending_delete;
            pending_delete.set(None);
            if !confirmed {
                return;
            }
            let Some(id) = id else { return };

            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match api.delete_credit_card_payment(id).await {
                    Ok(()) => {
                        toasts.success("支払いを削除しました", "記録を削除しました");
                        cache.dispatch(CacheAction::Invalidate(QueryKey::CreditCardPayments));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to delete credit card payment:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "支払いの削除に失敗しました。もう一度お試しください。",
                        );
                    }
                }
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{"クレジットカード支払い"}</h1>
                <div class="page-actions">
                    <button type="button" class="btn btn-primary" onclick={open_form}>
                        {"支払いを追加"}
                    </button>
                </div>
            </div>

            <div class="card">
                <h2 class="card-title">{format!("総支払額: {}", format_yen(total))}</h2>

                {if state.loading {
                    html! { <div class="placeholder">{"読み込み中..."}</div> }
                } else if state.rows.is_empty() {
                    html! { <div class="placeholder">{"支払いの記録がありません"}</div> }
                } else {
                    html! {
                        <div class="table-container">
                            <table class="entity-table">
                                <thead>
                                    <tr>
                                        <th>{"カード名"}</th>
                                        <th>{"支払い金額"}</th>
                                        <th>{"支払い日"}</th>
                                        <th>{"説明"}</th>
                                        <th>{"操作"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for state.rows.iter().map(|payment| {
                                        html! {
                                            <CreditCardRow
                                                key={payment.id.to_string()}
                                                payment={payment.clone()}
                                                on_delete={on_delete.clone()}
                                            />
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                }}
            </div>

            {if *show_form {
                html! {
                    <div class="modal-overlay">
                        <div class="modal">
                            <div class="modal-header">
                                <h2>{"クレジットカード支払いを追加"}</h2>
                                <button type="button" class="btn btn-small" onclick={close_form}>
                                    {"閉じる"}
                                </button>
                            </div>
                            <CreditCardForm on_success={on_form_success} />
                        </div>
                    </div>
                }
            } else { html! {} }}

            {if pending_delete.is_some() {
                html! {
                    <ConfirmDialog
                        message={"この支払い記録を削除しますか?".to_string()}
                        on_result={on_confirm_result}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
