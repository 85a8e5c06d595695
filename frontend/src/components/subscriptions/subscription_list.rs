use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{format_yen, subscription_total, NewFixedExpense, Subscription};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::subscriptions::subscription_form::SubscriptionForm;
use crate::components::subscriptions::subscription_row::SubscriptionRow;
use crate::components::toast::ToastHandle;
use crate::hooks::use_table_rows::use_table_rows;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Subscription overview: per-cycle total, add dialog, and the one-time
/// export of the current total into a detached fixed-expense row.
#[function_component(SubscriptionList)]
pub fn subscription_list() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let state = use_table_rows::<Subscription>(&api, &cache, QueryKey::Subscriptions);
    let show_form = use_state(|| false);
    let pending_delete = use_state(|| Option::<Uuid>::None);

    let total = subscription_total(&state.rows);

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

    let add_to_fixed_expenses = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        Callback::from(move |_| {
            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            let payload = NewFixedExpense::subscription_snapshot(total);
            spawn_local(async move {
                match api.insert_fixed_expense(&payload).await {
                    Ok(()) => {
                        toasts.success(
                            "固定費に追加しました",
                            &format!("{}を固定費として登録しました", format_yen(payload.amount)),
                        );
                        cache.dispatch(CacheAction::Invalidate(QueryKey::FixedExpenses));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to add to fixed expenses:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "固定費への追加に失敗しました。もう一度お試しください。",
                        );
                    }
                }
            });
        })
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
                match api.delete_subscription(id).await {
                    Ok(()) => {
                        toasts.success("サブスクを削除しました", "登録を削除しました");
                        cache.dispatch(CacheAction::Invalidate(QueryKey::Subscriptions));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to delete subscription:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "サブスクの削除に失敗しました。もう一度お試しください。",
                        );
                    }
                }
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{"サブスクリプション"}</h1>
                <div class="page-actions">
                    <button type="button" class="btn btn-primary" onclick={open_form}>
                        {"サブスクを追加"}
                    </button>
                    <button type="button" class="btn" onclick={add_to_fixed_expenses}>
                        {"固定費に追加"}
                    </button>
                </div>
            </div>

            <div class="card">
                <h2 class="card-title">
                    {format!("合計金額: {}/月", format_yen(total))}
                </h2>

                {if state.loading {
                    html! { <div class="placeholder">{"読み込み中..."}</div> }
                } else if state.rows.is_empty() {
                    html! { <div class="placeholder">{"サブスクリプションの登録がありません"}</div> }
                } else {
                    html! {
                        <div class="table-container">
                            <table class="entity-table">
                                <thead>
                                    <tr>
                                        <th>{"サービス名"}</th>
                                        <th>{"金額"}</th>
                                        <th>{"支払いサイクル"}</th>
                                        <th>{"次回支払日"}</th>
                                        <th>{"操作"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for state.rows.iter().map(|subscription| {
                                        html! {
                                            <SubscriptionRow
                                                key={subscription.id.to_string()}
                                                subscription={subscription.clone()}
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
                                <h2>{"サブスクリプションを追加"}</h2>
                                <button type="button" class="btn btn-small" onclick={close_form}>
                                    {"閉じる"}
                                </button>
                            </div>
                            <SubscriptionForm on_success={on_form_success} />
                        </div>
                    </div>
                }
            } else { html! {} }}

            {if pending_delete.is_some() {
                html! {
                    <ConfirmDialog
                        message={"このサブスクリプションを削除しますか?".to_string()}
                        on_result={on_confirm_result}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
