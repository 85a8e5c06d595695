use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::FixedExpense;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::fixed_expenses::fixed_expense_row::FixedExpenseRow;
use crate::components::toast::ToastHandle;
use crate::hooks::use_table_rows::use_table_rows;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Fixed-cost templates ordered by payment day.
#[function_component(FixedExpenseList)]
pub fn fixed_expense_list() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let state = use_table_rows::<FixedExpense>(&api, &cache, QueryKey::FixedExpenses);
    let pending_delete = use_state(|| Option::<Uuid>::None);

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
                match api.delete_fixed_expense(id).await {
                    Ok(()) => {
                        toasts.success("固定費を削除しました", "テンプレートを削除しました");
                        cache.dispatch(CacheAction::Invalidate(QueryKey::FixedExpenses));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to delete fixed expense:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "固定費の削除に失敗しました。もう一度お試しください。",
                        );
                    }
                }
            });
        })
    };

    if state.loading {
        return html! { <div class="placeholder">{"読み込み中..."}</div> };
    }
    if state.rows.is_empty() {
        return html! { <div class="placeholder">{"固定費の登録がありません"}</div> };
    }

    html! {
        <div class="list-section">
            <h2 class="section-title">{"固定費一覧"}</h2>
            <div class="table-container">
                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>{"名称"}</th>
                            <th>{"カテゴリ"}</th>
                            <th>{"金額"}</th>
                            <th>{"支払日"}</th>
                            <th>{"メモ"}</th>
                            <th>{"操作"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for state.rows.iter().map(|expense| {
                            html! {
                                <FixedExpenseRow
                                    key={expense.id.to_string()}
                                    expense={expense.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            }
                        })}
                    </tbody>
                </table>
            </div>

            {if pending_delete.is_some() {
                html! {
                    <ConfirmDialog
                        message={"この固定費テンプレートを削除しますか?".to_string()}
                        on_result={on_confirm_result}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
