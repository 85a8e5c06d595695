use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{format_date, format_yen, Expense};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::expenses::expense_edit_row::ExpenseEditRow;
use crate::components::toast::ToastHandle;
use crate::hooks::use_table_rows::use_table_rows;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Expense history table with inline editing and confirmed deletion.
#[function_component(ExpenseList)]
pub fn expense_list() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let state = use_table_rows::<Expense>(&api, &cache, QueryKey::Expenses);
    let editing = use_state(|| Option::<Uuid>::None);
    let pending_delete = use_state(|| Option::<Uuid>::None);

    if state.loading {
        return html! { <div class="placeholder">{"読み込み中..."}</div> };
    }
    if state.rows.is_empty() {
        return html! { <div class="placeholder">{"支出の記録がありません"}</div> };
    }

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
                match api.delete_expense(id).await {
                    Ok(()) => {
                        toasts.success("支出を削除しました", "記録を削除しました");
                        cache.dispatch(CacheAction::Invalidate(QueryKey::Expenses));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to delete expense:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "支出の削除に失敗しました。もう一度お試しください。",
                        );
                    }
                }
            });
        })
    };

    html! {
        <div class="list-section">
            <h2 class="section-title">{"支出履歴"}</h2>
            <div class="table-container">
                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>{"日付"}</th>
                            <th>{"カテゴリ"}</th>
                            <th>{"金額"}</th>
                            <th>{"メモ"}</th>
                            <th>{"操作"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for state.rows.iter().map(|expense| {
                            if *editing == Some(expense.id) {
                                let editing = editing.clone();
                                return html! {
                                    <ExpenseEditRow
                                        key={expense.id.to_string()}
                                        expense={expense.clone()}
                                        on_close={Callback::from(move |_| editing.set(None))}
                                    />
                                };
                            }

                            let start_edit = {
                                let editing = editing.clone();
                                let id = expense.id;
                                Callback::from(move |_| editing.set(Some(id)))
                            };
                            let request_delete = {
                                let pending_delete = pending_delete.clone();
                                let id = expense.id;
                                Callback::from(move |_| pending_delete.set(Some(id)))
                            };

                            html! {
                                <tr key={expense.id.to_string()}>
                                    <td>{format_date(expense.date)}</td>
                                    <td>{expense.category.label()}</td>
                                    <td class="amount">{format_yen(expense.amount)}</td>
                                    <td>{expense.memo.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="row-actions">
                                        <button type="button" class="btn btn-small" onclick={start_edit}>
                                            {"編集"}
                                        </button>
                                        <button type="button" class="btn btn-small btn-danger" onclick={request_delete}>
                                            {"削除"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>

            {if pending_delete.is_some() {
                html! {
                    <ConfirmDialog
                        message={"この支出記録を削除しますか?".to_string()}
                        on_result={on_confirm_result}
                    />
                }
            } else { html! {} }}
        </div>
    }
}
