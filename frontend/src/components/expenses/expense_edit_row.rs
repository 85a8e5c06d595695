use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{Expense, ExpenseCategory, ExpenseChanges};

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

#[derive(Properties, PartialEq)]
pub struct ExpenseEditRowProps {
    pub expense: Expense,
    /// Emitted when editing ends: after a successful save, or on cancel.
    pub on_close: Callback<()>,
}

/// Inline editor for one expense row. Holds a local copy of the
/// editable fields; save issues one update keyed by id and exits
/// editing on success only, cancel discards without a network call.
#[function_component(ExpenseEditRow)]
pub fn expense_edit_row(props: &ExpenseEditRowProps) -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let date = use_state(|| props.expense.date.format("%Y-%m-%d").to_string());
    let category = use_state(|| props.expense.category.as_str().to_string());
    let amount = use_state(|| props.expense.amount.to_string());
    let memo = use_state(|| props.expense.memo.clone().unwrap_or_default());
    let saving = use_state(|| false);

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_memo_change = {
        let memo = memo.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            memo.set(input.value());
        })
    };

    let on_save = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        let id = props.expense.id;
        let date = date.clone();
        let category = category.clone();
        let amount = amount.clone();
        let memo = memo.clone();
        let saving = saving.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            let changes = match ExpenseChanges::from_input(&date, &category, &amount, &memo) {
                Ok(changes) => changes,
                Err(error) => {
                    toasts.error("入力内容を確認してください", &error.to_string());
                    return;
                }
            };

            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                saving.set(true);

                match api.update_expense(id, &changes).await {
                    Ok(()) => {
                        toasts.success(
                            "支出を更新しました",
                            &format!(
                                "{}円を{}として更新しました",
                                changes.amount,
                                changes.category.label()
                            ),
                        );
                        cache.dispatch(CacheAction::Invalidate(QueryKey::Expenses));
                        on_close.emit(());
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to update expense:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "支出の更新に失敗しました。もう一度お試しください。",
                        );
                    }
                }

                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <tr class="editing-row">
            <td>
                <input
                    type="date"
                    value={(*date).clone()}
                    onchange={on_date_change}
                    disabled={*saving}
                />
            </td>
            <td>
                <select
                    value={(*category).clone()}
                    onchange={on_category_change}
                    disabled={*saving}
                >
                    {for ExpenseCategory::SELECTABLE.iter().map(|cat| {
                        html! {
                            <option
                                value={cat.as_str()}
                                selected={*category == cat.as_str()}
                            >
                                {cat.label()}
                            </option>
                        }
                    })}
                </select>
            </td>
            <td>
                <input
                    type="number"
                    class="amount-input"
                    min="0"
                    value={(*amount).clone()}
                    onchange={on_amount_change}
                    disabled={*saving}
                />
            </td>
            <td>
                <input
                    type="text"
                    value={(*memo).clone()}
                    onchange={on_memo_change}
                    disabled={*saving}
                />
            </td>
            <td class="row-actions">
                <button type="button" class="btn btn-small btn-primary" onclick={on_save} disabled={*saving}>
                    {if *saving { "更新中..." } else { "保存" }}
                </button>
                <button type="button" class="btn btn-small" onclick={on_cancel} disabled={*saving}>
                    {"キャンセル"}
                </button>
            </td>
        </tr>
    }
}
