use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{format_yen, ExpenseCategory, NewExpense};

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Form recording a single expense. One insert per submit; on success
/// the fields reset and the expenses key is invalidated, on failure the
/// entered values stay so the user can retry.
#[function_component(ExpenseForm)]
pub fn expense_form() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let date = use_state(date_utils::today_input_value);
    let category = use_state(String::new);
    let amount = use_state(String::new);
    let memo = use_state(String::new);
    let submitting = use_state(|| false);

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

    let onsubmit = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        let date = date.clone();
        let category = category.clone();
        let amount = amount.clone();
        let memo = memo.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match NewExpense::from_input(&date, &category, &amount, &memo) {
                Ok(payload) => payload,
                Err(error) => {
                    toasts.error("入力内容を確認してください", &error.to_string());
                    return;
                }
            };

            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            let date = date.clone();
            let category = category.clone();
            let amount = amount.clone();
            let memo = memo.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                submitting.set(true);

                match api.insert_expense(&payload).await {
                    Ok(()) => {
                        toasts.success(
                            "支出を記録しました",
                            &format!(
                                "{}を{}として記録しました",
                                format_yen(payload.amount),
                                payload.category.label()
                            ),
                        );
                        date.set(date_utils::today_input_value());
                        category.set(String::new());
                        amount.set(String::new());
                        memo.set(String::new());
                        cache.dispatch(CacheAction::Invalidate(QueryKey::Expenses));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to insert expense:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "支出の登録に失敗しました。もう一度お試しください。",
                        );
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <div class="card">
            <h2 class="card-title">{"支出を記録"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="expense-date">{"日付"}</label>
                    <input
                        type="date"
                        id="expense-date"
                        value={(*date).clone()}
                        onchange={on_date_change}
                        required={true}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-category">{"カテゴリ"}</label>
                    <select
                        id="expense-category"
                        value={(*category).clone()}
                        onchange={on_category_change}
                        required={true}
                        disabled={*submitting}
                    >
                        <option value="" selected={category.is_empty()}>{"カテゴリを選択"}</option>
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
                </div>

                <div class="form-group">
                    <label for="expense-amount">{"金額"}</label>
                    <input
                        type="number"
                        id="expense-amount"
                        placeholder="1000"
                        min="0"
                        value={(*amount).clone()}
                        onchange={on_amount_change}
                        required={true}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="expense-memo">{"メモ"}</label>
                    <input
                        type="text"
                        id="expense-memo"
                        placeholder="買い物メモ"
                        value={(*memo).clone()}
                        onchange={on_memo_change}
                        disabled={*submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "記録中..." } else { "記録する" }}
                </button>
            </form>
        </div>
    }
}
