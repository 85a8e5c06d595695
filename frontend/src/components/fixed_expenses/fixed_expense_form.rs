use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{ExpenseCategory, NewFixedExpense};

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Registers a recurring-cost template. The amount starts at zero and
/// is filled in later through the row editor.
#[function_component(FixedExpenseForm)]
pub fn fixed_expense_form() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let name = use_state(String::new);
    let category = use_state(String::new);
    let payment_day = use_state(String::new);
    let memo = use_state(String::new);
    let submitting = use_state(|| false);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_payment_day_change = {
        let payment_day = payment_day.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            payment_day.set(input.value());
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
        let name = name.clone();
        let category = category.clone();
        let payment_day = payment_day.clone();
        let memo = memo.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match NewFixedExpense::from_input(&name, &category, &payment_day, &memo)
            {
                Ok(payload) => payload,
                Err(error) => {
                    toasts.error("入力内容を確認してください", &error.to_string());
                    return;
                }
            };

            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            let name = name.clone();
            let category = category.clone();
            let payment_day = payment_day.clone();
            let memo = memo.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                submitting.set(true);

                match api.insert_fixed_expense(&payload).await {
                    Ok(()) => {
                        toasts.success(
                            "固定費テンプレートを登録しました",
                            &format!("{}を登録しました", payload.name),
                        );
                        name.set(String::new());
                        category.set(String::new());
                        payment_day.set(String::new());
                        memo.set(String::new());
                        cache.dispatch(CacheAction::Invalidate(QueryKey::FixedExpenses));
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to insert fixed expense:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "固定費の登録に失敗しました。もう一度お試しください。",
                        );
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <div class="card">
            <h2 class="card-title">{"固定費テンプレートを登録"}</h2>
            <form class="entity-form" {onsubmit}>
                <div class="form-group">
                    <label for="fixed-name">{"名称"}</label>
                    <input
                        type="text"
                        id="fixed-name"
                        placeholder="家賃"
                        value={(*name).clone()}
                        onchange={on_name_change}
                        required={true}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="fixed-category">{"カテゴリ"}</label>
                    <select
                        id="fixed-category"
                        value={(*category).clone()}
                        onchange={on_category_change}
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
                    <label for="fixed-payment-day">{"支払日"}</label>
                    <input
                        type="number"
                        id="fixed-payment-day"
                        placeholder="25"
                        min="1"
                        max="31"
                        value={(*payment_day).clone()}
                        onchange={on_payment_day_change}
                        disabled={*submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="fixed-memo">{"メモ"}</label>
                    <input
                        type="text"
                        id="fixed-memo"
                        placeholder="メモ"
                        value={(*memo).clone()}
                        onchange={on_memo_change}
                        disabled={*submitting}
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "登録中..." } else { "テンプレートを登録" }}
                </button>
            </form>
        </div>
    }
}
