use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{format_date, format_yen, parse_amount, CreditCardPayment, PaymentAmountPatch};

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

#[derive(Properties, PartialEq)]
pub struct CreditCardRowProps {
    pub payment: CreditCardPayment,
    /// Asks the list to confirm and delete this row.
    pub on_delete: Callback<Uuid>,
}

/// One payment row with inline amount editing.
#[function_component(CreditCardRow)]
pub fn credit_card_row(props: &CreditCardRowProps) -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let editing = use_state(|| false);
    let amount = use_state(|| props.payment.payment_amount.to_string());
    let saving = use_state(|| false);

    let payment = &props.payment;

    let start_edit = {
        let editing = editing.clone();
        let amount = amount.clone();
        let current = payment.payment_amount;
        Callback::from(move |_| {
            amount.set(current.to_string());
            editing.set(true);
        })
    };

    let cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_save = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        let id = payment.id;
        let amount = amount.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let parsed = match parse_amount(&amount) {
                Ok(parsed) => parsed,
                Err(error) => {
                    toasts.error("入力内容を確認してください", &error.to_string());
                    return;
                }
            };

            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            let editing = editing.clone();
            let saving = saving.clone();
            spawn_local(async move {
                saving.set(true);

                match api
                    .update_credit_card_payment_amount(id, &PaymentAmountPatch {
                        payment_amount: parsed,
                    })
                    .await
                {
                    Ok(()) => {
                        toasts.success(
                            "金額を更新しました",
                            &format!("支払い金額を{}円に更新しました", parsed),
                        );
                        cache.dispatch(CacheAction::Invalidate(QueryKey::CreditCardPayments));
                        editing.set(false);
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to update payment amount:", error);
                        toasts.error(
                            "エラーが発生しました",
                            "金額の更新に失敗しました。もう一度お試しください。",
                        );
                    }
                }

                saving.set(false);
            });
        })
    };

    let request_delete = {
        let on_delete = props.on_delete.clone();
        let id = payment.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <tr key={payment.id.to_string()}>
            <td>{&payment.card_name}</td>
            <td class="amount">
                {if *editing {
                    html! {
                        <input
                            type="number"
                            class="amount-input"
                            min="0"
                            value={(*amount).clone()}
                            onchange={on_amount_change}
                            disabled={*saving}
                        />
                    }
                } else {
                    html! { {format_yen(payment.payment_amount)} }
                }}
            </td>
            <td>{format_date(payment.payment_date)}</td>
            <td>{payment.description.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td class="row-actions">
                {if *editing {
                    html! {
                        <>
                            <button type="button" class="btn btn-small btn-primary" onclick={on_save} disabled={*saving}>
                                {if *saving { "更新中..." } else { "保存" }}
                            </button>
                            <button type="button" class="btn btn-small" onclick={cancel_edit} disabled={*saving}>
                                {"キャンセル"}
                            </button>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <button type="button" class="btn btn-small" onclick={start_edit}>
                                {"金額を編集"}
                            </button>
                            <button type="button" class="btn btn-small btn-danger" onclick={request_delete}>
                                {"削除"}
                            </button>
                        </>
                    }
                }}
            </td>
        </tr>
    }
}
