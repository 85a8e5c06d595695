use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use shared::NewCreditCardPayment;

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

#[derive(Properties, PartialEq)]
pub struct CreditCardFormProps {
    /// Emitted after a successful insert so the hosting dialog can close.
    #[prop_or_default]
    pub on_success: Callback<()>,
}

/// Records one credit-card payment event.
#[function_component(CreditCardForm)]
pub fn credit_card_form(props: &CreditCardFormProps) -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let card_name = use_state(String::new);
    let amount = use_state(String::new);
    let payment_date = use_state(String::new);
    let description = use_state(String::new);
    let submitting = use_state(|| false);

    let on_card_name_change = {
        let card_name = card_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            card_name.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_payment_date_change = {
        let payment_date = payment_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            payment_date.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(textarea.value());
        })
    };

    let onsubmit = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        let card_name = card_name.clone();
        let amount = amount.clone();
        let payment_date = payment_date.clone();
        let description = description.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match NewCreditCardPayment::from_input(
                &card_name,
                &amount,
                &payment_date,
                &description,
            ) {
                Ok(payload) => payload,
                Err(error) => {
                    toasts.error("入力内容を確認してください", &error.to_string());
                    return;
                }
            };

            let api = api.clone();
            let cache = cache.clone();
            let toasts = toasts.clone();
            let card_name = card_name.clone();
            let amount = amount.clone();
            let payment_date = payment_date.clone();
            let description = description.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                submitting.set(true);

                match api.insert_credit_card_payment(&payload).await {
                    Ok(()) => {
                        toasts.success("成功", "支払い情報を登録しました。");
                        card_name.set(String::new());
                        amount.set(String::new());
                        payment_date.set(String::new());
                        description.set(String::new());
                        cache.dispatch(CacheAction::Invalidate(QueryKey::CreditCardPayments));
                        on_success.emit(());
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to insert credit card payment:", error);
                        toasts.error("エラー", "支払い情報の登録に失敗しました。");
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <form class="entity-form" {onsubmit}>
            <div class="form-group">
                <label for="card-name">{"カード名"}</label>
                <input
                    type="text"
                    id="card-name"
                    value={(*card_name).clone()}
                    onchange={on_card_name_change}
                    required={true}
                    disabled={*submitting}
                />
            </div>

            <div class="form-group">
                <label for="payment-amount">{"支払い金額"}</label>
                <input
                    type="number"
                    id="payment-amount"
                    min="0"
                    value={(*amount).clone()}
                    onchange={on_amount_change}
                    required={true}
                    disabled={*submitting}
                />
            </div>

            <div class="form-group">
                <label for="payment-date">{"支払い日"}</label>
                <input
                    type="date"
                    id="payment-date"
                    value={(*payment_date).clone()}
                    onchange={on_payment_date_change}
                    required={true}
                    disabled={*submitting}
                />
            </div>

            <div class="form-group">
                <label for="payment-description">{"説明"}</label>
                <textarea
                    id="payment-description"
                    value={(*description).clone()}
                    onchange={on_description_change}
                    disabled={*submitting}
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "登録中..." } else { "登録" }}
            </button>
        </form>
    }
}
