use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{BillingCycle, NewSubscription};

use crate::components::toast::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

#[derive(Properties, PartialEq)]
pub struct SubscriptionFormProps {
    /// Emitted after a successful insert so the hosting dialog can close.
    #[prop_or_default]
    pub on_success: Callback<()>,
}

/// Registers one subscription.
#[function_component(SubscriptionForm)]
pub fn subscription_form(props: &SubscriptionFormProps) -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");
    let toasts = use_context::<ToastHandle>().expect("Toast context not found");

    let name = use_state(String::new);
    let amount = use_state(String::new);
    let billing_cycle = use_state(|| BillingCycle::Monthly.as_str().to_string());
    let next_billing_date = use_state(String::new);
    let submitting = use_state(|| false);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_billing_cycle_change = {
        let billing_cycle = billing_cycle.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            billing_cycle.set(select.value());
        })
    };

    let on_next_billing_date_change = {
        let next_billing_date = next_billing_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            next_billing_date.set(input.value());
        })
    };

    let onsubmit = {
        let api = api.clone();
        let cache = cache.clone();
        let toasts = toasts.clone();
        let name = name.clone();
        let amount = amount.clone();
        let billing_cycle = billing_cycle.clone();
        let next_billing_date = next_billing_date.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match NewSubscription::from_input(
                &name,
                &amount,
                &billing_cycle,
                &next_billing_date,
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
            let name = name.clone();
            let amount = amount.clone();
            let billing_cycle = billing_cycle.clone();
            let next_billing_date = next_billing_date.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                submitting.set(true);

                match api.insert_subscription(&payload).await {
                    Ok(()) => {
                        toasts.success("成功", "サブスクリプションを登録しました。");
                        name.set(String::new());
                        amount.set(String::new());
                        billing_cycle.set(BillingCycle::Monthly.as_str().to_string());
                        next_billing_date.set(String::new());
                        cache.dispatch(CacheAction::Invalidate(QueryKey::Subscriptions));
                        on_success.emit(());
                    }
                    Err(error) => {
                        gloo::console::error!("Failed to insert subscription:", error);
                        toasts.error("エラー", "サブスクリプションの登録に失敗しました。");
                    }
                }

                submitting.set(false);
            });
        })
    };

    html! {
        <form class="entity-form" {onsubmit}>
            <div class="form-group">
                <label for="subscription-name">{"サービス名"}</label>
                <input
                    type="text"
                    id="subscription-name"
                    value={(*name).clone()}
                    onchange={on_name_change}
                    required={true}
                    disabled={*submitting}
                />
            </div>

            <div class="form-group">
                <label for="subscription-amount">{"金額"}</label>
                <input
                    type="number"
                    id="subscription-amount"
                    min="0"
                    value={(*amount).clone()}
                    onchange={on_amount_change}
                    required={true}
                    disabled={*submitting}
                />
            </div>

            <div class="form-group">
                <label for="subscription-billing-cycle">{"支払いサイクル"}</label>
                <select
                    id="subscription-billing-cycle"
                    value={(*billing_cycle).clone()}
                    onchange={on_billing_cycle_change}
                    disabled={*submitting}
                >
                    {for [BillingCycle::Monthly, BillingCycle::Yearly].iter().map(|cycle| {
                        html! {
                            <option
                                value={cycle.as_str()}
                                selected={*billing_cycle == cycle.as_str()}
                            >
                                {cycle.label()}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="subscription-next-billing-date">{"次回支払日"}</label>
                <input
                    type="date"
                    id="subscription-next-billing-date"
                    value={(*next_billing_date).clone()}
                    onchange={on_next_billing_date_change}
                    required={true}
                    disabled={*submitting}
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "登録中..." } else { "登録" }}
            </button>
        </form>
    }
}
