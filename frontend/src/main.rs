use yew::prelude::*;

mod components;
mod hooks;
mod services;

use shared::Session;

use components::auth_form::AuthForm;
use components::credit_cards::credit_card_list::CreditCardList;
use components::expenses::expense_form::ExpenseForm;
use components::expenses::expense_list::ExpenseList;
use components::expenses::expense_summary::ExpenseSummary;
use components::fixed_expenses::fixed_expense_form::FixedExpenseForm;
use components::fixed_expenses::fixed_expense_list::FixedExpenseList;
use components::header::Header;
use components::settings::SettingsPage;
use components::subscriptions::subscription_list::SubscriptionList;
use components::toast::ToastProvider;
use hooks::use_session::use_session;
use services::api::ApiClient;
use services::query_cache::{QueryCache, QueryCacheHandle};
use services::session::SessionStore;

/// Top-level page switched by the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    FixedExpenses,
    Subscriptions,
    CreditCards,
    Settings,
}

#[function_component(App)]
fn app() -> Html {
    let sessions = use_memo((), |_| SessionStore::new());
    let api = use_memo((), {
        let sessions = sessions.clone();
        move |_| ApiClient::new((*sessions).clone())
    });
    let cache: QueryCacheHandle = use_reducer(QueryCache::default);
    let session_state = use_session(&api);
    let page = use_state(|| Page::Home);

    let on_select = {
        let page = page.clone();
        Callback::from(move |selected: Page| page.set(selected))
    };

    html! {
        <ToastProvider>
            <ContextProvider<ApiClient> context={(*api).clone()}>
                <ContextProvider<QueryCacheHandle> context={cache.clone()}>
                    {match session_state.session.clone() {
                        None => html! {
                            <main class="auth-main">
                                <h1 class="app-title">{"家計簿アプリ"}</h1>
                                <AuthForm />
                            </main>
                        },
                        Some(session) => html! {
                            <ContextProvider<Session> context={session}>
                                <Header active_page={*page} on_select={on_select.clone()} />
                                <main class="main">
                                    <div class="container">
                                        {match *page {
                                            Page::Home => html! {
                                                <>
                                                    <ExpenseForm />
                                                    <ExpenseSummary />
                                                    <ExpenseList />
                                                </>
                                            },
                                            Page::FixedExpenses => html! {
                                                <>
                                                    <FixedExpenseForm />
                                                    <FixedExpenseList />
                                                </>
                                            },
                                            Page::Subscriptions => html! { <SubscriptionList /> },
                                            Page::CreditCards => html! { <CreditCardList /> },
                                            Page::Settings => html! { <SettingsPage /> },
                                        }}
                                    </div>
                                </main>
                            </ContextProvider<Session>>
                        },
                    }}
                </ContextProvider<QueryCacheHandle>>
            </ContextProvider<ApiClient>>
        </ToastProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
