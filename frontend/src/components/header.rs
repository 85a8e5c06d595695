use yew::prelude::*;

use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

const NAV_ITEMS: [(Page, &str); 5] = [
    (Page::Home, "支出"),
    (Page::FixedExpenses, "固定費"),
    (Page::Subscriptions, "サブスクリプション"),
    (Page::CreditCards, "クレジットカード"),
    (Page::Settings, "設定"),
];

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1 class="app-title">{"家計簿アプリ"}</h1>
                <nav class="nav">
                    {for NAV_ITEMS.iter().map(|(page, label)| {
                        let class = if *page == props.active_page {
                            "nav-button active"
                        } else {
                            "nav-button"
                        };
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let page = *page;
                            Callback::from(move |_| on_select.emit(page))
                        };
                        html! {
                            <button type="button" {class} {onclick}>{*label}</button>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
