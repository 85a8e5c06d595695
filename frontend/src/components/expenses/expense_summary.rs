use yew::prelude::*;

use shared::{category_totals, daily_series, format_yen, Expense};

use crate::components::expenses::daily_expense_chart::DailyExpenseChart;
use crate::hooks::use_table_rows::use_table_rows;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::query_cache::{QueryCacheHandle, QueryKey};

/// Daily trend chart and category breakdown over all expense rows.
/// Both series are recomputed from the fetched rows on every render;
/// nothing derived is ever written back.
#[function_component(ExpenseSummary)]
pub fn expense_summary() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not found");
    let cache = use_context::<QueryCacheHandle>().expect("QueryCache context not found");

    let state = use_table_rows::<Expense>(&api, &cache, QueryKey::Expenses);

    if state.rows.is_empty() {
        return html! {};
    }

    let series = daily_series(&state.rows, date_utils::today());
    let totals = category_totals(&state.rows);
    let overall: i64 = totals.iter().map(|entry| entry.total).sum();

    html! {
        <div class="summary-section">
            <h2 class="section-title">{"日別支出推移"}</h2>
            <DailyExpenseChart {series} loading={state.loading} />

            <h2 class="section-title">{"カテゴリ別支出"}</h2>
            <div class="category-summary card">
                <ul class="category-totals">
                    {for totals.iter().map(|entry| {
                        html! {
                            <li class="category-total">
                                <span class="category-label">{entry.category.label()}</span>
                                <span class="amount">{format_yen(entry.total)}</span>
                            </li>
                        }
                    })}
                </ul>
                <div class="category-overall">
                    <span>{"合計"}</span>
                    <span class="amount">{format_yen(overall)}</span>
                </div>
            </div>
        </div>
    }
}
