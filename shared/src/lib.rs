use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

/// Expense category as stored in the `category` column of `expenses`
/// and `fixed_expenses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Daily,
    Entertainment,
    Other,
    /// Any value the client does not recognize. Rendered with an empty
    /// label rather than treated as an error.
    Unknown,
}

impl Serialize for ExpenseCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExpenseCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ExpenseCategory::from_form_value(&value).unwrap_or(ExpenseCategory::Unknown))
    }
}

impl ExpenseCategory {
    /// Categories offered by the form selects, in display order.
    pub const SELECTABLE: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Daily,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Other,
    ];

    /// Display label for list cells and select options.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "食費",
            ExpenseCategory::Transport => "交通費",
            ExpenseCategory::Daily => "日用品",
            ExpenseCategory::Entertainment => "娯楽費",
            ExpenseCategory::Other => "その他",
            ExpenseCategory::Unknown => "",
        }
    }

    /// Wire value used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Daily => "daily",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Other => "other",
            ExpenseCategory::Unknown => "",
        }
    }

    /// Parse a `<select>` option value back into a category.
    pub fn from_form_value(value: &str) -> Option<ExpenseCategory> {
        match value {
            "food" => Some(ExpenseCategory::Food),
            "transport" => Some(ExpenseCategory::Transport),
            "daily" => Some(ExpenseCategory::Daily),
            "entertainment" => Some(ExpenseCategory::Entertainment),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

/// Recurrence period of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "毎月",
            BillingCycle::Yearly => "年間",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn from_form_value(value: &str) -> Option<BillingCycle> {
        match value {
            "monthly" => Some(BillingCycle::Monthly),
            "yearly" => Some(BillingCycle::Yearly),
            _ => None,
        }
    }
}

/// One row of the `expenses` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    /// Amount in yen. Integer, no minor units.
    pub amount: i64,
    pub memo: Option<String>,
}

/// Insert payload for `expenses`. The id is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: i64,
    pub memo: Option<String>,
}

impl NewExpense {
    /// Build an insert payload from raw form input. Numeric fields are
    /// parsed as integers; empty optional text becomes `None`.
    pub fn from_input(
        date: &str,
        category: &str,
        amount: &str,
        memo: &str,
    ) -> Result<NewExpense, FormError> {
        Ok(NewExpense {
            date: parse_date(date)?,
            category: ExpenseCategory::from_form_value(category).ok_or(FormError::MissingCategory)?,
            amount: parse_amount(amount)?,
            memo: optional_text(memo),
        })
    }
}

/// Update payload for an expense row edit. Carries the full editable
/// field set; the row id travels in the request path, not the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseChanges {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: i64,
    pub memo: Option<String>,
}

impl ExpenseChanges {
    pub fn from_input(
        date: &str,
        category: &str,
        amount: &str,
        memo: &str,
    ) -> Result<ExpenseChanges, FormError> {
        Ok(ExpenseChanges {
            date: parse_date(date)?,
            category: ExpenseCategory::from_form_value(category).ok_or(FormError::MissingCategory)?,
            amount: parse_amount(amount)?,
            memo: optional_text(memo),
        })
    }
}

/// One row of the `fixed_expenses` table: a recurring monthly cost
/// template. The amount is entered and edited independently of any
/// billing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
    pub category: Option<ExpenseCategory>,
    /// Day of month the cost is paid, 1-31.
    pub payment_day: Option<u8>,
    pub memo: Option<String>,
}

/// Insert payload for `fixed_expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFixedExpense {
    pub name: String,
    pub amount: i64,
    pub category: Option<ExpenseCategory>,
    pub payment_day: Option<u8>,
    pub memo: Option<String>,
}

impl NewFixedExpense {
    /// Build an insert payload from the template form. The amount starts
    /// at zero and is filled in later through the row editor.
    pub fn from_input(
        name: &str,
        category: &str,
        payment_day: &str,
        memo: &str,
    ) -> Result<NewFixedExpense, FormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(NewFixedExpense {
            name: name.to_string(),
            amount: 0,
            category: match category {
                "" => None,
                value => Some(
                    ExpenseCategory::from_form_value(value).ok_or(FormError::MissingCategory)?,
                ),
            },
            payment_day: parse_payment_day(payment_day)?,
            memo: optional_text(memo),
        })
    }

    /// Detached snapshot row created by the "add subscription total to
    /// fixed expenses" action. It does not link back to the
    /// subscriptions it summarizes.
    pub fn subscription_snapshot(total: i64) -> NewFixedExpense {
        NewFixedExpense {
            name: "サブスクリプション合計".to_string(),
            amount: total,
            category: None,
            payment_day: None,
            memo: None,
        }
    }
}

/// One row of the `subscriptions` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    /// Cost per billing cycle, in yen.
    pub amount: i64,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
}

/// Insert payload for `subscriptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubscription {
    pub name: String,
    pub amount: i64,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
}

impl NewSubscription {
    pub fn from_input(
        name: &str,
        amount: &str,
        billing_cycle: &str,
        next_billing_date: &str,
    ) -> Result<NewSubscription, FormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(NewSubscription {
            name: name.to_string(),
            amount: parse_amount(amount)?,
            billing_cycle: BillingCycle::from_form_value(billing_cycle)
                .ok_or(FormError::MissingBillingCycle)?,
            next_billing_date: parse_date(next_billing_date)?,
        })
    }
}

/// One row of the `credit_card_payments` table: a single payment event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardPayment {
    pub id: Uuid,
    pub card_name: String,
    pub payment_amount: i64,
    pub payment_date: NaiveDate,
    pub description: Option<String>,
}

/// Insert payload for `credit_card_payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCreditCardPayment {
    pub card_name: String,
    pub payment_amount: i64,
    pub payment_date: NaiveDate,
    pub description: Option<String>,
}

impl NewCreditCardPayment {
    pub fn from_input(
        card_name: &str,
        payment_amount: &str,
        payment_date: &str,
        description: &str,
    ) -> Result<NewCreditCardPayment, FormError> {
        let card_name = card_name.trim();
        if card_name.is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(NewCreditCardPayment {
            card_name: card_name.to_string(),
            payment_amount: parse_amount(payment_amount)?,
            payment_date: parse_date(payment_date)?,
            description: optional_text(description),
        })
    }
}

/// Inline-edit payload patching only the `amount` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountPatch {
    pub amount: i64,
}

/// Inline-edit payload patching only the `payment_amount` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAmountPatch {
    pub payment_amount: i64,
}

/// Authenticated user as returned by the auth API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

/// Session issued by the auth API on sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub user: User,
}

/// Credentials for password sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authentication state change delivered to session subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

/// Client-side validation failure raised while building a payload from
/// form input. No payload is sent when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    MissingCategory,
    MissingBillingCycle,
    InvalidDate,
    InvalidAmount,
    NegativeAmount,
    InvalidPaymentDay,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FormError::MissingName => "名称を入力してください",
            FormError::MissingCategory => "カテゴリを選択してください",
            FormError::MissingBillingCycle => "支払いサイクルを選択してください",
            FormError::InvalidDate => "日付を正しく入力してください",
            FormError::InvalidAmount => "金額には整数を入力してください",
            FormError::NegativeAmount => "金額には0以上の値を入力してください",
            FormError::InvalidPaymentDay => "支払日には1〜31の値を入力してください",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for FormError {}

/// Parse an amount text input into non-negative integer yen.
pub fn parse_amount(input: &str) -> Result<i64, FormError> {
    let amount = input
        .trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidAmount)?;
    if amount < 0 {
        return Err(FormError::NegativeAmount);
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date input, the value format of `<input type="date">`.
pub fn parse_date(input: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate)
}

/// Parse an optional payment-day input. Empty input means no payment day.
pub fn parse_payment_day(input: &str) -> Result<Option<u8>, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let day = input
        .parse::<u8>()
        .map_err(|_| FormError::InvalidPaymentDay)?;
    if !is_valid_payment_day(day) {
        return Err(FormError::InvalidPaymentDay);
    }
    Ok(Some(day))
}

/// Payment days are calendar days of month.
pub fn is_valid_payment_day(day: u8) -> bool {
    (1..=31).contains(&day)
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// One point of the trailing seven-day expense series.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub amount: i64,
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: i64,
}

/// Sum expense amounts per calendar day.
pub fn daily_totals(expenses: &[Expense]) -> HashMap<NaiveDate, i64> {
    let mut totals = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.date).or_insert(0) += expense.amount;
    }
    totals
}

/// The trailing seven days ending `today` inclusive. Days without
/// expenses contribute zero; the series is always length 7 regardless
/// of the span of the data.
pub fn daily_series(expenses: &[Expense], today: NaiveDate) -> Vec<DailyPoint> {
    let totals = daily_totals(expenses);
    (0..7)
        .map(|offset| {
            let date = today - Duration::days(6 - offset);
            DailyPoint {
                date,
                amount: totals.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Total spent per category, one entry per distinct category present in
/// the data. Categories with no expenses are omitted, not shown as zero.
/// Entries follow the form display order, with unrecognized categories
/// last.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<ExpenseCategory, i64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0) += expense.amount;
    }
    ExpenseCategory::SELECTABLE
        .iter()
        .chain(std::iter::once(&ExpenseCategory::Unknown))
        .filter_map(|category| {
            totals.get(category).map(|&total| CategoryTotal {
                category: *category,
                total,
            })
        })
        .collect()
}

/// Sum of per-cycle subscription costs.
pub fn subscription_total(subscriptions: &[Subscription]) -> i64 {
    subscriptions.iter().map(|s| s.amount).sum()
}

/// Sum of credit-card payment amounts.
pub fn payment_total(payments: &[CreditCardPayment]) -> i64 {
    payments.iter().map(|p| p.payment_amount).sum()
}

/// Format integer yen with thousands separation: `1234567` -> `¥1,234,567`.
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if amount < 0 {
        format!("-¥{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}

/// Display format for dates in list cells: `2024/01/05`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Short axis label for the daily chart: `1/5`.
pub fn format_date_short(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}/{}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str, category: ExpenseCategory, amount: i64) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            amount,
            memo: None,
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ExpenseCategory::Food.label(), "食費");
        assert_eq!(ExpenseCategory::Other.label(), "その他");
        // Unrecognized categories render as an empty label, not an error
        assert_eq!(ExpenseCategory::Unknown.label(), "");
    }

    #[test]
    fn test_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Food).unwrap(),
            "\"food\""
        );
        let parsed: ExpenseCategory = serde_json::from_str("\"transport\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Transport);
        // Values outside the enumeration fall into Unknown
        let parsed: ExpenseCategory = serde_json::from_str("\"gift\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::Unknown);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000"), Ok(1000));
        assert_eq!(parse_amount(" 250 "), Ok(250));
        assert_eq!(parse_amount("0"), Ok(0));
        assert_eq!(parse_amount("abc"), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount(""), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount("12.5"), Err(FormError::InvalidAmount));
        assert_eq!(parse_amount("-100"), Err(FormError::NegativeAmount));
    }

    #[test]
    fn test_parse_payment_day() {
        assert_eq!(parse_payment_day(""), Ok(None));
        assert_eq!(parse_payment_day("25"), Ok(Some(25)));
        assert_eq!(parse_payment_day("1"), Ok(Some(1)));
        assert_eq!(parse_payment_day("31"), Ok(Some(31)));
        assert_eq!(parse_payment_day("0"), Err(FormError::InvalidPaymentDay));
        assert_eq!(parse_payment_day("32"), Err(FormError::InvalidPaymentDay));
        assert_eq!(parse_payment_day("abc"), Err(FormError::InvalidPaymentDay));
    }

    #[test]
    fn test_new_expense_from_input() {
        let payload = NewExpense::from_input("2024-01-05", "food", "1200", "昼食").unwrap();
        assert_eq!(
            payload,
            NewExpense {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                category: ExpenseCategory::Food,
                amount: 1200,
                memo: Some("昼食".to_string()),
            }
        );
        // Empty optional text becomes null on the wire
        let payload = NewExpense::from_input("2024-01-05", "food", "1200", "  ").unwrap();
        assert_eq!(payload.memo, None);
    }

    #[test]
    fn test_new_expense_rejects_bad_input() {
        assert_eq!(
            NewExpense::from_input("2024-01-05", "food", "abc", ""),
            Err(FormError::InvalidAmount)
        );
        assert_eq!(
            NewExpense::from_input("2024-01-05", "", "100", ""),
            Err(FormError::MissingCategory)
        );
        assert_eq!(
            NewExpense::from_input("not-a-date", "food", "100", ""),
            Err(FormError::InvalidDate)
        );
    }

    #[test]
    fn test_new_fixed_expense_starts_at_zero() {
        let payload = NewFixedExpense::from_input("家賃", "other", "25", "").unwrap();
        assert_eq!(payload.amount, 0);
        assert_eq!(payload.payment_day, Some(25));
        assert_eq!(payload.category, Some(ExpenseCategory::Other));
        assert_eq!(payload.memo, None);
    }

    #[test]
    fn test_new_fixed_expense_optional_fields() {
        let payload = NewFixedExpense::from_input("保険", "", "", "").unwrap();
        assert_eq!(payload.category, None);
        assert_eq!(payload.payment_day, None);
        assert_eq!(
            NewFixedExpense::from_input("  ", "", "", ""),
            Err(FormError::MissingName)
        );
    }

    #[test]
    fn test_subscription_snapshot_is_detached() {
        let payload = NewFixedExpense::subscription_snapshot(2480);
        assert_eq!(payload.name, "サブスクリプション合計");
        assert_eq!(payload.amount, 2480);
        assert_eq!(payload.category, None);
        assert_eq!(payload.payment_day, None);
    }

    #[test]
    fn test_new_subscription_from_input() {
        let payload = NewSubscription::from_input("動画配信", "980", "monthly", "2024-02-01").unwrap();
        assert_eq!(payload.billing_cycle, BillingCycle::Monthly);
        assert_eq!(payload.amount, 980);
        assert_eq!(
            NewSubscription::from_input("動画配信", "980", "", "2024-02-01"),
            Err(FormError::MissingBillingCycle)
        );
    }

    #[test]
    fn test_new_credit_card_payment_from_input() {
        let payload =
            NewCreditCardPayment::from_input("メインカード", "5400", "2024-01-27", "").unwrap();
        assert_eq!(payload.payment_amount, 5400);
        assert_eq!(payload.description, None);
        assert_eq!(
            NewCreditCardPayment::from_input("", "5400", "2024-01-27", ""),
            Err(FormError::MissingName)
        );
    }

    #[test]
    fn test_expense_wire_format() {
        let json = r#"{
            "id": "6f2a4e9e-66f4-4bfa-9f3a-2a2d4b8f0e11",
            "date": "2024-01-01",
            "category": "food",
            "amount": 1000,
            "memo": null
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 1000);
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert_eq!(expense.memo, None);
        assert_eq!(
            expense.date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_daily_series_is_always_length_seven() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(daily_series(&[], today).len(), 7);

        let expenses = vec![expense("2024-01-01", ExpenseCategory::Food, 1000)];
        let series = daily_series(&expenses, today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(series[6].date, today);
    }

    #[test]
    fn test_daily_series_sums_and_zero_fills() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let expenses = vec![
            expense("2024-01-01", ExpenseCategory::Food, 1000),
            expense("2024-01-01", ExpenseCategory::Transport, 500),
            expense("2024-01-07", ExpenseCategory::Daily, 300),
            // Outside the trailing window, must not appear
            expense("2023-12-31", ExpenseCategory::Food, 9999),
        ];
        let series = daily_series(&expenses, today);
        assert_eq!(series[0].amount, 1500);
        assert_eq!(series[1].amount, 0);
        assert_eq!(series[5].amount, 0);
        assert_eq!(series[6].amount, 300);
    }

    #[test]
    fn test_category_totals_scenario() {
        let expenses = vec![
            expense("2024-01-01", ExpenseCategory::Food, 1000),
            expense("2024-01-01", ExpenseCategory::Transport, 500),
        ];
        let totals = category_totals(&expenses);
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: ExpenseCategory::Food,
                    total: 1000,
                },
                CategoryTotal {
                    category: ExpenseCategory::Transport,
                    total: 500,
                },
            ]
        );
    }

    #[test]
    fn test_category_totals_omits_absent_categories() {
        let expenses = vec![
            expense("2024-01-01", ExpenseCategory::Other, 100),
            expense("2024-01-03", ExpenseCategory::Other, 200),
        ];
        let totals = category_totals(&expenses);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, ExpenseCategory::Other);
        assert_eq!(totals[0].total, 300);
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_subscription_and_payment_totals() {
        let subscriptions = vec![
            Subscription {
                id: Uuid::new_v4(),
                name: "動画配信".to_string(),
                amount: 980,
                billing_cycle: BillingCycle::Monthly,
                next_billing_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            },
            Subscription {
                id: Uuid::new_v4(),
                name: "クラウド".to_string(),
                amount: 1500,
                billing_cycle: BillingCycle::Yearly,
                next_billing_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            },
        ];
        assert_eq!(subscription_total(&subscriptions), 2480);
        assert_eq!(subscription_total(&[]), 0);

        let payments = vec![CreditCardPayment {
            id: Uuid::new_v4(),
            card_name: "メインカード".to_string(),
            payment_amount: 5400,
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 27).unwrap(),
            description: None,
        }];
        assert_eq!(payment_total(&payments), 5400);
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(980), "¥980");
        assert_eq!(format_yen(1000), "¥1,000");
        assert_eq!(format_yen(1234567), "¥1,234,567");
        assert_eq!(format_yen(-1000), "-¥1,000");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024/01/05");
        assert_eq!(format_date_short(date), "1/5");
    }
}
