use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use shared::{
    AmountPatch, Credentials, ExpenseChanges, NewCreditCardPayment, NewExpense, NewFixedExpense,
    NewSubscription, PaymentAmountPatch, Session, User,
};

use crate::services::query_cache::QueryKey;
use crate::services::session::SessionStore;

const DEFAULT_API_URL: &str = "http://localhost:54321";
const DEFAULT_API_KEY: &str = "dev-anon-key";

/// Client for the hosted table and auth APIs. Every call returns either
/// a payload or a formatted error message; call sites branch on the
/// error before proceeding.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    sessions: SessionStore,
}

impl ApiClient {
    /// Create a client against the configured backend project.
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            base_url: option_env!("KAKEIBO_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            api_key: option_env!("KAKEIBO_API_KEY")
                .unwrap_or(DEFAULT_API_KEY)
                .to_string(),
            sessions,
        }
    }

    /// Create a client with a custom base URL and key.
    pub fn with_base_url(base_url: String, api_key: String, sessions: SessionStore) -> Self {
        Self {
            base_url,
            api_key,
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn bearer(&self) -> String {
        match self.sessions.access_token() {
            Some(token) => format!("Bearer {}", token),
            None => format!("Bearer {}", self.api_key),
        }
    }

    /// Fetch all rows of a table with its canonical ordering.
    pub async fn select_rows<T>(&self, key: QueryKey) -> Result<Vec<T>, String>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/rest/v1/{}?select=*&order={}",
            self.base_url,
            key.table(),
            key.order()
        );
        let response = Request::get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(error_text(response).await);
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("Failed to parse rows: {}", e))
    }

    /// Insert one row. The backend assigns the id.
    pub async fn insert_row<T: Serialize>(&self, key: QueryKey, row: &T) -> Result<(), String> {
        let url = format!("{}/rest/v1/{}", self.base_url, key.table());
        let response = Request::post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(error_text(response).await);
        }
        Ok(())
    }

    /// Update one row by id.
    pub async fn update_row<T: Serialize>(
        &self,
        key: QueryKey,
        id: Uuid,
        changes: &T,
    ) -> Result<(), String> {
        let url = format!("{}/rest/v1/{}?id=eq.{}", self.base_url, key.table(), id);
        let response = Request::patch(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .header("Prefer", "return=minimal")
            .json(changes)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(error_text(response).await);
        }
        Ok(())
    }

    /// Delete one row by id.
    pub async fn delete_row(&self, key: QueryKey, id: Uuid) -> Result<(), String> {
        let url = format!("{}/rest/v1/{}?id=eq.{}", self.base_url, key.table(), id);
        let response = Request::delete(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(error_text(response).await);
        }
        Ok(())
    }

    pub async fn insert_expense(&self, expense: &NewExpense) -> Result<(), String> {
        self.insert_row(QueryKey::Expenses, expense).await
    }

    pub async fn update_expense(&self, id: Uuid, changes: &ExpenseChanges) -> Result<(), String> {
        self.update_row(QueryKey::Expenses, id, changes).await
    }

    pub async fn delete_expense(&self, id: Uuid) -> Result<(), String> {
        self.delete_row(QueryKey::Expenses, id).await
    }

    pub async fn insert_fixed_expense(&self, expense: &NewFixedExpense) -> Result<(), String> {
        self.insert_row(QueryKey::FixedExpenses, expense).await
    }

    pub async fn update_fixed_expense_amount(
        &self,
        id: Uuid,
        patch: &AmountPatch,
    ) -> Result<(), String> {
        self.update_row(QueryKey::FixedExpenses, id, patch).await
    }

    pub async fn delete_fixed_expense(&self, id: Uuid) -> Result<(), String> {
        self.delete_row(QueryKey::FixedExpenses, id).await
    }

    pub async fn insert_subscription(&self, subscription: &NewSubscription) -> Result<(), String> {
        self.insert_row(QueryKey::Subscriptions, subscription).await
    }

    pub async fn update_subscription_amount(
        &self,
        id: Uuid,
        patch: &AmountPatch,
    ) -> Result<(), String> {
        self.update_row(QueryKey::Subscriptions, id, patch).await
    }

    pub async fn delete_subscription(&self, id: Uuid) -> Result<(), String> {
        self.delete_row(QueryKey::Subscriptions, id).await
    }

    pub async fn insert_credit_card_payment(
        &self,
        payment: &NewCreditCardPayment,
    ) -> Result<(), String> {
        self.insert_row(QueryKey::CreditCardPayments, payment).await
    }

    pub async fn update_credit_card_payment_amount(
        &self,
        id: Uuid,
        patch: &PaymentAmountPatch,
    ) -> Result<(), String> {
        self.update_row(QueryKey::CreditCardPayments, id, patch).await
    }

    pub async fn delete_credit_card_payment(&self, id: Uuid) -> Result<(), String> {
        self.delete_row(QueryKey::CreditCardPayments, id).await
    }

    /// Password sign-in against the auth API. On success the session is
    /// installed into the store, which notifies subscribers.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, String> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let session = self.auth_request(&url, credentials).await?;
        self.sessions.set_session(session.clone());
        Ok(session)
    }

    /// Create an account. The backend returns a session directly when
    /// email confirmation is disabled on the project.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<Session, String> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let session = self.auth_request(&url, credentials).await?;
        self.sessions.set_session(session.clone());
        Ok(session)
    }

    /// Current user for the held token. Used to confirm a restored
    /// session is still accepted by the auth API.
    pub async fn current_user(&self) -> Result<User, String> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = Request::get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(error_text(response).await);
        }
        response
            .json::<User>()
            .await
            .map_err(|e| format!("Failed to parse user: {}", e))
    }

    /// Revoke the session server-side and drop it locally. The local
    /// session is cleared even when the revoke call fails.
    pub async fn sign_out(&self) -> Result<(), String> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let result = Request::post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &self.bearer())
            .send()
            .await;
        self.sessions.clear_session();
        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    async fn auth_request(&self, url: &str, credentials: &Credentials) -> Result<Session, String> {
        let response = Request::post(url)
            .header("apikey", &self.api_key)
            .json(credentials)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(error_text(response).await);
        }
        response
            .json::<Session>()
            .await
            .map_err(|e| format!("Failed to parse session: {}", e))
    }
}

async fn error_text(response: Response) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    format!("Server error {}: {}", status, body)
}
