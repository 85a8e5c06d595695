use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::query_cache::{CacheAction, QueryCacheHandle, QueryKey};

/// Read-side state of one table query.
#[derive(Clone, PartialEq)]
pub struct RowsState<T: PartialEq> {
    pub rows: Vec<T>,
    pub loading: bool,
}

/// Cache-aware read path for a table. Fresh cached rows are served
/// without a network call; stale or missing entries are fetched and
/// stored back. Overlapping fetches are not fenced; the last response
/// to resolve wins.
#[hook]
pub fn use_table_rows<T>(api: &ApiClient, cache: &QueryCacheHandle, key: QueryKey) -> RowsState<T>
where
    T: Serialize + DeserializeOwned + Clone + PartialEq + 'static,
{
    let rows = use_state(Vec::<T>::new);
    let loading = use_state(|| true);

    let generation = cache.entry(key).generation;
    use_effect_with((key, generation), {
        let api = api.clone();
        let cache = cache.clone();
        let rows = rows.clone();
        let loading = loading.clone();
        move |_| {
            let entry = cache.entry(key);
            let cached: Option<Vec<T>> = if entry.stale {
                None
            } else {
                entry
                    .rows
                    .and_then(|raw| serde_json::from_value(raw).ok())
            };

            if let Some(parsed) = cached {
                rows.set(parsed);
                loading.set(false);
            } else {
                spawn_local(async move {
                    loading.set(true);
                    match api.select_rows::<T>(key).await {
                        Ok(fetched) => {
                            if let Ok(raw) = serde_json::to_value(&fetched) {
                                cache.dispatch(CacheAction::Store(key, raw));
                            }
                            rows.set(fetched);
                        }
                        Err(error) => {
                            gloo::console::error!("Failed to fetch", key.table(), error);
                        }
                    }
                    loading.set(false);
                });
            }

            || ()
        }
    });

    RowsState {
        rows: (*rows).clone(),
        loading: *loading,
    }
}
