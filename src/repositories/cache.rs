use crate::state::AppState;
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};

/// 列表快取一小時，異動時會主動失效
const CACHE_TTL_SECONDS: u64 = 3600;

fn list_key(resource: &str) -> String {
    format!("cache:list:{}", resource)
}

/// 讀列表快取，任何 redis 錯誤都視為 cache miss，不影響請求
pub async fn get_list<T: DeserializeOwned>(state: &AppState, resource: &str) -> Option<Vec<T>> {
    let mut conn = match state.get_redis_pool().get().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!("redis pool get 失敗: {}", err);
            return None;
        }
    };

    let raw: Option<String> = match conn.get(list_key(resource)).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("redis get 失敗: {}", err);
            return None;
        }
    };

    raw.and_then(|json| serde_json::from_str(&json).ok())
}

/// 寫列表快取，失敗只記 log
pub async fn set_list<T: Serialize>(state: &AppState, resource: &str, values: &[T]) {
    let json = match serde_json::to_string(values) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!("快取序列化失敗: {}", err);
            return;
        }
    };

    let mut conn = match state.get_redis_pool().get().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!("redis pool get 失敗: {}", err);
            return;
        }
    };

    if let Err(err) = conn
        .set_ex::<_, _, ()>(list_key(resource), json, CACHE_TTL_SECONDS)
        .await
    {
        tracing::warn!("redis set_ex 失敗: {}", err);
    }
}

/// 資料異動成功後呼叫，讓對應資源的列表快取失效
pub async fn invalidate_list(state: &AppState, resource: &str) {
    let mut conn = match state.get_redis_pool().get().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!("redis pool get 失敗: {}", err);
            return;
        }
    };

    if let Err(err) = conn.del::<_, ()>(list_key(resource)).await {
        tracing::warn!("redis del 失敗: {}", err);
    }
}
