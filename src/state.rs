use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env::var, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pool: PgPool,
    redis_pool: Pool<RedisConnectionManager>,
    http_client: reqwest::Client,
    image_api_host: String,
}

impl AppState {
    pub async fn new() -> Self {
        let db_url = var("DATABASE_URL").expect("找不到 DATABASE_URL");

        // set up connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&db_url)
            .await
            .expect("can't connect to database");

        let redis_url =
            var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let manager =
            RedisConnectionManager::new(redis_url).expect("REDIS_URL 格式錯誤");
        let redis_pool = Pool::builder()
            .build(manager)
            .await
            .expect("can't connect to redis");

        let image_api_host =
            var("IMAGE_API_HOST").unwrap_or_else(|_| "http://localhost:8000".to_string());

        Self {
            pool,
            redis_pool,
            http_client: reqwest::Client::new(),
            image_api_host,
        }
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn get_redis_pool(&self) -> &Pool<RedisConnectionManager> {
        &self.redis_pool
    }

    pub fn get_http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn get_image_api_host(&self) -> &str {
        &self.image_api_host
    }
}
