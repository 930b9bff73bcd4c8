use std::collections::HashSet;

use crate::{
    repositories::{
        blogs::get_blogs_with_pagination,
        images::{delete, images},
    },
    state::AppState,
    structs::{images::DeleteImageRequest, jobs::AppJob},
};
use async_trait::async_trait;
use regex::Regex;

#[derive(Clone)]
pub struct UnusedImageJob;

#[async_trait]
impl AppJob for UnusedImageJob {
    fn name(&self) -> &str {
        "unused_images"
    }

    fn cron_expression(&self) -> &str {
        "0 30 * * * *"
    }

    // 每小時清除 blogs 中沒有在使用的圖片
    async fn run(&self, state: AppState) {
        // 取得所有 blogs
        let blogs = match get_blogs_with_pagination(&state, 1000, 0).await {
            Ok(blogs) => blogs,
            Err(err) => {
                tracing::error!("{}", err);
                vec![]
            }
        };

        // 定義 regex 抓取 markdown 裡的圖片路徑
        let image_regex = Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap();

        // 內文引用的圖片加上封面圖，合併成使用中的集合
        let mut image_paths: HashSet<String> = HashSet::new();
        for blog in blogs {
            if let Some(cover_url) = blog.cover_url {
                image_paths.insert(cover_url);
            }
            for cap in image_regex.captures_iter(&blog.markdown) {
                if let Some(m) = cap.get(1) {
                    image_paths.insert(m.as_str().to_string());
                }
            }
        }

        // 取圖片 server 上的所有圖片
        let all_images = match images(&state).await {
            Ok(images) => images,
            Err(err) => {
                tracing::error!("{}", err);
                vec![]
            }
        };

        // 對所有圖片檢查是否還有被使用
        for image in &all_images {
            if !image_paths.contains(&image.url) {
                let delete_data = DeleteImageRequest {
                    file_name: image.name.to_owned(),
                };
                let _ = delete(&state, delete_data).await;
            }
        }
    }
}
