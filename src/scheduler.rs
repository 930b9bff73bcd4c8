use crate::{
    jobs::{coupons::ExpiredCouponJob, images::UnusedImageJob},
    state::AppState,
    structs::jobs::AppJob,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

/// 註冊所有啟用的背景任務並啟動排程器
pub async fn initialize_scheduler(state: AppState) -> anyhow::Result<Arc<Mutex<JobScheduler>>> {
    let scheduler = Arc::new(Mutex::new(
        JobScheduler::new()
            .await
            .map_err(|err| anyhow::anyhow!("建立 JobScheduler 失敗: {}", err))?,
    ));

    let jobs: Vec<Arc<dyn AppJob + Send + Sync>> =
        vec![Arc::new(ExpiredCouponJob), Arc::new(UnusedImageJob)];

    for job in jobs {
        if !job.enabled() {
            continue;
        }

        let job_state = state.clone();
        let job_clone = job.clone();
        let cron_job = Job::new_async(job.cron_expression(), move |_uuid, _lock| {
            let job_state = job_state.clone();
            let job_clone = job_clone.clone();
            Box::pin(async move {
                tracing::debug!("執行排程任務 {}", job_clone.name());
                job_clone.run(job_state).await;
            })
        })
        .map_err(|err| anyhow::anyhow!("建立排程任務 {} 失敗: {}", job.name(), err))?;

        scheduler
            .lock()
            .await
            .add(cron_job)
            .await
            .map_err(|err| anyhow::anyhow!("註冊排程任務 {} 失敗: {}", job.name(), err))?;
    }

    scheduler
        .lock()
        .await
        .start()
        .await
        .map_err(|err| anyhow::anyhow!("啟動排程器失敗: {}", err))?;

    Ok(scheduler)
}
