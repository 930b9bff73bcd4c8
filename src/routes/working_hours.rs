use crate::{
    errors::AppError,
    repositories::working_hours,
    services::working_hours as reconciler,
    state::AppState,
    structs::working_hours::{
        DaySchedulePayload, ReconcileSummary, WeekScheduleRequest, WorkingHourQuery,
    },
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new().route("/", get(get_week).put(put_week))
}

/// 取一週七天的編輯狀態，沒資料的天會帶預設工作時段
async fn get_week(
    State(state): State<AppState>,
    Query(query): Query<WorkingHourQuery>,
) -> Result<Json<Vec<DaySchedulePayload>>, AppError> {
    let slots = working_hours::get_slots(&state, query.company_id, query.staff_id).await?;

    Ok(Json(reconciler::project_week(&slots)))
}

/// 儲存一週工作時間：先重抓現況算差異，再併發套用。
/// 一定從最新資料算起，上次儲存失敗後重存才不會重複新增。
async fn put_week(
    State(state): State<AppState>,
    Json(req): Json<WeekScheduleRequest>,
) -> Result<Json<ReconcileSummary>, AppError> {
    if req.days.len() != 7 {
        return Err(AppError::Validation(format!(
            "days 必須剛好七天，收到 {}",
            req.days.len()
        )));
    }

    let initial = working_hours::get_slots(&state, req.company_id, req.staff_id).await?;
    let plan = reconciler::plan(&initial, &req.days);

    if plan.is_empty() {
        tracing::info!("working hours 無異動，不發任何操作");
        return Ok(Json(ReconcileSummary {
            changed: false,
            created: 0,
            updated: 0,
            deleted: 0,
        }));
    }

    let summary = ReconcileSummary {
        changed: true,
        created: plan.creates.len(),
        updated: plan.updates.len(),
        deleted: plan.deletes.len(),
    };

    reconciler::apply(&state, req.company_id, req.staff_id, &plan).await?;

    Ok(Json(summary))
}
