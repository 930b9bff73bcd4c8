use std::collections::{HashMap, HashSet};

use crate::{
    errors::AppError,
    repositories::working_hours as repo,
    state::AppState,
    structs::working_hours::{
        weekday_index, DaySchedulePayload, DbWorkingHourSlot, SlotPayload, WEEKDAY_NAMES,
    },
};
use chrono::NaiveTime;
use futures::future::join_all;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct SlotCreate {
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_break: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotUpdate {
    pub id: i64,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_break: bool,
}

#[derive(Debug, Default)]
pub struct ReconcilePlan {
    pub creates: Vec<SlotCreate>,
    pub updates: Vec<SlotUpdate>,
    pub deletes: Vec<i64>,
}

impl ReconcilePlan {
    pub fn is_empty(&self) -> bool {
        self.creates.is_empty() && self.updates.is_empty() && self.deletes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.creates.len() + self.updates.len() + self.deletes.len()
    }
}

/// 比對資料庫現況與編輯後的一週狀態，算出最小的新增/修改/刪除集合。
///
/// 規則：
/// - 停用的天，該天既有的 id 全部刪除
/// - 啟用的天，工作時段在前、休息時段在後，有已知 id 的發修改（內容沒變就跳過）、
///   沒有 id 的發新增；該天既有但不在畫面上的 id 視為被移除，發刪除
/// - 工作時段在天還啟用時永遠不會被刪，只會新增或修改
pub fn plan(initial: &[DbWorkingHourSlot], days: &[DaySchedulePayload]) -> ReconcilePlan {
    let by_id: HashMap<i64, &DbWorkingHourSlot> =
        initial.iter().map(|slot| (slot.id, slot)).collect();

    // 依星期分組既有的 id，對不到名稱的記 log 後略過
    let mut ids_for_day: [Vec<i64>; 7] = Default::default();
    for slot in initial {
        match weekday_index(&slot.day_of_week) {
            Some(day) => ids_for_day[day].push(slot.id),
            None => {
                tracing::warn!(
                    "slot {} 的星期名稱無法識別，略過: {}",
                    slot.id,
                    slot.day_of_week
                );
            }
        }
    }

    let mut plan = ReconcilePlan::default();

    for (day, schedule) in days.iter().enumerate().take(7) {
        let day_name = WEEKDAY_NAMES[day];
        let initial_ids = &ids_for_day[day];

        if !schedule.is_active {
            // 整天停用，既有資料全刪
            plan.deletes.extend(initial_ids.iter().copied());
            continue;
        }

        let mut kept: HashSet<i64> = HashSet::new();

        let desired = std::iter::once((&schedule.work, false))
            .chain(schedule.breaks.iter().map(|slot| (slot, true)));

        for (slot, is_break) in desired {
            match slot.id.filter(|id| by_id.contains_key(id)) {
                Some(id) => {
                    kept.insert(id);
                    let existing = by_id[&id];
                    let unchanged = existing.day_of_week == day_name
                        && existing.start_time == slot.start
                        && existing.end_time == slot.end
                        && existing.is_break == is_break;
                    if !unchanged {
                        plan.updates.push(SlotUpdate {
                            id,
                            day_of_week: day_name.to_string(),
                            start_time: slot.start,
                            end_time: slot.end,
                            is_break,
                        });
                    }
                }
                None => plan.creates.push(SlotCreate {
                    day_of_week: day_name.to_string(),
                    start_time: slot.start,
                    end_time: slot.end,
                    is_break,
                }),
            }
        }

        // 該天既有但已不在畫面上的 id（被移除的休息時段）
        for id in initial_ids {
            if !kept.contains(id) {
                plan.deletes.push(*id);
            }
        }
    }

    plan
}

/// 把資料庫的平面清單整理成七天的編輯狀態，沒資料的天帶預設工作時段
pub fn project_week(slots: &[DbWorkingHourSlot]) -> Vec<DaySchedulePayload> {
    let mut days: Vec<DaySchedulePayload> = (0..7)
        .map(|_| DaySchedulePayload {
            is_active: false,
            work: default_work_slot(),
            breaks: vec![],
        })
        .collect();

    for slot in slots {
        let Some(day) = weekday_index(&slot.day_of_week) else {
            tracing::warn!(
                "slot {} 的星期名稱無法識別，略過: {}",
                slot.id,
                slot.day_of_week
            );
            continue;
        };

        let entry = &mut days[day];
        entry.is_active = true;

        let payload = SlotPayload {
            id: Some(slot.id),
            start: slot.start_time,
            end: slot.end_time,
        };

        if slot.is_break {
            entry.breaks.push(payload);
        } else {
            entry.work = payload;
        }
    }

    for day in &mut days {
        day.breaks.sort_by_key(|slot| slot.start);
    }

    days
}

fn default_work_slot() -> SlotPayload {
    SlotPayload {
        id: None,
        start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    }
}

/// 併發送出計畫裡所有的新增/修改/刪除，彼此動到的是不同筆資料，不需要順序。
/// 全部結束後才回報：任何一筆失敗就整體視為失敗，不做回滾，
/// 下次儲存會重新抓資料計算差異，自然只重試還需要的操作。
pub async fn apply(
    state: &AppState,
    company_id: Uuid,
    staff_id: Option<i64>,
    plan: &ReconcilePlan,
) -> Result<(), AppError> {
    let creates = join_all(
        plan.creates
            .iter()
            .map(|slot| repo::create_slot(state, company_id, staff_id, slot)),
    );
    let updates = join_all(plan.updates.iter().map(|slot| repo::update_slot(state, slot)));
    let deletes = join_all(plan.deletes.iter().map(|id| repo::delete_slot(state, *id)));

    let (create_results, update_results, delete_results) =
        futures::join!(creates, updates, deletes);

    for err in create_results.iter().filter_map(|r| r.as_ref().err()) {
        tracing::error!("新增時段失敗: {}", err);
    }
    for err in update_results.iter().filter_map(|r| r.as_ref().err()) {
        tracing::error!("修改時段失敗: {}", err);
    }
    for err in delete_results.iter().filter_map(|r| r.as_ref().err()) {
        tracing::error!("刪除時段失敗: {}", err);
    }

    let failed = create_results.iter().filter(|r| r.is_err()).count()
        + update_results.iter().filter(|r| r.is_err()).count()
        + delete_results.iter().filter(|r| r.is_err()).count();

    if failed > 0 {
        return Err(AppError::ScheduleSync {
            failed,
            total: plan.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn db_slot(id: i64, day: &str, start: NaiveTime, end: NaiveTime, is_break: bool) -> DbWorkingHourSlot {
        DbWorkingHourSlot {
            id,
            company_id: Uuid::nil(),
            staff_id: None,
            day_of_week: day.to_string(),
            start_time: start,
            end_time: end,
            is_break,
        }
    }

    fn slot(id: Option<i64>, start: NaiveTime, end: NaiveTime) -> SlotPayload {
        SlotPayload { id, start, end }
    }

    fn active_day(work: SlotPayload, breaks: Vec<SlotPayload>) -> DaySchedulePayload {
        DaySchedulePayload {
            is_active: true,
            work,
            breaks,
        }
    }

    fn inactive_week() -> Vec<DaySchedulePayload> {
        (0..7)
            .map(|_| DaySchedulePayload {
                is_active: false,
                work: slot(None, t(9, 0), t(17, 0)),
                breaks: vec![],
            })
            .collect()
    }

    #[test]
    fn unchanged_schedule_produces_empty_plan() {
        let initial = vec![
            db_slot(1, "Monday", t(9, 0), t(17, 0), false),
            db_slot(2, "Monday", t(12, 0), t(13, 0), true),
            db_slot(3, "Tuesday", t(10, 0), t(18, 0), false),
        ];

        let week = project_week(&initial);
        let plan = plan(&initial, &week);

        assert!(plan.is_empty());
    }

    #[test]
    fn activating_a_day_creates_its_work_slot() {
        let mut week = inactive_week();
        week[1] = active_day(slot(None, t(9, 0), t(17, 0)), vec![]);

        let plan = plan(&[], &week);

        assert_eq!(plan.creates.len(), 1);
        assert_eq!(plan.creates[0].day_of_week, "Monday");
        assert!(!plan.creates[0].is_break);
        assert!(plan.updates.is_empty());
        assert!(plan.deletes.is_empty());
    }

    #[test]
    fn deactivating_a_day_deletes_every_row() {
        let initial = vec![
            db_slot(1, "Wednesday", t(9, 0), t(17, 0), false),
            db_slot(2, "Wednesday", t(12, 0), t(12, 30), true),
        ];

        let plan = plan(&initial, &inactive_week());

        assert!(plan.creates.is_empty());
        assert!(plan.updates.is_empty());
        let mut deletes = plan.deletes.clone();
        deletes.sort();
        assert_eq!(deletes, vec![1, 2]);
    }

    #[test]
    fn removing_a_break_deletes_it_without_touching_the_work_slot() {
        let initial = vec![
            db_slot(1, "Monday", t(9, 0), t(17, 0), false),
            db_slot(2, "Monday", t(12, 0), t(13, 0), true),
        ];

        let mut week = inactive_week();
        week[1] = active_day(slot(Some(1), t(9, 0), t(17, 0)), vec![]);

        let plan = plan(&initial, &week);

        assert_eq!(plan.deletes, vec![2]);
        assert!(plan.creates.is_empty());
        assert!(plan.updates.is_empty());
    }

    #[test]
    fn changing_a_time_emits_exactly_one_update() {
        let initial = vec![db_slot(7, "Friday", t(9, 0), t(17, 0), false)];

        let mut week = inactive_week();
        week[5] = active_day(slot(Some(7), t(10, 0), t(17, 0)), vec![]);

        let plan = plan(&initial, &week);

        assert_eq!(plan.updates.len(), 1);
        assert_eq!(plan.updates[0].id, 7);
        assert_eq!(plan.updates[0].start_time, t(10, 0));
        assert!(plan.creates.is_empty());
        assert!(plan.deletes.is_empty());
    }

    #[test]
    fn all_days_inactive_deletes_every_persisted_id() {
        let initial: Vec<DbWorkingHourSlot> = WEEKDAY_NAMES
            .iter()
            .enumerate()
            .map(|(i, day)| db_slot(i as i64 + 1, day, t(9, 0), t(17, 0), false))
            .collect();

        let plan = plan(&initial, &inactive_week());

        assert!(plan.creates.is_empty());
        assert!(plan.updates.is_empty());
        assert_eq!(plan.deletes.len(), initial.len());
    }

    #[test]
    fn unknown_weekday_rows_are_skipped() {
        let initial = vec![
            db_slot(1, "Monday", t(9, 0), t(17, 0), false),
            db_slot(2, "Funday", t(9, 0), t(17, 0), false),
        ];

        let plan = plan(&initial, &inactive_week());

        // 只有對得到星期的那筆會被刪，無法識別的那筆不碰
        assert_eq!(plan.deletes, vec![1]);
    }

    #[test]
    fn new_break_on_an_active_day_is_created() {
        let initial = vec![db_slot(1, "Monday", t(9, 0), t(17, 0), false)];

        let mut week = inactive_week();
        week[1] = active_day(
            slot(Some(1), t(9, 0), t(17, 0)),
            vec![slot(None, t(12, 0), t(13, 0))],
        );

        let plan = plan(&initial, &week);

        assert_eq!(plan.creates.len(), 1);
        assert!(plan.creates[0].is_break);
        assert_eq!(plan.creates[0].day_of_week, "Monday");
        assert!(plan.updates.is_empty());
        assert!(plan.deletes.is_empty());
    }

    #[test]
    fn projection_groups_by_day_and_sorts_breaks() {
        let initial = vec![
            db_slot(3, "Monday", t(15, 0), t(15, 30), true),
            db_slot(1, "Monday", t(9, 0), t(17, 0), false),
            db_slot(2, "Monday", t(12, 0), t(13, 0), true),
        ];

        let week = project_week(&initial);

        assert!(week[1].is_active);
        assert_eq!(week[1].work.id, Some(1));
        assert_eq!(
            week[1].breaks.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![Some(2), Some(3)]
        );

        // 其他天維持停用、帶預設時段
        assert!(!week[0].is_active);
        assert_eq!(week[0].work.id, None);
        assert_eq!(week[0].work.start, t(9, 0));
    }
}
