use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一週七天的固定名稱，索引即星期（0=Sunday … 6=Saturday）
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn weekday_index(name: &str) -> Option<usize> {
    WEEKDAY_NAMES.iter().position(|&n| n == name)
}

/// 資料庫裡的一筆時段，staff_id 為 NULL 表示公司層級的預設時間
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DbWorkingHourSlot {
    pub id: i64,
    pub company_id: Uuid,
    pub staff_id: Option<i64>,
    pub day_of_week: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub is_break: bool,
}

/// 編輯畫面上的單一時段，id 為 None 表示還沒存過
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPayload {
    pub id: Option<i64>,
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedulePayload {
    pub is_active: bool,
    pub work: SlotPayload,
    #[serde(default)]
    pub breaks: Vec<SlotPayload>,
}

#[derive(Deserialize)]
pub struct WeekScheduleRequest {
    pub company_id: Uuid,
    pub staff_id: Option<i64>,
    pub days: Vec<DaySchedulePayload>,
}

#[derive(Deserialize)]
pub struct WorkingHourQuery {
    pub company_id: Uuid,
    pub staff_id: Option<i64>,
}

#[derive(Serialize)]
pub struct ReconcileSummary {
    pub changed: bool,
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

/// 前端的時間格式是 "HH:MM"，chrono 預設的 serde 是 "HH:MM:SS"
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        #[serde(with = "hhmm")]
        time: NaiveTime,
    }

    #[test]
    fn hhmm_roundtrip() {
        let parsed: Wrapper = serde_json::from_str(r#"{"time":"09:30"}"#).unwrap();
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"time":"09:30"}"#);
    }

    #[test]
    fn hhmm_accepts_seconds() {
        let parsed: Wrapper = serde_json::from_str(r#"{"time":"09:30:00"}"#).unwrap();
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn weekday_mapping_is_bidirectional() {
        for (index, name) in WEEKDAY_NAMES.iter().enumerate() {
            assert_eq!(weekday_index(name), Some(index));
        }
        assert_eq!(weekday_index("Funday"), None);
    }
}
