use serde::Deserialize;

///
/// Inclusive range of schedule dates, both `YYYY-MM-DD`.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFilters {
    pub start_date: String,
    pub end_date: String,
}
