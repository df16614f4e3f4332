use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TicketSchedulesFilters {
    /// `YYYY-MM-DD`, today when missing
    pub date: Option<String>,
}
