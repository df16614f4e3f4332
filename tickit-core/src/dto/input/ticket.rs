use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub image: String,
    pub title: String,
    pub location: String,

    /// `YYYY-MM-DD`
    pub date: String,

    /// `AM|PM-HH-MM`
    pub time: String,

    #[serde(default)]
    pub background_color: String,

    #[serde(default)]
    pub foreground_color: String,

    #[serde(default)]
    pub fields: Vec<TicketField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketField {
    pub subtitle: String,
    pub content: String,
}
