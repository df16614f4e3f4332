use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schedule {
    /// `YYYY-MM-DD`
    pub date: String,

    pub title: String,

    #[serde(default)]
    pub number: i32,

    #[serde(default)]
    pub image: String,

    // older clients send misspelled key
    #[serde(default, alias = "thumbmail")]
    pub thumbnail: bool,

    #[serde(default)]
    pub location: String,

    /// `AM|PM-HH-MM`
    pub time: String,

    #[serde(default)]
    pub seat: String,

    #[serde(default)]
    pub casting: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub memo: String,
}
