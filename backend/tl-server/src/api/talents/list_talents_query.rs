use serde::Deserialize;

/// `?q=` switches listing to substring search.
#[derive(Debug, Default, Deserialize)]
pub struct ListTalentsQuery {
    #[serde(default)]
    pub q: Option<String>,
}
