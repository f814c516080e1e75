use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// icon shown for a business in the list and on the map
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Mexican,
    Chinese,
    Pizza,
    #[default]
    Burgers,
}

impl IconKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Mexican => "mexican",
            IconKey::Chinese => "chinese",
            IconKey::Pizza => "pizza",
            IconKey::Burgers => "burgers",
        }
    }
}

impl Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// maps a Yelp category alias onto one of the four icons. aliases not in
/// the table fall back to [`IconKey::Burgers`].
pub fn icon_for(category_alias: &str) -> IconKey {
    match category_alias {
        "mexican" => IconKey::Mexican,
        "chinese" | "hotpot" | "noodles" | "dimsum" | "cantonese" | "hkcafe" | "taiwanese"
        | "soup" => IconKey::Chinese,
        "pizza" | "italian" | "pastashops" => IconKey::Pizza,
        "burgers" | "french" | "sportsbars" | "hotdogs" => IconKey::Burgers,
        _ => IconKey::default(),
    }
}
