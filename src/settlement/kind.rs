use serde::Deserialize;
use serde::Serialize;

/// Category of a settled round, as shown in (and stored with) the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "Ván Thường")]
    Normal,
    #[serde(rename = "Báo Sâm TC")]
    Declared,
    #[serde(rename = "Đền Sâm")]
    Forfeit,
    #[serde(rename = "Chặt Heo")]
    Slam,
}

impl Kind {
    pub const fn all() -> &'static [Self] {
        &[Self::Normal, Self::Declared, Self::Forfeit, Self::Slam]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Ván Thường",
            Self::Declared => "Báo Sâm TC",
            Self::Forfeit => "Đền Sâm",
            Self::Slam => "Chặt Heo",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_label_matches_display() {
        for kind in Kind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
