use crate::Leaves;

/// Why a line item moved money, in the table's own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    /// Went out first in a normal round.
    Winner,
    /// Congealed: never played a card.
    Cong,
    /// Left holding this many leaves.
    Leaves(Leaves),
    /// Paid a successful declarer.
    LostDeclare,
    /// Declared and swept the table.
    Declared,
    /// Declared and got caught.
    Forfeit,
    /// Caught the declarer.
    Caught,
    /// Share of a forfeit nobody caught.
    Split,
    /// Lost a pig to a chop.
    Chopped,
    /// Chopped a pig.
    Chop,
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Winner => write!(f, "Về Nhất"),
            Self::Cong => write!(f, "Cóng"),
            Self::Leaves(n) => write!(f, "{} lá", n),
            Self::LostDeclare => write!(f, "Thua Sâm"),
            Self::Declared => write!(f, "Báo Sâm Thành Công"),
            Self::Forfeit => write!(f, "Đền Sâm"),
            Self::Caught => write!(f, "Bắt Sâm"),
            Self::Split => write!(f, "Được chia tiền đền"),
            Self::Chopped => write!(f, "Bị Chặt"),
            Self::Chop => write!(f, "Chặt"),
        }
    }
}
