use crate::Chips;
use crate::DEFAULT_BET;
use crate::error::ValidationError;

/// Session-wide multiplier applied to every base amount. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bet(Chips);

impl Bet {
    pub fn get(&self) -> Chips {
        self.0
    }
    /// `base * bet`, refusing to wrap.
    pub fn scale(&self, base: Chips) -> Result<Chips, ValidationError> {
        base.checked_mul(self.0).ok_or(ValidationError::Overflow)
    }
    /// Lenient reading of a stored bet. Reads the leading integer and
    /// ignores whatever trails it, so `"3abc"` is 3 and `"2.5"` is 2.
    /// No leading integer gives the default; anything below 1 becomes 1.
    /// Only for loading saved data.
    pub fn clamp(raw: &str) -> Self {
        let raw = raw.trim_start();
        let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        raw[..raw.len() - unsigned.len() + digits]
            .parse::<Chips>()
            .map(|n| Self(n.max(1)))
            .unwrap_or_default()
    }
}

impl Default for Bet {
    fn default() -> Self {
        Self(DEFAULT_BET)
    }
}

impl TryFrom<Chips> for Bet {
    type Error = ValidationError;
    fn try_from(n: Chips) -> Result<Self, Self::Error> {
        match n >= 1 {
            true => Ok(Self(n)),
            false => Err(ValidationError::BetUnit(n)),
        }
    }
}

impl From<Bet> for Chips {
    fn from(bet: Bet) -> Self {
        bet.0
    }
}

impl crate::Arbitrary for Bet {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(1..=10))
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}k", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive() {
        assert_eq!(Bet::try_from(0), Err(ValidationError::BetUnit(0)));
        assert_eq!(Bet::try_from(-3), Err(ValidationError::BetUnit(-3)));
        assert_eq!(Bet::try_from(5).map(Chips::from), Ok(5));
    }

    #[test]
    fn clamps_stored_values() {
        assert_eq!(Bet::clamp("4").get(), 4);
        assert_eq!(Bet::clamp(" 7 ").get(), 7);
        assert_eq!(Bet::clamp("0").get(), 1);
        assert_eq!(Bet::clamp("-12").get(), 1);
        assert_eq!(Bet::clamp("abc").get(), DEFAULT_BET);
        assert_eq!(Bet::clamp("").get(), DEFAULT_BET);
    }

    #[test]
    fn clamp_reads_leading_integer() {
        assert_eq!(Bet::clamp("3abc").get(), 3);
        assert_eq!(Bet::clamp("2.5").get(), 2);
        assert_eq!(Bet::clamp("+6").get(), 6);
        assert_eq!(Bet::clamp("-4k").get(), 1);
        assert_eq!(Bet::clamp("-").get(), DEFAULT_BET);
        assert_eq!(Bet::clamp("k3").get(), DEFAULT_BET);
    }

    #[test]
    fn scale_detects_overflow() {
        let bet = Bet::try_from(Chips::MAX / 2).unwrap();
        assert_eq!(bet.scale(20), Err(ValidationError::Overflow));
        assert_eq!(Bet::default().scale(20), Ok(20));
    }
}
