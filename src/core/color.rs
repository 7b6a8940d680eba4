use serde::{Deserialize, Serialize};

/// One of the five carpet colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl Color {
    /// All colors, in the order the seeded generator draws them
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
    ];

    /// Map a color letter (`R`, `G`, `B`, `Y`, `W`) to a color, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfscan::core::color::Color;
    ///
    /// assert_eq!(Color::from_char('y'), Some(Color::Yellow));
    /// assert_eq!(Color::from_char('X'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'W' => Some(Self::White),
            _ => None,
        }
    }

    /// Upper-case letter used when printing a carpet
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::White => 'W',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_is_case_insensitive() {
        for color in Color::ALL {
            let upper = color.as_char();
            assert_eq!(Color::from_char(upper), Some(color));
            assert_eq!(Color::from_char(upper.to_ascii_lowercase()), Some(color));
        }
    }

    #[test]
    fn test_from_char_rejects_unknown() {
        assert_eq!(Color::from_char('x'), None);
        assert_eq!(Color::from_char('q'), None);
        assert_eq!(Color::from_char(' '), None);
        assert_eq!(Color::from_char('1'), None);
    }
}
