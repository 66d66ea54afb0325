use crate::color::Color;
use crate::error::Error;
use std::str::FromStr;

/// The fixed rule set a game is played under.  A `GameSettings` is
/// immutable and only obtainable through the named presets, so every game
/// runs one of the supported variants.
///
/// ```
/// use checkers::{Color, GameSettings};
///
/// let settings = GameSettings::russian();
/// assert_eq!(settings.board_size(), 8);
/// assert_eq!(settings.pieces_per_side(), 12);
/// assert!(!settings.must_capture_maximum());
/// assert_eq!(settings.first_move(), Color::White);
/// ```
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    board_size: u8,
    pieces_per_side: u8,
    must_capture_maximum: bool,
    first_move: Color,
}

impl GameSettings {
    const fn new(
        board_size: u8,
        pieces_per_side: u8,
        must_capture_maximum: bool,
        first_move: Color,
    ) -> GameSettings {
        GameSettings {
            board_size: board_size,
            pieces_per_side: pieces_per_side,
            must_capture_maximum: must_capture_maximum,
            first_move: first_move,
        }
    }

    /// International draughts: a 10x10 board with 20 checkers per side,
    /// the capture taking the most pieces is mandatory, White moves first.
    #[inline]
    pub const fn international() -> GameSettings {
        GameSettings::new(10, 20, true, Color::White)
    }

    /// Russian draughts: an 8x8 board with 12 checkers per side, capturing
    /// is mandatory but any capture qualifies, White moves first.
    #[inline]
    pub const fn russian() -> GameSettings {
        GameSettings::new(8, 12, false, Color::White)
    }

    /// Canadian draughts: a 12x12 board with 30 checkers per side, the
    /// capture taking the most pieces is mandatory, White moves first.
    #[inline]
    pub const fn canadian() -> GameSettings {
        GameSettings::new(12, 30, true, Color::White)
    }

    /// The edge length of the board.
    #[inline]
    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// How many checkers each side starts with.
    #[inline]
    pub fn pieces_per_side(&self) -> u8 {
        self.pieces_per_side
    }

    /// Must the side to move pick a capture of the highest power, rather
    /// than any capture at all?
    #[inline]
    pub fn must_capture_maximum(&self) -> bool {
        self.must_capture_maximum
    }

    /// Which color moves first.
    #[inline]
    pub fn first_move(&self) -> Color {
        self.first_move
    }

    /// How many playable (dark) cells a board under these settings has.
    #[inline]
    pub fn num_squares(&self) -> usize {
        self.board_size as usize * self.board_size as usize / 2
    }
}

impl Default for GameSettings {
    /// International rules, the same default the library was written
    /// around.
    #[inline]
    fn default() -> GameSettings {
        GameSettings::international()
    }
}

impl FromStr for GameSettings {
    type Err = Error;

    /// Look a preset up by name.
    ///
    /// ```
    /// use checkers::GameSettings;
    ///
    /// let settings: GameSettings = "canadian".parse().expect("a known variant");
    /// assert_eq!(settings.board_size(), 12);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "international" | "International" => Ok(GameSettings::international()),
            "russian" | "Russian" => Ok(GameSettings::russian()),
            "canadian" | "Canadian" => Ok(GameSettings::canadian()),
            _ => Err(Error::InvalidVariant {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(GameSettings::international().num_squares(), 50);
        assert_eq!(GameSettings::russian().num_squares(), 32);
        assert_eq!(GameSettings::canadian().num_squares(), 72);
        assert_eq!(GameSettings::default(), GameSettings::international());
    }

    #[test]
    fn initial_rows_never_overlap() {
        for settings in [
            GameSettings::international(),
            GameSettings::russian(),
            GameSettings::canadian(),
        ]
        .iter()
        {
            assert!(settings.pieces_per_side() as usize * 2 <= settings.num_squares());
        }
    }

    #[test]
    fn variant_from_str() {
        assert_eq!(
            "russian".parse::<GameSettings>().unwrap(),
            GameSettings::russian()
        );
        assert!("english".parse::<GameSettings>().is_err());
    }
}
