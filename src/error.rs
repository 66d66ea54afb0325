use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail)]
pub enum Error {
    /// The variant name does not match one of the supported presets.
    #[fail(display = "Unknown variant: {}", name)]
    InvalidVariant { name: String },

    /// The string is not a valid color.
    #[fail(display = "The string specified does not contain a valid color.")]
    InvalidColor,

    /// The cell number does not exist on the board being set up.
    #[fail(display = "The cell number {} does not exist on this board.", number)]
    InvalidSquare { number: usize },

    /// The board created from BoardBuilder was found to be invalid
    #[fail(
        display = "The board specified did not pass sanity checks.  Are you sure every cell holds at most one checker?"
    )]
    InvalidBoard,
}
