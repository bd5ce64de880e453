//! Player colours and the roles they imply.
//!
//! The evader always plays `Colour::Black`; every other colour is a
//! detective. Roles are derived from the colour rather than stored
//! separately, so a colour can never disagree with its role.

use serde::{Deserialize, Serialize};

/// A player's colour token.
///
/// `Black` is the evader (MrX). The remaining five colours are the
/// detectives. Turn order is MrX first, then detectives in the order
/// they were configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// All colours in declaration order, `Black` first.
    pub const ALL: [Colour; 6] = [
        Colour::Black,
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// Check whether this colour is the evader.
    #[must_use]
    pub const fn is_mr_x(self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Check whether this colour is a detective.
    #[must_use]
    pub const fn is_detective(self) -> bool {
        !self.is_mr_x()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Black => "Black",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Red => "Red",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        write!(f, "{name}")
    }
}
