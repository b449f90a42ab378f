//! Fixed player colours. Purely visual; no rule reads them.

use serde::Serialize;

/// One palette entry with the CSS class hints the board view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerColor {
    pub name: &'static str,
    /// Token fill.
    pub token: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

pub const PALETTE: [PlayerColor; 4] = [
    PlayerColor {
        name: "Red",
        token: "bg-red-500",
        border: "border-red-700",
        text: "text-red-600",
    },
    PlayerColor {
        name: "Blue",
        token: "bg-blue-500",
        border: "border-blue-700",
        text: "text-blue-600",
    },
    PlayerColor {
        name: "Green",
        token: "bg-green-500",
        border: "border-green-700",
        text: "text-green-600",
    },
    PlayerColor {
        name: "Yellow",
        token: "bg-yellow-400",
        border: "border-yellow-600",
        text: "text-yellow-600",
    },
];

#[must_use]
pub fn color_for(index: usize) -> Option<&'static PlayerColor> {
    PALETTE.get(index)
}
