//! Names of the two child slots.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The token naming the left child slot.
pub const LEFT: &str = "left";
/// The token naming the right child slot.
pub const RIGHT: &str = "right";

/// Which child slot of its parent a node occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left slot.
    Left,
    /// The right slot.
    Right,
}

impl Side {
    /// The textual token for this side, `"left"` or `"right"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => LEFT,
            Side::Right => RIGHT,
        }
    }

    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LEFT => Ok(Side::Left),
            RIGHT => Ok(Side::Right),
            other => Err(Error::InvalidSide(other.to_owned())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
