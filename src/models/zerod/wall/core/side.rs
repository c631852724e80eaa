use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Selects one of the two faces of a wall.
///
/// A wall couples exactly two control volumes, so every per-face operation
/// is addressed by this binary selector. Using an enum (rather than a raw
/// 0/1 index) makes an invalid selector unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A fixed pair of values, one per wall face, indexed by [`Side`].
///
/// Bundling per-side state in one structure keeps the wall's per-face
/// invariants local instead of spread over parallel arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerSide<T> {
    left: T,
    right: T,
}

impl<T> PerSide<T> {
    /// Creates a pair from its left and right values.
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Returns a reference to one side's value.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Returns a mutable reference to one side's value.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_flips() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn display_names() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn indexing_reaches_the_addressed_face() {
        let mut pair = PerSide::new(1, 2);
        assert_eq!(pair[Side::Left], 1);
        assert_eq!(pair[Side::Right], 2);

        pair[Side::Right] = 7;
        assert_eq!(*pair.get(Side::Right), 7);
        assert_eq!(pair[Side::Left], 1);
    }
}
