use std::str::FromStr;

/// A move in one of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    North,
    South,
    East,
    West,
}

/// All four moves, in wire token order.
pub static ALL_MOVES: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

impl Move {
    /// The single-character token that represents this move on the wire.
    pub fn token(&self) -> char {
        match self {
            Move::North => 'N',
            Move::South => 'S',
            Move::East => 'E',
            Move::West => 'W',
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The error type for the [`FromStr`] instance of [`Move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveFromStrErr {
    Empty,
    MoreThanOneChar,
    InvalidDirection,
}

impl FromStr for Move {
    type Err = MoveFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let direction_char = chars.next().ok_or(MoveFromStrErr::Empty)?;
        if chars.next().is_some() {
            return Err(MoveFromStrErr::MoreThanOneChar);
        }
        match direction_char {
            'N' => Ok(Move::North),
            'S' => Ok(Move::South),
            'E' => Ok(Move::East),
            'W' => Ok(Move::West),
            _ => Err(MoveFromStrErr::InvalidDirection),
        }
    }
}
