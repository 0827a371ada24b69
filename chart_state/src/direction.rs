//! Cardinal directions and the screen-quadrant mapping.

// ════════════════════════════════════════════════════════════════════════════
// Season
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Direction
// ════════════════════════════════════════════════════════════════════════════

/// One of the four cardinal zones of the chart. Each is bound to a season,
/// a guardian figure, and an overview/detail chart pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::South,
        ]
    }

    /// Stable array index for per-direction storage.
    pub fn index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::West => 1,
            Direction::North => 2,
            Direction::South => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        }
    }

    pub fn season(self) -> Season {
        match self {
            Direction::East => Season::Spring,
            Direction::South => Season::Summer,
            Direction::West => Season::Autumn,
            Direction::North => Season::Winter,
        }
    }

    /// Map a normalized screen position (y down) to a direction by diagonal
    /// split about the center: the top triangle is North, the bottom South,
    /// the left East, the right West. East sits on the *left* because the
    /// chart is drawn as seen looking up at the sky.
    pub fn from_screen(x: f32, y: f32) -> Direction {
        let dx = x - 0.5;
        let dy = y - 0.5;
        if dy < -dx.abs() {
            Direction::North
        } else if dy > dx.abs() {
            Direction::South
        } else if dx < 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_centers() {
        assert_eq!(Direction::from_screen(0.5, 0.1), Direction::North);
        assert_eq!(Direction::from_screen(0.5, 0.9), Direction::South);
        assert_eq!(Direction::from_screen(0.1, 0.5), Direction::East);
        assert_eq!(Direction::from_screen(0.9, 0.5), Direction::West);
    }

    #[test]
    fn top_left_diagonal_falls_to_east() {
        // Exactly on the diagonal, dy == -|dx|: not strictly inside the
        // north triangle, left half wins.
        assert_eq!(Direction::from_screen(0.2, 0.2), Direction::East);
    }

    #[test]
    fn screen_center_is_west() {
        // Degenerate center point: falls through to the final arm.
        assert_eq!(Direction::from_screen(0.5, 0.5), Direction::West);
    }

    #[test]
    fn indices_are_distinct_and_dense() {
        let mut seen = [false; 4];
        for d in Direction::all() {
            assert!(!seen[d.index()]);
            seen[d.index()] = true;
        }
    }

    #[test]
    fn seasons_cover_the_year() {
        assert_eq!(Direction::East.season(), Season::Spring);
        assert_eq!(Direction::South.season(), Season::Summer);
        assert_eq!(Direction::West.season(), Season::Autumn);
        assert_eq!(Direction::North.season(), Season::Winter);
    }
}
