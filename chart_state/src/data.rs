//! Descriptive chart data: the four guardians and their seven lunar lodges.
//!
//! Star positions are chart-space coordinates in `[-1, 1]²` (y up), laid out
//! per direction; `links` index into `stars` to draw the lodge's stick
//! figure. The text is shown in the info panel area while a direction is
//! selected or zoomed.

use crate::direction::{Direction, Season};

// ════════════════════════════════════════════════════════════════════════════
// Types
// ════════════════════════════════════════════════════════════════════════════

/// One lunar lodge: a small asterism with a name and a one-line meaning.
pub struct Lodge {
    pub name: &'static str,
    pub meaning: &'static str,
    pub stars: &'static [(f32, f32)],
    pub links: &'static [(usize, usize)],
}

/// Everything known about one cardinal direction of the chart.
pub struct DirectionInfo {
    pub guardian: &'static str,
    pub season: Season,
    pub overview: &'static str,
    pub lodges: [Lodge; 7],
}

/// Lodge count per direction - the classical sky divides each quadrant
/// into seven.
pub const LODGES_PER_DIRECTION: usize = 7;

// ════════════════════════════════════════════════════════════════════════════
// Tables
// ════════════════════════════════════════════════════════════════════════════

static EAST: DirectionInfo = DirectionInfo {
    guardian: "Azure Dragon",
    season: Season::Spring,
    overview: "The eastern sky: the Azure Dragon rises with spring, head to tail from horn to winnowing basket.",
    lodges: [
        Lodge {
            name: "Gak",
            meaning: "the Horn - the dragon's horns breaking the horizon",
            stars: &[(-0.85, 0.55), (-0.75, 0.35), (-0.68, 0.18)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Hang",
            meaning: "the Neck - the dragon's arched neck",
            stars: &[(-0.55, 0.62), (-0.47, 0.44), (-0.40, 0.28)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Jeo",
            meaning: "the Root - the dragon's chest",
            stars: &[(-0.28, 0.52), (-0.18, 0.36), (-0.10, 0.22), (-0.05, 0.45)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
        Lodge {
            name: "Bang",
            meaning: "the Room - the dragon's belly",
            stars: &[(0.08, 0.58), (0.15, 0.40), (0.22, 0.24), (0.30, 0.48)],
            links: &[(0, 1), (1, 2), (2, 3)],
        },
        Lodge {
            name: "Sim",
            meaning: "the Heart - the bright fire star and its attendants",
            stars: &[(0.42, 0.30), (0.50, 0.16), (0.58, 0.04)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Mi",
            meaning: "the Tail - the dragon's tail sweeping low",
            stars: &[(0.62, -0.18), (0.70, -0.32), (0.76, -0.48), (0.84, -0.60)],
            links: &[(0, 1), (1, 2), (2, 3)],
        },
        Lodge {
            name: "Gi",
            meaning: "the Winnowing Basket - chaff scattered behind the tail",
            stars: &[(0.86, -0.74), (0.92, -0.86), (0.78, -0.88)],
            links: &[(0, 1), (1, 2), (2, 0)],
        },
    ],
};

static WEST: DirectionInfo = DirectionInfo {
    guardian: "White Tiger",
    season: Season::Autumn,
    overview: "The western sky: the White Tiger prowls the autumn evenings, from the legs to the three-star belt.",
    lodges: [
        Lodge {
            name: "Gyu",
            meaning: "the Legs - the tiger's haunches",
            stars: &[(-0.82, 0.48), (-0.72, 0.32), (-0.62, 0.44), (-0.70, 0.58)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
        Lodge {
            name: "Ru",
            meaning: "the Bond - the tether of the autumn hunt",
            stars: &[(-0.48, 0.50), (-0.40, 0.34), (-0.32, 0.20)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Wi",
            meaning: "the Stomach - the granary of the harvest",
            stars: &[(-0.18, 0.46), (-0.10, 0.32), (-0.02, 0.42)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Myo",
            meaning: "the Hairy Head - the close-packed cluster",
            stars: &[(0.12, 0.36), (0.18, 0.44), (0.24, 0.36), (0.18, 0.28)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
        Lodge {
            name: "Pil",
            meaning: "the Net - the forked hunting net",
            stars: &[(0.36, 0.22), (0.46, 0.10), (0.56, 0.20), (0.46, -0.04)],
            links: &[(0, 1), (1, 2), (1, 3)],
        },
        Lodge {
            name: "Ja",
            meaning: "the Turtle Beak - a tight triple at the tiger's jaw",
            stars: &[(0.60, -0.20), (0.66, -0.28), (0.56, -0.30)],
            links: &[(0, 1), (1, 2), (2, 0)],
        },
        Lodge {
            name: "Sam",
            meaning: "the Three Stars - the belt across the winter ceiling",
            stars: &[(0.70, -0.44), (0.78, -0.52), (0.86, -0.60), (0.74, -0.68)],
            links: &[(0, 1), (1, 2), (1, 3)],
        },
    ],
};

static NORTH: DirectionInfo = DirectionInfo {
    guardian: "Black Tortoise",
    season: Season::Winter,
    overview: "The northern sky: the Black Tortoise coils through winter, dipper to wall.",
    lodges: [
        Lodge {
            name: "Du",
            meaning: "the Dipper - the southern measure of grain",
            stars: &[(-0.84, 0.40), (-0.74, 0.30), (-0.64, 0.36), (-0.56, 0.48), (-0.60, 0.22)],
            links: &[(0, 1), (1, 2), (2, 3), (2, 4)],
        },
        Lodge {
            name: "U",
            meaning: "the Ox - the herd-boy driving his ox",
            stars: &[(-0.42, 0.44), (-0.34, 0.30), (-0.26, 0.40)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Yeo",
            meaning: "the Girl - the weaving maiden",
            stars: &[(-0.14, 0.48), (-0.06, 0.36), (-0.12, 0.26)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Heo",
            meaning: "the Emptiness - the hollow of the solstice sky",
            stars: &[(0.06, 0.42), (0.14, 0.30)],
            links: &[(0, 1)],
        },
        Lodge {
            name: "Wi",
            meaning: "the Rooftop - the steep gable of the winter house",
            stars: &[(0.26, 0.46), (0.34, 0.32), (0.42, 0.44)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Sil",
            meaning: "the Encampment - the square hall's leading wall",
            stars: &[(0.54, 0.30), (0.54, 0.10), (0.70, 0.10), (0.70, 0.30)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
        Lodge {
            name: "Byeok",
            meaning: "the Wall - the square hall's closing wall",
            stars: &[(0.80, 0.26), (0.80, 0.06)],
            links: &[(0, 1)],
        },
    ],
};

static SOUTH: DirectionInfo = DirectionInfo {
    guardian: "Vermilion Bird",
    season: Season::Summer,
    overview: "The southern sky: the Vermilion Bird spreads its wings across the summer nights.",
    lodges: [
        Lodge {
            name: "Jeong",
            meaning: "the Well - the bird drinks at the well-mouth",
            stars: &[(-0.84, 0.38), (-0.84, 0.18), (-0.68, 0.18), (-0.68, 0.38)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
        Lodge {
            name: "Gwi",
            meaning: "the Ghost - the faint cloud between four stars",
            stars: &[(-0.52, 0.36), (-0.44, 0.26), (-0.52, 0.16), (-0.60, 0.26)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
        Lodge {
            name: "Ryu",
            meaning: "the Willow - the bird's beak among hanging branches",
            stars: &[(-0.32, 0.40), (-0.24, 0.30), (-0.16, 0.22), (-0.08, 0.16)],
            links: &[(0, 1), (1, 2), (2, 3)],
        },
        Lodge {
            name: "Seong",
            meaning: "the Star - the bird's heart",
            stars: &[(0.04, 0.28), (0.12, 0.18), (0.20, 0.26)],
            links: &[(0, 1), (1, 2)],
        },
        Lodge {
            name: "Jang",
            meaning: "the Extended Net - the spread of the bird's crop",
            stars: &[(0.30, 0.14), (0.38, 0.02), (0.46, 0.12), (0.54, 0.00)],
            links: &[(0, 1), (1, 2), (2, 3)],
        },
        Lodge {
            name: "Ik",
            meaning: "the Wings - feathers fanned wide",
            stars: &[(0.58, -0.18), (0.66, -0.30), (0.74, -0.20), (0.82, -0.34)],
            links: &[(0, 1), (1, 2), (2, 3)],
        },
        Lodge {
            name: "Jin",
            meaning: "the Chariot - the bird's tail-board",
            stars: &[(0.72, -0.52), (0.72, -0.70), (0.88, -0.70), (0.88, -0.52)],
            links: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        },
    ],
};

/// Look up the data block for one direction.
pub fn info(direction: Direction) -> &'static DirectionInfo {
    match direction {
        Direction::East => &EAST,
        Direction::West => &WEST,
        Direction::North => &NORTH,
        Direction::South => &SOUTH,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
