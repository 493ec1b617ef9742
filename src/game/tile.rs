//! Tile types: terrain and the actors that stand on it.

/// State carried by the player tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Player {
    /// Whether the player currently stands on a ladder cell.
    pub on_ladder: bool,
}

impl Player {
    /// A player standing on solid ground.
    #[must_use]
    pub const fn new() -> Self {
        Self { on_ladder: false }
    }

    /// A player standing on a ladder.
    #[must_use]
    pub const fn on_ladder() -> Self {
        Self { on_ladder: true }
    }

    /// The tile left behind when the player steps away.
    #[must_use]
    pub const fn vacated(self) -> Tile {
        if self.on_ladder { Tile::Ladder } else { Tile::Air }
    }
}

/// Which leg of its patrol a hen is on.
///
/// `Outbound` is the initial phase and walks RIGHT; `Return` walks LEFT.
/// A hen flips phase whenever it is blocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PatrolPhase {
    /// Initial phase, heading right.
    #[default]
    Outbound,
    /// Reversed phase, heading left.
    Return,
}

impl PatrolPhase {
    /// The opposite phase.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            PatrolPhase::Outbound => PatrolPhase::Return,
            PatrolPhase::Return => PatrolPhase::Outbound,
        }
    }
}

/// State carried by a hen tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hen {
    /// Current patrol phase.
    pub phase: PatrolPhase,
}

impl Hen {
    /// A hen in its initial phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: PatrolPhase::Outbound,
        }
    }

    /// A hen that has already reversed once.
    #[must_use]
    pub const fn reversed() -> Self {
        Self {
            phase: PatrolPhase::Return,
        }
    }

    /// The direction this hen will try to step in next.
    #[must_use]
    pub const fn heading(self) -> super::Direction {
        match self.phase {
            PatrolPhase::Outbound => super::Direction::Right,
            PatrolPhase::Return => super::Direction::Left,
        }
    }

    /// Flip the patrol phase.
    pub fn reverse(&mut self) {
        self.phase = self.phase.flipped();
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Empty space.
    #[default]
    Air,
    /// Solid floor; supports and blocks.
    Platform,
    /// Climbable; supports without blocking.
    Ladder,
    /// A collectible egg.
    Egg,
    /// The player.
    Player(Player),
    /// A patrolling hen.
    Hen(Hen),
}

impl Tile {
    /// Whether an actor resting on top of this tile stays put.
    #[must_use]
    pub const fn provides_support(self) -> bool {
        matches!(self, Tile::Platform | Tile::Ladder)
    }

    /// Whether an actor is prevented from moving into this tile.
    #[must_use]
    pub const fn is_obstruction(self) -> bool {
        matches!(self, Tile::Platform)
    }

    /// Whether this tile is empty air.
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Tile::Air)
    }

    /// Whether this tile is an egg.
    #[must_use]
    pub const fn is_egg(self) -> bool {
        matches!(self, Tile::Egg)
    }

    /// The player payload, if this is the player.
    #[must_use]
    pub const fn as_player(self) -> Option<Player> {
        match self {
            Tile::Player(player) => Some(player),
            _ => None,
        }
    }

    /// The hen payload, if this is a hen.
    #[must_use]
    pub const fn as_hen(self) -> Option<Hen> {
        match self {
            Tile::Hen(hen) => Some(hen),
            _ => None,
        }
    }

    /// Single-character form used by the board text format.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Tile::Air => ' ',
            Tile::Platform => '=',
            Tile::Ladder => '#',
            Tile::Egg => '*',
            Tile::Player(Player { on_ladder: false }) => 'O',
            Tile::Player(Player { on_ladder: true }) => '@',
            Tile::Hen(Hen {
                phase: PatrolPhase::Outbound,
            }) => 'p',
            Tile::Hen(Hen {
                phase: PatrolPhase::Return,
            }) => 'q',
        }
    }

    /// Parse a tile from its board character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Tile::Air),
            '=' => Some(Tile::Platform),
            '#' => Some(Tile::Ladder),
            '*' => Some(Tile::Egg),
            'O' => Some(Tile::Player(Player::new())),
            '@' => Some(Tile::Player(Player::on_ladder())),
            'p' => Some(Tile::Hen(Hen::new())),
            'q' => Some(Tile::Hen(Hen::reversed())),
            _ => None,
        }
    }
}
