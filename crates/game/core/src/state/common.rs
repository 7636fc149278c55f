use std::fmt;

/// Stable identifier of an actor in the live set.
///
/// Actors only ever refer to each other through identifiers, never through
/// owning references, so removing a dead actor cannot leave dangling links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous world position (top-left corner of the actor's box).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two positions.
    pub fn distance_to(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Axis-aligned collision box.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn at(position: Position, width: f32, height: f32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    /// Returns true if the two boxes share interior area.
    ///
    /// Boxes that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Cardinal facing of an actor. Screen coordinates: `y` grows downwards.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing for a requested direction.
    ///
    /// The axis with the larger magnitude wins; ties go to the vertical axis.
    pub fn from_direction(dx: f32, dy: f32) -> Self {
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Facing::Right } else { Facing::Left }
        } else if dy > 0.0 {
            Facing::Down
        } else {
            Facing::Up
        }
    }
}

/// Integer resource meter (health, mana) with `0 <= current <= maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into `[0, maximum]`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a full meter.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Current value as a fraction of the maximum (0.0 for an empty pool).
    pub fn fraction(&self) -> f32 {
        if self.maximum == 0 {
            0.0
        } else {
            self.current as f32 / self.maximum as f32
        }
    }

    /// Removes up to `amount`, returns what was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount` without exceeding the maximum, returns what was added.
    pub fn fill(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum - self.current);
        self.current += added;
        added
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Shifts the maximum by `delta` (never below `floor`), re-clamping current.
    ///
    /// Returns the shift actually applied.
    pub fn shift_maximum(&mut self, delta: i32, floor: u32) -> i32 {
        let applied = shift_clamped(&mut self.maximum, delta, floor);
        self.current = self.current.min(self.maximum);
        applied
    }

    /// Raises the maximum and refills the meter.
    pub fn grow(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
        self.current = self.maximum;
    }
}

/// Adds a signed delta to an unsigned value, saturating at `floor` and `u32::MAX`.
///
/// Returns the delta actually applied.
pub(crate) fn shift_clamped(value: &mut u32, delta: i32, floor: u32) -> i32 {
    let before = i64::from(*value);
    let after = (before + i64::from(delta)).clamp(i64::from(floor), i64::from(u32::MAX));
    *value = after as u32;
    (after - before) as i32
}
