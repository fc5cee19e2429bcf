use std::fmt;

use crate::error::{Result, TracklistError};

/// Vinyl side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// How tracks are numbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SideConfig {
    /// `01.`, `02.`, ...
    #[default]
    Off,
    /// `A1.`..`A{a}.` then `B1.`..`B{b}.`, repeating.
    Sides { a: u32, b: u32 },
}

impl SideConfig {
    /// Validate raw capacities as typed by the user.
    ///
    /// Capacities are ignored when `enabled` is false. Side A is checked
    /// first, so with both sides invalid the error names A.
    pub fn from_capacities(enabled: bool, a: i64, b: i64) -> Result<Self> {
        if !enabled {
            return Ok(Self::Off);
        }
        let a = positive(a).ok_or(TracklistError::InvalidSideCapacity { side: Side::A })?;
        let b = positive(b).ok_or(TracklistError::InvalidSideCapacity { side: Side::B })?;
        Ok(Self::Sides { a, b })
    }
}

fn positive(n: i64) -> Option<u32> {
    u32::try_from(n).ok().filter(|n| *n > 0)
}

/// Produces the label for each successive track.
///
/// In side mode the cursor starts on A, moves to B once A's capacity has been
/// labeled, and returns to A (restarting at `A1`) once B's capacity has been
/// labeled.
#[derive(Debug, Clone)]
pub struct SideCursor {
    config: SideConfig,
    side: Side,
    on_side: u32,
}

impl SideCursor {
    pub fn new(config: SideConfig) -> Self {
        Self {
            config,
            side: Side::A,
            on_side: 0,
        }
    }

    /// Label for the track at 1-based `counter`, advancing the cursor.
    pub fn next_label(&mut self, counter: usize) -> String {
        let SideConfig::Sides { a, b } = self.config else {
            return format!("{counter:02}");
        };

        self.on_side += 1;
        let label = format!("{}{}", self.side, self.on_side);

        let capacity = match self.side {
            Side::A => a,
            Side::B => b,
        };
        if self.on_side == capacity {
            self.side = match self.side {
                Side::A => Side::B,
                Side::B => Side::A,
            };
            self.on_side = 0;
        }

        label
    }
}
