//! Phase descriptors and the fixed intersection cycle
//!
//! A phase says *what* is shown for its duration; sequencing lives in the
//! scheduler. The six-phase table is static and never changes at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::SignalState;

/// One of the two roads meeting at the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Road {
    /// The main road
    Main,
    /// The secondary road
    Secondary,
}

impl Road {
    /// Display name used in status lines
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "Main road",
            Self::Secondary => "Secondary road",
        }
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a phase's vehicle signal evolves tick by tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPattern {
    /// The same lamps for the whole phase
    Steady(SignalState),
    /// The given lamps on even ticks, everything dark on odd ticks
    Blink(SignalState),
}

impl SignalPattern {
    /// Signal shown at `tick` (0-based) within the phase
    #[must_use]
    pub const fn at(self, tick: u32) -> SignalState {
        match self {
            Self::Steady(state) => state,
            Self::Blink(state) => blink(state, tick),
        }
    }
}

/// Blink `lit` on even ticks and go dark on odd ones.
#[must_use]
pub const fn blink(lit: SignalState, tick: u32) -> SignalState {
    if tick % 2 == 0 {
        lit
    } else {
        SignalState::DARK
    }
}

/// A single step of the intersection cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Banner title
    pub title: &'static str,
    /// Length of the phase in whole seconds
    pub duration_secs: u32,
    /// Caption printed before the countdown bar
    pub countdown_label: &'static str,
    /// Vehicle signal behavior
    pub signal: SignalPattern,
    /// Road whose pedestrians cross during this phase, if any
    pub crossing: Option<Road>,
    /// Whether main-road vehicle traffic is held for this phase
    pub closes_main_road: bool,
}

impl Phase {
    /// Vehicle signal at `tick` within this phase
    #[must_use]
    pub const fn vehicle_signal(&self, tick: u32) -> SignalState {
        self.signal.at(tick)
    }

    /// Pedestrian signal, shown only during crossing phases
    #[must_use]
    pub const fn pedestrian_signal(&self) -> Option<SignalState> {
        match self.crossing {
            Some(_) => Some(SignalState::GREEN),
            None => None,
        }
    }

    /// Whether the vehicle signal changes between ticks
    #[must_use]
    pub const fn is_blinking(&self) -> bool {
        matches!(self.signal, SignalPattern::Blink(_))
    }
}

/// The intersection's fixed six-phase cycle
pub static INTERSECTION_CYCLE: [Phase; 6] = [
    Phase {
        title: "PHASE 1: MAIN ROAD FLOWING",
        duration_secs: 45,
        countdown_label: "Time until main road closes: ",
        signal: SignalPattern::Steady(SignalState::GREEN),
        crossing: None,
        closes_main_road: false,
    },
    Phase {
        title: "TRANSITION: YELLOW BLINKING",
        duration_secs: 5,
        countdown_label: "Transition time: ",
        signal: SignalPattern::Blink(SignalState::YELLOW),
        crossing: None,
        closes_main_road: false,
    },
    Phase {
        title: "PEDESTRIAN PHASE (MAIN ROAD)",
        duration_secs: 10,
        countdown_label: "Time to cross: ",
        signal: SignalPattern::Steady(SignalState::RED),
        crossing: Some(Road::Main),
        closes_main_road: true,
    },
    Phase {
        title: "PHASE 2: SECONDARY ROAD FLOWING",
        duration_secs: 35,
        countdown_label: "Time until secondary road closes: ",
        signal: SignalPattern::Steady(SignalState::GREEN),
        crossing: None,
        closes_main_road: true,
    },
    Phase {
        title: "TRANSITION: YELLOW BLINKING",
        duration_secs: 5,
        countdown_label: "Transition time: ",
        signal: SignalPattern::Blink(SignalState::YELLOW),
        crossing: None,
        closes_main_road: true,
    },
    Phase {
        title: "PEDESTRIAN PHASE (SECONDARY ROAD)",
        duration_secs: 10,
        countdown_label: "Time to cross: ",
        signal: SignalPattern::Steady(SignalState::RED),
        crossing: Some(Road::Secondary),
        closes_main_road: false,
    },
];

/// Total length of one pass through `phases`, in seconds
#[must_use]
pub fn cycle_length_secs(phases: &[Phase]) -> u32 {
    phases.iter().map(|p| p.duration_secs).sum()
}

/// Seconds per cycle during which the main road is held closed
#[must_use]
pub fn main_road_closed_secs(phases: &[Phase]) -> u32 {
    phases
        .iter()
        .filter(|p| p.closes_main_road)
        .map(|p| p.duration_secs)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_is_110_seconds() {
        assert_eq!(cycle_length_secs(&INTERSECTION_CYCLE), 110);
    }

    #[test]
    fn test_durations_in_order() {
        let durations: Vec<u32> = INTERSECTION_CYCLE.iter().map(|p| p.duration_secs).collect();
        assert_eq!(durations, [45, 5, 10, 35, 5, 10]);
    }

    #[test]
    fn test_main_road_closed_for_fifty_consecutive_seconds() {
        assert_eq!(main_road_closed_secs(&INTERSECTION_CYCLE), 50);

        // Closed phases form one contiguous run
        let closed: Vec<usize> = INTERSECTION_CYCLE
            .iter()
            .enumerate()
            .filter(|(_, p)| p.closes_main_road)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(closed, [2, 3, 4]);
    }

    #[test]
    fn test_blink_alternates_starting_lit() {
        let states: Vec<SignalState> = (0..5).map(|t| blink(SignalState::YELLOW, t)).collect();
        assert_eq!(
            states,
            [
                SignalState::YELLOW,
                SignalState::DARK,
                SignalState::YELLOW,
                SignalState::DARK,
                SignalState::YELLOW,
            ]
        );
    }

    #[test]
    fn test_steady_pattern_ignores_tick() {
        let pattern = SignalPattern::Steady(SignalState::GREEN);
        assert!((0..45).all(|t| pattern.at(t) == SignalState::GREEN));
    }

    #[test]
    fn test_transitions_blink_yellow() {
        for idx in [1, 4] {
            let phase = &INTERSECTION_CYCLE[idx];
            assert!(phase.is_blinking());
            assert_eq!(phase.vehicle_signal(0), SignalState::YELLOW);
            assert_eq!(phase.vehicle_signal(1), SignalState::DARK);
        }
    }

    #[test]
    fn test_pedestrian_phases_show_two_signals() {
        let main = &INTERSECTION_CYCLE[2];
        assert_eq!(main.crossing, Some(Road::Main));
        assert_eq!(main.vehicle_signal(0), SignalState::RED);
        assert_eq!(main.pedestrian_signal(), Some(SignalState::GREEN));

        let secondary = &INTERSECTION_CYCLE[5];
        assert_eq!(secondary.crossing, Some(Road::Secondary));
        assert_eq!(secondary.pedestrian_signal(), Some(SignalState::GREEN));
    }

    #[test]
    fn test_flow_phases_have_no_pedestrian_signal() {
        assert!(INTERSECTION_CYCLE[0].pedestrian_signal().is_none());
        assert!(INTERSECTION_CYCLE[3].pedestrian_signal().is_none());
    }

    #[test]
    fn test_road_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Road::Main).unwrap(), "\"main\"");
        assert_eq!(
            serde_json::to_string(&Road::Secondary).unwrap(),
            "\"secondary\""
        );
    }
}
