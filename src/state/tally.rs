//! Demographic Tally Session
//!
//! Gender/age-group counters gated by a fixed-duration countdown. The
//! session is a pure state machine; the per-second drive lives in
//! [`crate::state::ticker`].

use serde_json::Value;

/// Visitor gender, as tallied on site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
        }
    }

    fn index(&self) -> usize {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

/// Visitor age band, as tallied on site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeGroup {
    Teens,
    Twenties,
    Thirties,
    Forties,
    Fifties,
    SixtiesUp,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Teens,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::Fifties,
        AgeGroup::SixtiesUp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Teens => "10代",
            AgeGroup::Twenties => "20代",
            AgeGroup::Thirties => "30代",
            AgeGroup::Forties => "40代",
            AgeGroup::Fifties => "50代",
            AgeGroup::SixtiesUp => "60代",
        }
    }

    fn index(&self) -> usize {
        match self {
            AgeGroup::Teens => 0,
            AgeGroup::Twenties => 1,
            AgeGroup::Thirties => 2,
            AgeGroup::Forties => 3,
            AgeGroup::Fifties => 4,
            AgeGroup::SixtiesUp => 5,
        }
    }
}

/// Dense gender x age-group counter table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemographicCounts {
    counts: [[u32; AgeGroup::ALL.len()]; Gender::ALL.len()],
}

impl DemographicCounts {
    pub fn get(&self, gender: Gender, age: AgeGroup) -> u32 {
        self.counts[gender.index()][age.index()]
    }

    pub fn increment(&mut self, gender: Gender, age: AgeGroup) {
        self.counts[gender.index()][age.index()] += 1;
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    /// JSON projection keyed by the on-site labels, for the terminal
    /// console record
    pub fn to_json(&self) -> Value {
        let mut genders = serde_json::Map::new();
        for gender in Gender::ALL {
            let mut bands = serde_json::Map::new();
            for age in AgeGroup::ALL {
                bands.insert(age.label().to_string(), self.get(gender, age).into());
            }
            genders.insert(gender.label().to_string(), bands.into());
        }
        genders.into()
    }
}

/// Outcome of a one-second tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No countdown in progress
    Idle,
    /// Countdown continues with this many seconds left
    Running(u32),
    /// Countdown just hit zero; the final counts are snapshotted here
    /// exactly once
    Expired(DemographicCounts),
}

/// A timed observation window over a counter table.
///
/// `remaining == None` is the stopped state; counters only move while a
/// countdown is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TallySession {
    counts: DemographicCounts,
    remaining: Option<u32>,
}

impl TallySession {
    pub fn counts(&self) -> &DemographicCounts {
        &self.counts
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Begin a countdown of `duration_seconds`. Returns `false` (and
    /// changes nothing) when one is already in progress.
    pub fn start(&mut self, duration_seconds: u32) -> bool {
        if self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(duration_seconds);
        true
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> Tick {
        let Some(seconds) = self.remaining else {
            return Tick::Idle;
        };

        let next = seconds.saturating_sub(1);
        if next == 0 {
            self.remaining = None;
            Tick::Expired(self.counts)
        } else {
            self.remaining = Some(next);
            Tick::Running(next)
        }
    }

    /// Count one visitor; ignored while no countdown is in progress
    pub fn increment(&mut self, gender: Gender, age: AgeGroup) {
        if self.remaining.is_none() {
            return;
        }
        self.counts.increment(gender, age);
    }

    /// Zero the counters and stop the countdown (new observation cycle)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Zero-padded `MM:SS` rendering of a second count
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(300), "05:00");
        assert_eq!(format_time(900), "15:00");
        assert_eq!(format_time(754), "12:34");
    }

    #[test]
    fn test_start_sets_duration_exactly_once() {
        let mut session = TallySession::default();
        assert!(session.start(900));
        assert_eq!(session.remaining(), Some(900));

        // Starting again while running is a no-op
        assert!(!session.start(300));
        assert_eq!(session.remaining(), Some(900));
    }

    #[test]
    fn test_increment_ignored_while_stopped() {
        let mut session = TallySession::default();
        session.increment(Gender::Female, AgeGroup::Thirties);
        assert_eq!(session.counts().total(), 0);
    }

    #[test]
    fn test_increment_touches_exactly_one_cell() {
        let mut session = TallySession::default();
        session.start(300);
        session.increment(Gender::Female, AgeGroup::Thirties);

        for gender in Gender::ALL {
            for age in AgeGroup::ALL {
                let expected =
                    u32::from(gender == Gender::Female && age == AgeGroup::Thirties);
                assert_eq!(session.counts().get(gender, age), expected);
            }
        }
    }

    #[test]
    fn test_tick_counts_down() {
        let mut session = TallySession::default();
        session.start(3);
        assert_eq!(session.tick(), Tick::Running(2));
        assert_eq!(session.tick(), Tick::Running(1));
    }

    #[test]
    fn test_expiry_emits_final_counts_once() {
        let mut session = TallySession::default();
        session.start(2);
        session.increment(Gender::Male, AgeGroup::Twenties);
        session.increment(Gender::Male, AgeGroup::Twenties);

        assert_eq!(session.tick(), Tick::Running(1));
        match session.tick() {
            Tick::Expired(counts) => {
                assert_eq!(counts.get(Gender::Male, AgeGroup::Twenties), 2);
                assert_eq!(counts.total(), 2);
            }
            other => panic!("expected expiry, got {other:?}"),
        }

        assert!(!session.is_running());
        assert_eq!(session.remaining(), None);
        // Once expired, further ticks are idle
        assert_eq!(session.tick(), Tick::Idle);
    }

    #[test]
    fn test_counts_survive_expiry_until_reset() {
        let mut session = TallySession::default();
        session.start(1);
        session.increment(Gender::Female, AgeGroup::Teens);
        session.tick();

        assert_eq!(session.counts().get(Gender::Female, AgeGroup::Teens), 1);
        session.reset();
        assert_eq!(session.counts().total(), 0);
        assert!(!session.is_running());
    }

    #[test]
    fn test_json_projection_uses_labels() {
        let mut session = TallySession::default();
        session.start(10);
        session.increment(Gender::Male, AgeGroup::Forties);

        let json = session.counts().to_json();
        assert_eq!(json["男性"]["40代"], 1);
        assert_eq!(json["女性"]["40代"], 0);
    }
}
