//! Epidemiological compartment of an agent.

/// The disease compartment an agent is in.
///
/// The declaration order is the only legal direction of travel:
/// `Susceptible → Exposed → Infected → {Recovered | Dead}`.  `Recovered` and
/// `Dead` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseState {
    #[default]
    Susceptible,
    Exposed,
    Infected,
    Recovered,
    Dead,
}

impl DiseaseState {
    pub const ALL: [DiseaseState; 5] = [
        DiseaseState::Susceptible,
        DiseaseState::Exposed,
        DiseaseState::Infected,
        DiseaseState::Recovered,
        DiseaseState::Dead,
    ];

    /// Position along the progression.  `Recovered` and `Dead` share a rank
    /// because neither can follow the other.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            DiseaseState::Susceptible => 0,
            DiseaseState::Exposed     => 1,
            DiseaseState::Infected    => 2,
            DiseaseState::Recovered   => 3,
            DiseaseState::Dead        => 3,
        }
    }

    /// `true` if a transition from `self` to `next` moves forward.
    #[inline]
    pub fn can_become(self, next: DiseaseState) -> bool {
        next.rank() > self.rank()
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, DiseaseState::Recovered | DiseaseState::Dead)
    }

    /// Lower-case label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DiseaseState::Susceptible => "susceptible",
            DiseaseState::Exposed     => "exposed",
            DiseaseState::Infected    => "infected",
            DiseaseState::Recovered   => "recovered",
            DiseaseState::Dead        => "dead",
        }
    }
}

impl std::fmt::Display for DiseaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
