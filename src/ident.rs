//! Identifiers and timestamps for new records.
//!
//! Both are pulled in through small traits so that a factory can be handed
//! deterministic versions in tests.

use std::{
    str::FromStr,
    sync::{Mutex, PoisonError},
};

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, RngCore as _, SeedableRng as _};
use uuid::Uuid;

/// Unique identifier of an [`ImageAnalysis`](crate::ImageAnalysis).
///
/// Displayed (and serialized) as a hyphenated UUID, like
/// `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AnalysisId(Uuid);

impl AnalysisId {
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for AnalysisId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for AnalysisId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Something that hands out fresh [`AnalysisId`]s.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> AnalysisId;
}

/// Random (v4) UUIDs from the operating system's secure RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> AnalysisId {
        AnalysisId(Uuid::new_v4())
    }
}

/// Reproducible v4-shaped UUIDs drawn from a seeded RNG.
///
/// Two generators made with the same seed give the same sequence. Don't use
/// this for anything that needs to be unguessable!
#[derive(Debug)]
pub struct SeededIds {
    rng: Mutex<StdRng>,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdGenerator for SeededIds {
    fn generate(&self) -> AnalysisId {
        let mut bytes = [0_u8; 16];
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(&mut bytes);

        AnalysisId(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// A source of "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that's stuck at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
