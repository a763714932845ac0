//! Consumer-facing lag compensation: per-object capture cadence and rewound
//! hit-test sampling.
//!
//! The core history types hold no notion of "per frame"; an external
//! scheduler owns the tick cadence and passes explicit time arguments. A
//! [`Compensator`] wraps one object's history with that cadence gate and the
//! estimate → bracket → interpolate pipeline a hit test needs.

mod compensator;

pub use compensator::Compensator;
