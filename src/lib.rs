//! Mode S Comm-B message classifier and decoder.
//!
//! Given a 56-bit Comm-B payload from a Mode S DF20/DF21 frame, [`classify`]
//! scores every recognised BDS (Binary Data Store) register against it and,
//! when exactly one candidate uniquely maximises the score, decodes its
//! structured fields into the frame's [`CommBFields`] block.

pub mod bds;
pub mod bits;
pub mod classifier;
pub mod types;

pub use classifier::classify;
pub use types::{
    AltitudeSource, Callsign, CommBFields, CommBFormat, CommBFrame, GroundSpeed, HeadingType,
    Kinematics, Meteorology, MrarSource, Navigation, Turbulence,
};
