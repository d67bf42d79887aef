use serde::Serialize;

/**
 * ## Comm-B classification tag
 *
 * The result of running the classifier over a 56-bit Comm-B payload: either
 * a gating/ambiguity outcome, or the name of the single register whose
 * candidate decoder uniquely maximised the score.
 */
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommBFormat {
    /// DR/UM/corrected-bits preconditions failed; no candidate was run.
    #[default]
    NotDecoded,
    /// Every candidate scored zero or less.
    Unknown,
    /// Two or more candidates tied at the best positive score.
    Ambiguous,
    EmptyResponse,
    DatalinkCaps,
    GicbCaps,
    AircraftIdent,
    AcasRa,
    VerticalIntent,
    TrackTurn,
    HeadingSpeed,
    Mrar,
    AirbornePosition,
}

/// Altitude source for the BDS4,0 selected vertical intention report.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeSource {
    #[default]
    Unknown,
    Aircraft,
    Mcp,
    Fms,
    Invalid,
}

impl From<u32> for AltitudeSource {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Self::Unknown,
            1 => Self::Aircraft,
            2 => Self::Mcp,
            3 => Self::Fms,
            _ => Self::Invalid,
        }
    }
}

/// Reference frame of the heading/track value written by BDS5,0 or BDS6,0.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingType {
    /// BDS5,0: true track over the ground.
    GroundTrack,
    /// BDS6,0: magnetic heading.
    Magnetic,
}

/// BDS4,4 turbulence hazard level.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Turbulence {
    Nil,
    Light,
    Moderate,
    Severe,
}

impl From<u32> for Turbulence {
    fn from(raw: u32) -> Self {
        match raw {
            0 => Self::Nil,
            1 => Self::Light,
            2 => Self::Moderate,
            _ => Self::Severe,
        }
    }
}

/// BDS4,4 meteorological data source. The sentinel `Invalid` value and the
/// start of the reserved range are defined by the meteorological domain
/// standard; any other 4-bit value is accepted as a legal source tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MrarSource {
    Invalid,
    InertialNavigation,
    Gnss,
    DmeDme,
    VorDme,
    Other(u32),
}

impl MrarSource {
    pub(crate) const RESERVED_FROM: u32 = 5;

    pub(crate) fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => None, // MRAR_SOURCE_INVALID: always rejected by the candidate
            _ if raw >= Self::RESERVED_FROM => None, // reserved range
            1 => Some(Self::InertialNavigation),
            2 => Some(Self::Gnss),
            3 => Some(Self::DmeDme),
            4 => Some(Self::VorDme),
            other => Some(Self::Other(other)),
        }
    }

    pub(crate) fn is_dme_dme(&self) -> bool {
        matches!(self, Self::DmeDme)
    }
}

/// Autopilot mode flags carried in BDS4,0, bits 55..56.
pub mod nav_mode {
    pub const VNAV: u8 = 4;
    pub const ALT_HOLD: u8 = 2;
    pub const APPROACH: u8 = 1;
}

/// Decoded aircraft identification (callsign), BDS2,0.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Default)]
pub struct Callsign {
    pub callsign: Option<String>,
    pub callsign_valid: bool,
}

/// Navigation block written by BDS4,0 (selected vertical intention).
#[derive(Debug, PartialEq, Clone, Serialize, Default)]
pub struct Navigation {
    pub mcp_altitude: Option<u32>,
    pub mcp_altitude_valid: bool,
    pub fms_altitude: Option<u32>,
    pub fms_altitude_valid: bool,
    pub qnh: Option<f64>,
    pub qnh_valid: bool,
    pub nav_modes: Option<u8>,
    pub nav_modes_valid: bool,
    pub altitude_source: AltitudeSource,
}

/// Three ground-speed shadow fields: original Mode S decoders historically
/// kept separate "v0"/"v2" estimates alongside a "selected" value; a single
/// Comm-B groundspeed reading populates all three identically.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Default)]
pub struct GroundSpeed {
    pub v0: f64,
    pub v2: f64,
    pub selected: f64,
}

/// Kinematics block written by BDS5,0 (track and turn) and BDS6,0 (heading
/// and speed). Both registers populate overlapping subsets of these fields.
#[derive(Debug, PartialEq, Clone, Serialize, Default)]
pub struct Kinematics {
    pub roll: Option<f64>,
    pub roll_valid: bool,

    pub heading: Option<f64>,
    pub heading_valid: bool,
    pub heading_type: Option<HeadingType>,

    pub groundspeed: Option<GroundSpeed>,
    pub groundspeed_valid: bool,

    pub track_rate: Option<f64>,
    pub track_rate_valid: bool,

    pub tas: Option<f64>,
    pub tas_valid: bool,

    pub ias: Option<f64>,
    pub ias_valid: bool,

    pub mach: Option<f64>,
    pub mach_valid: bool,

    pub baro_rate: Option<f64>,
    pub baro_rate_valid: bool,

    pub geom_rate: Option<f64>,
    pub geom_rate_valid: bool,
}

/// Meteorological block written by BDS4,4 (meteorological routine air report).
#[derive(Debug, PartialEq, Clone, Serialize, Default)]
pub struct Meteorology {
    pub mrar_source: Option<MrarSource>,
    pub mrar_source_valid: bool,

    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wind_valid: bool,

    pub temperature: Option<f64>,
    pub temperature_valid: bool,

    pub pressure: Option<f64>,
    pub pressure_valid: bool,

    pub turbulence: Option<Turbulence>,
    pub turbulence_valid: bool,

    pub humidity: Option<f64>,
    pub humidity_valid: bool,
}

/// The full set of fields a candidate decoder may write on its store pass.
#[derive(Debug, PartialEq, Clone, Serialize, Default)]
pub struct CommBFields {
    pub commb_format: CommBFormat,
    pub callsign: Callsign,
    pub navigation: Navigation,
    pub kinematics: Kinematics,
    pub meteorology: Meteorology,
}

/// A decoded Mode S frame carrying a Comm-B payload (DF20 or DF21), as
/// handed to the core by the (out of scope) framing/CRC/error-correction
/// collaborator.
#[derive(Debug, PartialEq, Clone)]
pub struct CommBFrame {
    /// Downlink format: 20 (altitude reply) or 21 (identity reply).
    pub msgtype: u8,
    /// The 7-byte Comm-B payload (`MB[0..6]`).
    pub mb: [u8; 7],
    /// Downlink request field of the enclosing frame.
    pub dr: u8,
    /// Utility message field of the enclosing frame.
    pub um: u8,
    /// Number of bits fixed by error correction upstream.
    pub corrected_bits: u32,
    /// 13-bit altitude code from the enclosing frame (DF20 only); the raw
    /// encoded value, not decoded to feet.
    pub ac: Option<u16>,
    /// Fields written by the classifier; left at defaults until [`crate::classify`]
    /// runs.
    pub fields: CommBFields,
}

impl CommBFrame {
    pub fn new(msgtype: u8, mb: [u8; 7]) -> Self {
        Self {
            msgtype,
            mb,
            dr: 0,
            um: 0,
            corrected_bits: 0,
            ac: None,
            fields: CommBFields::default(),
        }
    }
}
