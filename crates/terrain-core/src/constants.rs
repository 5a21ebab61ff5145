/// Terrain engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the signed axes (coldHeat, defExcess, dampDry).
pub const SIGNED_AXIS_MIN: i32 = -10;

/// Lower bound of the intensity axes (qiStagnation, shenUnsettled).
pub const INTENSITY_AXIS_MIN: i32 = 0;

/// Upper bound shared by every axis.
pub const AXIS_MAX: i32 = 10;

/// |coldHeat| / |defExcess| at or beyond which the axis leaves its neutral band.
pub const PRIMARY_THRESHOLD: i32 = 3;

/// qiStagnation / shenUnsettled at or above which the pattern becomes a modifier candidate.
pub const INTENSITY_THRESHOLD: i32 = 4;

/// |dampDry| at or beyond which damp or dry becomes a modifier candidate.
pub const MOISTURE_THRESHOLD: i32 = 3;

/// Weight applied to a question that does not declare one.
pub const DEFAULT_QUESTION_WEIGHT: f64 = 1.0;

/// Number of questions in the pulse check-in.
pub const PULSE_QUESTION_COUNT: usize = 5;
