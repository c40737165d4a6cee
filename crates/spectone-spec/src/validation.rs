//! Request validation logic.
//!
//! Validation runs before synthesis and accumulates every problem it
//! finds, so a caller can report all of them at once instead of fixing
//! one bound per round trip.

use crate::request::SynthesisRequest;

/// Inclusive duration bounds in seconds.
pub const DURATION_RANGE: (f64, f64) = (0.01, 30.0);

/// Inclusive sample rate bounds in Hz.
pub const SAMPLE_RATE_RANGE: (u32, u32) = (3_500, 192_000);

/// Every policy numeric parameter must fall inside this symmetric range.
pub const POLICY_PARAM_LIMIT: f64 = 1_000_000.0;

/// Inclusive character-count bounds for freeform spectrum text.
pub const SPECTRUM_TEXT_RANGE: (usize, usize) = (3, 100_000);

/// Error codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Duration outside the allowed range
    DurationOutOfRange,
    /// E002: Sample rate outside the allowed range
    SampleRateOutOfRange,
    /// E003: Policy parameter outside the allowed range
    PolicyParamOutOfRange,
    /// E004: Policy parameter is NaN or infinite
    PolicyParamNotFinite,
    /// E005: Spectrum text outside the allowed length
    SpectrumTextLengthOutOfRange,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::DurationOutOfRange => "E001",
            ErrorCode::SampleRateOutOfRange => "E002",
            ErrorCode::PolicyParamOutOfRange => "E003",
            ErrorCode::PolicyParamNotFinite => "E004",
            ErrorCode::SpectrumTextLengthOutOfRange => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and the offending field path.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "policy.offset").
    pub path: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.code, self.path, self.message)
    }
}

/// Accumulated outcome of validating a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// All errors found, in field order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Returns true when no errors were found.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

/// Validates a synthesis request against the service bounds.
///
/// # Example
/// ```
/// use spectone_spec::{validate_request, SynthesisRequest};
///
/// let result = validate_request(&SynthesisRequest::default());
/// assert!(result.is_ok());
/// ```
pub fn validate_request(request: &SynthesisRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_duration(request.duration_seconds, &mut result);
    validate_sample_rate(request.sample_rate, &mut result);
    for (name, value) in request.policy.params() {
        validate_policy_param(name, value, &mut result);
    }

    result
}

/// Validates freeform spectrum text length before parsing.
pub fn validate_spectrum_text(text: &str) -> ValidationResult {
    let mut result = ValidationResult::default();
    let (min, max) = SPECTRUM_TEXT_RANGE;

    if text.len() < min || text.len() > max {
        result.add_error(ValidationError::new(
            ErrorCode::SpectrumTextLengthOutOfRange,
            format!(
                "spectrum text must be between {} and {} characters, got {}",
                min,
                max,
                text.len()
            ),
            "spectrum_text",
        ));
    }

    result
}

fn validate_duration(duration: f64, result: &mut ValidationResult) {
    let (min, max) = DURATION_RANGE;
    // NaN fails both comparisons and lands here too.
    if !(duration >= min && duration <= max) {
        result.add_error(ValidationError::new(
            ErrorCode::DurationOutOfRange,
            format!(
                "duration must be between {} and {} seconds, got {}",
                min, max, duration
            ),
            "duration_seconds",
        ));
    }
}

fn validate_sample_rate(sample_rate: u32, result: &mut ValidationResult) {
    let (min, max) = SAMPLE_RATE_RANGE;
    if sample_rate < min || sample_rate > max {
        result.add_error(ValidationError::new(
            ErrorCode::SampleRateOutOfRange,
            format!(
                "sample rate must be between {} and {} Hz, got {}",
                min, max, sample_rate
            ),
            "sample_rate",
        ));
    }
}

fn validate_policy_param(name: &str, value: f64, result: &mut ValidationResult) {
    let path = format!("policy.{}", name);

    if !value.is_finite() {
        result.add_error(ValidationError::new(
            ErrorCode::PolicyParamNotFinite,
            format!("{} must be a finite number, got {}", name, value),
            path,
        ));
        return;
    }

    if value.abs() > POLICY_PARAM_LIMIT {
        result.add_error(ValidationError::new(
            ErrorCode::PolicyParamOutOfRange,
            format!(
                "{} must be between -{} and {}, got {}",
                name, POLICY_PARAM_LIMIT, POLICY_PARAM_LIMIT, value
            ),
            path,
        ));
    }
}
