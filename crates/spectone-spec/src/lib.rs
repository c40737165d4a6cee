//! Spectone request types, frequency-mapping policies, and validation.
//!
//! This crate holds the pure data side of the sonification pipeline: the
//! [`Peak`] type and freeform spectrum-text parser, the [`FrequencyPolicy`]
//! enum mapping mass-to-charge values to audio frequencies, the
//! [`SynthesisRequest`] parameter record, and the request validator with
//! stable error codes. The actual waveform synthesis lives in
//! `spectone-synth`.
//!
//! All public types are `serde`-serializable so a request can round-trip
//! through JSON unchanged.

pub mod error;
pub mod peak;
pub mod policy;
pub mod request;
pub mod validation;

pub use error::SpecError;
pub use peak::{parse_spectrum_text, Peak};
pub use policy::{FrequencyPolicy, PolicyKind};
pub use request::SynthesisRequest;
pub use validation::{
    validate_request, validate_spectrum_text, ErrorCode, ValidationError, ValidationResult,
};
