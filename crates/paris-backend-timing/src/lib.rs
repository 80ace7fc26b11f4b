//! PARIS Studio Timing Backend
//!
//! Converts text into an ordered sequence of `(duration_ms, tone_on)` events.
//!
//! # Overview
//!
//! - Dot duration follows the PARIS calibration: `1200 / char_speed_wpm` ms.
//! - Dashes are `dash_weight` dots; symbols within a character are one dot apart.
//! - Letter and word gaps are measured in Farnsworth dots, so a Farnsworth
//!   speed below the character speed widens spacing without changing the
//!   symbols themselves.
//! - Optional jitter perturbs every generated duration independently.
//!
//! # Determinism
//!
//! Without jitter the output depends only on the inputs. With jitter, use
//! [`generate_seeded`] (PCG32 seeded through BLAKE3 derivation) or pass your
//! own generator to [`generate_with_rng`].
//!
//! # Example
//!
//! ```
//! use paris_backend_timing::generate;
//! use paris_spec::{TimingEvent, TimingParams};
//!
//! let seq = generate("E T", &TimingParams::standard(20.0));
//! assert_eq!(
//!     seq.events(),
//!     &[TimingEvent::tone(60), TimingEvent::silence(420), TimingEvent::tone(180)]
//! );
//! ```

pub mod estimate;
pub mod generate;
pub mod rng;

pub use estimate::{effective_wpm, estimate_effective_wpm};
pub use generate::{generate, generate_seeded, generate_with_rng, TimingPlan};
