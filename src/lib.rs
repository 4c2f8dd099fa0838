// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Draggable value slider: snapping value model, pointer tracking and an
//! animated thumb that lifts above the track while it is dragged.
//!
//! The crate is toolkit-independent. A host feeds [`PointerEvent`]s and
//! control bounds in, draws the frames and label text it reads back, and
//! reacts to the [`SliderEvent`]s returned from event handling.
//!
//! # Key entry points
//!
//! - [`SliderController`] - the interactive control
//! - [`SliderModel`] - range, current value and step quantization
//! - [`TrackGeometry`] - track/thumb layout and value/position mapping
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`animation`] - elevate/settle transitions and the driver seam
//!
//! # Architecture
//!
//! All state changes are synchronous. Horizontal layout and the value
//! label are rewritten immediately on every change; only the vertical
//! elevate/settle transitions are handed to an [`AnimationDriver`], after
//! the logical position has already been updated.

pub mod animation;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod label;
pub mod model;
pub mod options;

pub use animation::{AnimationDriver, NoAnimation, TweenAnimator};
pub use controller::{SliderController, SliderEvent};
pub use error::SliderError;
pub use geometry::{Rect, TrackGeometry};
pub use input::PointerEvent;
pub use label::{LabelRenderer, MonospaceLabel};
pub use model::{SliderModel, Step};
pub use options::Options;
