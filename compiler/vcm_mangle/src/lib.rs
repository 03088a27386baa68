//! Value-class name mangling decisions.
//!
//! A value class compiles to its underlying representation wherever it can.
//! Two overloads that differ only in a value-class parameter (or return)
//! type would then erase to the same platform signature, so the back end
//! appends a mangled suffix to such callables. This crate decides *whether*
//! a callable needs that suffix; deriving the suffix is the back end's job.
//!
//! - **Exemption registry** ([`ExemptionRegistry`]): well-known value classes
//!   that are never mangled (the standard result wrapper).
//! - **Upper-bound resolver** ([`representative_upper_bound`]): picks the
//!   bound of a type parameter that drives the analysis.
//! - **Decision engine** ([`ManglingEngine`]): the per-type and per-callable
//!   queries the code generator calls.
//! - **Decision cache** ([`DecisionCache`], [`SharedDecisionCache`]):
//!   optional per-callable memoization, safe to populate from many threads.
//!
//! # Design
//!
//! Every query is a pure function of an immutable [`DeclGraph`](vcm_ir::DeclGraph)
//! and an [`ExemptionRegistry`]. The one recursive walk, through chains of
//! type-parameter bounds, carries a set of the parameters currently being
//! visited and answers `false` when it meets one again, so malformed cyclic
//! bounds terminate instead of overflowing the stack.
//!
//! # Tracing
//!
//! - `RUST_LOG=vcm_mangle=debug`: one line per callable decision.
//! - `RUST_LOG=vcm_mangle=trace`: also bound-cycle detection.

mod bound;
mod cache;
mod engine;
mod exempt;

pub use bound::representative_upper_bound;
pub use cache::{DecisionCache, SharedDecisionCache};
pub use engine::ManglingEngine;
pub use exempt::{ExemptionRegistry, STANDARD_EXEMPTIONS};

use std::sync::Once;

/// What the back end must do when emitting one callable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ManglingDecision {
    /// Append a mangled suffix to the platform-visible name.
    pub mangle_name: bool,
    /// Hide the synthetic constructor overload instead of emitting a
    /// colliding mangled constructor.
    pub suppress_constructor: bool,
}

impl ManglingDecision {
    /// Emit the callable under its plain name.
    pub const UNCHANGED: Self = Self {
        mangle_name: false,
        suppress_constructor: false,
    };

    /// Check if the back end has to deviate from the plain emission.
    #[inline]
    pub const fn is_unchanged(self) -> bool {
        !self.mangle_name && !self.suppress_constructor
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=vcm_mangle=debug` or `RUST_LOG=vcm_mangle=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
