//! Turbulence-kinetic-energy transport-budget terms.
//!
//! Computes the six budget terms of the time-averaged TKE transport
//! equation from mesh-resident base fields and stores each result in the
//! field registry under a `tke_`-prefixed name:
//!
//! - `Ck`   convection          −½ · U · ∇(tr R)
//! - `Pk`   production          −(R : ∇U)
//! - `Tk`   turbulent transport −½ · ∇·((U′·U′) U′)
//! - `Dk`   viscous diffusion   ν · ½ · ∇²(tr R)
//! - `Epik` viscous dissipation −ν · (∇U′ : ∇U′)
//! - `Pik`  pressure-velocity   −(U′ · ∇P′)
//!
//! with U′ = U − Ū, P′ = P − P̄, R the Reynolds-stress second moment and
//! ν = 1/Re.

mod driver;
mod evaluate;
mod term;

pub use driver::{TkeBudget, TkeBudgetConfig};
pub use evaluate::{
    convection, diffusion, dissipation, pressure_velocity, production, transport,
};
pub use term::BudgetTerm;

use thiserror::Error;

use crate::field::FieldError;

/// Prefix every stored budget field carries. Downstream writers key off
/// this exact string.
pub const OUTPUT_PREFIX: &str = "tke_";

/// External names of the base fields the evaluators read. These are a
/// collaborator contract with the producer of the averaged flow field.
pub mod base_fields {
    /// Instantaneous velocity
    pub const U: &str = "U";
    /// Mean velocity
    pub const U_MEAN: &str = "UMean";
    /// Instantaneous pressure
    pub const P: &str = "p";
    /// Mean pressure
    pub const P_MEAN: &str = "pMean";
    /// Reynolds-stress second moment `mean(u' ⊗ u')`
    pub const R: &str = "UPrime2Mean";
}

/// Error type for budget evaluation.
///
/// Every variant is fatal: it aborts the whole evaluation pass. The one
/// recoverable condition (a name collision on commit) is reported through
/// [`CommitOutcome::Rejected`](crate::field::CommitOutcome), not here.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// A requested term name matches none of the six known terms.
    #[error("invalid field selection '{0}'")]
    InvalidFieldSelection(String),

    /// A base field is absent or stored with the wrong type.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The configured Reynolds number is unusable.
    #[error("Reynolds number must be positive, got {0}")]
    InvalidReynolds(f64),
}
