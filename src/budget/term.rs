//! The closed set of budget terms and their name table.

use std::fmt;

use super::{BudgetError, OUTPUT_PREFIX};

/// One term of the TKE transport budget.
///
/// The set is closed and fixed by the physics, so the term-name mapping is
/// a static table rather than any kind of runtime registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BudgetTerm {
    /// `Ck`: convection by the instantaneous velocity
    Convection,
    /// `Pk`: production against the mean shear
    Production,
    /// `Tk`: transport by the velocity fluctuation
    Transport,
    /// `Dk`: viscous diffusion
    Diffusion,
    /// `Epik`: viscous dissipation
    Dissipation,
    /// `Pik`: pressure-velocity-gradient correlation
    PressureVelocity,
}

impl BudgetTerm {
    /// All six terms, in budget-equation order.
    pub const ALL: [BudgetTerm; 6] = [
        BudgetTerm::Convection,
        BudgetTerm::Production,
        BudgetTerm::Transport,
        BudgetTerm::Diffusion,
        BudgetTerm::Dissipation,
        BudgetTerm::PressureVelocity,
    ];

    /// Canonical term name, as it appears in configuration.
    pub fn name(self) -> &'static str {
        match self {
            BudgetTerm::Convection => "Ck",
            BudgetTerm::Production => "Pk",
            BudgetTerm::Transport => "Tk",
            BudgetTerm::Diffusion => "Dk",
            BudgetTerm::Dissipation => "Epik",
            BudgetTerm::PressureVelocity => "Pik",
        }
    }

    /// Resolve a configured name (case-sensitive exact match).
    ///
    /// Unknown names are a fatal configuration error; a single bad entry
    /// must poison the whole pass rather than be skipped.
    pub fn from_name(name: &str) -> Result<Self, BudgetError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| BudgetError::InvalidFieldSelection(name.to_string()))
    }

    /// Name the committed field is stored under.
    pub fn output_name(self) -> String {
        format!("{OUTPUT_PREFIX}{}", self.name())
    }
}

impl fmt::Display for BudgetTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
