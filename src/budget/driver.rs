//! Configuration and the driving loop.

use log::{info, warn};
use serde::Deserialize;

use super::{evaluate, BudgetError, BudgetTerm};
use crate::field::{CommitOutcome, FieldData, FieldRegistry, ScalarField};
use crate::mesh::FvMesh;

/// Configuration of a budget evaluation.
///
/// Terms are requested either as a single `field` entry or as a `fields`
/// list; when both are present, `field` wins (matching the original
/// dictionary contract). `reynolds` sets the effective diffusivity
/// ν = 1/Re used by the diffusion and dissipation terms.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TkeBudgetConfig {
    /// A single requested term name
    #[serde(default)]
    pub field: Option<String>,
    /// Requested term names
    #[serde(default)]
    pub fields: Vec<String>,
    /// Reynolds number (must be positive)
    pub reynolds: f64,
}

/// Evaluates the requested budget terms and commits each result into the
/// field registry under its `tke_`-prefixed name.
#[derive(Clone, Debug)]
pub struct TkeBudget {
    terms: Vec<BudgetTerm>,
    nu_eff: f64,
}

impl TkeBudget {
    /// Build from an explicit term set and a Reynolds number.
    ///
    /// Duplicate terms are dropped; first-seen order is kept so repeated
    /// passes store fields in a reproducible order.
    pub fn new(
        terms: impl IntoIterator<Item = BudgetTerm>,
        reynolds: f64,
    ) -> Result<Self, BudgetError> {
        if !(reynolds > 0.0) {
            return Err(BudgetError::InvalidReynolds(reynolds));
        }
        let mut unique = Vec::new();
        for term in terms {
            if !unique.contains(&term) {
                unique.push(term);
            }
        }
        Ok(Self {
            terms: unique,
            nu_eff: 1.0 / reynolds,
        })
    }

    /// Build from configuration, resolving term names fail-fast: one
    /// unknown name aborts construction.
    pub fn from_config(config: &TkeBudgetConfig) -> Result<Self, BudgetError> {
        let names: Vec<&str> = match &config.field {
            Some(one) => vec![one.as_str()],
            None => config.fields.iter().map(String::as_str).collect(),
        };
        let terms = names
            .iter()
            .map(|n| BudgetTerm::from_name(n))
            .collect::<Result<Vec<_>, _>>()?;

        let budget = Self::new(terms, config.reynolds)?;
        if budget.terms.is_empty() {
            info!("tkeBudget: no fields requested to be stored");
        } else {
            let listed: Vec<&str> = budget.terms.iter().map(|t| t.name()).collect();
            info!("tkeBudget: storing fields: {}", listed.join(" "));
        }
        Ok(budget)
    }

    /// The requested terms, in evaluation order.
    #[inline]
    pub fn terms(&self) -> &[BudgetTerm] {
        &self.terms
    }

    /// Effective diffusivity ν = 1/Re.
    #[inline]
    pub fn nu_eff(&self) -> f64 {
        self.nu_eff
    }

    /// Evaluate a single term without storing it.
    pub fn evaluate(
        &self,
        term: BudgetTerm,
        mesh: &FvMesh,
        reg: &FieldRegistry,
    ) -> Result<ScalarField, BudgetError> {
        match term {
            BudgetTerm::Convection => evaluate::convection(mesh, reg),
            BudgetTerm::Production => evaluate::production(mesh, reg),
            BudgetTerm::Transport => evaluate::transport(mesh, reg),
            BudgetTerm::Diffusion => evaluate::diffusion(mesh, reg, self.nu_eff),
            BudgetTerm::Dissipation => evaluate::dissipation(mesh, reg, self.nu_eff),
            BudgetTerm::PressureVelocity => evaluate::pressure_velocity(mesh, reg),
        }
    }

    /// Run one evaluation pass: evaluate every requested term in order and
    /// commit it before the next term starts.
    ///
    /// A missing base field aborts the pass with nothing committed for the
    /// failing term. A name collision on commit only skips that one store
    /// (with a warning); the remaining terms still run.
    pub fn execute(&self, mesh: &FvMesh, reg: &mut FieldRegistry) -> Result<(), BudgetError> {
        for &term in &self.terms {
            let value = self.evaluate(term, mesh, reg)?;
            let name = term.output_name();
            if let CommitOutcome::Rejected { existing } = reg.commit(&name, FieldData::Scalar(value))
            {
                warn!(
                    "tkeBudget: cannot store field '{name}' since a {existing} field \
                     with that name already exists"
                );
            }
        }
        Ok(())
    }
}
