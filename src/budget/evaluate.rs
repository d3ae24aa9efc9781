//! The six budget-term evaluators.
//!
//! Each evaluator is a pure function of the registry's current contents:
//! it reads its base fields by their fixed names, applies the calculus
//! operators, and returns a scalar field. Storing the result is the
//! caller's job, so the collision handling lives in one place.
//!
//! The returned field's name tags which term produced it; the stored name
//! is decided by the driving loop.

use super::{base_fields, BudgetError};
use crate::calculus::{div, grad_scalar, grad_vector, laplacian};
use crate::field::{FieldRegistry, ScalarField, VectorField};
use crate::mesh::FvMesh;
use crate::tensor;

/// Velocity fluctuation U′ = U − Ū.
fn fluctuation(reg: &FieldRegistry) -> Result<VectorField, BudgetError> {
    let u = reg.vector(base_fields::U)?;
    let u_mean = reg.vector(base_fields::U_MEAN)?;
    Ok(u.zip_with(&u_mean, "UPrime", |a, b| a - b))
}

/// Convection term `Ck = −½ · U · ∇(tr R)`.
pub fn convection(mesh: &FvMesh, reg: &FieldRegistry) -> Result<ScalarField, BudgetError> {
    let u = reg.vector(base_fields::U)?;
    let r = reg.symm_tensor(base_fields::R)?;

    // tr R = u'_i u'_i, twice the turbulence kinetic energy
    let tr_r = r.map("trR", |t| t.trace());
    let grad_tr_r = grad_scalar(mesh, &tr_r);

    Ok(u.zip_with(&grad_tr_r, "Ck", |u, g| -0.5 * u.dot(g)))
}

/// Production term `Pk = −(R : ∇U)`.
pub fn production(mesh: &FvMesh, reg: &FieldRegistry) -> Result<ScalarField, BudgetError> {
    let u = reg.vector(base_fields::U)?;
    let r = reg.symm_tensor(base_fields::R)?;

    let grad_u = grad_vector(mesh, &u);

    Ok(r.zip_with(&grad_u, "Pk", |r, g| -r.double_dot(g)))
}

/// Transport term `Tk = −½ · ∇·((U′·U′) U′)`.
pub fn transport(mesh: &FvMesh, reg: &FieldRegistry) -> Result<ScalarField, BudgetError> {
    let u_prime = fluctuation(reg)?;

    let flux = u_prime.map("kFlux", |v| *v * v.dot(v));
    let div_flux = div(mesh, &flux);

    Ok(div_flux.map("Tk", |d| -0.5 * d))
}

/// Viscous diffusion term `Dk = ν · ½ · ∇²(tr R)`.
pub fn diffusion(
    mesh: &FvMesh,
    reg: &FieldRegistry,
    nu_eff: f64,
) -> Result<ScalarField, BudgetError> {
    let r = reg.symm_tensor(base_fields::R)?;

    let tr_r = r.map("trR", |t| t.trace());
    let lap = laplacian(mesh, &tr_r);

    Ok(lap.map("Dk", |l| 0.5 * nu_eff * l))
}

/// Viscous dissipation term `Epik = −ν · (∇U′ : ∇U′)`.
pub fn dissipation(
    mesh: &FvMesh,
    reg: &FieldRegistry,
    nu_eff: f64,
) -> Result<ScalarField, BudgetError> {
    let u_prime = fluctuation(reg)?;

    let grad_u_prime = grad_vector(mesh, &u_prime);

    Ok(grad_u_prime.map("Epik", |g| -nu_eff * tensor::double_dot(g, g)))
}

/// Pressure-velocity-gradient term `Pik = −(U′ · ∇P′)`.
pub fn pressure_velocity(mesh: &FvMesh, reg: &FieldRegistry) -> Result<ScalarField, BudgetError> {
    let u_prime = fluctuation(reg)?;
    let p = reg.scalar(base_fields::P)?;
    let p_mean = reg.scalar(base_fields::P_MEAN)?;

    let p_prime = p.zip_with(&p_mean, "pPrime", |a, b| a - b);
    let grad_p_prime = grad_scalar(mesh, &p_prime);

    Ok(u_prime.zip_with(&grad_p_prime, "Pik", |u, g| -u.dot(g)))
}
