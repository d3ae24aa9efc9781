//! Integration tests for the TKE budget evaluation pass.
//!
//! These tests verify:
//! - The end-to-end zero-field scenario (all terms vanish)
//! - Sign/formula fidelity on fields with known analytic budgets
//! - Determinism of repeated passes
//! - Commit semantics (create, overwrite in place, collision rejection)

use approx::assert_relative_eq;
use tke_budget::{
    BudgetTerm, CommitOutcome, FieldData, FieldKind, FieldRegistry, FvMesh, ScalarField,
    SymmTensor, SymmTensorField, TkeBudget, TkeBudgetConfig, Vector, VectorField, VolField,
};

fn mesh() -> FvMesh {
    FvMesh::uniform_box(4, 4, 4, 2.0, 2.0, 2.0)
}

/// Register the five base fields with uniform values.
fn seed_uniform(
    reg: &mut FieldRegistry,
    mesh: &FvMesh,
    u: Vector,
    u_mean: Vector,
    p: f64,
    p_mean: f64,
    r: SymmTensor,
) {
    reg.register(FieldData::Vector(VolField::uniform(mesh, "U", u)))
        .unwrap();
    reg.register(FieldData::Vector(VolField::uniform(mesh, "UMean", u_mean)))
        .unwrap();
    reg.register(FieldData::Scalar(VolField::uniform(mesh, "p", p)))
        .unwrap();
    reg.register(FieldData::Scalar(VolField::uniform(mesh, "pMean", p_mean)))
        .unwrap();
    reg.register(FieldData::SymmTensor(VolField::uniform(mesh, "UPrime2Mean", r)))
        .unwrap();
}

fn assert_all_zero(field: &ScalarField) {
    for v in field.cells() {
        assert_relative_eq!(*v, 0.0, epsilon = 1e-12);
    }
}

/// Spec scenario: U = Ū = (1,0,0), P = P̄ = 0, R = 0. Every budget term is
/// identically zero, and a pass over {Ck, Epik} creates exactly two new
/// all-zero scalar entries under the tke_ prefix.
#[test]
fn test_end_to_end_zero_fields() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    seed_uniform(
        &mut reg,
        &mesh,
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        0.0,
        0.0,
        SymmTensor::ZERO,
    );

    let config: TkeBudgetConfig =
        serde_json::from_str(r#"{ "fields": ["Ck", "Epik"], "reynolds": 1000.0 }"#).unwrap();
    let budget = TkeBudget::from_config(&config).unwrap();

    // All six terms vanish on these fields, not just the requested two.
    for term in BudgetTerm::ALL {
        let value = budget.evaluate(term, &mesh, &reg).unwrap();
        assert_all_zero(&value);
    }

    let before = reg.len();
    budget.execute(&mesh, &mut reg).unwrap();
    assert_eq!(reg.len(), before + 2);

    for name in ["tke_Ck", "tke_Epik"] {
        assert_eq!(reg.kind_of(name), Some(FieldKind::Scalar));
        assert_all_zero(&reg.scalar(name).unwrap());
    }
}

/// With U = Ū and P = P̄ the fluctuation-based terms vanish even when the
/// mean flow and the second moment are non-trivial.
#[test]
fn test_fluctuation_terms_vanish_without_fluctuations() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    let shear = |c: &Vector| Vector::new(0.8 * c.y, 0.0, 0.0);

    reg.register(FieldData::Vector(VectorField::from_fn(&mesh, "U", shear)))
        .unwrap();
    reg.register(FieldData::Vector(VectorField::from_fn(&mesh, "UMean", shear)))
        .unwrap();
    reg.register(FieldData::Scalar(ScalarField::from_fn(&mesh, "p", |c| c.x)))
        .unwrap();
    reg.register(FieldData::Scalar(ScalarField::from_fn(&mesh, "pMean", |c| c.x)))
        .unwrap();
    reg.register(FieldData::SymmTensor(SymmTensorField::uniform(
        &mesh,
        "UPrime2Mean",
        SymmTensor::new(1.0, 0.5, 0.0, 1.0, 0.0, 1.0),
    )))
    .unwrap();

    let budget = TkeBudget::new(BudgetTerm::ALL, 500.0).unwrap();
    for term in [
        BudgetTerm::Transport,
        BudgetTerm::Dissipation,
        BudgetTerm::PressureVelocity,
    ] {
        assert_all_zero(&budget.evaluate(term, &mesh, &reg).unwrap());
    }
    // Production against the mean shear does not vanish.
    let pk = budget.evaluate(BudgetTerm::Production, &mesh, &reg).unwrap();
    assert!(pk.cells().iter().all(|&v| v != 0.0));
}

/// Uniform shear U = (γy, 0, 0) with constant R: Pk = −γ R_xy exactly,
/// and with Ū = 0, Epik = −ν γ².
#[test]
fn test_production_and_dissipation_on_uniform_shear() {
    let mesh = mesh();
    let gamma = 1.5;
    let r_xy = 0.4;
    let re = 250.0;

    let mut reg = FieldRegistry::new();
    reg.register(FieldData::Vector(VectorField::from_fn(&mesh, "U", |c| {
        Vector::new(gamma * c.y, 0.0, 0.0)
    })))
    .unwrap();
    reg.register(FieldData::Vector(VectorField::uniform(
        &mesh,
        "UMean",
        Vector::zeros(),
    )))
    .unwrap();
    reg.register(FieldData::Scalar(ScalarField::uniform(&mesh, "p", 0.0)))
        .unwrap();
    reg.register(FieldData::Scalar(ScalarField::uniform(&mesh, "pMean", 0.0)))
        .unwrap();
    reg.register(FieldData::SymmTensor(SymmTensorField::uniform(
        &mesh,
        "UPrime2Mean",
        SymmTensor::new(0.0, r_xy, 0.0, 0.0, 0.0, 0.0),
    )))
    .unwrap();

    let budget = TkeBudget::new(BudgetTerm::ALL, re).unwrap();

    let pk = budget.evaluate(BudgetTerm::Production, &mesh, &reg).unwrap();
    for v in pk.cells() {
        assert_relative_eq!(*v, -gamma * r_xy, epsilon = 1e-12);
    }

    let epik = budget.evaluate(BudgetTerm::Dissipation, &mesh, &reg).unwrap();
    let expected = -(1.0 / re) * gamma * gamma;
    for v in epik.cells() {
        assert_relative_eq!(*v, expected, epsilon = 1e-12);
    }
}

/// Uniform U with tr R varying linearly in x: Ck = −½ U_x ∂(tr R)/∂x.
#[test]
fn test_convection_on_linear_second_moment() {
    let mesh = mesh();
    let (u0, slope) = (2.0, 0.6);

    let mut reg = FieldRegistry::new();
    seed_uniform(
        &mut reg,
        &mesh,
        Vector::new(u0, 0.0, 0.0),
        Vector::new(u0, 0.0, 0.0),
        0.0,
        0.0,
        SymmTensor::ZERO,
    );
    // Replace R with tr R = slope * x.
    let r = SymmTensorField::from_fn(&mesh, "UPrime2Mean", |c| {
        SymmTensor::new(slope * c.x, 0.0, 0.0, 0.0, 0.0, 0.0)
    });
    assert_eq!(
        reg.commit("UPrime2Mean", FieldData::SymmTensor(r)),
        CommitOutcome::Updated
    );

    let budget = TkeBudget::new([BudgetTerm::Convection], 100.0).unwrap();
    let ck = budget.evaluate(BudgetTerm::Convection, &mesh, &reg).unwrap();
    for v in ck.cells() {
        assert_relative_eq!(*v, -0.5 * u0 * slope, epsilon = 1e-12);
    }
}

/// Uniform U′ against a linear pressure fluctuation: Pik = −U′ · ∇P′.
#[test]
fn test_pressure_velocity_on_linear_pressure() {
    let mesh = mesh();
    let slope = 3.0;

    let mut reg = FieldRegistry::new();
    reg.register(FieldData::Vector(VectorField::uniform(
        &mesh,
        "U",
        Vector::new(1.0, 0.0, 0.0),
    )))
    .unwrap();
    reg.register(FieldData::Vector(VectorField::uniform(
        &mesh,
        "UMean",
        Vector::zeros(),
    )))
    .unwrap();
    reg.register(FieldData::Scalar(ScalarField::from_fn(&mesh, "p", |c| {
        slope * c.x
    })))
    .unwrap();
    reg.register(FieldData::Scalar(ScalarField::uniform(&mesh, "pMean", 0.0)))
        .unwrap();
    reg.register(FieldData::SymmTensor(SymmTensorField::uniform(
        &mesh,
        "UPrime2Mean",
        SymmTensor::ZERO,
    )))
    .unwrap();

    let budget = TkeBudget::new([BudgetTerm::PressureVelocity], 100.0).unwrap();
    let pik = budget
        .evaluate(BudgetTerm::PressureVelocity, &mesh, &reg)
        .unwrap();
    for v in pik.cells() {
        assert_relative_eq!(*v, -slope, epsilon = 1e-12);
    }
}

/// Linear tr R has zero Laplacian, so the diffusion term vanishes.
#[test]
fn test_diffusion_vanishes_for_linear_second_moment() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    seed_uniform(
        &mut reg,
        &mesh,
        Vector::zeros(),
        Vector::zeros(),
        0.0,
        0.0,
        SymmTensor::ZERO,
    );
    let r = SymmTensorField::from_fn(&mesh, "UPrime2Mean", |c| {
        SymmTensor::new(2.0 * c.x + c.y, 0.0, 0.0, 0.0, 0.0, 0.0)
    });
    reg.commit("UPrime2Mean", FieldData::SymmTensor(r));

    let budget = TkeBudget::new([BudgetTerm::Diffusion], 100.0).unwrap();
    let dk = budget.evaluate(BudgetTerm::Diffusion, &mesh, &reg).unwrap();
    for v in dk.cells() {
        assert_relative_eq!(*v, 0.0, epsilon = 1e-10);
    }
}

/// Repeated passes over identical inputs must store bit-identical values.
#[test]
fn test_repeated_passes_are_deterministic() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    reg.register(FieldData::Vector(VectorField::from_fn(&mesh, "U", |c| {
        Vector::new(1.2 * c.y, 0.3 * c.x, 0.0)
    })))
    .unwrap();
    reg.register(FieldData::Vector(VectorField::uniform(
        &mesh,
        "UMean",
        Vector::new(0.5, 0.0, 0.0),
    )))
    .unwrap();
    reg.register(FieldData::Scalar(ScalarField::from_fn(&mesh, "p", |c| {
        c.x * c.y
    })))
    .unwrap();
    reg.register(FieldData::Scalar(ScalarField::uniform(&mesh, "pMean", 0.1)))
        .unwrap();
    reg.register(FieldData::SymmTensor(SymmTensorField::from_fn(
        &mesh,
        "UPrime2Mean",
        |c| SymmTensor::new(c.x, 0.2, 0.0, c.y, 0.0, 0.5),
    )))
    .unwrap();

    let budget = TkeBudget::new(BudgetTerm::ALL, 400.0).unwrap();

    budget.execute(&mesh, &mut reg).unwrap();
    let first: Vec<(String, Vec<f64>)> = BudgetTerm::ALL
        .iter()
        .map(|t| {
            let name = t.output_name();
            let values = reg.scalar(&name).unwrap().cells().to_vec();
            (name, values)
        })
        .collect();

    budget.execute(&mesh, &mut reg).unwrap();
    for (name, values) in &first {
        let again = reg.scalar(name).unwrap();
        // Bit-identical, not merely close.
        assert_eq!(again.cells(), &values[..]);
    }

    // The second pass created no new entries.
    assert_eq!(reg.len(), 5 + 6);
}

/// A second pass overwrites stored fields in place: a handle taken before
/// the pass observes the new values.
#[test]
fn test_second_pass_overwrites_in_place() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    seed_uniform(
        &mut reg,
        &mesh,
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        0.0,
        0.0,
        SymmTensor::ZERO,
    );

    let budget = TkeBudget::new([BudgetTerm::Production], 100.0).unwrap();
    budget.execute(&mesh, &mut reg).unwrap();
    let handle = reg.get("tke_Pk").unwrap();

    // Change the mean shear so Pk becomes nonzero, then re-run.
    let gamma = 2.0;
    reg.commit(
        "U",
        FieldData::Vector(VectorField::from_fn(&mesh, "U", |c| {
            Vector::new(gamma * c.y, 0.0, 0.0)
        })),
    );
    reg.commit(
        "UPrime2Mean",
        FieldData::SymmTensor(SymmTensorField::uniform(
            &mesh,
            "UPrime2Mean",
            SymmTensor::new(0.0, 0.5, 0.0, 0.0, 0.0, 0.0),
        )),
    );
    budget.execute(&mesh, &mut reg).unwrap();

    match &*handle.borrow() {
        FieldData::Scalar(f) => {
            for v in f.cells() {
                assert_relative_eq!(*v, -gamma * 0.5, epsilon = 1e-12);
            }
        }
        _ => panic!("expected tke_Pk to stay scalar"),
    };
}

/// A name held by a field of a different type is never overwritten: the
/// commit is rejected, the pass continues, and the stranger survives.
#[test]
fn test_type_collision_is_recoverable() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    seed_uniform(
        &mut reg,
        &mesh,
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        0.0,
        0.0,
        SymmTensor::ZERO,
    );
    // Squat on the convection output name with a vector field.
    reg.register(FieldData::Vector(VectorField::uniform(
        &mesh,
        "tke_Ck",
        Vector::new(9.0, 9.0, 9.0),
    )))
    .unwrap();

    let budget =
        TkeBudget::new([BudgetTerm::Convection, BudgetTerm::Dissipation], 100.0).unwrap();
    budget.execute(&mesh, &mut reg).unwrap();

    // The squatter is untouched and the other term still ran.
    assert_eq!(reg.kind_of("tke_Ck"), Some(FieldKind::Vector));
    let kept = reg.vector("tke_Ck").unwrap();
    assert!(kept.cells().iter().all(|v| *v == Vector::new(9.0, 9.0, 9.0)));
    assert_eq!(reg.kind_of("tke_Epik"), Some(FieldKind::Scalar));
}

/// A missing base field aborts the whole pass.
#[test]
fn test_missing_base_field_is_fatal() {
    let mesh = mesh();
    let mut reg = FieldRegistry::new();
    // Only U registered; UMean, p, pMean, UPrime2Mean are all absent.
    reg.register(FieldData::Vector(VectorField::uniform(
        &mesh,
        "U",
        Vector::zeros(),
    )))
    .unwrap();

    let budget = TkeBudget::new([BudgetTerm::Production], 100.0).unwrap();
    let result = budget.execute(&mesh, &mut reg);
    assert!(result.is_err());
    // Nothing was committed for the failing term.
    assert!(!reg.contains("tke_Pk"));
}
