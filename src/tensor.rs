//! Fixed-size tensor values for cell-centred fields.
//!
//! Rank-1 and general rank-2 values are nalgebra types; the symmetric
//! second moment gets its own 6-component storage so that a field of
//! symmetric tensors is distinguishable (and cheaper) at the type level.
//!
//! Contractions follow the usual index-pairing definitions:
//!
//! tr(T)  = T_ii
//! a · b  = a_i b_i
//! A : B  = A_ij B_ij   (Frobenius pairing for rank-2 operands)

use std::ops::{Add, Mul, Neg, Sub};

/// Rank-1 value (3D).
pub type Vector = nalgebra::Vector3<f64>;

/// General rank-2 value (3x3).
pub type Tensor = nalgebra::Matrix3<f64>;

// =============================================================================
// Symmetric rank-2 tensor
// =============================================================================

/// Symmetric second-rank tensor, stored as its six independent components.
///
/// Used for the Reynolds-stress second moment `mean(u' ⊗ u')`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SymmTensor {
    pub xx: f64,
    pub xy: f64,
    pub xz: f64,
    pub yy: f64,
    pub yz: f64,
    pub zz: f64,
}

impl SymmTensor {
    /// All-zero tensor.
    pub const ZERO: Self = Self {
        xx: 0.0,
        xy: 0.0,
        xz: 0.0,
        yy: 0.0,
        yz: 0.0,
        zz: 0.0,
    };

    #[inline]
    pub const fn new(xx: f64, xy: f64, xz: f64, yy: f64, yz: f64, zz: f64) -> Self {
        Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
        }
    }

    /// Isotropic tensor `s * I`.
    #[inline]
    pub const fn isotropic(s: f64) -> Self {
        Self::new(s, 0.0, 0.0, s, 0.0, s)
    }

    /// Symmetric outer product `v ⊗ v`.
    #[inline]
    pub fn outer_sqr(v: &Vector) -> Self {
        Self::new(
            v.x * v.x,
            v.x * v.y,
            v.x * v.z,
            v.y * v.y,
            v.y * v.z,
            v.z * v.z,
        )
    }

    /// Trace: sum of the diagonal components.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.xx + self.yy + self.zz
    }

    /// Expand to a full rank-2 tensor.
    #[inline]
    pub fn full(&self) -> Tensor {
        Tensor::new(
            self.xx, self.xy, self.xz, //
            self.xy, self.yy, self.yz, //
            self.xz, self.yz, self.zz,
        )
    }

    /// Double contraction with a general rank-2 tensor: `S : T = S_ij T_ij`.
    ///
    /// Off-diagonal entries of `self` pair with both `T_ij` and `T_ji`.
    #[inline]
    pub fn double_dot(&self, t: &Tensor) -> f64 {
        self.xx * t[(0, 0)]
            + self.yy * t[(1, 1)]
            + self.zz * t[(2, 2)]
            + self.xy * (t[(0, 1)] + t[(1, 0)])
            + self.xz * (t[(0, 2)] + t[(2, 0)])
            + self.yz * (t[(1, 2)] + t[(2, 1)])
    }
}

impl Add for SymmTensor {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.xz + rhs.xz,
            self.yy + rhs.yy,
            self.yz + rhs.yz,
            self.zz + rhs.zz,
        )
    }
}

impl Sub for SymmTensor {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.xx - rhs.xx,
            self.xy - rhs.xy,
            self.xz - rhs.xz,
            self.yy - rhs.yy,
            self.yz - rhs.yz,
            self.zz - rhs.zz,
        )
    }
}

impl Mul<f64> for SymmTensor {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::new(
            self.xx * s,
            self.xy * s,
            self.xz * s,
            self.yy * s,
            self.yz * s,
            self.zz * s,
        )
    }
}

impl Neg for SymmTensor {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

/// Double contraction of two general rank-2 tensors (Frobenius pairing).
#[inline]
pub fn double_dot(a: &Tensor, b: &Tensor) -> f64 {
    a.dot(b)
}
