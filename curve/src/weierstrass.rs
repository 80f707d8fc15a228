//! Short-Weierstrass curve context implementing [`CurveGroup`].

use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::Affine;
use crate::errors::FormatError;
use crate::field::PrimeField;
use crate::group::CurveGroup;
use crate::params::CurveParams;
use crate::projective::Projective;
use crate::radix::{split_fields, Radix};

/// Window width, in bits, of the fixed-window scalar multiplication.
const WINDOW_BITS: u32 = 4;
const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// A prime-order short-Weierstrass curve `y^2 = x^3 + a*x + b` over `F_p`.
///
/// Construction memoizes the base point and its window table; the context
/// is read-only afterwards.
#[derive(Clone, Debug)]
pub struct WeierstrassCurve {
    params: CurveParams,
    field: PrimeField,
    generator: Affine,
    generator_table: Vec<Projective>,
}

impl WeierstrassCurve {
    /// Builds a context from domain parameters. The parameters are trusted:
    /// `p` and `n` must be prime and `(gx, gy)` must lie on the curve.
    pub fn new(params: CurveParams) -> Self {
        let field = PrimeField::new(params.p.clone());
        let generator = Affine::new(params.gx.clone(), params.gy.clone());
        let mut curve = WeierstrassCurve {
            params,
            field,
            generator,
            generator_table: Vec::new(),
        };
        curve.generator_table = curve.window_table(&curve.generator);
        curve
    }

    /// NIST P-256.
    pub fn p256() -> Self {
        Self::new(CurveParams::p256())
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    #[inline]
    pub(crate) fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub(crate) fn a(&self) -> &BigUint {
        &self.params.a
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        if point.is_infinity() {
            return true;
        }
        if !self.field.contains(&point.x) || !self.field.contains(&point.y) {
            return false;
        }

        let fp = &self.field;
        let y2 = fp.square(&point.y);
        let x3 = fp.mul(&fp.square(&point.x), &point.x);
        let ax = fp.mul(&self.params.a, &point.x);
        let rhs = fp.add(&fp.add(&x3, &ax), &fp.reduce(&self.params.b));

        y2 == rhs
    }

    /// Negate a point.
    pub fn negate(&self, point: &Affine) -> Affine {
        if point.is_infinity() {
            return point.clone();
        }
        Affine::new(point.x.clone(), self.field.neg(&point.y))
    }

    /// Point doubling: 2*P.
    pub fn double(&self, point: &Affine) -> Affine {
        Projective::from_affine(point).double(self).to_affine(self)
    }

    /// Builds `[O, P, 2P, .., 15P]` for fixed-window multiplication.
    fn window_table(&self, point: &Affine) -> Vec<Projective> {
        let base = Projective::from_affine(point);
        let mut table = Vec::with_capacity(WINDOW_SIZE);
        table.push(Projective::infinity());
        for i in 1..WINDOW_SIZE {
            let next = table[i - 1].add(&base, self);
            table.push(next);
        }
        table
    }

    /// Left-to-right fixed-window scalar multiplication against a prebuilt table.
    fn mul_windowed(&self, table: &[Projective], scalar: &BigUint) -> Projective {
        let mut result = Projective::infinity();
        for digit in scalar.to_radix_be(WINDOW_SIZE as u32) {
            for _ in 0..WINDOW_BITS {
                result = result.double(self);
            }
            if digit != 0 {
                result = result.add(&table[digit as usize], self);
            }
        }
        result
    }
}

impl CurveGroup for WeierstrassCurve {
    type Point = Affine;

    #[inline]
    fn order(&self) -> &BigUint {
        &self.params.n
    }

    #[inline]
    fn base_point(&self) -> &Affine {
        &self.generator
    }

    fn scalar_mult(&self, scalar: &BigUint, point: &Affine) -> Affine {
        if point.is_infinity() || scalar.is_zero() {
            return Affine::infinity();
        }
        let table = self.window_table(point);
        self.mul_windowed(&table, scalar).to_affine(self)
    }

    fn mul_base(&self, scalar: &BigUint) -> Affine {
        self.mul_windowed(&self.generator_table, scalar).to_affine(self)
    }

    fn add(&self, a: &Affine, b: &Affine) -> Affine {
        Projective::from_affine(a)
            .add(&Projective::from_affine(b), self)
            .to_affine(self)
    }

    #[inline]
    fn affine_x(&self, point: &Affine) -> Option<BigUint> {
        point.x().cloned()
    }

    fn point_to_text(&self, point: &Affine, radix: Radix) -> String {
        point.to_text(radix)
    }

    fn text_to_point(&self, text: &str, radix: Radix) -> Result<Affine, FormatError> {
        let [x, y] = split_fields::<2>(text)?;
        let x = radix.parse(x)?;
        let y = radix.parse(y)?;
        if !self.field.contains(&x) || !self.field.contains(&y) {
            return Err(FormatError::CoordinateOutOfRange);
        }

        let point = Affine::new(x, y);
        if !self.is_on_curve(&point) {
            return Err(FormatError::NotOnCurve);
        }
        Ok(point)
    }
}
