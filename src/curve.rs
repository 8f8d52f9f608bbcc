//! Short-Weierstrass curve parameters and point algebra.
//!
//! A [`CurveParams`] bundle is created once (see [`crate::curves`]) and
//! never mutated; every [`Point`] names the curve it belongs to and that
//! identity — not structural equality of the parameters — is what curve
//! compatibility checks compare against.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::arith;
use crate::error::{Error, Result};

/// The bundle of parameters defining a short-Weierstrass curve
/// `y^2 = x^3 + a*x + b (mod p)` with base point `(gx, gy)` of prime order
/// `n` and cofactor `h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name, e.g. `"NIST P-256"`.
    pub name: &'static str,
    /// DER-encoded OBJECT IDENTIFIER bytes naming this curve (content
    /// octets, without tag/length).
    pub oid: &'static [u64],
    /// Field modulus.
    pub p: BigUint,
    /// Weierstrass coefficient `a`.
    pub a: BigUint,
    /// Weierstrass coefficient `b`.
    pub b: BigUint,
    /// Base point x-coordinate.
    pub gx: BigUint,
    /// Base point y-coordinate.
    pub gy: BigUint,
    /// Subgroup order.
    pub n: BigUint,
    /// Cofactor.
    pub h: u32,
}

impl CurveParams {
    /// `baselen = ceil(bitlen(n) / 8)`, the fixed coordinate/scalar byte
    /// width used by every SEC1 and DER encoding for this curve.
    pub fn baselen(&self) -> usize {
        (self.n.bits() as usize + 7) / 8
    }

    /// The curve's base point as a [`Point`].
    pub fn generator(&self) -> Point<'_> {
        Point::Affine {
            curve: self,
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }

    /// `4*a^3 + 27*b^2 mod p`, non-zero iff the curve is non-singular.
    fn discriminant_factor(&self) -> BigUint {
        let four = BigUint::from(4u32);
        let twenty_seven = BigUint::from(27u32);
        let a3 = arith::mod_pow(&self.a, &BigUint::from(3u32), &self.p);
        let b2 = arith::mod_pow(&self.b, &BigUint::from(2u32), &self.p);
        (((&four * a3) % &self.p) + ((&twenty_seven * b2) % &self.p)) % &self.p
    }

    /// Basic self-consistency checks for the parameter bundle: `p` odd,
    /// curve non-singular, and the base point on the curve.
    ///
    /// This is a debug aid for the curve registry, not something called on
    /// every point operation.
    pub fn is_consistent(&self) -> bool {
        if (&self.p % 2u32).is_zero() {
            return false;
        }
        if self.discriminant_factor().is_zero() {
            return false;
        }
        satisfies_equation(self, &self.gx, &self.gy)
    }
}

/// Returns `true` iff `y^2 == x^3 + a*x + b (mod p)`.
fn satisfies_equation(curve: &CurveParams, x: &BigUint, y: &BigUint) -> bool {
    let lhs = (y * y) % &curve.p;
    let x3 = arith::mod_pow(x, &BigUint::from(3u32), &curve.p);
    let ax = (&curve.a * x) % &curve.p;
    let rhs = ((x3 + ax) % &curve.p + &curve.b) % &curve.p;
    lhs == rhs
}

/// A point on a [`CurveParams`]: either the identity (point at infinity)
/// or an affine pair `(x, y)`. Every operation returns a new `Point`;
/// there is no in-place mutation.
#[derive(Debug, Clone)]
pub enum Point<'c> {
    /// The identity element (point at infinity).
    Identity {
        /// The curve this identity belongs to.
        curve: &'c CurveParams,
    },
    /// A finite affine point.
    Affine {
        /// The curve this point belongs to.
        curve: &'c CurveParams,
        /// x-coordinate, in `[0, p)`.
        x: BigUint,
        /// y-coordinate, in `[0, p)`.
        y: BigUint,
    },
}

impl<'c> PartialEq for Point<'c> {
    fn eq(&self, other: &Self) -> bool {
        // Curves are compared by identity of the parameter bundle, not
        // structurally: the registry hands out `&'static` singletons, so
        // two points naming "the same" curve always share one address.
        if !core::ptr::eq(self.curve(), other.curve()) {
            return false;
        }
        match (self, other) {
            (Point::Identity { .. }, Point::Identity { .. }) => true,
            (Point::Affine { x: x1, y: y1, .. }, Point::Affine { x: x2, y: y2, .. }) => {
                x1 == x2 && y1 == y2
            }
            _ => false,
        }
    }
}

impl<'c> Eq for Point<'c> {}

impl<'c> Point<'c> {
    /// The curve this point belongs to.
    pub fn curve(&self) -> &'c CurveParams {
        match self {
            Point::Identity { curve } => curve,
            Point::Affine { curve, .. } => curve,
        }
    }

    /// `true` iff this is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity { .. })
    }

    /// The affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Affine { x, .. } => Some(x),
            Point::Identity { .. } => None,
        }
    }

    /// The affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Affine { y, .. } => Some(y),
            Point::Identity { .. } => None,
        }
    }

    /// Point negation: `-P`. The identity negates to itself.
    pub fn negate(&self) -> Point<'c> {
        match self {
            Point::Identity { curve } => Point::Identity { curve },
            Point::Affine { curve, x, y } => {
                let neg_y = if y.is_zero() {
                    BigUint::zero()
                } else {
                    &curve.p - y
                };
                Point::Affine {
                    curve,
                    x: x.clone(),
                    y: neg_y,
                }
            }
        }
    }

    /// Point addition, `self + other`, via the standard affine
    /// short-Weierstrass formulas. Handles the identity, doubling
    /// (`self == other`), and mutual inverses (`self == -other`) as
    /// special cases.
    pub fn add(&self, other: &Point<'c>) -> Point<'c> {
        assert!(
            core::ptr::eq(self.curve(), other.curve()),
            "points from different curves"
        );

        match (self, other) {
            (Point::Identity { .. }, _) => other.clone(),
            (_, Point::Identity { .. }) => self.clone(),
            (
                Point::Affine {
                    curve,
                    x: x1,
                    y: y1,
                },
                Point::Affine { x: x2, y: y2, .. },
            ) => {
                let p = &curve.p;
                if x1 == x2 {
                    if (y1 + y2) % p == BigUint::zero() {
                        return Point::Identity { curve };
                    }
                    return self.double_affine(curve, x1, y1);
                }

                let num = if y2 >= y1 {
                    (y2 - y1) % p
                } else {
                    (p - ((y1 - y2) % p)) % p
                };
                let den = if x2 >= x1 {
                    (x2 - x1) % p
                } else {
                    (p - ((x1 - x2) % p)) % p
                };
                let lambda = (&num * arith::mod_inverse(&den, p).expect("den != 0 checked above"))
                    % p;

                let x3 = ((&lambda * &lambda) % p + p + p - x1 - x2) % p;
                let y3 = (lambda * ((p + x1 - &x3) % p) + p - y1) % p;
                Point::Affine {
                    curve,
                    x: x3,
                    y: y3 % p,
                }
            }
        }
    }

    fn double_affine(&self, curve: &'c CurveParams, x: &BigUint, y: &BigUint) -> Point<'c> {
        if y.is_zero() {
            return Point::Identity { curve };
        }
        let p = &curve.p;
        let three = BigUint::from(3u32);
        let two = BigUint::from(2u32);

        let num = (&three * x * x + &curve.a) % p;
        let den = (&two * y) % p;
        let lambda = (&num * arith::mod_inverse(&den, p).expect("y != 0 checked above")) % p;

        let x3 = ((&lambda * &lambda) % p + p + p - x - x) % p;
        let y3 = (lambda * ((p + x - &x3) % p) + p - y) % p;
        Point::Affine {
            curve,
            x: x3,
            y: y3 % p,
        }
    }

    /// Scalar multiplication `k * self` via double-and-add.
    ///
    /// `k` is used as given; callers that know `k` is a group scalar
    /// should reduce it modulo `n` first.
    pub fn mul(&self, k: &BigUint) -> Point<'c> {
        let curve = self.curve();
        let mut result = Point::Identity { curve };
        let mut addend = self.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = result.add(&addend);
            }
            addend = addend.add(&addend);
            k >>= 1;
        }

        result
    }
}

/// `true` iff `(x, y)` is in `[0,p) x [0,p)`, satisfies the curve equation,
/// and `n * (x, y)` is the identity (i.e. `(x, y)` lies in the prime-order
/// subgroup generated by `G`).
pub fn point_is_valid(curve: &CurveParams, x: &BigUint, y: &BigUint) -> bool {
    if x >= &curve.p || y >= &curve.p {
        return false;
    }
    if !satisfies_equation(curve, x, y) {
        return false;
    }
    let p = Point::Affine {
        curve,
        x: x.clone(),
        y: y.clone(),
    };
    p.mul(&curve.n).is_identity()
}

/// Validates a [`Point`] constructed from already-known-good coordinates
/// (e.g. the curve's own generator). Exposed for callers assembling
/// points from external recovery code.
pub fn validate(point: &Point<'_>) -> Result<()> {
    match point {
        Point::Identity { .. } => Err(Error::MalformedPoint),
        Point::Affine { curve, x, y } => {
            if point_is_valid(curve, x, y) {
                Ok(())
            } else {
                Err(Error::MalformedPoint)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    #[test]
    fn generator_is_on_curve() {
        let curve = curves::secp256k1();
        assert!(curve.is_consistent());
    }

    #[test]
    fn point_doubling_matches_addition() {
        let curve = curves::secp256k1();
        let g = curve.generator();
        let doubled = g.add(&g);
        let via_mul = g.mul(&BigUint::from(2u32));
        assert_eq!(doubled, via_mul);
    }

    #[test]
    fn scalar_mul_by_order_is_identity() {
        let curve = curves::nistp256();
        let g = curve.generator();
        assert!(g.mul(&curve.n).is_identity());
    }

    #[test]
    fn point_plus_negation_is_identity() {
        let curve = curves::nistp256();
        let g = curve.generator();
        let neg_g = g.negate();
        assert!(g.add(&neg_g).is_identity());
    }
}
