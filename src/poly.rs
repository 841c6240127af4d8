//! This module provides an implementation of dense polynomials over bls12_381::Scalar

use itertools::{EitherOrBoth, Itertools};

use crate::{field::FieldExt, Error, Result, Scalar};

use std::{
    borrow::Cow,
    fmt,
    ops::{Add, AddAssign, Index, Mul, MulAssign, Sub, SubAssign},
};

/// A polynomial with bls12_381::Scalar factors, first element the coefficient for x^0.
///
/// Coefficients may be borrowed from the caller or owned. Trailing zero
/// coefficients are kept as given, equality ignores them.
#[derive(Clone, Debug)]
pub struct Poly<'a>(Cow<'a, [Scalar]>);

impl<'a> From<&'a [Scalar]> for Poly<'a> {
    fn from(v: &'a [Scalar]) -> Self {
        Poly(Cow::Borrowed(v))
    }
}

impl<'a, const S: usize> From<&'a [Scalar; S]> for Poly<'a> {
    fn from(v: &'a [Scalar; S]) -> Self {
        v.as_slice().into()
    }
}

impl<'a> From<Vec<Scalar>> for Poly<'a> {
    fn from(v: Vec<Scalar>) -> Self {
        Poly(Cow::Owned(v))
    }
}

impl FromIterator<Scalar> for Poly<'static> {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Poly(Cow::Owned(iter.into_iter().collect()))
    }
}

impl<'a, 'b> PartialEq<Poly<'b>> for Poly<'a> {
    fn eq(&self, other: &Poly<'b>) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl<'a> Eq for Poly<'a> {}

impl<'a> Poly<'a> {
    /// Creates a new Poly from its `coeffs`icients, first element the coefficient for x^0
    pub fn new(coeffs: impl Into<Self>) -> Self {
        coeffs.into()
    }

    /// Creates a new polynomial where the `coeffs` fits in u64 values
    pub fn from_u64(coeffs: &[u64]) -> Poly<'static> {
        coeffs.iter().map(|n| Scalar::from(*n)).collect()
    }

    /// Returns a buffer of `n` zero coefficients
    pub fn zeroed(n: usize) -> Poly<'static> {
        Poly(Cow::Owned(vec![Scalar::zero(); n]))
    }

    /// Returns p(x)=0
    pub fn zero() -> Poly<'static> {
        Poly::zeroed(1)
    }

    /// Returns p(x)=1
    pub fn one() -> Poly<'static> {
        Poly(Cow::Owned(vec![Scalar::one()]))
    }

    /// Number of stored coefficients, trailing zeroes included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn coeffs(&self) -> &[Scalar] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator + DoubleEndedIterator<Item = &Scalar> {
        self.0.iter()
    }

    pub fn into_owned(self) -> Poly<'static> {
        Poly(Cow::Owned(self.0.into_owned()))
    }

    /// The coefficients up to the last nonzero one
    fn trimmed(&self) -> &[Scalar] {
        let zero = Scalar::zero();
        let len = self.0.iter().rposition(|c| c != &zero).map_or(0, |i| i + 1);
        &self.0[..len]
    }

    /// Returns the degree of the polinominal, degree(x+1) = 1
    pub fn degree(&self) -> usize {
        self.trimmed().len().saturating_sub(1)
    }

    /// Normalizes the coefficients, removing ending zeroes
    /// # Examples
    /// ```
    ///    use kzg_playground::Poly;
    ///    let mut p1 = Poly::from_u64(&[1, 0, 0, 0]);
    ///    p1.normalize();
    ///    assert_eq!(p1.len(), 1);
    /// ```
    pub fn normalize(&mut self) {
        let len = self.trimmed().len().max(1).min(self.len());
        match &mut self.0 {
            Cow::Borrowed(v) => {
                let coeffs: &'a [Scalar] = *v;
                *v = &coeffs[..len];
            }
            Cow::Owned(v) => v.truncate(len),
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns if p(x)=0
    /// # Examples
    /// ```
    ///    use kzg_playground::Poly;
    ///    assert!(Poly::zero().is_zero());
    ///    assert!(Poly::zeroed(4).is_zero());
    ///    assert!(!Poly::one().is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Returns the `i`-th coefficient
    pub fn get(&self, i: usize) -> Option<&Scalar> {
        self.0.get(i)
    }

    /// Sets the `i`-th coefficient to the selected `p` value, growing the polynomial if needed
    /// # Examples
    /// ```
    ///   use kzg_playground::{Poly, Scalar};
    ///   let mut p007 = Poly::zero();
    ///   p007.set(2, Scalar::from(7));
    ///   assert_eq!(p007, Poly::from_u64(&[0, 0, 7]));
    ///   assert_eq!(p007.get(3), None);
    ///  ```
    pub fn set(&mut self, i: usize, p: Scalar) {
        let v = self.0.to_mut();
        if v.len() <= i {
            v.resize(i + 1, Scalar::zero());
        }
        v[i] = p;
    }

    /// Evals the polynomial at the desired point with Horner's rule
    /// # Examples
    /// ```
    ///    use kzg_playground::{Poly, Scalar};
    ///    // check that (x^2+2x+1)(2) = 9
    ///    assert_eq!(
    ///      Poly::from_u64(&[1, 2, 1]).eval(&Scalar::from(2)),
    ///      Scalar::from(9));
    /// ```
    pub fn eval(&self, x: &Scalar) -> Scalar {
        self.iter().rev().fold(Scalar::zero(), |acc, c| acc * x + c)
    }

    /// Divides every coefficient by `s`
    pub fn div_scalar(&self, s: &Scalar) -> Result<Poly<'static>> {
        Ok(self * &s.inverse()?)
    }

    /// Euclidean division, returns `(quotient, remainder)`.
    ///
    /// The remainder is trimmed of every leading zero after each subtraction
    /// step, so a step that cancels more than one term ends the loop early.
    /// # Examples
    /// ```
    ///    use kzg_playground::Poly;
    ///    // (x^2+2x+1) / (x+1) = x+1
    ///    let (q, r) = Poly::from_u64(&[1, 2, 1]).div_rem(&Poly::from_u64(&[1, 1])).unwrap();
    ///    assert_eq!(q, Poly::from_u64(&[1, 1]));
    ///    assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Poly) -> Result<(Poly<'static>, Poly<'static>)> {
        let d = divisor.trimmed();
        let i_lead_d = match d.last() {
            None => return Err(Error::DivisionByZero),
            Some(lead) => lead.inverse()?,
        };

        let mut r = self.trimmed().to_vec();
        if r.len() < d.len() {
            return Ok((Poly::zeroed(0), r.into()));
        }

        let mut q = vec![Scalar::zero(); r.len() - d.len() + 1];
        while r.len() >= d.len() {
            let lead = r[r.len() - 1] * i_lead_d;
            let i = r.len() - d.len();
            q[i] = lead;

            // r -= lead * x^i * d
            for (n, d_n) in d.iter().enumerate() {
                r[i + n] -= lead * d_n;
            }
            while r.last() == Some(&Scalar::zero()) {
                r.pop();
            }
        }
        Ok((q.into(), r.into()))
    }

    /// Returns the vanishing polynomial (x-z0)(x-z1)...(x-zn) of `roots`
    /// # Examples
    /// ```
    ///    use kzg_playground::{Poly, Scalar};
    ///    let z = Poly::vanishing(&[Scalar::from(2), Scalar::from(3)]);
    ///    assert_eq!(z, Poly::from_u64(&[6]) - &Poly::from_u64(&[0, 5, 0]) + &Poly::from_u64(&[0, 0, 1]));
    /// ```
    pub fn vanishing<'b, I: IntoIterator<Item = &'b Scalar>>(roots: I) -> Poly<'static>
    where
        I::IntoIter: ExactSizeIterator,
    {
        let roots = roots.into_iter();
        let mut poly = Vec::with_capacity(roots.len() + 1);
        poly.push(Scalar::one());
        for z in roots {
            Poly::mul_by_x_sub_s(&mut poly, z);
        }
        poly.into()
    }

    /// An optimized version of p *= [-s, 1]
    fn mul_by_x_sub_s(p: &mut Vec<Scalar>, s: &Scalar) {
        if p.is_empty() {
            return;
        }
        p.push(Scalar::zero());
        for n in (1..p.len()).rev() {
            p[n] = p[n - 1] - p[n] * s;
        }
        p[0] = -(p[0] * s);
    }

    /// Creates a polynomial that contains a set of `p` points, by using lagrange
    /// see https://en.wikipedia.org/wiki/Lagrange_polynomial
    ///
    /// Fails with [`Error::DivisionByZero`] if two points share the same x.
    /// # Examples
    /// ```
    ///    use kzg_playground::{Poly, Scalar};
    ///    // f(x)=x is a polynomial that fits in (1,1), (2,2) points
    ///    assert_eq!(
    ///      Poly::lagrange(&[
    ///          (Scalar::from(1), Scalar::from(1)),
    ///          (Scalar::from(2), Scalar::from(2))
    ///      ]).unwrap(),
    ///      Poly::from_u64(&[0, 1]) // f(x) = x
    ///    );
    /// ```
    pub fn lagrange(p: &[(Scalar, Scalar)]) -> Result<Poly<'static>> {
        let k = p.len();
        let mut l = Poly::zeroed(k);
        for j in 0..k {
            let mut denom = Scalar::one();
            let mut l_j = Vec::with_capacity(k);
            l_j.push(Scalar::one());
            for i in (0..k).filter(|i| *i != j) {
                denom *= p[j].0 - p[i].0;
                Poly::mul_by_x_sub_s(&mut l_j, &p[i].0);
            }
            let scale = p[j].1.checked_div(&denom)?;
            l += &(&Poly::from(l_j) * &scale);
        }
        Ok(l)
    }

    /// Lagrange interpolation over parallel `xs` and `ys`
    pub fn interpolate(xs: &[Scalar], ys: &[Scalar]) -> Result<Poly<'static>> {
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
            });
        }
        let points = xs.iter().copied().zip_eq(ys.iter().copied()).collect_vec();
        Poly::lagrange(&points)
    }
}

impl<'a> fmt::Display for Poly<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = self.trimmed();
        if coeffs.is_empty() {
            return write!(f, "0");
        }
        let mut first: bool = true;
        for (i, c) in coeffs.iter().enumerate().rev() {
            let bi_n = num_bigint::BigUint::from_bytes_le(&c.to_bytes()).to_str_radix(10);
            let bi_inv = num_bigint::BigUint::from_bytes_le(&(-c).to_bytes()).to_str_radix(10);

            if bi_n == "0" {
                continue;
            }

            if bi_inv.len() < 20 && bi_n.len() > 20 {
                if bi_inv == "1" && i != 0 {
                    write!(f, "-")?;
                } else {
                    write!(f, "-{}", bi_inv)?;
                }
            } else {
                if !first {
                    write!(f, "+")?;
                }
                if i == 0 || bi_n != "1" {
                    write!(f, "{}", bi_n)?;
                }
            }
            if i >= 1 {
                write!(f, "x")?;
            }
            if i >= 2 {
                write!(f, "^{}", i)?;
            }
            first = false;
        }
        Ok(())
    }
}

impl<'a, 'b> AddAssign<&Poly<'b>> for Poly<'a> {
    fn add_assign(&mut self, rhs: &Poly<'b>) {
        let v = self.0.to_mut();
        for (n, c) in rhs.iter().enumerate() {
            if n >= v.len() {
                v.push(*c);
            } else {
                v[n] += c;
            }
        }
    }
}

impl<'a, 'b> SubAssign<&Poly<'b>> for Poly<'a> {
    fn sub_assign(&mut self, rhs: &Poly<'b>) {
        let v = self.0.to_mut();
        for (n, c) in rhs.iter().enumerate() {
            if n >= v.len() {
                v.push(-c);
            } else {
                v[n] -= c;
            }
        }
    }
}

impl<'a, 'b> Add<&Poly<'b>> for &Poly<'a> {
    type Output = Poly<'static>;
    fn add(self, rhs: &Poly<'b>) -> Self::Output {
        self.iter()
            .zip_longest(rhs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(l, r) => l + r,
                EitherOrBoth::Left(l) => *l,
                EitherOrBoth::Right(r) => *r,
            })
            .collect()
    }
}

impl<'a, 'b> Add<&Poly<'b>> for Poly<'a> {
    type Output = Poly<'a>;
    fn add(mut self, rhs: &Poly<'b>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, 'b> Sub<&Poly<'b>> for &Poly<'a> {
    type Output = Poly<'static>;
    fn sub(self, rhs: &Poly<'b>) -> Self::Output {
        self.iter()
            .zip_longest(rhs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(l, r) => l - r,
                EitherOrBoth::Left(l) => *l,
                EitherOrBoth::Right(r) => -r,
            })
            .collect()
    }
}

impl<'a, 'b> Sub<&Poly<'b>> for Poly<'a> {
    type Output = Poly<'a>;
    fn sub(mut self, rhs: &Poly<'b>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<'a, 'b> Mul<&Poly<'b>> for &Poly<'a> {
    type Output = Poly<'static>;
    fn mul(self, rhs: &Poly<'b>) -> Self::Output {
        if self.is_empty() || rhs.is_empty() {
            return Poly::zeroed(0);
        }
        let mut mul = vec![Scalar::zero(); self.len() + rhs.len() - 1];
        for (n, l) in self.iter().enumerate() {
            for (m, r) in rhs.iter().enumerate() {
                mul[n + m] += l * r;
            }
        }
        mul.into()
    }
}

impl<'a> Mul<&Scalar> for &Poly<'a> {
    type Output = Poly<'static>;
    fn mul(self, rhs: &Scalar) -> Self::Output {
        self.iter().map(|v| v * rhs).collect()
    }
}

impl<'a> Mul<&Scalar> for Poly<'a> {
    type Output = Poly<'a>;
    fn mul(mut self, rhs: &Scalar) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<'a> MulAssign<&Scalar> for Poly<'a> {
    fn mul_assign(&mut self, rhs: &Scalar) {
        for v in self.0.to_mut().iter_mut() {
            *v *= rhs;
        }
    }
}

impl<'a> Index<usize> for Poly<'a> {
    type Output = Scalar;
    fn index(&self, i: usize) -> &Scalar {
        &self.0[i]
    }
}

#[cfg(test)]
mod test {
    use ff::Field;

    use super::*;

    fn s(n: u64) -> Scalar {
        Scalar::from(n)
    }

    #[test]
    fn test_poly_add() {
        let mut p246 = Poly::from_u64(&[1, 2, 3]);
        p246 += &Poly::from_u64(&[1, 2, 3]);
        assert_eq!(p246, Poly::from_u64(&[2, 4, 6]));

        let p24645 = &Poly::from_u64(&[1, 2, 3]) + &Poly::from_u64(&[1, 2, 3, 4, 5]);
        assert_eq!(p24645, Poly::from_u64(&[2, 4, 6, 4, 5]));
        assert_eq!(p24645.len(), 5);

        let p24646 = Poly::from_u64(&[1, 2, 3, 4, 6]) + &Poly::from_u64(&[1, 2, 3]);
        assert_eq!(p24646, Poly::from_u64(&[2, 4, 6, 4, 6]));
    }

    #[test]
    fn test_poly_sub() {
        let mut p0 = Poly::from_u64(&[1, 2, 3]);
        p0 -= &Poly::from_u64(&[1, 2, 3]);
        assert!(p0.is_zero());
        assert_eq!(p0.len(), 3);

        let p003 = &Poly::from_u64(&[1, 2, 3]) - &Poly::from_u64(&[1, 2]);
        assert_eq!(p003, Poly::from_u64(&[0, 0, 3]));

        let a = Poly::from_u64(&[1, 0, 5]);
        let b = Poly::from_u64(&[3, 0, 1]);
        let ab = &a - &b;
        let ba = &b - &a;
        assert_ne!(ab, ba);
        assert!((ab + &ba).is_zero());

        let neg = &Poly::from_u64(&[1]) - &Poly::from_u64(&[0, 2]);
        assert_eq!(neg, Poly::new(vec![s(1), -s(2)]));
    }

    #[test]
    fn test_poly_mul() {
        let p = Poly::from_u64(&[5, 0, 10, 6]);
        assert_eq!(
            &p * &Poly::from_u64(&[1, 2, 4]),
            Poly::from_u64(&[5, 10, 30, 26, 52, 24])
        );

        let a = Poly::from_u64(&[1, 0, 5]);
        let b = Poly::from_u64(&[3, 0, 1]);
        assert_eq!(&a * &b, Poly::from_u64(&[3, 0, 16, 0, 5]));

        assert!((&a * &Poly::zeroed(0)).is_empty());
        assert!((&Poly::zeroed(0) * &a).is_empty());

        let mut v = p.coeffs().to_vec();
        Poly::mul_by_x_sub_s(&mut v, &-s(3));
        assert_eq!(Poly::from(v), &p * &Poly::from_u64(&[3, 1]));
    }

    #[test]
    fn test_poly_scalar() {
        let p = Poly::from_u64(&[2, 4, 6]);
        assert_eq!(&p * &s(3), Poly::from_u64(&[6, 12, 18]));
        assert_eq!(p.div_scalar(&s(2)).unwrap(), Poly::from_u64(&[1, 2, 3]));
        assert!(matches!(p.div_scalar(&Scalar::zero()), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_poly_set() {
        let mut p = Poly::from_u64(&[5, 0, 10, 6]);
        p.set(0, Scalar::zero());
        assert_eq!(p, Poly::from_u64(&[0, 0, 10, 6]));
        p.set(3, Scalar::zero());
        assert_eq!(p, Poly::from_u64(&[0, 0, 10]));
        p.set(5, Scalar::one());
        assert_eq!(p, Poly::from_u64(&[0, 0, 10, 0, 0, 1]));
    }

    #[test]
    fn test_normalize_borrowed() {
        let coeffs = [s(1), s(2), Scalar::zero(), Scalar::zero()];
        let mut p = Poly::from(&coeffs);
        assert_eq!(p.len(), 4);
        assert_eq!(p.degree(), 1);
        p.normalize();
        assert_eq!(p.len(), 2);

        let mut zero = Poly::zeroed(3);
        zero.normalize();
        assert_eq!(zero.len(), 1);
    }

    #[test]
    fn test_div() {
        fn do_test(n: Poly, d: Poly) {
            let (q, r) = n.div_rem(&d).unwrap();
            let n2 = &(&q * &d) + &r;
            assert_eq!(n, n2);
            assert!(r.is_zero() || r.degree() < d.degree());
        }

        do_test(Poly::from_u64(&[1]), Poly::from_u64(&[1, 1]));
        do_test(Poly::from_u64(&[1, 1]), Poly::from_u64(&[1, 1]));
        do_test(Poly::from_u64(&[1, 2, 1]), Poly::from_u64(&[1, 1]));
        do_test(
            Poly::from_u64(&[1, 2, 1, 2, 5, 8, 1, 9]),
            Poly::from_u64(&[1, 1, 5, 4]),
        );
        // x^3+2x^2+x+1 / x^2+2x cancels two terms in the first step
        do_test(Poly::from_u64(&[1, 1, 2, 1]), Poly::from_u64(&[0, 2, 1]));
        // trailing zeroes in the divisor are ignored
        do_test(Poly::from_u64(&[4, 4, 1]), Poly::from_u64(&[2, 1, 0, 0]));
    }

    #[test]
    fn test_div_vectors() {
        // (5x^2+1) / (x^2+3) = 5, remainder -14
        let (q, r) = Poly::from_u64(&[1, 0, 5])
            .div_rem(&Poly::from_u64(&[3, 0, 1]))
            .unwrap();
        assert_eq!(q, Poly::from_u64(&[5]));
        assert_eq!(r, Poly::new(vec![-s(14)]));

        // (x^3-2x^2-4) / (x-3) = x^2+x+3, remainder 5
        let c = Poly::new(vec![-s(4), s(0), -s(2), s(1)]);
        let d = Poly::new(vec![-s(3), s(1)]);
        let (q, r) = c.div_rem(&d).unwrap();
        assert_eq!(q, Poly::from_u64(&[3, 1, 1]));
        assert_eq!(r, Poly::from_u64(&[5]));

        // extra cancellation leaves x+1 behind
        let (q, r) = Poly::from_u64(&[1, 1, 2, 1])
            .div_rem(&Poly::from_u64(&[0, 2, 1]))
            .unwrap();
        assert_eq!(q, Poly::from_u64(&[0, 1]));
        assert_eq!(r, Poly::from_u64(&[1, 1]));
    }

    #[test]
    fn test_div_lower_degree() {
        // nothing to divide, the quotient has no coefficients
        let (q, r) = Poly::from_u64(&[7]).div_rem(&Poly::from_u64(&[1, 1])).unwrap();
        assert!(q.is_empty());
        assert_eq!(r, Poly::from_u64(&[7]));

        let (q, r) = Poly::zeroed(0).div_rem(&Poly::from_u64(&[1, 1])).unwrap();
        assert!(q.is_empty());
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_by_zero() {
        let p = Poly::from_u64(&[1, 2, 3]);
        assert!(matches!(p.div_rem(&Poly::zeroed(3)), Err(Error::DivisionByZero)));
        assert!(matches!(p.div_rem(&Poly::zeroed(0)), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_print() {
        assert_eq!("x^2+2x+1", format!("{}", Poly::from_u64(&[1, 2, 1])));
        assert_eq!("x^2+1", format!("{}", Poly::from_u64(&[1, 0, 1])));
        assert_eq!("x^2", format!("{}", Poly::from_u64(&[0, 0, 1])));
        assert_eq!("2x^2", format!("{}", Poly::from_u64(&[0, 0, 2])));
        assert_eq!("x^3+x+5", format!("{}", Poly::from_u64(&[5, 1, 0, 1])));
        assert_eq!("0", format!("{}", Poly::zeroed(3)));
        assert_eq!("-4", format!("{}", Poly::new(vec![-s(4)])));
        assert_eq!("-4x", format!("{}", Poly::new(vec![Scalar::zero(), -s(4)])));
        assert_eq!("-x-2", format!("{}", Poly::new(vec![-s(2), -s(1)])));
        assert_eq!("x-2", format!("{}", Poly::new(vec![-s(2), s(1)])));
    }

    #[test]
    fn test_eval() {
        // p(x) = x^3 + x + 5
        let p = Poly::from_u64(&[5, 1, 0, 1]);
        assert_eq!(p.eval(&s(3)), s(35));
        assert_eq!(p.eval(&s(10)), s(1015));
        assert_eq!(p.eval(&s(256)), s(16777477));
        assert_eq!(p.eval(&s(50)), s(125055));
        assert_eq!(p.eval(&s(1)), s(7));
        assert_eq!(Poly::zeroed(0).eval(&s(1)), Scalar::zero());
    }

    #[test]
    fn test_lagrange() {
        let points = [
            (s(12342), s(22342)),
            (s(2234), s(22222)),
            (s(3982394), s(111114)),
            (s(483838), s(444444)),
        ];
        let l = Poly::lagrange(&points).unwrap();
        assert_eq!(l.len(), points.len());
        points.iter().for_each(|p| assert_eq!(l.eval(&p.0), p.1));

        let points = [(s(12342), s(22342))];
        let l = Poly::lagrange(&points).unwrap();
        points.iter().for_each(|p| assert_eq!(l.eval(&p.0), p.1));
    }

    #[test]
    fn test_lagrange_reproduces_polynomial() {
        let xs = [s(3), s(10), s(256), s(50)];
        let ys = [s(35), s(1015), s(16777477), s(125055)];
        let l = Poly::interpolate(&xs, &ys).unwrap();
        assert_eq!(l, Poly::from_u64(&[5, 1, 0, 1]));

        let p = Poly::from_u64(&[5, 1, 0, 1, 10]);
        let xs = [s(3), s(10), s(256), s(50), s(7)];
        let ys = xs.iter().map(|x| p.eval(x)).collect_vec();
        assert_eq!(Poly::interpolate(&xs, &ys).unwrap(), p);
    }

    #[test]
    fn test_lagrange_errors() {
        assert!(matches!(
            Poly::interpolate(&[s(1), s(2)], &[s(1)]),
            Err(Error::LengthMismatch { left: 2, right: 1 })
        ));
        assert!(matches!(
            Poly::lagrange(&[(s(1), s(2)), (s(1), s(3))]),
            Err(Error::DivisionByZero)
        ));
        assert!(Poly::lagrange(&[]).unwrap().is_zero());
    }

    #[test]
    fn test_vanishing() {
        let roots = [s(2), s(3), s(5), s(7)];
        let z = Poly::vanishing(&roots);
        assert_eq!(z.len(), roots.len() + 1);
        roots.iter().for_each(|r| assert_eq!(z.eval(r), Scalar::zero()));
        assert_ne!(z.eval(&s(4)), Scalar::zero());

        let random = (0..3)
            .map(|_| Scalar::random(rand::thread_rng()))
            .collect_vec();
        let z = Poly::vanishing(&random);
        random.iter().for_each(|r| assert_eq!(z.eval(r), Scalar::zero()));

        assert_eq!(Poly::vanishing(&Vec::<Scalar>::new()), Poly::one());
    }

    #[test]
    fn test_div_by_vanishing() {
        let roots = (0..16)
            .map(|_| Scalar::random(rand::thread_rng()))
            .collect_vec();
        let q = (0..9)
            .map(|_| Scalar::random(rand::thread_rng()))
            .collect::<Poly>();
        let z = Poly::vanishing(&roots);
        let (q2, r) = (&q * &z).div_rem(&z).unwrap();
        assert!(r.is_zero());
        assert_eq!(q, q2);
    }
}
