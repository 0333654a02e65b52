//! Property-based tests for the exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Magnitudes in the range real inputs occupy.
    fn coordinate() -> impl Strategy<Value = i64> {
        -500_000_000_000_000i64..500_000_000_000_000i64
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn gcd(a: i64, b: i64) -> i64 {
        if b == 0 {
            a.abs()
        } else {
            gcd(b, a % b)
        }
    }

    proptest! {
        #[test]
        fn integer_products_match_i128(a in coordinate(), b in coordinate()) {
            let product = Integer::new(a) * Integer::new(b);
            let expected = i128::from(a) * i128::from(b);
            prop_assert_eq!(product.to_string(), expected.to_string());
        }

        #[test]
        fn integer_distributive(a in coordinate(), b in coordinate(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&c * &(&a + &b), &c * &a + &c * &b);
        }

        #[test]
        fn rational_lowest_terms(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let n = r.numerator().to_i64().unwrap();
            let d = r.denominator().to_i64().unwrap();

            prop_assert!(d > 0);
            prop_assert_eq!(gcd(n, d), 1);
            prop_assert_eq!(i128::from(n) * i128::from(den), i128::from(num) * i128::from(d));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_division_undoes_multiplication(
            a in coordinate(),
            num in non_zero_int(),
            den in non_zero_int()
        ) {
            let a = Rational::from(a);
            let k = Rational::from_i64(num, den);
            let scaled = &a * &k;
            prop_assert_eq!(scaled.checked_div(&k), Some(a));
        }
    }
}
