//! Operator forwarding for the newtype wrappers.

/// Implements a binary operator for every owned/borrowed combination of a
/// single-field newtype by forwarding to the wrapped `dashu` value.
macro_rules! forward_binop {
    ($ty:ident, $imp:ident, $method:ident) => {
        impl $imp for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty($imp::$method(self.0, rhs.0))
            }
        }

        impl $imp<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty($imp::$method(self.0, &rhs.0))
            }
        }

        impl $imp<$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty($imp::$method(&self.0, rhs.0))
            }
        }

        impl $imp<&$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty($imp::$method(&self.0, &rhs.0))
            }
        }
    };
}

/// Implements negation for owned and borrowed values of a newtype.
macro_rules! forward_neg {
    ($ty:ident) => {
        impl Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-self.0)
            }
        }

        impl Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-&self.0)
            }
        }
    };
}
