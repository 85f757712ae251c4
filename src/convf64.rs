/// Lossy conversion between a scalar type and [`f64`].
///
/// The filter taps can be computed with any scalar implementing [`Float`]
/// and [`FloatConst`], but the cutoff frequencies are given as `f64` and the
/// frequency response is computed with `f64` FFTs. This trait converts values
/// across that boundary. High precision types such as `num_bigfloat::BigFloat`
/// are rounded to the nearest `f64`.
///
/// [`Float`]: num_traits::Float
/// [`FloatConst`]: num_traits::FloatConst
pub trait Convf64 {
    /// Converts self to an `f64`, possibly in a lossy way.
    fn to_f64(&self) -> f64;

    /// Converts an `f64` to the type `Self`, possibly in a lossy way.
    fn from_f64(x: f64) -> Self;
}

impl Convf64 for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(x: f64) -> f64 {
        x
    }
}

impl Convf64 for f32 {
    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn from_f64(x: f64) -> f32 {
        x as f32
    }
}

#[cfg(feature = "num-bigfloat")]
impl Convf64 for num_bigfloat::BigFloat {
    fn to_f64(&self) -> f64 {
        num_bigfloat::BigFloat::to_f64(self)
    }

    fn from_f64(x: f64) -> Self {
        x.into()
    }
}

#[cfg(test)]
mod test {
    use super::Convf64;

    #[test]
    fn single_precision_round_trip() {
        assert_eq!(Convf64::to_f64(&0.25f32), 0.25);
        assert_eq!(<f32 as Convf64>::from_f64(0.1), 0.1f32);
    }
}
