// BSL 1.0 License

use num_traits::Float;

pub(crate) fn sqrt<Num: Float>(value: Num) -> Num {
    Float::sqrt(value)
}

pub(crate) fn round<Num: Float>(value: Num) -> Num {
    Float::round(value)
}

pub(crate) fn approx_eq<Num: Float>(a: Num, b: Num, epsilon: Num) -> bool {
    Float::abs(a - b) < epsilon
}
