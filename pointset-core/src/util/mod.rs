mod permutation;
pub use self::permutation::*;
