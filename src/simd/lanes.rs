//! Lane operations the vector reducers are written against.
//!
//! An engine describes one register width: how many elements a load covers,
//! which byte boundary its loads prefer, and the handful of lane operations
//! the reduction needs. The reduction structure (prologue, batch cadence,
//! epilogue) lives in `sum::vector` and never touches intrinsics directly.

/// 8-bit lanes widened into 16-bit accumulators.
pub trait ByteLanes {
    /// i8 elements covered by one load.
    const WIDTH: usize;
    /// Preferred load boundary in bytes.
    const ALIGN: usize;
    /// i8 values folded into each 16-bit accumulator lane per load.
    const FOLD: usize;

    type Bytes: Copy;
    type Words: Copy;

    fn splat(value: i8) -> Self::Bytes;

    /// Reads the first `WIDTH` elements of `chunk`.
    fn load(chunk: &[i8]) -> Self::Bytes;

    /// Zeroes every lane equal to the matching lane of `sentinel`.
    fn sanitize(bytes: Self::Bytes, sentinel: Self::Bytes) -> Self::Bytes;

    fn zero_words() -> Self::Words;

    /// Sign-extends `bytes` to 16-bit lanes and adds them into `acc`.
    fn widen_add(acc: Self::Words, bytes: Self::Bytes) -> Self::Words;

    /// Widens to 32-bit lanes and folds them into a single value.
    fn reduce_words(acc: Self::Words) -> i32;
}

/// 32-bit lanes widened into 64-bit accumulators.
pub trait DwordLanes {
    /// i32 elements covered by one load.
    const WIDTH: usize;
    /// Preferred load boundary in bytes.
    const ALIGN: usize;

    type Dwords: Copy;
    type Qwords: Copy;

    /// Reads the first `WIDTH` elements of `chunk`.
    fn load(chunk: &[i32]) -> Self::Dwords;

    fn zero_qwords() -> Self::Qwords;

    /// Sign-extends `dwords` to 64-bit lanes and adds them into `acc`.
    fn widen_add(acc: Self::Qwords, dwords: Self::Dwords) -> Self::Qwords;

    fn reduce_qwords(acc: Self::Qwords) -> i64;
}
