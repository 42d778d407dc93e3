use super::*;

#[test]
fn backend_name_is_supported() {
    assert!(matches!(backend_name(), "portable" | "avx2" | "neon"));
}

#[test]
fn native_engine_matches_backend() {
    let width = <Native as ByteLanes>::WIDTH;
    match BACKEND {
        Backend::Avx2 => assert_eq!(width, 32),
        Backend::Neon | Backend::Portable => assert_eq!(width, 16),
    }
}

#[test]
fn byte_engines_fold_two_values_per_word_lane() {
    assert_eq!(<Native as ByteLanes>::FOLD, 2);
    assert_eq!(<scalar::Scalar as ByteLanes>::FOLD, 1);
}

#[test]
fn native_sanitize_and_reduce() {
    let width = <Native as ByteLanes>::WIDTH;
    let data: Vec<i8> = (0..width).map(|i| if i % 3 == 0 { -128 } else { i as i8 }).collect();
    let expected: i32 = data.iter().filter(|v| **v != -128).map(|v| *v as i32).sum();

    let bytes = <Native as ByteLanes>::load(&data);
    let clean = Native::sanitize(bytes, Native::splat(-128));
    let words = <Native as ByteLanes>::widen_add(Native::zero_words(), clean);
    assert_eq!(Native::reduce_words(words), expected);
}

#[test]
fn native_dword_widen_does_not_wrap() {
    let width = <Native as DwordLanes>::WIDTH;
    let data = vec![i32::MAX; width];
    let mut acc = Native::zero_qwords();
    for _ in 0..3 {
        acc = <Native as DwordLanes>::widen_add(acc, <Native as DwordLanes>::load(&data));
    }
    assert_eq!(Native::reduce_qwords(acc), 3 * width as i64 * i32::MAX as i64);
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[test]
fn avx2_engine_agrees_with_scalar() {
    let config = crate::conformance::SweepConfig {
        max_len: 3000,
        rounds: 8,
        seed: 11,
    };
    let cases = crate::conformance::run::<avx2::Avx2>(&config);
    assert!(!cases.is_empty());
    assert_eq!(crate::conformance::mismatches(&cases), 0);
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
#[test]
fn neon_engine_agrees_with_scalar() {
    let config = crate::conformance::SweepConfig {
        max_len: 3000,
        rounds: 8,
        seed: 11,
    };
    let cases = crate::conformance::run::<neon::Neon>(&config);
    assert!(!cases.is_empty());
    assert_eq!(crate::conformance::mismatches(&cases), 0);
}
