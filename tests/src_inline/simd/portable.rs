use super::*;

#[test]
fn sanitize_zeroes_only_matching_lanes() {
    let mut bytes = [5i8; BYTE_LANES];
    bytes[0] = -128;
    bytes[7] = -128;
    bytes[15] = 127;
    let out = Portable::sanitize(bytes, Portable::splat(-128));
    assert_eq!(out[0], 0);
    assert_eq!(out[7], 0);
    assert_eq!(out[15], 127);
    assert_eq!(out[1], 5);
}

#[test]
fn widen_add_pairs_low_and_high_halves() {
    let bytes: [i8; BYTE_LANES] = std::array::from_fn(|i| i as i8 - 8);
    let words = <Portable as ByteLanes>::widen_add(Portable::zero_words(), bytes);
    for (i, w) in words.iter().enumerate() {
        assert_eq!(*w, (i as i16 - 8) + (i as i16));
    }
}

#[test]
fn reduction_tree_sums_all_lanes() {
    let words: [i16; WORD_LANES] = [i16::MIN, i16::MIN, i16::MAX, 1, 2, 3, 4, -5];
    let expected: i32 = words.iter().map(|w| *w as i32).sum();
    assert_eq!(Portable::reduce_words(words), expected);
}

#[test]
fn full_batch_of_minimum_values_fits_word_lanes() {
    let bytes = [i8::MIN; BYTE_LANES];
    let mut acc = Portable::zero_words();
    for _ in 0..(256 / Portable::FOLD) {
        acc = <Portable as ByteLanes>::widen_add(acc, bytes);
    }
    assert!(acc.iter().all(|w| *w == i16::MIN));
    assert_eq!(Portable::reduce_words(acc), 128 * BYTE_LANES as i32 * -128);
}

#[test]
fn dword_lanes_accumulate_in_i64() {
    let dwords = [i32::MIN; DWORD_LANES];
    let acc = <Portable as DwordLanes>::widen_add(Portable::zero_qwords(), dwords);
    assert_eq!(Portable::reduce_qwords(acc), 4 * i32::MIN as i64);
}
