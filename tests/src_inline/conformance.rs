use super::*;
use crate::simd::Native;
use crate::simd::portable::Portable;
use crate::simd::scalar::Scalar;
use tempfile::tempdir;

fn small() -> SweepConfig {
    SweepConfig {
        max_len: 5000,
        rounds: 16,
        seed: 7,
    }
}

#[test]
fn staged_buffer_has_requested_lead_in() {
    let data: Vec<i8> = (0..100).map(|i| i as i8).collect();
    for lead in 0..32 {
        let staged = Staged::new(&data, 32, lead);
        assert_eq!(staged.as_slice(), &data[..]);
        assert_eq!(lead_in(staged.as_slice(), 32), lead);
    }

    let data: Vec<i32> = (0..100).collect();
    for lead in 0..8 {
        let staged = Staged::new(&data, 32, lead);
        assert_eq!(staged.as_slice(), &data[..]);
        assert_eq!(lead_in(staged.as_slice(), 32), lead);
    }
}

#[test]
fn every_engine_agrees_with_scalar() {
    for cases in [
        run::<Scalar>(&small()),
        run::<Portable>(&small()),
        run::<Native>(&small()),
    ] {
        assert!(!cases.is_empty());
        let bad: Vec<_> = cases.iter().filter(|c| !c.agrees()).collect();
        assert!(bad.is_empty(), "mismatches: {bad:?}");
        assert_eq!(mismatches(&cases), 0);
    }
}

#[test]
fn alignment_cases_cover_every_prologue_length() {
    let cases = run::<Portable>(&small());
    let mut seen = [false; 16];
    for case in cases
        .iter()
        .filter(|c| c.kind == CaseKind::Alignment && c.width == 8 && c.len >= 32)
    {
        seen[case.lead_in] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn max_len_counts_elements_for_both_widths() {
    let config = small();
    let cases = run::<Portable>(&config);
    for width in [8, 32] {
        let sized: Vec<_> = cases
            .iter()
            .filter(|c| c.width == width && matches!(c.kind, CaseKind::Random | CaseKind::Extreme))
            .collect();
        assert!(sized.iter().all(|c| c.len <= config.max_len), "width={width}");
        assert!(
            sized
                .iter()
                .filter(|c| c.kind == CaseKind::Extreme)
                .all(|c| c.len == config.max_len),
            "width={width}"
        );
    }
    let longest32 = cases
        .iter()
        .filter(|c| c.width == 32 && c.kind == CaseKind::Random)
        .map(|c| c.len)
        .max()
        .unwrap_or(0);
    assert!(longest32 > config.max_len / 4);
}

#[test]
fn same_seed_is_deterministic() {
    let a = run::<Portable>(&small());
    let b = run::<Portable>(&small());
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.len, y.len);
        assert_eq!(x.scalar, y.scalar);
    }
}

#[test]
fn cases_written_as_tsv() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cases.tsv");
    let cases = vec![CaseResult {
        kind: CaseKind::BatchBoundary,
        width: 8,
        len: 4095,
        lead_in: 3,
        sanitize: Some(-128),
        scalar: -17,
        vector: -17,
    }];
    write_cases(&path, &cases).expect("write");
    let text = std::fs::read_to_string(&path).expect("read");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("kind\twidth\tlen\tlead_in\tsanitize\tscalar\tvector")
    );
    assert_eq!(lines.next(), Some("batch_boundary\t8\t4095\t3\t-128\t-17\t-17"));
}
