use super::*;

#[test]
fn parse_errors() {
    assert_eq!("10M5".parse::<Cigar>(), Err(CigarError::MissingOp));
    assert_eq!("M10".parse::<Cigar>(), Err(CigarError::MissingInc { offset: 0 }));
    assert_eq!("5M0M".parse::<Cigar>(), Err(CigarError::IncZero { offset: 3 }));
    assert_eq!(
        "10Q".parse::<Cigar>(),
        Err(CigarError::InvalidOperation { op: b'Q', offset: 2 })
    );
    assert_eq!("99999999999999999999999M".parse::<Cigar>(), Err(CigarError::IncOverflow));
}

#[test]
fn errors_name_the_bad_operation() {
    let err = " 10M2Z3S".parse::<Cigar>().unwrap_err();
    assert_eq!(err.offset(), Some(4));
    assert!(err.to_string().contains("'Z' at position 4"));

    assert_eq!("10M5".parse::<Cigar>().unwrap_err().offset(), None);
}

#[test]
fn star_is_empty() {
    let cigar: Cigar = "*".parse().unwrap();
    assert!(cigar.is_empty());
    assert_eq!(cigar.to_string(), "*");
    assert_eq!(cigar.trailing_soft_clip(), None);
    assert_eq!(cigar.soft_clipped_tail(b"ACGT"), b"");
}

#[test]
fn ciglets() {
    let cigar: Cigar = "12S100M2I3D15S".parse().unwrap();
    let ciglets: Vec<_> = cigar.iter().map(|c| (c.inc, char::from(c.op))).collect();
    assert_eq!(ciglets, [(12, 'S'), (100, 'M'), (2, 'I'), (3, 'D'), (15, 'S')]);
    assert_eq!(cigar.to_string(), "12S100M2I3D15S");
}

#[test]
fn trailing_clip_only_counts_the_end() {
    let clipped: Cigar = "10M5S".parse().unwrap();
    assert_eq!(clipped.trailing_soft_clip(), Some(5));
    assert_eq!(clipped.leading_soft_clip(), None);

    let leading: Cigar = "5S10M".parse().unwrap();
    assert_eq!(leading.trailing_soft_clip(), None);
    assert_eq!(leading.leading_soft_clip(), Some(5));

    let hard: Cigar = "10M5S3H".parse().unwrap();
    assert_eq!(hard.trailing_soft_clip(), None);
}

#[test]
fn clipped_bases() {
    let cigar: Cigar = "2S5M3S".parse().unwrap();
    assert_eq!(cigar.soft_clipped_tail(b"GGACGTATAC"), b"TAC");
    assert_eq!(cigar.soft_clipped_head(b"GGACGTATAC"), b"GG");

    // Clips longer than the read return the whole read
    let long: Cigar = "20S".parse().unwrap();
    assert_eq!(long.soft_clipped_tail(b"ACGT"), b"ACGT");
    assert_eq!(long.soft_clipped_head(b"ACGT"), b"ACGT");

    let none: Cigar = "10M".parse().unwrap();
    assert_eq!(none.soft_clipped_tail(b"ACGTACGTAC"), b"");
}
