use super::*;
use std::io::ErrorKind;

#[test]
fn hamming_needs_equal_lengths() {
    assert_eq!(hamming(b"ACGT", b"ACGT"), Some(0));
    assert_eq!(hamming(b"ACGT", b"TGCA"), Some(4));
    assert_eq!(hamming(b"ACGT", b"ACGTA"), None);
    assert_eq!(hamming(b"", b""), Some(0));
}

#[test]
fn levenshtein_distances() {
    assert_eq!(levenshtein("ACGT", "ACGT"), 0);
    assert_eq!(levenshtein("ACGT", "ACGTA"), 1);
    assert_eq!(levenshtein("ACGT", "AGT"), 1);
    assert_eq!(levenshtein("", "ACG"), 3);
}

#[test]
fn report_against_first_sequence() {
    let counts = "ACGTACGT 1000\nACGTACGA 50\nACGTACG 12\n\nTCGTACGA 3\n";
    let report = EditDistanceReport::from_reader(counts.as_bytes()).unwrap();

    assert_eq!(report.reference().sequence, "ACGTACGT");
    let summary: Vec<_> = report
        .rows()
        .iter()
        .map(|r| (r.sequence.as_str(), r.count, r.hamming, r.levenshtein))
        .collect();
    assert_eq!(
        summary,
        [
            ("ACGTACGT", 1000, Some(0), 0),
            ("ACGTACGA", 50, Some(1), 1),
            ("ACGTACG", 12, None, 1),
            ("TCGTACGA", 3, Some(2), 2),
        ]
    );

    let mut out = Vec::new();
    report.write_csv(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "sequence,counts,hamming_distance,levenshtein_distance\n\
         ACGTACGT,1000,0,0\n\
         ACGTACGA,50,1,1\n\
         ACGTACG,12,NA,1\n\
         TCGTACGA,3,2,2\n"
    );
}

#[test]
fn duplicates_keep_position() {
    let counts = "AAAA 10\nAAAT 5\nAAAA 7\nAAAT 2\n";
    let report = EditDistanceReport::from_reader(counts.as_bytes()).unwrap();

    let summary: Vec<_> = report.rows().iter().map(|r| (r.sequence.as_str(), r.count)).collect();
    assert_eq!(summary, [("AAAA", 7), ("AAAT", 2)]);
    assert_eq!(report.reference().hamming, Some(0));
}

#[test]
fn malformed_counts() {
    for bad in ["", "\n\n", "ACGT\n", "ACGT ten\n", "ACGT 1 2\n"] {
        let err = EditDistanceReport::from_reader(bad.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData, "{bad:?}");
    }
}
