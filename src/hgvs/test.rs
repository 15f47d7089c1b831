use super::*;

#[test]
fn short_to_long_examples() {
    let cases = [
        ("p.V600E", "p.Val600Glu"),
        ("p.R97*", "p.Arg97Ter"),
        ("p.R97Pfs*23", "p.Arg97ProfsTer23"),
        ("p.E746_A750del", "p.Glu746_Ala750del"),
        ("p.D770_N771insSVD", "p.Asp770_Asn771insSerValAsp"),
        ("p.(G12C)", "p.(Gly12Cys)"),
        ("p.M1?", "p.Met1?"),
        ("p.*110Qext*17", "p.Ter110GlnextTer17"),
        ("NP_004324.2:p.V600E", "NP_004324.2:p.Val600Glu"),
        ("G12D", "Gly12Asp"),
    ];

    for (short, long) in cases {
        assert_eq!(protein_short_to_long(short).unwrap(), long, "{short}");
    }
}

#[test]
fn already_long_is_untouched() {
    assert_eq!(protein_short_to_long("p.Val600Glu").unwrap(), "p.Val600Glu");
    assert_eq!(protein_short_to_long("p.Val600E").unwrap(), "p.Val600Glu");
}

#[test]
fn long_to_short_examples() {
    let cases = [
        ("p.Val600Glu", "p.V600E"),
        ("p.Arg97ProfsTer23", "p.R97Pfs*23"),
        ("p.Glu746_Ala750del", "p.E746_A750del"),
        ("NP_000537.3:p.Arg175His", "NP_000537.3:p.R175H"),
        ("p.V600Glu", "p.V600E"),
    ];

    for (long, short) in cases {
        assert_eq!(protein_long_to_short(long).unwrap(), short, "{long}");
    }
}

#[test]
fn unknown_residues() {
    assert_eq!(
        protein_short_to_long("p.X12G"),
        Err(HgvsError::UnknownResidue {
            residue: "X".to_string(),
            offset:  2,
        })
    );
    assert_eq!(
        protein_long_to_short("p.Xaa12Gly"),
        Err(HgvsError::UnknownResidue {
            residue: "Xaa".to_string(),
            offset:  2,
        })
    );
    assert_eq!(protein_short_to_long(""), Err(HgvsError::Empty));
    assert_eq!(protein_long_to_short(""), Err(HgvsError::Empty));
}

#[test]
fn non_ascii_is_copied() {
    assert_eq!(protein_short_to_long("p.V600E µ").unwrap(), "p.Val600Glu µ");
}
