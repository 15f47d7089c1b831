use bioscripts::prelude::*;
use bioscripts::translate::TranslationError;

fn codon_names(codons: &[Codon]) -> Vec<String> {
    codons.iter().map(ToString::to_string).collect()
}

#[test]
fn single_and_three_letter_codes_round_trip() {
    for single in "ACDEFGHIKLMNPQRSTVWY*".chars() {
        let single = single.to_string();
        let three = convert_amino_acid_code(&single).unwrap();
        assert_eq!(three.len(), 3);
        assert_eq!(convert_amino_acid_code(&three).unwrap(), single);
    }
}

#[test]
fn stop_and_methionine() {
    let code = GeneticCode::standard();
    let translator = Translator::new(&code);

    assert_eq!(codon_names(translator.codons_for("*").unwrap()), ["TAA", "TAG", "TGA"]);
    assert_eq!(codon_names(translator.codons_for("Ter").unwrap()), ["TAA", "TAG", "TGA"]);
    assert_eq!(codon_names(translator.codons_for("M").unwrap()), ["ATG"]);

    let aug = translator.translate_codon("AUG").unwrap();
    assert_eq!(aug, translator.translate_codon("ATG").unwrap());
    assert_eq!((aug.single_char(), aug.three()), ('M', "Met"));
}

#[test]
fn three_ways_to_ask_for_methionine() {
    let code = GeneticCode::standard();
    let translator = Translator::new(&code);

    for token in ["ATG", "Met", "M"] {
        let t = translator.classify_and_translate(token).unwrap();
        assert_eq!((t.single(), t.three()), ('M', "Met"));
        assert_eq!(codon_names(&t.codons), ["ATG"]);
    }
}

#[test]
fn invalid_input_is_an_error() {
    let code = GeneticCode::standard();
    let translator = Translator::new(&code);

    assert!(matches!(convert_amino_acid_code("XY"), Err(TranslationError::InvalidLength(_))));
    assert!(matches!(translator.translate_codon("ATX"), Err(TranslationError::UnknownCodon(_))));
}

#[test]
fn batch_policies() {
    let code = GeneticCode::standard();
    let translator = Translator::new(&code);

    let results = translator.translate_list("ATG,Foo,TGG", Interpretation::Auto);
    assert!(collect_translations(results.clone(), BatchPolicy::Abort).is_err());

    let kept = collect_translations(results, BatchPolicy::Skip).unwrap();
    let threes: Vec<_> = kept.iter().map(Translation::three).collect();
    assert_eq!(threes, ["Met", "Trp"]);
}

#[test]
fn hgvs_uses_the_same_codes() {
    for aa in AminoAcid::all() {
        let short = format!("p.{}12{}", aa.single_char(), aa.single_char());
        let long = protein_short_to_long(&short).unwrap();
        assert_eq!(long, format!("p.{}12{}", aa.three(), aa.three()));
        assert_eq!(protein_long_to_short(&long).unwrap(), short);
    }
}
