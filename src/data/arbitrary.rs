use crate::{
    cigar::{Cigar, Ciglet},
    translate::{AminoAcid, Codon},
};
use arbitrary::{Arbitrary, Result, Unstructured};
use std::num::NonZeroUsize;

impl<'a> Arbitrary<'a> for Codon {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Codon::from_table_index(u.choose_index(Codon::COUNT)?))
    }
}

impl<'a> Arbitrary<'a> for AminoAcid {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let index = u.choose_index(AminoAcid::COUNT)?;
        // There are only 21 amino acids
        Ok(AminoAcid(u8::try_from(index).unwrap_or(0)))
    }
}

impl<'a> Arbitrary<'a> for Ciglet {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"MIDNSHP=X";
        Ok(Ciglet {
            inc: NonZeroUsize::arbitrary(u)?.get(),
            op:  ALPHA[u.choose_index(ALPHA.len())?],
        })
    }
}

/// Generates only valid CIGAR strings, built from arbitrary [`Ciglet`]
/// values.
impl<'a> Arbitrary<'a> for Cigar {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut buff = itoa::Buffer::new();
        let mut bytes = Vec::new();

        for ciglet in u.arbitrary_iter::<Ciglet>()? {
            let Ciglet { inc, op } = ciglet?;
            bytes.extend_from_slice(buff.format(inc).as_bytes());
            bytes.push(op);
        }

        Ok(Cigar(bytes))
    }
}
