use crate::types::{CommBFields, CommBFormat};

/**
 * ## ACAS Active Resolution Advisory (BDS 3,0)
 *
 * The first byte is a reliable enough identifier on its own that the rest
 * of the register (threat identity, RA complement bits, terminated flag)
 * isn't needed to disambiguate it from the other candidates. We accept it
 * outright once the identifier matches.
 */

pub fn score(mb: &[u8; 7]) -> i32 {
    if mb[0] != 0x30 {
        return 0;
    }
    56
}

pub fn store(_mb: &[u8; 7], out: &mut CommBFields) {
    out.commb_format = CommBFormat::AcasRa;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_byte() {
        let mb = [0x30, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(score(&mb), 56);
        let mut fields = CommBFields::default();
        store(&mb, &mut fields);
        assert_eq!(fields.commb_format, CommBFormat::AcasRa);
    }

    #[test]
    fn rejects_wrong_identifier() {
        let mb = [0x31, 0, 0, 0, 0, 0, 0];
        assert_eq!(score(&mb), 0);
    }
}
