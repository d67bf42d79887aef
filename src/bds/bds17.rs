use crate::bits::{flag, getbits};
use crate::types::{CommBFields, CommBFormat};

/**
 * ## Common Usage GICB Capability Report (BDS 1,7)
 *
 * One bit per register indicating whether that register has a valid,
 * regularly-updated input. There is no fixed identifier byte to check, so
 * this candidate leans entirely on additive scoring: a realistic capability
 * vector (BDS2,0 present, ES registers forming one of a few canonical
 * combinations, rare registers mostly absent) scores positive; garbage
 * scores negative, which the classifier treats as a veto.
 */

pub fn score(mb: &[u8; 7]) -> i32 {
    if getbits(mb, 25, 56) != 0 {
        return 0;
    }

    let mut score = 0;

    if flag(mb, 7) {
        score += 1; // 2,0 aircraft identification
    } else {
        score -= 2; // BDS2,0 is on almost everything
    }

    if flag(mb, 10) {
        score -= 2;
    } // 4,1 next waypoint identifier
    if flag(mb, 11) {
        score -= 2;
    } // 4,2 next waypoint position
    if flag(mb, 12) {
        score -= 2;
    } // 4,3 next waypoint information
    if flag(mb, 13) {
        score -= 1;
    } // 4,4 meteorological routine report
    if flag(mb, 14) {
        score -= 1;
    } // 4,5 meteorological hazard report
    if flag(mb, 20) {
        score -= 2;
    } // 5,4 waypoint 1
    if flag(mb, 21) {
        score -= 2;
    } // 5,5 waypoint 2
    if flag(mb, 22) {
        score -= 2;
    } // 5,6 waypoint 3

    let es_bits = (1..=6).map(|n| flag(mb, n)).collect::<Vec<_>>();
    match es_bits.as_slice() {
        [true, true, true, true, true, last] => {
            // ES capable
            score += 5;
            if *last {
                score += 1; // ES EDI
            }
        }
        [false, false, false, false, false, false] => {
            score += 1; // not ES capable
        }
        [false, false, true, true, true, _] => {
            score += 3; // ES with no position data
        }
        _ => {
            score -= 12; // other combinations, unlikely
        }
    }

    match (flag(mb, 16), flag(mb, 24), flag(mb, 9)) {
        (true, true, vertical_intent) => {
            score += 2; // track/turn, heading/speed
            if vertical_intent {
                score += 1;
            }
        }
        (false, false, false) => {
            score += 1; // neither
        }
        _ => {
            score -= 6; // unlikely
        }
    }

    score
}

pub fn store(_mb: &[u8; 7], out: &mut CommBFields) {
    out.commb_format = CommBFormat::GicbCaps;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonzero_trailing_bits() {
        let mb = [0, 0, 0, 0, 0, 0, 1];
        assert_eq!(score(&mb), 0);
    }

    fn set_bit(mb: &mut [u8; 7], n: u32) {
        let byte = (n - 1) / 8;
        let shift = 7 - (n - 1) % 8;
        mb[byte as usize] |= 1 << shift;
    }

    #[test]
    fn not_es_capable_plus_common_bds20_scores_positive() {
        let mut mb = [0u8; 7];
        set_bit(&mut mb, 7); // BDS2,0 present
        assert!(score(&mb) > 0);
    }

    #[test]
    fn es_capable_with_track_and_heading_scores_higher() {
        let mut mb = [0u8; 7];
        for n in 1..=6 {
            set_bit(&mut mb, n);
        }
        set_bit(&mut mb, 7);
        set_bit(&mut mb, 16);
        set_bit(&mut mb, 24);
        assert!(score(&mb) > 5);
    }

    #[test]
    fn garbage_es_combination_scores_negative() {
        let mut mb = [0u8; 7];
        set_bit(&mut mb, 1);
        set_bit(&mut mb, 4);
        // bits 2,3,5,6 left zero: an "other combination"
        assert!(score(&mb) < 0);
    }
}
