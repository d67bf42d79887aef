use crate::bits::{getbit, getbits};
use crate::types::{CommBFields, CommBFormat, CommBFrame};

/**
 * ## Airborne Position (BDS 0,5) — defensive recogniser
 *
 * An extended-squitter airborne position report occasionally turns up in
 * a Comm-B reply. We never treat it as a usable position here — decoding
 * the compact position report requires the Gillham/gray-code altitude
 * path and CPR resolution this decoder deliberately stays out of — but
 * recognising it keeps it from being misclassified as something else,
 * in particular a BDS4,4 MRAR. The one thing that makes this candidate
 * trustworthy rather than a guess: the 12-bit altitude code embedded in
 * the position report can be reconstructed into an AC13 value and
 * compared bit-for-bit against the altitude code of the enclosing DF20
 * frame. A match is decisive, hence the score high enough to dominate
 * every other candidate.
 *
 * Only applies to DF20 (altitude reply) frames; a DF21 (identity reply)
 * carries no such altitude field to cross-check against.
 */

pub fn score(frame: &CommBFrame) -> i32 {
    if frame.msgtype != 20 {
        return 0;
    }

    let mb = &frame.mb;

    let typecode = getbits(mb, 1, 5);
    if !(9..=18).contains(&typecode) {
        return 0;
    }

    if getbit(mb, 21) != 0 {
        return 0;
    }

    let ac12 = getbits(mb, 9, 20);
    if ac12 == 0 {
        return 0;
    }

    let ac13 = ((ac12 & 0x0FC0) << 1) | (ac12 & 0x003F);
    let Some(ac) = frame.ac else {
        return 0;
    };
    if ac as u32 != ac13 {
        return 0;
    }

    let lat = getbits(mb, 23, 39);
    let lon = getbits(mb, 40, 56);
    if lat == 0 || lon == 0 {
        return 0;
    }

    100
}

pub fn store(out: &mut CommBFields) {
    out.commb_format = CommBFormat::AirbornePosition;
}
