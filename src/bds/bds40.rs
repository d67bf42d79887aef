use crate::bits::{getbit, getbits};
use crate::types::{AltitudeSource, CommBFields, CommBFormat, Navigation};

/**
 * ## Selected Vertical Intention (BDS 4,0)
 *
 * No fixed identifier byte; five independently-valid sub-fields (MCP
 * altitude, FMS altitude, barometric setting, autopilot mode bits,
 * altitude source) are each checked against a plausible range when their
 * valid flag is set, and required to be all-zero when it isn't. Any
 * sub-field that is neither plausible-and-valid nor zero-and-invalid
 * vetoes the whole candidate.
 *
 * Payload layout (1-indexed bit ranges):
 *
 * | Field | Bits | Scale / units |
 * |---|---|---|
 * | MCP valid | 1 | flag |
 * | MCP altitude raw | 2..13 | ×16 ft |
 * | FMS valid | 14 | flag |
 * | FMS altitude raw | 15..26 | ×16 ft |
 * | Baro valid | 27 | flag |
 * | Baro raw | 28..39 | 800 + raw·0.1 hPa |
 * | Reserved | 40..47 | must be 0 |
 * | Target-alt source valid | 48 | flag |
 * | Target-alt source raw | 49..51 | 0..3 |
 * | Reserved | 52..53 | must be 0 |
 * | Capability-mode valid | 54 | flag |
 * | Capability-mode raw | 55..56 | bitfield {VNAV=4, ALT_HOLD=2, APPROACH=1} |
 *
 * Plausible altitude range is 1000..50000 ft; plausible QNH is 900..1100
 * hPa. Each valid in-range field scores +13; each cleanly-absent field
 * (invalid and raw zero) scores +1; source +3, mode +4. Penalties: MCP
 * and FMS both valid but disagree → −4; either altitude not a multiple
 * of 500 ft (±16 ft tolerance) → −4 each.
 */

pub fn score(mb: &[u8; 7]) -> i32 {
    let mcp_valid = getbit(mb, 1) != 0;
    let mcp_raw = getbits(mb, 2, 13);
    let fms_valid = getbit(mb, 14) != 0;
    let fms_raw = getbits(mb, 15, 26);
    let baro_valid = getbit(mb, 27) != 0;
    let baro_raw = getbits(mb, 28, 39);
    let reserved_1 = getbits(mb, 40, 47);
    let mode_valid = getbit(mb, 48) != 0;
    let mode_raw = getbits(mb, 49, 51);
    let reserved_2 = getbits(mb, 52, 53);
    let source_valid = getbit(mb, 54) != 0;
    let source_raw = getbits(mb, 55, 56);

    if !mcp_valid && !fms_valid && !baro_valid && !mode_valid && !source_valid {
        return 0;
    }

    let mut score = 0;

    let mcp_alt = mcp_raw * 16;
    if mcp_valid && mcp_raw != 0 {
        if (1000..=50000).contains(&mcp_alt) {
            score += 13;
        } else {
            return 0;
        }
    } else if !mcp_valid && mcp_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    let fms_alt = fms_raw * 16;
    if fms_valid && fms_raw != 0 {
        if (1000..=50000).contains(&fms_alt) {
            score += 13;
        } else {
            return 0;
        }
    } else if !fms_valid && fms_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    let baro_setting = 800.0 + baro_raw as f64 * 0.1;
    if baro_valid && baro_raw != 0 {
        if (900.0..=1100.0).contains(&baro_setting) {
            score += 13;
        } else {
            return 0;
        }
    } else if !baro_valid && baro_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    if reserved_1 != 0 {
        return 0;
    }

    if mode_valid {
        score += 4;
    } else if mode_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    if reserved_2 != 0 {
        return 0;
    }

    if source_valid {
        score += 3;
    } else if source_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    if mcp_valid && fms_valid && mcp_alt != fms_alt {
        score -= 4;
    }

    if mcp_valid {
        let remainder = mcp_alt % 500;
        if !(remainder < 16 || remainder > 484) {
            score -= 4;
        }
    }

    if fms_valid {
        let remainder = fms_alt % 500;
        if !(remainder < 16 || remainder > 484) {
            score -= 4;
        }
    }

    score
}

pub fn store(mb: &[u8; 7], out: &mut CommBFields) {
    out.commb_format = CommBFormat::VerticalIntent;

    let mcp_valid = getbit(mb, 1) != 0;
    let mcp_raw = getbits(mb, 2, 13);
    let fms_valid = getbit(mb, 14) != 0;
    let fms_raw = getbits(mb, 15, 26);
    let baro_valid = getbit(mb, 27) != 0;
    let baro_raw = getbits(mb, 28, 39);
    let mode_valid = getbit(mb, 48) != 0;
    let mode_raw = getbits(mb, 49, 51);
    let source_valid = getbit(mb, 54) != 0;
    let source_raw = getbits(mb, 55, 56);

    let mut nav = Navigation::default();

    if mcp_valid {
        nav.mcp_altitude_valid = true;
        nav.mcp_altitude = Some(mcp_raw * 16);
    }

    if fms_valid {
        nav.fms_altitude_valid = true;
        nav.fms_altitude = Some(fms_raw * 16);
    }

    if baro_valid {
        nav.qnh_valid = true;
        nav.qnh = Some(800.0 + baro_raw as f64 * 0.1);
    }

    if mode_valid {
        // The three nav-mode flag bits (VNAV=4, ALT_HOLD=2, APPROACH=1)
        // are numerically identical to the raw field's own bit weights.
        nav.nav_modes_valid = true;
        nav.nav_modes = Some(mode_raw as u8);
    }

    nav.altitude_source = if source_valid {
        AltitudeSource::from(source_raw)
    } else {
        AltitudeSource::Invalid
    };

    out.navigation = nav;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_invalid() -> [u8; 7] {
        [0u8; 7]
    }

    #[test]
    fn all_invalid_fields_score_zero() {
        assert_eq!(score(&all_invalid()), 0);
    }

    #[test]
    fn plausible_mcp_altitude_scores_positive() {
        // bit1 = MCP valid, bits2-13 = 2000/16 = 125 = 0b000001111101
        let mut mb = [0u8; 7];
        mb[0] = 0b1_0000000; // bit1 set
        // bits2-13 occupy the remaining 7 bits of byte0 and top 5 of byte1
        let raw: u32 = 2000 / 16;
        for i in 0..12u32 {
            let n = 2 + i;
            let bit = (raw >> (11 - i)) & 1;
            let byte = (n - 1) / 8;
            let shift = 7 - (n - 1) % 8;
            if bit != 0 {
                mb[byte as usize] |= 1 << shift;
            }
        }
        assert!(score(&mb) > 0);
        let mut fields = CommBFields::default();
        store(&mb, &mut fields);
        assert_eq!(fields.commb_format, CommBFormat::VerticalIntent);
        assert!(fields.navigation.mcp_altitude_valid);
        assert_eq!(fields.navigation.mcp_altitude, Some(2000));
    }

    #[test]
    fn implausible_mcp_altitude_vetoes() {
        let mut mb = [0u8; 7];
        mb[0] = 0b1_0000000;
        // bits2-13 all set: raw = 4095, altitude = 65520, out of range
        mb[0] |= 0b0_1111111;
        mb[1] = 0b11111_000;
        assert_eq!(score(&mb), 0);
    }

    fn mcp_only(raw: u32) -> [u8; 7] {
        let mut mb = [0u8; 7];
        mb[0] = 0b1_0000000; // bit1 set (mcp valid)
        for i in 0..12u32 {
            let n = 2 + i;
            let bit = (raw >> (11 - i)) & 1;
            let byte = (n - 1) / 8;
            let shift = 7 - (n - 1) % 8;
            if bit != 0 {
                mb[byte as usize] |= 1 << shift;
            }
        }
        mb
    }

    #[test]
    fn mcp_altitude_at_range_boundaries_is_accepted() {
        assert!(score(&mcp_only(3125)) > 0); // 3125 * 16 = 50000 ft, upper edge
        assert!(score(&mcp_only(63)) > 0); // 63 * 16 = 1008 ft, just above the lower edge
    }

    #[test]
    fn mcp_altitude_just_outside_range_boundaries_is_rejected() {
        assert_eq!(score(&mcp_only(3126)), 0); // 3126 * 16 = 50016 ft, just above the upper edge
        assert_eq!(score(&mcp_only(62)), 0); // 62 * 16 = 992 ft, just below the lower edge
    }

    #[test]
    fn nonzero_reserved_bits_vetoes() {
        let mut mb = [0u8; 7];
        mb[5] = 0b0000_0001; // mode_valid (bit 48), passes the all-invalid gate
        mb[4] = 0x01; // bit 40, inside reserved_1 (40..=47)
        assert_eq!(score(&mb), 0);
    }
}
