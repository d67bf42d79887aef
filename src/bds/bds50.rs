use crate::bits::{getbit, getbits};
use crate::types::{CommBFields, CommBFormat, GroundSpeed, HeadingType, Kinematics};
use std::f64::consts::PI;

/**
 * ## Track and Turn Report (BDS 5,0)
 *
 * Roll angle, true track, ground speed and true airspeed must all be
 * present and plausible; track angle rate is optionally present. Two
 * cross-checks penalise (without vetoing) implausible combinations: a
 * ground speed far from true airspeed, and a measured track rate that
 * disagrees with the turn rate implied by roll angle and airspeed.
 *
 * | Field | Bits | Scale |
 * |---|---|---|
 * | Roll valid/sign/raw | 1 / 2 / 3..11 | raw·45/256, sign subtracts 90 → range −90..+45 deg |
 * | Track valid/sign/raw | 12 / 13 / 14..23 | raw·90/512, sign adds 180 → 0..360 deg |
 * | GS valid/raw | 24 / 25..34 | raw·2 kt |
 * | Track rate valid/sign/raw | 35 / 36 / 37..45 | raw·8/256, sign subtracts 16 → deg/s |
 * | TAS valid/raw | 46 / 47..56 | raw·2 kt |
 *
 * Ranges: roll in [−40, 40), GS in [50, 700], TAS in [50, 700], track
 * rate in [−10, 10]. Penalties: |GS − TAS| > 150 → −6; absolute
 * difference between measured track rate and the theoretical turn rate
 * `68625 · tan(roll · π/180) / (TAS · 20 · π)` exceeding 2 deg/s → −6.
 */

pub fn score(mb: &[u8; 7]) -> i32 {
    let roll_valid = getbit(mb, 1) != 0;
    let roll_sign = getbit(mb, 2) != 0;
    let roll_raw = getbits(mb, 3, 11);

    let track_valid = getbit(mb, 12) != 0;
    let track_sign = getbit(mb, 13) != 0;
    let track_raw = getbits(mb, 14, 23);

    let gs_valid = getbit(mb, 24) != 0;
    let gs_raw = getbits(mb, 25, 34);

    let track_rate_valid = getbit(mb, 35) != 0;
    let track_rate_sign = getbit(mb, 36) != 0;
    let track_rate_raw = getbits(mb, 37, 45);

    let tas_valid = getbit(mb, 46) != 0;
    let tas_raw = getbits(mb, 47, 56);

    if !roll_valid || !track_valid || !gs_valid || !tas_valid {
        return 0;
    }

    let mut score = 0;

    let mut roll = 0.0;
    if roll_valid {
        roll = roll_raw as f64 * 45.0 / 256.0;
        if roll_sign {
            roll -= 90.0;
        }
        if (-40.0..40.0).contains(&roll) {
            score += 11;
        } else {
            return 0;
        }
    } else if roll_raw == 0 && !roll_sign {
        score += 1;
    } else {
        return 0;
    }

    let mut track = 0.0;
    if track_valid {
        score += 12;
        track = track_raw as f64 * 90.0 / 512.0;
        if track_sign {
            track += 180.0;
        }
    } else if track_raw == 0 && !track_sign {
        score += 1;
    } else {
        return 0;
    }

    let mut gs = 0.0;
    if gs_valid && gs_raw != 0 {
        gs = gs_raw as f64 * 2.0;
        if (50.0..=700.0).contains(&gs) {
            score += 11;
        } else {
            return 0;
        }
    } else if !gs_valid && gs_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    let mut track_rate = 0.0;
    if track_rate_valid {
        track_rate = track_rate_raw as f64 * 8.0 / 256.0;
        if track_rate_sign {
            track_rate -= 16.0;
        }
        if (-10.0..=10.0).contains(&track_rate) {
            score += 11;
        } else {
            return 0;
        }
    } else if track_rate_raw == 0 && !track_rate_sign {
        score += 1;
    } else {
        return 0;
    }

    let mut tas = 0.0;
    if tas_valid && tas_raw != 0 {
        tas = tas_raw as f64 * 2.0;
        if (50.0..=700.0).contains(&tas) {
            score += 11;
        } else {
            return 0;
        }
    } else if !tas_valid && tas_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    // small penalty for inconsistent data
    if gs_valid && tas_valid && (gs - tas).abs() > 150.0 {
        score -= 6;
    }

    // compute the theoretical turn rate and compare to track angle rate
    if roll_valid && tas_valid && tas > 0.0 && track_rate_valid {
        let turn_rate = 68625.0 * libm::tan(roll * PI / 180.0) / (tas * 20.0 * PI);
        let delta = (turn_rate - track_rate).abs();
        if delta > 2.0 {
            score -= 6;
        }
    }

    score
}

pub fn store(mb: &[u8; 7], out: &mut CommBFields) {
    out.commb_format = CommBFormat::TrackTurn;

    let roll_raw = getbits(mb, 3, 11);
    let roll_sign = getbit(mb, 2) != 0;
    let mut roll = roll_raw as f64 * 45.0 / 256.0;
    if roll_sign {
        roll -= 90.0;
    }

    let track_raw = getbits(mb, 14, 23);
    let track_sign = getbit(mb, 13) != 0;
    let mut track = track_raw as f64 * 90.0 / 512.0;
    if track_sign {
        track += 180.0;
    }

    let gs_raw = getbits(mb, 25, 34);
    let gs = gs_raw as f64 * 2.0;

    let track_rate_valid = getbit(mb, 35) != 0;
    let track_rate_raw = getbits(mb, 37, 45);
    let track_rate_sign = getbit(mb, 36) != 0;
    let mut track_rate = track_rate_raw as f64 * 8.0 / 256.0;
    if track_rate_sign {
        track_rate -= 16.0;
    }

    let tas_raw = getbits(mb, 47, 56);
    let tas = tas_raw as f64 * 2.0;

    let mut kin = Kinematics::default();
    kin.roll_valid = true;
    kin.roll = Some(roll);

    kin.heading_valid = true;
    kin.heading = Some(track);
    kin.heading_type = Some(HeadingType::GroundTrack);

    kin.groundspeed_valid = true;
    kin.groundspeed = Some(GroundSpeed {
        v0: gs,
        v2: gs,
        selected: gs,
    });

    if track_rate_valid {
        kin.track_rate_valid = true;
        kin.track_rate = Some(track_rate);
    }

    kin.tas_valid = true;
    kin.tas = Some(tas);

    out.kinematics = kin;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_bits(mb: &mut [u8; 7], lo: u32, hi: u32, value: u32) {
        let width = hi - lo + 1;
        for i in 0..width {
            let n = lo + i;
            let bit = (value >> (width - 1 - i)) & 1;
            let byte = (n - 1) / 8;
            let shift = 7 - (n - 1) % 8;
            if bit != 0 {
                mb[byte as usize] |= 1 << shift;
            } else {
                mb[byte as usize] &= !(1 << shift);
            }
        }
    }

    fn set_flag(mb: &mut [u8; 7], n: u32) {
        set_bits(mb, n, n, 1);
    }

    #[test]
    fn missing_required_field_rejects() {
        let mb = [0u8; 7];
        assert_eq!(score(&mb), 0);
    }

    #[test]
    fn plausible_report_scores_positive() {
        let mut mb = [0u8; 7];
        set_flag(&mut mb, 1); // roll valid
        set_bits(&mut mb, 3, 11, 0); // roll = 0
        set_flag(&mut mb, 12); // track valid
        set_bits(&mut mb, 14, 23, 0);
        set_flag(&mut mb, 24); // gs valid
        set_bits(&mut mb, 25, 34, 100); // gs = 200 kt
        set_flag(&mut mb, 46); // tas valid
        set_bits(&mut mb, 47, 56, 100); // tas = 200 kt
        assert!(score(&mb) > 0);

        let mut fields = CommBFields::default();
        store(&mb, &mut fields);
        assert_eq!(fields.commb_format, CommBFormat::TrackTurn);
        assert!(fields.kinematics.roll_valid);
        assert_eq!(fields.kinematics.tas, Some(200.0));
    }

    #[test]
    fn roll_at_boundary_is_accepted_just_under_forty() {
        // roll_raw * 45/256 just under 40 -> raw = 227 gives 39.9...
        let mut mb = [0u8; 7];
        set_flag(&mut mb, 1);
        set_bits(&mut mb, 3, 11, 227);
        set_flag(&mut mb, 12);
        set_bits(&mut mb, 14, 23, 0);
        set_flag(&mut mb, 24);
        set_bits(&mut mb, 25, 34, 100);
        set_flag(&mut mb, 46);
        set_bits(&mut mb, 47, 56, 100);
        assert!(score(&mb) > 0);
    }

    #[test]
    fn roll_at_forty_degrees_is_rejected() {
        // raw = 227.55.. rounds, use exact 40.0 boundary: raw=256*40/45=227.55;
        // pick a raw value that yields exactly >= 40
        let mut mb = [0u8; 7];
        set_flag(&mut mb, 1);
        set_bits(&mut mb, 3, 11, 228); // 228*45/256 = 40.07
        set_flag(&mut mb, 12);
        set_flag(&mut mb, 24);
        set_bits(&mut mb, 25, 34, 100);
        set_flag(&mut mb, 46);
        set_bits(&mut mb, 47, 56, 100);
        assert_eq!(score(&mb), 0);
    }

    #[test]
    fn groundspeed_at_range_boundaries_is_accepted() {
        for &gs_kt in &[50u32, 700u32] {
            let mut mb = [0u8; 7];
            set_flag(&mut mb, 1);
            set_flag(&mut mb, 12);
            set_flag(&mut mb, 24);
            set_bits(&mut mb, 25, 34, gs_kt / 2);
            set_flag(&mut mb, 46);
            set_bits(&mut mb, 47, 56, gs_kt / 2); // tas matches gs, no penalty
            assert!(score(&mb) > 0, "gs={gs_kt} should be accepted");
        }
    }

    #[test]
    fn groundspeed_just_outside_range_boundaries_is_rejected() {
        for &gs_kt in &[48u32, 702u32] {
            let mut mb = [0u8; 7];
            set_flag(&mut mb, 1);
            set_flag(&mut mb, 12);
            set_flag(&mut mb, 24);
            set_bits(&mut mb, 25, 34, gs_kt / 2);
            set_flag(&mut mb, 46);
            set_bits(&mut mb, 47, 56, 100); // tas = 200
            assert_eq!(score(&mb), 0, "gs={gs_kt} should be rejected");
        }
    }

    #[test]
    fn groundspeed_far_from_tas_is_penalised_not_vetoed() {
        let mut mb = [0u8; 7];
        set_flag(&mut mb, 1);
        set_flag(&mut mb, 12);
        set_flag(&mut mb, 24);
        set_bits(&mut mb, 25, 34, 25); // gs = 50
        set_flag(&mut mb, 46);
        set_bits(&mut mb, 47, 56, 175); // tas = 350, delta = 300 > 150
        let penalised = score(&mb);
        assert!(penalised > 0); // not vetoed, but scored lower than the clean case
    }
}
