use crate::bits::{getbit, getbits};
use crate::types::{CommBFields, CommBFormat, HeadingType, Kinematics};

/**
 * ## Heading and Speed Report (BDS 6,0)
 *
 * Magnetic heading, indicated airspeed and Mach number must all be
 * present; at least one of barometric or inertial vertical rate must be
 * present too (both may be, in which case a large disagreement between
 * them is penalised). Inertial rate is surfaced as the "geometric rate"
 * field, matching how INS-derived vertical rate is treated elsewhere in
 * this decoder.
 *
 * | Field | Bits | Scale |
 * |---|---|---|
 * | Heading valid/sign/raw | 1 / 2 / 3..12 | raw·90/512, sign adds 180 deg |
 * | IAS valid/raw | 13 / 14..23 | raw kt |
 * | Mach valid/raw | 24 / 25..34 | raw·2.048/512 |
 * | Baro rate valid/sign/raw | 35 / 36 / 37..45 | raw·32 ft/min, sign subtracts 16384 |
 * | Inertial rate valid/sign/raw | 46 / 47 / 48..56 | same scale |
 *
 * Ranges: IAS [50, 700] kt, Mach [0.1, 0.9], both vertical rates in
 * [−6000, 6000] ft/min. Penalty: |baro_rate − inertial_rate| > 2000 →
 * −12.
 */

pub fn score(mb: &[u8; 7]) -> i32 {
    let heading_valid = getbit(mb, 1) != 0;
    let heading_sign = getbit(mb, 2) != 0;
    let heading_raw = getbits(mb, 3, 12);

    let ias_valid = getbit(mb, 13) != 0;
    let ias_raw = getbits(mb, 14, 23);

    let mach_valid = getbit(mb, 24) != 0;
    let mach_raw = getbits(mb, 25, 34);

    let baro_rate_valid = getbit(mb, 35) != 0;
    let baro_rate_sign = getbit(mb, 36) != 0;
    let baro_rate_raw = getbits(mb, 37, 45);

    let inertial_rate_valid = getbit(mb, 46) != 0;
    let inertial_rate_sign = getbit(mb, 47) != 0;
    let inertial_rate_raw = getbits(mb, 48, 56);

    if !heading_valid || !ias_valid || !mach_valid || (!baro_rate_valid && !inertial_rate_valid) {
        return 0;
    }

    let mut score = 0;

    if heading_valid {
        score += 12;
    } else if heading_raw == 0 && !heading_sign {
        score += 1;
    } else {
        return 0;
    }

    let ias = ias_raw as i32;
    if ias_valid && ias_raw != 0 {
        if (50..=700).contains(&ias) {
            score += 11;
        } else {
            return 0;
        }
    } else if !ias_valid && ias_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    let mach = mach_raw as f64 * 2.048 / 512.0;
    if mach_valid && mach_raw != 0 {
        if (0.1..=0.9).contains(&mach) {
            score += 11;
        } else {
            return 0;
        }
    } else if !mach_valid && mach_raw == 0 {
        score += 1;
    } else {
        return 0;
    }

    let mut baro_rate = 0i32;
    if baro_rate_valid {
        baro_rate = baro_rate_raw as i32 * 32;
        if baro_rate_sign {
            baro_rate -= 16384;
        }
        if (-6000..=6000).contains(&baro_rate) {
            score += 11;
        } else {
            return 0;
        }
    } else if baro_rate_raw == 0 && !baro_rate_sign {
        score += 1;
    } else {
        return 0;
    }

    let mut inertial_rate = 0i32;
    if inertial_rate_valid {
        inertial_rate = inertial_rate_raw as i32 * 32;
        if inertial_rate_sign {
            inertial_rate -= 16384;
        }
        if (-6000..=6000).contains(&inertial_rate) {
            score += 11;
        } else {
            return 0;
        }
    } else if inertial_rate_raw == 0 && !inertial_rate_sign {
        score += 1;
    } else {
        return 0;
    }

    // small penalty for inconsistent data; IAS vs Mach at a given altitude
    // would catch more, but needs an altitude we don't have here.
    if baro_rate_valid && inertial_rate_valid && (baro_rate - inertial_rate).abs() > 2000 {
        score -= 12;
    }

    score
}

pub fn store(mb: &[u8; 7], out: &mut CommBFields) {
    out.commb_format = CommBFormat::HeadingSpeed;

    let heading_raw = getbits(mb, 3, 12);
    let heading_sign = getbit(mb, 2) != 0;
    let mut heading = heading_raw as f64 * 90.0 / 512.0;
    if heading_sign {
        heading += 180.0;
    }

    let ias_raw = getbits(mb, 14, 23);
    let mach_raw = getbits(mb, 25, 34);
    let mach = mach_raw as f64 * 2.048 / 512.0;

    let baro_rate_valid = getbit(mb, 35) != 0;
    let baro_rate_raw = getbits(mb, 37, 45);
    let baro_rate_sign = getbit(mb, 36) != 0;
    let mut baro_rate = baro_rate_raw as i32 * 32;
    if baro_rate_sign {
        baro_rate -= 16384;
    }

    let inertial_rate_valid = getbit(mb, 46) != 0;
    let inertial_rate_raw = getbits(mb, 48, 56);
    let inertial_rate_sign = getbit(mb, 47) != 0;
    let mut inertial_rate = inertial_rate_raw as i32 * 32;
    if inertial_rate_sign {
        inertial_rate -= 16384;
    }

    let mut kin = Kinematics::default();
    kin.heading_valid = true;
    kin.heading = Some(heading);
    kin.heading_type = Some(HeadingType::Magnetic);

    kin.ias_valid = true;
    kin.ias = Some(ias_raw as f64);

    kin.mach_valid = true;
    kin.mach = Some(mach);

    if baro_rate_valid {
        kin.baro_rate_valid = true;
        kin.baro_rate = Some(baro_rate as f64);
    }

    if inertial_rate_valid {
        kin.geom_rate_valid = true;
        kin.geom_rate = Some(inertial_rate as f64);
    }

    out.kinematics = kin;
}
