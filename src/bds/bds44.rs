use crate::bits::{getbit, getbits};
use crate::types::{CommBFields, CommBFormat, Meteorology, MrarSource, Turbulence};

/**
 * ## Meteorological Routine Air Report (BDS 4,4)
 *
 * The source field (bits 1-4) gates the candidate outright: an invalid or
 * reserved source vetoes. Wind and static air temperature must both be
 * present — every such report seen in practice carries at least those
 * two — after which pressure, turbulence and humidity are each optional
 * but must be internally consistent (no data in a field whose valid flag
 * is unset).
 *
 * ICAO 9871's stated bit layout for static air temperature has one bit
 * too many for its claimed range; the layout below (status / sign /
 * 9-bit magnitude) is the one that actually matches observed data.
 *
 * | Field | Bits |
 * |---|---|
 * | Wind valid | 5 |
 * | Wind speed raw | 6..14 (kt) |
 * | Wind direction raw | 15..23 (×180/256 deg) |
 * | SAT valid | 24 |
 * | SAT sign | 25 |
 * | SAT raw | 26..34 (×0.25 °C, sign subtracts 128) |
 * | ASP valid | 35 |
 * | ASP raw | 36..46 (hPa) |
 * | Turbulence valid | 47 |
 * | Turbulence raw | 48..49 |
 * | Humidity valid | 50 |
 * | Humidity raw | 51..56 (×100/64 %) |
 *
 * Scoring: wind +19 in range (speed ≤ 250 kt), SAT +11 in range (−80..60
 * °C), ASP +12 in range (25..1100 hPa), turbulence +3, humidity +7.
 *
 * A specific GICB Common Usage Report bit pattern collides with a
 * DME/DME-sourced MRAR with only wind and temperature populated; that
 * exact combination is clamped to a token positive score so it only wins
 * when nothing else claims the message.
 */

pub fn score(mb: &[u8; 7]) -> i32 {
    let source_raw = getbits(mb, 1, 4);

    let wind_valid = getbit(mb, 5) != 0;
    let windspeed_raw = getbits(mb, 6, 14);

    let sat_valid = getbit(mb, 24) != 0;
    let sat_sign = getbit(mb, 25) != 0;
    let sat_raw = getbits(mb, 26, 34);

    let asp_valid = getbit(mb, 35) != 0;
    let asp_raw = getbits(mb, 36, 46);

    let turbulence_valid = getbit(mb, 47) != 0;
    let turbulence_raw = getbits(mb, 48, 49);

    let humidity_valid = getbit(mb, 50) != 0;
    let humidity_raw = getbits(mb, 51, 56);

    let Some(source) = MrarSource::from_raw(source_raw) else {
        return 0;
    };

    if !wind_valid || !sat_valid {
        return 0;
    }

    if !asp_valid && asp_raw != 0 {
        return 0;
    }

    if !turbulence_valid && turbulence_raw != 0 {
        return 0;
    }

    if !humidity_valid && humidity_raw != 0 {
        return 0;
    }

    let mut score = 0;

    let wind_speed = windspeed_raw as f64;
    if wind_valid {
        if windspeed_raw == 0 {
            score += 2;
        } else if wind_speed <= 250.0 {
            score += 19;
        } else {
            return 0;
        }
    } else {
        score += 1;
    }

    let mut sat = sat_raw as f64 * 0.25;
    if sat_sign {
        sat -= 128.0;
    }
    if sat_valid {
        if sat == 0.0 {
            score += 2;
        } else if (-80.0..=60.0).contains(&sat) {
            score += 11;
        } else {
            return 0;
        }
    } else {
        score += 1;
    }

    let asp = asp_raw as f64;
    if asp_valid {
        if (25.0..=1100.0).contains(&asp) {
            score += 12;
        } else {
            return 0;
        }
    } else {
        score += 1;
    }

    if turbulence_valid {
        score += 3;
    } else {
        score += 1;
    }

    if humidity_valid {
        score += 7;
    } else {
        score += 1;
    }

    if source.is_dme_dme() && wind_valid && sat_valid && score > 0 {
        // a BDS1,7 GICB report with only ES-status/type-and-id/velocity
        // capability bits set is bit-for-bit the same pattern; only win
        // with it as a last resort.
        score = 1;
    }

    score
}

pub fn store(mb: &[u8; 7], out: &mut CommBFields) {
    out.commb_format = CommBFormat::Mrar;

    let source_raw = getbits(mb, 1, 4);

    let wind_valid = getbit(mb, 5) != 0;
    let windspeed_raw = getbits(mb, 6, 14);
    let winddir_raw = getbits(mb, 15, 23);

    let sat_valid = getbit(mb, 24) != 0;
    let sat_sign = getbit(mb, 25) != 0;
    let sat_raw = getbits(mb, 26, 34);

    let asp_valid = getbit(mb, 35) != 0;
    let asp_raw = getbits(mb, 36, 46);

    let turbulence_valid = getbit(mb, 47) != 0;
    let turbulence_raw = getbits(mb, 48, 49);

    let humidity_valid = getbit(mb, 50) != 0;
    let humidity_raw = getbits(mb, 51, 56);

    let mut met = Meteorology::default();
    met.mrar_source_valid = true;
    met.mrar_source = MrarSource::from_raw(source_raw);

    if wind_valid {
        met.wind_valid = true;
        met.wind_speed = Some(windspeed_raw as f64);
        met.wind_direction = Some(winddir_raw as f64 * (180.0 / 256.0));
    }

    if sat_valid {
        let mut sat = sat_raw as f64 * 0.25;
        if sat_sign {
            sat -= 128.0;
        }
        met.temperature_valid = true;
        met.temperature = Some(sat);
    }

    if asp_valid {
        met.pressure_valid = true;
        met.pressure = Some(asp_raw as f64);
    }

    if turbulence_valid {
        met.turbulence_valid = true;
        met.turbulence = Some(Turbulence::from(turbulence_raw));
    }

    if humidity_valid {
        met.humidity_valid = true;
        met.humidity = Some(humidity_raw as f64 * (100.0 / 64.0));
    }

    out.meteorology = met;
}
