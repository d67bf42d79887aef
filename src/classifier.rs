use crate::bds;
use crate::types::{CommBFormat, CommBFrame};

/**
 * ## Classifier
 *
 * Comm-B payloads carry no self-identifying BDS tag in the general case,
 * so the register is recovered by scoring every known candidate and
 * taking the unique best. Scoring is a separate, pure pass from storing:
 * every candidate is run once with no side effects to find the winner,
 * then (if there is one) re-run once more to write its fields.
 */

type ScoreFn = fn(&CommBFrame) -> i32;

/// Runs the classifier over `frame`, writing `frame.fields` in place.
///
/// Returns the same tag that ends up in `frame.fields.commb_format`, so
/// callers that only need the classification don't have to reach back
/// into the frame.
pub fn classify(frame: &mut CommBFrame) -> CommBFormat {
    if frame.dr != 0 || frame.um != 0 || frame.corrected_bits > 0 {
        frame.fields.commb_format = CommBFormat::NotDecoded;
        return CommBFormat::NotDecoded;
    }

    let candidates: &[(ScoreFn, &str)] = &[
        (|f| bds::empty::score(&f.mb), "empty"),
        (|f| bds::bds10::score(&f.mb), "bds10"),
        (|f| bds::bds17::score(&f.mb), "bds17"),
        (|f| bds::bds20::score(&f.mb), "bds20"),
        (|f| bds::bds30::score(&f.mb), "bds30"),
        (|f| bds::bds40::score(&f.mb), "bds40"),
        (|f| bds::bds50::score(&f.mb), "bds50"),
        (|f| bds::bds60::score(&f.mb), "bds60"),
        (|f| bds::bds44::score(&f.mb), "bds44"),
        (bds::bds05::score, "bds05"),
    ];

    let mut best_score = 0;
    let mut best: Option<&str> = None;
    let mut ambiguous = false;

    for &(score_fn, name) in candidates {
        let score = score_fn(frame);
        if score <= 0 {
            continue;
        }
        match score.cmp(&best_score) {
            std::cmp::Ordering::Greater => {
                best_score = score;
                best = Some(name);
                ambiguous = false;
            }
            std::cmp::Ordering::Equal => {
                ambiguous = true;
            }
            std::cmp::Ordering::Less => {}
        }
    }

    let Some(winner) = best else {
        frame.fields.commb_format = CommBFormat::Unknown;
        return CommBFormat::Unknown;
    };

    if ambiguous {
        frame.fields.commb_format = CommBFormat::Ambiguous;
        return CommBFormat::Ambiguous;
    }

    match winner {
        "empty" => bds::empty::store(&frame.mb, &mut frame.fields),
        "bds10" => bds::bds10::store(&frame.mb, &mut frame.fields),
        "bds17" => bds::bds17::store(&frame.mb, &mut frame.fields),
        "bds20" => bds::bds20::store(&frame.mb, &mut frame.fields),
        "bds30" => bds::bds30::store(&frame.mb, &mut frame.fields),
        "bds40" => bds::bds40::store(&frame.mb, &mut frame.fields),
        "bds50" => bds::bds50::store(&frame.mb, &mut frame.fields),
        "bds60" => bds::bds60::store(&frame.mb, &mut frame.fields),
        "bds44" => bds::bds44::store(&frame.mb, &mut frame.fields),
        "bds05" => bds::bds05::store(&mut frame.fields),
        _ => unreachable!("candidate list and dispatch must stay in sync"),
    }

    frame.fields.commb_format
}
