//! Plan Sharing
//!
//! The compact plan-in-URL micro-format plus the share-or-copy action.
//! Format: `"0:5,2:12"` — Friday index `:` fish fry id, comma-joined,
//! dates without an entry omitted. Lossy and human-inspectable by
//! design; round-trip fidelity is only guaranteed for encoder output.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::dates::Friday;
use crate::storage::PlanMap;

/// Query parameter carrying a shared plan.
pub const PLAN_PARAM: &str = "plan";

pub fn encode_plan(plan: &PlanMap, fridays: &[Friday]) -> String {
    fridays
        .iter()
        .enumerate()
        .filter_map(|(index, friday)| {
            plan.get(friday.value).map(|id| format!("{index}:{id}"))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Malformed tokens (non-numeric halves, out-of-range Friday index) are
/// skipped silently; well-formed tokens still apply.
pub fn decode_plan(encoded: &str, fridays: &[Friday]) -> PlanMap {
    let mut plan = PlanMap::new();
    for token in encoded.split(',') {
        let Some((index_raw, id_raw)) = token.split_once(':') else {
            continue;
        };
        let (Ok(index), Ok(id)) = (index_raw.parse::<usize>(), id_raw.parse::<u32>()) else {
            continue;
        };
        if let Some(friday) = fridays.get(index) {
            plan.insert(friday.value.to_string(), id);
        }
    }
    plan
}

/// The `?plan=` value from the current page URL, if any.
pub fn plan_param_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(PLAN_PARAM).filter(|raw| !raw.is_empty())
}

/// Writes the encoded plan into the current URL (replaceState, no
/// navigation) and returns the resulting shareable URL.
pub fn write_plan_to_url(encoded: &str) -> Option<String> {
    let window = web_sys::window()?;
    let href = window.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().set(PLAN_PARAM, encoded);
    let share_url = url.href();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&share_url));
    }
    Some(share_url)
}

/// Native share when available, clipboard copy + alert otherwise.
/// Denial or unavailability surfaces as a blocking alert, no retry.
pub async fn share_or_copy(title: &str, text: &str, url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    if js_sys::Reflect::has(&navigator, &JsValue::from_str("share")).unwrap_or(false) {
        let data = web_sys::ShareData::new();
        data.set_title(title);
        data.set_text(text);
        data.set_url(url);
        if JsFuture::from(navigator.share_with_data(&data)).await.is_err() {
            let _ = window.alert_with_message("Sharing was cancelled or failed.");
        }
        return;
    }

    match JsFuture::from(navigator.clipboard().write_text(url)).await {
        Ok(_) => {
            let _ = window.alert_with_message("Plan link copied to clipboard!");
        }
        Err(_) => {
            let _ = window.alert_with_message("Could not copy the plan link.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::LENTEN_FRIDAYS;

    #[test]
    fn test_encode_skips_unplanned_fridays() {
        let mut plan = PlanMap::new();
        plan.insert("2026-02-20".to_string(), 5);
        plan.insert("2026-03-06".to_string(), 12);

        assert_eq!(encode_plan(&plan, &LENTEN_FRIDAYS), "0:5,2:12");
    }

    #[test]
    fn test_empty_plan_encodes_to_empty_string() {
        assert_eq!(encode_plan(&PlanMap::new(), &LENTEN_FRIDAYS), "");
    }

    #[test]
    fn test_round_trip_for_any_friday_subset() {
        let mut plan = PlanMap::new();
        plan.insert("2026-02-27".to_string(), 1);
        plan.insert("2026-03-20".to_string(), 9999);
        plan.insert("2026-04-03".to_string(), 42);

        let encoded = encode_plan(&plan, &LENTEN_FRIDAYS);
        assert_eq!(decode_plan(&encoded, &LENTEN_FRIDAYS), plan);
    }

    #[test]
    fn test_out_of_range_index_yields_empty_plan() {
        assert!(decode_plan("99:5", &LENTEN_FRIDAYS).is_empty());
    }

    #[test]
    fn test_malformed_tokens_are_skipped_individually() {
        let decoded = decode_plan("0:5,junk,:,7,abc:def,3:9", &LENTEN_FRIDAYS);

        let mut expected = PlanMap::new();
        expected.insert("2026-02-20".to_string(), 5);
        expected.insert("2026-03-13".to_string(), 9);
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_later_token_wins_for_duplicate_index() {
        let decoded = decode_plan("1:5,1:6", &LENTEN_FRIDAYS);
        assert_eq!(decoded.get("2026-02-27"), Some(&6));
        assert_eq!(decoded.len(), 1);
    }
}
