use crate::input::Input;
use wasm_bindgen::prelude::*;

/// Takes an `Input` object, returns the `MeetingSlots` found for it.
/// Throws the validation message when the events are malformed.
#[wasm_bindgen(js_name = findMeetingTimes)]
pub fn find_meeting_times(input: JsValue) -> Result<JsValue, JsValue> {
    let input: Input = serde_wasm_bindgen::from_value(input)?;

    let slots = input
        .find_meeting_times()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&slots)?)
}
