use shared::{RepeatUnit, CUSTOM_PRESET};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Preset repeat intervals as (value, label)
const PRESETS: [(&str, &str); 5] = [
    ("0", "Does not repeat"),
    ("1", "Every day"),
    ("7", "Every week"),
    ("14", "Every 2 weeks"),
    ("30", "Every month"),
];

#[derive(Properties, PartialEq)]
pub struct RepeatControlsProps {
    pub preset: String,
    pub custom_number: String,
    pub custom_unit: String,
    pub custom_visible: bool,
    pub repeat_days: u32,
    pub on_preset_change: Callback<String>,
    pub on_custom_number_change: Callback<String>,
    pub on_custom_unit_change: Callback<String>,
}

#[function_component(RepeatControls)]
pub fn repeat_controls(props: &RepeatControlsProps) -> Html {
    let on_preset = {
        let cb = props.on_preset_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    let on_number = {
        let cb = props.on_custom_number_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_unit = {
        let cb = props.on_custom_unit_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    let custom_style = if props.custom_visible {
        "display: inline-block;"
    } else {
        "display: none;"
    };

    html! {
        <div class="repeat-controls">
            <label for="repeatPreset">{"Repeat"}</label>
            <select id="repeatPreset" onchange={on_preset}>
                {for PRESETS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.preset == *value}>{*label}</option>
                })}
                <option value={CUSTOM_PRESET} selected={props.preset == CUSTOM_PRESET}>{"Custom..."}</option>
            </select>

            <span id="customRepeatControls" style={custom_style}>
                <input
                    type="number"
                    id="customRepeatNumber"
                    min="1"
                    placeholder="Amount"
                    value={props.custom_number.clone()}
                    oninput={on_number}
                />
                <select id="customRepeatUnit" onchange={on_unit}>
                    {for RepeatUnit::ALL.iter().map(|unit| html! {
                        <option value={unit.as_str()} selected={props.custom_unit == unit.as_str()}>
                            {unit.as_str()}
                        </option>
                    })}
                </select>
            </span>

            <span class="repeat-summary">
                {if props.repeat_days == 0 {
                    "No repeat".to_string()
                } else {
                    format!("Repeats every {} day(s)", props.repeat_days)
                }}
            </span>
        </div>
    }
}
