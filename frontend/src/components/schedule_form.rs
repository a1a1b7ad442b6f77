use shared::{DoseField, Meal, Timing};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::repeat_controls::RepeatControls;
use crate::hooks::use_dose_schedule::{use_dose_schedule, UseDoseScheduleResult};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ScheduleFormProps {
    pub api_client: ApiClient,
}

#[function_component(ScheduleFormSection)]
pub fn schedule_form_section(props: &ScheduleFormProps) -> Html {
    let UseDoseScheduleResult {
        form,
        saving,
        field_refs,
        actions,
    } = use_dose_schedule(&props.api_client);

    let on_save = {
        let save = actions.save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            save.emit(());
        })
    };

    let dose_row = |field: DoseField| {
        let on_change = {
            let on_time_change = actions.on_time_change.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_time_change.emit((field, input.value()));
            })
        };
        let on_edit = {
            let edit_single = actions.edit_single.clone();
            Callback::from(move |_: MouseEvent| edit_single.emit(field))
        };
        let on_delete = {
            let delete_single = actions.delete_single.clone();
            Callback::from(move |_: MouseEvent| delete_single.emit(field))
        };
        let value = form.time(field).to_string();

        html! {
            <div class="dose-row">
                <label for={field.element_id()}>{field.timing.label()}</label>
                <input
                    type="time"
                    id={field.element_id()}
                    ref={field_refs.get(field).clone()}
                    value={value}
                    onchange={on_change}
                />
                <button type="button" class="dose-edit-btn" title="Edit dose time" onclick={on_edit}>{"✏️"}</button>
                <button type="button" class="dose-delete-btn" title="Delete dose time" onclick={on_delete}>{"🗑️"}</button>
            </div>
        }
    };

    html! {
        <section id="schedule" class="schedule-section">
            <h2>{"Dose Schedule"}</h2>
            <form class="schedule-form" onsubmit={on_save}>
                <div class="meal-grid">
                    {for Meal::ALL.iter().map(|meal| html! {
                        <div class="meal-card" key={meal.as_str()}>
                            <h3>{format!("{} {}", meal.icon(), meal.label())}</h3>
                            {for Timing::ALL.iter().map(|timing| dose_row(DoseField::new(*meal, *timing)))}
                        </div>
                    })}
                </div>

                <RepeatControls
                    preset={form.repeat_preset.clone()}
                    custom_number={form.custom_number.clone()}
                    custom_unit={form.custom_unit.clone()}
                    custom_visible={form.custom_controls_visible()}
                    repeat_days={form.repeat_days()}
                    on_preset_change={actions.on_preset_change.clone()}
                    on_custom_number_change={actions.on_custom_number_change.clone()}
                    on_custom_unit_change={actions.on_custom_unit_change.clone()}
                />

                <button type="submit" class="save-btn" disabled={saving}>
                    {if saving { "Saving..." } else { "Save Dose Times" }}
                </button>
            </form>
        </section>
    }
}
