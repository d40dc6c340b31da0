use mailboard_core::TaskItem;
use web_sys::{
  Event,
  HtmlInputElement
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub item:            TaskItem,
  pub on_toggle:
    Callback<(usize, bool)>,
  pub on_view_details: Callback<usize>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let index = props.item.index;

  let on_change = {
    let on_toggle =
      props.on_toggle.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_toggle
        .emit((index, input.checked()));
    })
  };
  let on_view_details = {
    let on_view_details =
      props.on_view_details.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_view_details.emit(index)
      }
    )
  };

  html! {
      <div class={props.item.container_class()} data-index={index.to_string()}>
          <label>
              <input
                  type="checkbox"
                  class="task-checkbox"
                  checked={props.item.is_completed()}
                  onchange={on_change}
              />
              <div>
                  <p class="deadline">{ &props.item.deadline }</p>
                  <p class={props.item.summary_class()}>{ &props.item.summary }</p>
              </div>
          </label>
          <button class="view-details-button" type="button" onclick={on_view_details}>
              { "View Details" }
          </button>
      </div>
  }
}
