use mailboard_core::TaskItem;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub items:           Vec<TaskItem>,
  pub on_toggle:
    Callback<(usize, bool)>,
  pub on_view_details: Callback<usize>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <>
          {
              for props.items.iter().cloned().map(|item| {
                  let key = item.index;
                  html! {
                  <TaskListRow
                      key={key}
                      item={item}
                      on_toggle={props.on_toggle.clone()}
                      on_view_details={props.on_view_details.clone()}
                  />
                  }
              })
          }
      </>
  }
}
