use mailboard_core::TaskDetails;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub details:           Option<TaskDetails>,
  pub on_close:          Callback<MouseEvent>,
  /// Emits whether the click target was
  /// the backdrop itself.
  pub on_backdrop_click: Callback<bool>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let hidden = props
    .details
    .is_none()
    .then_some("hidden");
  let (from, subject, detailed_tasks) =
    match &props.details {
      | Some(details) => (
        details.from.clone(),
        details.subject.clone(),
        details.detailed_tasks.clone()
      ),
      | None => Default::default()
    };

  let on_backdrop_click = {
    let on_backdrop_click =
      props.on_backdrop_click.clone();
    Callback::from(
      move |e: MouseEvent| {
        on_backdrop_click.emit(
          e.target() == e.current_target()
        )
      }
    )
  };

  html! {
      <div id="task-modal" class={classes!("modal-backdrop", hidden)} onclick={on_backdrop_click}>
          <div class="modal-content">
              <button class="close-button" type="button" onclick={props.on_close.clone()}>{ "×" }</button>
              <h2>{ "Task Details" }</h2>
              <p><strong>{ "From: " }</strong><span id="modal-from">{ from }</span></p>
              <p><strong>{ "Subject: " }</strong><span id="modal-subject">{ subject }</span></p>
              <p id="modal-detailed-tasks">{ detailed_tasks }</p>
          </div>
      </div>
  }
}
