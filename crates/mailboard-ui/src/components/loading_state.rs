use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct LoadingStateProps {
  /// `None` hides the loading surface.
  pub message: Option<String>
}

#[function_component(LoadingState)]
pub fn loading_state(
  props: &LoadingStateProps
) -> Html {
  let hidden = props
    .message
    .is_none()
    .then_some("hidden");
  let message = props
    .message
    .clone()
    .unwrap_or_default();

  html! {
      <div id="loading-state" class={classes!("loading-state", hidden)}>
          <div class="spinner"></div>
          <p id="loading-message">{ message }</p>
      </div>
  }
}
