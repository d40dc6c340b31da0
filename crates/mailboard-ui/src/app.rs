use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use gloo::timers::callback::Interval;
use mailboard_core::{
  Board,
  BoardConfig,
  FetchError,
  Results
};
use mailboard_shared::TaskRecord;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  Reducible,
  UseReducerDispatcher,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer
};

use crate::api::fetch_tasks;
use crate::components::{
  LoadingState,
  TaskList,
  TaskModal
};

const BOARD_CONFIG_TOML: &str =
  include_str!("../assets/board.toml");

pub enum BoardAction {
  BeginFetch,
  Tick,
  Settle(
    Result<Vec<TaskRecord>, FetchError>
  ),
  Toggle {
    index:   usize,
    checked: bool
  },
  OpenDetails(usize),
  CloseDetails,
  BackdropClick {
    target_is_backdrop: bool
  }
}

#[derive(Clone, PartialEq)]
struct BoardStore {
  board: Board
}

impl Reducible for BoardStore {
  type Action = BoardAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut board = self.board.clone();
    match action {
      | BoardAction::BeginFetch => {
        if let Err(error) =
          board.begin_fetch()
        {
          tracing::warn!(%error, "begin fetch refused");
          return self;
        }
      }
      | BoardAction::Tick => {
        if !board.is_fetching() {
          return self;
        }
        board.tick();
      }
      | BoardAction::Settle(outcome) => {
        board.settle(outcome)
      }
      | BoardAction::Toggle {
        index,
        checked
      } => {
        board
          .toggle_completed(index, checked)
      }
      | BoardAction::OpenDetails(
        index
      ) => board.open_details(index),
      | BoardAction::CloseDetails => {
        board.close_details()
      }
      | BoardAction::BackdropClick {
        target_is_backdrop
      } => {
        if !board
          .backdrop_click(target_is_backdrop)
        {
          return self;
        }
      }
    }
    Rc::new(Self { board })
  }
}

type SessionSlot =
  Rc<RefCell<Option<Interval>>>;

/// Owns the message-cycling timer for one
/// request. Dropping it cancels the timer,
/// so every exit path of the request's
/// future tears the timer down.
struct LoadingSession {
  slot: SessionSlot
}

impl LoadingSession {
  /// Returns `None` while another session
  /// still holds the slot.
  fn begin(
    slot: SessionSlot,
    dispatcher: UseReducerDispatcher<
      BoardStore,
    >,
    period_ms: u32
  ) -> Option<Self> {
    if slot.borrow().is_some() {
      return None;
    }
    let interval =
      Interval::new(period_ms, move || {
        dispatcher
          .dispatch(BoardAction::Tick)
      });
    *slot.borrow_mut() = Some(interval);
    Some(Self { slot })
  }
}

impl Drop for LoadingSession {
  fn drop(&mut self) {
    if let Some(interval) =
      self.slot.borrow_mut().take()
    {
      drop(interval);
      tracing::debug!(
        "loading timer cancelled"
      );
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: BoardConfig
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let store = {
    let config = props.config.clone();
    use_reducer(move || BoardStore {
      board: Board::new(config)
    })
  };
  let session_slot =
    use_mut_ref(|| None::<Interval>);

  {
    let session_slot =
      session_slot.clone();
    use_effect_with((), move |_| {
      move || {
        session_slot.borrow_mut().take();
      }
    });
  }

  let on_fetch_click = {
    let store = store.clone();
    let session_slot =
      session_slot.clone();
    Callback::from(
      move |_: MouseEvent| {
        let config =
          store.board.config().clone();
        let Some(session) =
          LoadingSession::begin(
            session_slot.clone(),
            store.dispatcher(),
            config.message_interval_ms
          )
        else {
          ui_debug(
            "button.fetch.click",
            "ignored while a fetch is in flight"
          );
          return;
        };

        ui_debug(
          "button.fetch.click",
          &config.endpoint
        );
        store.dispatch(
          BoardAction::BeginFetch
        );

        let dispatcher =
          store.dispatcher();
        wasm_bindgen_futures::spawn_local(
          async move {
            let outcome = fetch_tasks(
              &config.endpoint
            )
            .await;
            match &outcome {
              | Ok(tasks) => {
                tracing::info!(
                  count = tasks.len(),
                  "fetched tasks"
                )
              }
              | Err(error) => {
                tracing::error!(%error, "fetch-emails failed")
              }
            }
            drop(session);
            dispatcher.dispatch(
              BoardAction::Settle(outcome)
            );
          }
        );
      }
    )
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(
      move |(index, checked): (
        usize,
        bool
      )| {
        store.dispatch(
          BoardAction::Toggle {
            index,
            checked
          }
        )
      }
    )
  };

  let on_view_details = {
    let store = store.clone();
    Callback::from(move |index: usize| {
      ui_debug(
        "button.view_details.click",
        &index.to_string()
      );
      store.dispatch(
        BoardAction::OpenDetails(index)
      )
    })
  };

  let on_modal_close_click = {
    let store = store.clone();
    Callback::from(
      move |_: MouseEvent| {
        store.dispatch(
          BoardAction::CloseDetails
        )
      }
    )
  };

  let on_backdrop_click = {
    let store = store.clone();
    Callback::from(
      move |target_is_backdrop: bool| {
        store.dispatch(
          BoardAction::BackdropClick {
            target_is_backdrop
          }
        )
      }
    )
  };

  let board = &store.board;
  let results = match board.results() {
    | Results::Empty => html! {},
    | Results::Error(message) => html! {
        <p class="error">{ message }</p>
    },
    | Results::Tasks(items) => html! {
        <TaskList
            items={items.clone()}
            on_toggle={on_toggle}
            on_view_details={on_view_details}
        />
    }
  };

  html! {
      <main class="board">
          <header class="board-header">
              <h1>{ "Mail Tasks" }</h1>
              <button
                  id="fetch-emails-button"
                  class="btn"
                  type="button"
                  disabled={board.trigger_disabled()}
                  onclick={on_fetch_click}
              >
                  { board.trigger_label() }
              </button>
          </header>
          <LoadingState message={board.loading_message().map(str::to_string)} />
          <div id="results">{ results }</div>
          <TaskModal
              details={board.modal().details().cloned()}
              on_close={on_modal_close_click}
              on_backdrop_click={on_backdrop_click}
          />
      </main>
  }
}

pub fn load_board_config() -> BoardConfig {
  match BoardConfig::from_toml(
    BOARD_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        endpoint = %config.endpoint,
        interval_ms = config.message_interval_ms,
        "loaded board config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing board config; using defaults");
      BoardConfig::default()
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
