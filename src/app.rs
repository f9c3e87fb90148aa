use tracing::{debug, error, info};

use crate::capabilities::{fetch_records, Capabilities};
use crate::controller::Outcome;
use crate::event::Event;
use crate::model::Model;
use crate::view::{project, ViewModel};

#[derive(Default)]
pub struct App;

impl App {
    fn settle(outcome: Outcome, event_name: &str, model: &mut Model, caps: &Capabilities) {
        match outcome {
            Outcome::Applied { scroll } => {
                if scroll {
                    model.scroll_generation = model.scroll_generation.wrapping_add(1);
                }
                caps.render();
            }
            Outcome::Ignored(reason) => {
                debug!(event = event_name, ?reason, "intent ignored");
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();
        debug!(event = event_name, user = event.is_user_initiated(), "update");

        let outcome = match event {
            Event::Start => {
                let outcome = model.controller.begin_load();
                if outcome.is_applied() {
                    fetch_records(&caps.http, &model.config.endpoint);
                }
                outcome
            }

            Event::LoadSucceeded { records } => {
                let count = records.len();
                let outcome = model.controller.on_load_succeeded(records);
                if outcome.is_applied() {
                    let page = model.controller.page_state();
                    info!(
                        records = count,
                        total_pages = page.total_pages,
                        "dataset loaded"
                    );
                }
                outcome
            }

            Event::LoadFailed { error } => {
                error!(code = error.code(), %error, "dataset load failed");
                model.controller.on_load_failed(error)
            }

            Event::SelectViewMode { mode } => model.controller.select_view_mode(mode),

            Event::SelectRegion { region } => model.controller.select_region(region),

            Event::SelectSubRegion { sub_region } => {
                model.controller.select_sub_region(sub_region)
            }

            Event::SelectPage { page } => model.controller.select_page(page),
        };

        Self::settle(outcome, event_name, model, caps);
    }

    fn view(&self, model: &Model) -> ViewModel {
        project(
            &model.controller,
            model.config.description_preview_len,
            model.scroll_generation,
        )
    }
}
