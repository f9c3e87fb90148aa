mod http;

pub use self::http::{decode_records, fetch_records};

pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}

impl Capabilities {
    /// Hands the current view off to the shell.
    pub fn render(&self) {
        self.render.render();
    }
}
