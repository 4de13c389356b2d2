use bizboard_core::models::CalendarEvent;
use bizboard_core::{ListQuery, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for CalendarEvent {
    const PATH: &'static str = "calendar-events";
    const NAME: &'static str = "calendar event";
    type Input = CalendarEvent;
}

impl ResourceClient<'_, CalendarEvent> {
    /// Events starting within `[from, to]` (ISO dates, passed through).
    pub async fn between(&self, from: &str, to: &str, query: &ListQuery) -> Result<Vec<CalendarEvent>> {
        let query = query.clone().filter("start", from).filter("end", to);
        self.list(&query).await
    }
}
