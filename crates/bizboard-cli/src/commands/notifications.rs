//! `bizboard notifications`.

use std::time::Duration;

use anyhow::Result;

use bizboard_client::ApiClient;
use bizboard_core::ListQuery;
use bizboard_widgets::poller::feed;
use bizboard_widgets::{NotificationPoller, WidgetContext, WidgetState};

use crate::render;

fn print_state(state: &WidgetState) {
    match state {
        WidgetState::Ready(chart) => print!("{}", render::table(chart)),
        WidgetState::Empty => println!("No unread notifications"),
        WidgetState::Error(message) => eprintln!("Polling failed: {message}"),
        WidgetState::Loading => {}
    }
}

/// Print the unread feed every `interval` seconds until Ctrl-C, or once.
pub async fn run(client: ApiClient, interval: u64, once: bool) -> Result<()> {
    if once {
        let unread = client.notifications().unread(&ListQuery::new()).await?;
        let state = feed(&unread).map_or(WidgetState::Empty, WidgetState::Ready);
        print_state(&state);
        return Ok(());
    }

    let poller = NotificationPoller::start(
        WidgetContext::new(client),
        Duration::from_secs(interval.max(1)),
    );
    let mut rx = poller.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                print_state(&state);
            }
        }
    }

    poller.shutdown().await;
    Ok(())
}
