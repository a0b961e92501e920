//! Interactive generator view.

mod input;
mod view;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::info;
use zeroize::Zeroizing;

use passgen::Controller;
use passgen::pass::RandomGenerator;

use crate::cli::{Args, copy_to_clipboard};
use crate::terminal::RawModeGuard;

use input::Action;

/// Run the interactive view until the user accepts a password or quits.
pub async fn run(args: Args) -> anyhow::Result<()> {
    let config = args.config()?;

    let (accepted_tx, mut accepted_rx) = mpsc::unbounded_channel::<Zeroizing<String>>();
    let (mut controller, mut failures) =
        Controller::new(RandomGenerator::new(), config, move |password: &str| {
            let _ = accepted_tx.send(Zeroizing::new(password.to_string()));
        });
    let mut changes = controller.subscribe();
    let mut events = EventStream::new();

    let mut guard = RawModeGuard::new()?;
    let mut notice: Option<&str> = None;
    let mut accepted: Option<Zeroizing<String>> = None;

    loop {
        view::draw(
            controller.config(),
            &controller.password(),
            controller.status(),
            notice.take(),
        );

        tokio::select! {
            Some(err) = failures.recv() => {
                guard.disable();
                return Err(err.into());
            }
            Ok(()) = changes.changed() => {}
            Some(password) = accepted_rx.recv() => {
                if password.is_empty() {
                    notice = Some("Nothing to use yet: no password has been generated.");
                } else {
                    accepted = Some(password);
                    break;
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match input::action(key, controller.config()) {
                    Action::Intent(intent) => controller.apply(intent),
                    Action::Quit => break,
                    Action::Ignore => {}
                },
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    guard.disable();
                    return Err(err.into());
                }
                None => break,
            },
        }
    }

    guard.disable();

    if let Some(password) = accepted {
        match copy_to_clipboard(&password) {
            Ok(()) => {
                info!("accepted password copied to clipboard");
                println!("*** -COPIED TO CLIPBOARD- ***");
            }
            Err(err) => {
                eprintln!("{err}; printing instead");
                println!("{}", password.as_str());
            }
        }
    }
    Ok(())
}
