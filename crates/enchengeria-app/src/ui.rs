use std::io::{BufRead, Write};
use std::sync::Arc;

use enchengeria_config::Config;
use enchengeria_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::command::{HELP, Input, parse_input};
use crate::render::Renderer;

/// Read stdin on a plain thread so a pending read never holds up runtime
/// shutdown. The channel closes at end of input.
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(64);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin reader stopping");
    });

    rx.to_async()
}

/// Turns typed lines into UI events. Only ever sends, so it can wait on a
/// full channel without stalling the renderer.
pub async fn input_loop(
    lines: AsyncReceiver<String>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
    interactive: bool,
) -> anyhow::Result<()> {
    let show_word_of_day = config.read().await.ui.show_word_of_day;

    if interactive {
        println!("Enchengeria: Ekegusii / Kiswahili / English. Type /help for commands.");
    }

    if show_word_of_day {
        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::WordOfDay)).await?;
    } else {
        prompt(interactive);
    }

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => line,
        };

        let event = match line {
            Ok(line) => match parse_input(&line) {
                Ok(Input::Event(event)) => event,
                Ok(Input::Help) => {
                    println!("{HELP}");
                    prompt(interactive);
                    continue;
                }
                Ok(Input::Empty) => {
                    prompt(interactive);
                    continue;
                }
                Err(message) => {
                    println!("{message}");
                    prompt(interactive);
                    continue;
                }
            },
            // End of input: the event loop finishes what is queued, then stops
            Err(_) => UiEvent::Close,
        };

        let closing = matches!(event, UiEvent::Close);
        tokio::select! {
            _ = cancel.cancelled() => break,
            sent = ui_to_app_tx.send(AppEvent::UiEvent(event)) => sent?,
        }

        if closing {
            break;
        }
    }

    tracing::debug!("Input loop stopped");
    Ok(())
}

/// Renders whatever the event loop sends back until it reports shutdown
pub async fn ui_loop<W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
    mut out: W,
    interactive: bool,
) -> anyhow::Result<()>
where
    W: Write + Send + 'static,
{
    let renderer = Renderer::new(config.read().await.ui.max_results);

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("UI loop cancelled");
                break;
            }
            event = app_to_ui_rx.recv() => event?,
        };

        if matches!(event, AppEvent::Shutdown) {
            // Stops the input loop as well
            cancel.cancel();
            break;
        }

        renderer.render(&mut out, &event)?;
        if interactive {
            write!(out, "> ")?;
        }
        out.flush()?;
    }

    Ok(())
}

fn prompt(interactive: bool) {
    if !interactive {
        return;
    }

    let mut out = std::io::stdout().lock();
    let _ = write!(out, "> ");
    let _ = out.flush();
}
