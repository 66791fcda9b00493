use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::editor::EditorState;

/// Idle poll interval; short enough for toasts to expire on time.
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or an I/O
    /// error occurs while reading events or drawing.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - pixelpad requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);

        let mut model = self.initial_model((size.width, size.height));
        if crate::perf::is_event_log_enabled() {
            crate::perf::log_event(
                "init.model",
                format!(
                    "terminal={}x{} canvas={} palette={} mode={} mouse={}",
                    size.width,
                    size.height,
                    model.editor.size(),
                    model.editor.palette(),
                    model.editor.paint_mode().label(),
                    model.mouse_enabled
                ),
            );
        }

        if model.mouse_enabled {
            execute!(stdout(), EnableMouseCapture)?;
        }

        let result = Self::event_loop(&mut terminal, &mut model);

        // Restore terminal
        if model.mouse_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();

        result
    }

    /// Build the startup model from the configured options.
    pub(super) fn initial_model(&self, terminal_size: (u16, u16)) -> Model {
        let editor = EditorState::new(self.options.clone()).set_paint_mode(self.paint_mode);
        Model::new(editor, terminal_size).with_mouse(self.mouse_enabled)
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll = if needs_render {
                Duration::ZERO
            } else {
                IDLE_POLL
            };
            if event::poll(poll)? {
                // Drain everything queued so a fast drag renders once.
                loop {
                    let ev = event::read()?;
                    if let Some(msg) = Self::handle_event(&ev, model) {
                        Self::dispatch(model, msg, frame_idx);
                        needs_render = true;
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                if crate::perf::is_event_log_enabled() {
                    crate::perf::log_event(
                        "frame.draw",
                        format!(
                            "frame={} draw_ms={:.3}",
                            frame_idx,
                            draw_start.elapsed().as_secs_f64() * 1000.0
                        ),
                    );
                }
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one message. Messages are handled strictly in arrival order.
    fn dispatch(model: &mut Model, msg: Message, frame_idx: u64) {
        if crate::perf::is_event_log_enabled() {
            crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
        }
        tracing::trace!(?msg, "dispatch");
        *model = update(std::mem::take(model), msg);
    }
}
