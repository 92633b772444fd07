//! Event loop: terminal ownership, input thread, action dispatch, rendering
//!
//! Keyboard input and git completions share one channel, so `App::update`
//! sees a single ordered stream of events.

use super::app::App;
use super::editor::{self, EditorCommand};
use super::state::{AppEvent, AsyncAction};
use super::theme::Theme;
use super::ui::draw;
use crate::error::TuiError;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, BeginSynchronizedUpdate, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use gwt_git::Git;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, TuiError>;
type Tui = Terminal<CrosstermBackend<Stdout>>;

const EVENT_BUFFER: usize = 64;
const INPUT_POLL: Duration = Duration::from_millis(50);
const RENDER_INTERVAL: Duration = Duration::from_millis(16);

/// Why the event loop handed control back
enum Exit {
    Quit,
    Editor { command: EditorCommand, path: PathBuf },
}

/// Thread forwarding crossterm key events into the event channel.
///
/// Polls instead of blocking on `event::read` so it can be stopped before
/// the editor takes over the terminal.
struct InputReader {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputReader {
    fn spawn(tx: mpsc::Sender<AppEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let handle = std::thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                match event::poll(INPUT_POLL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        warn!(error = %e, "input poll failed");
                        break;
                    }
                }
                match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.blocking_send(AppEvent::Key(key)).is_err() {
                            break; // Receiver dropped
                        }
                    }
                    // Resizes are picked up by the next render tick
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "input read failed");
                        break;
                    }
                }
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn enter_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(TuiError::TerminalInit)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TuiError::TerminalInit)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TuiError::TerminalInit)
}

fn leave_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(TuiError::TerminalRestore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TuiError::TerminalRestore)?;
    terminal.show_cursor().map_err(TuiError::TerminalRestore)
}

/// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

type GitJob = Box<dyn FnOnce(&Git) -> AppEvent + Send>;

/// The git call behind `action` and the completion event it yields.
/// `None` for actions the event loop performs itself.
fn git_job(action: AsyncAction) -> Option<GitJob> {
    let job: GitJob = match action {
        AsyncAction::LoadWorktrees { generation } => Box::new(move |git: &Git| {
            AppEvent::WorktreesLoaded {
                generation,
                result: git.list_worktrees(),
            }
        }),
        AsyncAction::LoadBranches { generation } => Box::new(move |git: &Git| {
            AppEvent::BranchesLoaded {
                generation,
                result: git.list_branches_detailed(),
            }
        }),
        AsyncAction::CreateWorktree {
            branch,
            target,
            create_branch,
        } => Box::new(move |git: &Git| AppEvent::WorktreeCreated {
            result: git.create_worktree(&branch, &target, create_branch),
            target,
        }),
        AsyncAction::CreateWorktreeFromRef {
            branch,
            target,
            from_ref,
        } => Box::new(move |git: &Git| AppEvent::WorktreeCreated {
            result: git.create_worktree_from_ref(&branch, &target, &from_ref),
            target,
        }),
        AsyncAction::RemoveWorktree { path, force } => Box::new(move |git: &Git| {
            AppEvent::WorktreeRemoved {
                result: git.remove_worktree(&path, force),
                path,
            }
        }),
        AsyncAction::OpenEditor { .. } => return None,
    };
    Some(job)
}

/// Run a git action off the async runtime; exactly one completion event follows
fn dispatch(action: AsyncAction, git: &Git, tx: &mpsc::Sender<AppEvent>) {
    let Some(job) = git_job(action) else {
        return;
    };
    let git = git.clone();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        if tx.blocking_send(job(&git)).is_err() {
            debug!("event loop gone, dropping completion");
        }
    });
}

/// Run the TUI until the user quits, a signal sets `should_exit`, or an editor exits.
///
/// `editor_fallback` is used when neither `VISUAL` nor `EDITOR` is set.
pub async fn run(
    app: App,
    git: Git,
    editor_fallback: Option<String>,
    should_exit: Arc<AtomicBool>,
) -> Result<()> {
    install_panic_hook();
    let theme = Theme::default();
    let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);
    let mut app = app;

    loop {
        let mut terminal = enter_terminal()?;
        let mut input = InputReader::spawn(tx.clone());

        let outcome = event_loop(
            &mut terminal,
            app,
            &mut rx,
            &tx,
            &git,
            editor_fallback.as_deref(),
            &should_exit,
            &theme,
        )
        .await;

        input.shutdown();
        let restored = leave_terminal(&mut terminal);
        let (next, exit) = outcome?;
        restored?;
        app = next;

        let (command, path) = match exit {
            Exit::Quit => return Ok(()),
            Exit::Editor { command, path } => (command, path),
        };

        let program = command.program.clone();
        match tokio::task::spawn_blocking(move || command.run(&path)).await? {
            Ok(status) => {
                let result = if status.success() {
                    Ok(())
                } else {
                    Err(status.to_string())
                };
                let (app, _) = app.update(AppEvent::EditorExited(result));
                info!(quit = app.should_quit, "editor session finished");
                return Ok(());
            }
            Err(e) => {
                // Back into the list with a notice
                warn!(program = %program, error = %e, "editor launch failed");
                app = app.update(AppEvent::EditorFailed(e.to_string())).0;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn event_loop(
    terminal: &mut Tui,
    mut app: App,
    rx: &mut mpsc::Receiver<AppEvent>,
    tx: &mpsc::Sender<AppEvent>,
    git: &Git,
    editor_fallback: Option<&str>,
    should_exit: &AtomicBool,
    theme: &Theme,
) -> Result<(App, Exit)> {
    // Fixed 16ms render interval; every tick redraws at the current terminal size
    let mut render_interval = tokio::time::interval(RENDER_INTERVAL);
    render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            Some(event) = rx.recv() => {
                let (next, action) = app.update(event);
                app = next;
                match action {
                    Some(AsyncAction::OpenEditor { path }) => {
                        match editor::resolve_from_env(editor_fallback) {
                            Ok(command) => return Ok((app, Exit::Editor { command, path })),
                            Err(e) => app = app.update(AppEvent::EditorFailed(e.to_string())).0,
                        }
                    }
                    Some(action) => dispatch(action, git, tx),
                    None => {}
                }
            }

            _ = render_interval.tick() => {
                // Synchronized update to prevent flicker
                execute!(terminal.backend_mut(), BeginSynchronizedUpdate)
                    .map_err(TuiError::Render)?;
                terminal.draw(|f| draw(f, &app, theme)).map_err(TuiError::Render)?;
                execute!(terminal.backend_mut(), EndSynchronizedUpdate)
                    .map_err(TuiError::Render)?;
            }
        }

        if app.should_quit || should_exit.load(Ordering::Relaxed) {
            return Ok((app, Exit::Quit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_is_not_git_work() {
        let action = AsyncAction::OpenEditor {
            path: PathBuf::from("/tmp"),
        };
        assert!(git_job(action).is_none());
    }

    #[test]
    fn test_job_carries_generation() {
        let dir = tempfile::tempdir().unwrap();
        let git = Git::new().in_dir(dir.path());
        let job = git_job(AsyncAction::LoadWorktrees { generation: 7 }).unwrap();
        match job(&git) {
            // Not a repository (or git missing); either way the generation survives
            AppEvent::WorktreesLoaded { generation, result } => {
                assert_eq!(generation, 7);
                assert!(result.is_err());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_remove_job_reports_path() {
        let git = Git::new();
        let job = git_job(AsyncAction::RemoveWorktree {
            path: String::new(),
            force: true,
        })
        .unwrap();
        match job(&git) {
            AppEvent::WorktreeRemoved { path, result } => {
                assert_eq!(path, "");
                assert!(result.is_err());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
