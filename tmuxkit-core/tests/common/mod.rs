//! In-memory stand-in for a tmux server
//!
//! Understands the subcommands the core issues and renders `-F` formats by
//! substituting placeholders, so listing output goes through the real
//! parser.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::io;
use std::path::PathBuf;

use parking_lot::Mutex;

use tmuxkit_core::{CommandOutput, CommandRunner, Layout, Socket, TmuxCommand};
use tmuxkit_utils::{Result, TmuxkitError};

#[derive(Debug, Clone)]
pub struct FakePane {
    pub id: u32,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub id: u32,
    pub name: String,
    pub layout: Option<Layout>,
    pub panes: Vec<FakePane>,
    pub active: usize,
}

#[derive(Debug, Clone)]
pub struct FakeSession {
    pub id: u32,
    pub name: String,
    pub windows: BTreeMap<u32, FakeWindow>,
}

#[derive(Debug, Default)]
struct State {
    sessions: Vec<FakeSession>,
    next_session: u32,
    next_window: u32,
    next_pane: u32,
    log: Vec<Vec<String>>,
    fail_on: Option<String>,
}

#[derive(Debug)]
pub struct FakeTmux {
    state: Mutex<State>,
    base_index: u32,
    home: PathBuf,
}

impl Default for FakeTmux {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeTmux {
    pub fn new() -> Self {
        Self::with_base_index(0)
    }

    pub fn with_base_index(base_index: u32) -> Self {
        Self {
            state: Mutex::new(State::default()),
            base_index,
            home: PathBuf::from("/home/tester"),
        }
    }

    /// Make every later invocation of `subcommand` fail
    pub fn fail_on(&self, subcommand: &str) {
        self.state.lock().fail_on = Some(subcommand.to_string());
    }

    /// Argument vectors received so far
    pub fn log(&self) -> Vec<Vec<String>> {
        self.state.lock().log.clone()
    }

    pub fn session(&self, name: &str) -> Option<FakeSession> {
        self.state
            .lock()
            .sessions
            .iter()
            .find(|s| s.name == name)
            .cloned()
    }

    pub fn session_count(&self) -> usize {
        self.state.lock().sessions.len()
    }
}

fn value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn fail(message: String) -> CommandOutput {
    CommandOutput::failure(1, format!("{}\n", message))
}

impl State {
    fn session_index(&self, target: &str) -> Option<usize> {
        let name = target.strip_prefix('=').unwrap_or(target);
        self.sessions.iter().position(|s| s.name == name)
    }

    /// Resolve `session:index`, `=session:index` or `@id`
    fn window_key(&self, target: &str) -> Option<(usize, u32)> {
        if let Some(id) = target.strip_prefix('@') {
            let id: u32 = id.parse().ok()?;
            return self.sessions.iter().enumerate().find_map(|(si, s)| {
                s.windows
                    .iter()
                    .find(|(_, w)| w.id == id)
                    .map(|(index, _)| (si, *index))
            });
        }
        let (session, index) = target.rsplit_once(':')?;
        Some((self.session_index(session)?, index.parse().ok()?))
    }

    fn new_window(&mut self, name: &str, dir: PathBuf) -> FakeWindow {
        let window = FakeWindow {
            id: self.next_window,
            name: name.to_string(),
            layout: None,
            panes: vec![FakePane {
                id: self.next_pane,
                path: dir,
            }],
            active: 0,
        };
        self.next_window += 1;
        self.next_pane += 1;
        window
    }
}

fn render(format: &str, session: &FakeSession, index: u32, window: &FakeWindow, pane: usize) -> String {
    let p = &window.panes[pane];
    format
        .replace("#{session_id}", &format!("${}", session.id))
        .replace("#{session_name}", &session.name)
        .replace("#{window_id}", &format!("@{}", window.id))
        .replace("#{window_name}", &window.name)
        .replace("#{window_index}", &index.to_string())
        .replace("#{pane_id}", &format!("%{}", p.id))
        .replace("#{pane_active}", if pane == window.active { "1" } else { "0" })
        .replace("#{pane_current_path}", &p.path.to_string_lossy())
}

impl FakeTmux {
    fn dir(&self, args: &[String]) -> PathBuf {
        value(args, "-c")
            .map(PathBuf::from)
            .unwrap_or_else(|| self.home.clone())
    }

    fn dispatch(&self, args: &[String]) -> CommandOutput {
        let mut state = self.state.lock();
        state.log.push(args.to_vec());
        if state.fail_on.as_deref() == Some(args[0].as_str()) {
            return fail(format!("{} failed", args[0]));
        }
        let format = value(args, "-F").unwrap_or("");

        match args[0].as_str() {
            "has-session" => {
                let target = value(args, "-t").unwrap_or("");
                if state.sessions.is_empty() {
                    return fail("no server running on /tmp/tmux-1000/default".into());
                }
                match state.session_index(target) {
                    Some(_) => CommandOutput::success(""),
                    None => fail(format!(
                        "can't find session: {}",
                        target.trim_start_matches('=')
                    )),
                }
            }
            "new-session" => {
                let name = value(args, "-s").unwrap_or("0").to_string();
                if state.session_index(&name).is_some() {
                    return fail(format!("duplicate session: {}", name));
                }
                let window_name = value(args, "-n").unwrap_or("zsh").to_string();
                let window = state.new_window(&window_name, self.dir(args));
                let session = FakeSession {
                    id: state.next_session,
                    name,
                    windows: BTreeMap::from([(self.base_index, window)]),
                };
                state.next_session += 1;
                let out = if has(args, "-P") {
                    let w = &session.windows[&self.base_index];
                    format!("{}\n", render(format, &session, self.base_index, w, 0))
                } else {
                    String::new()
                };
                state.sessions.push(session);
                CommandOutput::success(out)
            }
            "new-window" => {
                let target = value(args, "-t").unwrap_or("");
                let name = value(args, "-n").unwrap_or("zsh").to_string();
                let dir = self.dir(args);
                let (si, index) = if let Some(session) = target.strip_suffix(':') {
                    let Some(si) = state.session_index(session) else {
                        return fail(format!("can't find session: {}", session));
                    };
                    let next = state.sessions[si]
                        .windows
                        .keys()
                        .next_back()
                        .map(|i| i + 1)
                        .unwrap_or(self.base_index);
                    (si, next)
                } else {
                    let Some((session, index)) = target.rsplit_once(':') else {
                        return fail(format!("bad target: {}", target));
                    };
                    let Some(si) = state.session_index(session) else {
                        return fail(format!("can't find session: {}", session));
                    };
                    let Ok(index) = index.parse::<u32>() else {
                        return fail(format!("bad index: {}", index));
                    };
                    (si, index)
                };
                if state.sessions[si].windows.contains_key(&index) && !has(args, "-k") {
                    return fail(format!("create window failed: index {} in use", index));
                }
                let window = state.new_window(&name, dir);
                let out = if has(args, "-P") {
                    format!("{}\n", render(format, &state.sessions[si], index, &window, 0))
                } else {
                    String::new()
                };
                state.sessions[si].windows.insert(index, window);
                CommandOutput::success(out)
            }
            "split-window" => {
                let target = value(args, "-t").unwrap_or("");
                let Some((si, index)) = state.window_key(target) else {
                    return fail(format!("can't find window: {}", target));
                };
                let dir = self.dir(args);
                let id = state.next_pane;
                state.next_pane += 1;
                let session = &mut state.sessions[si];
                let Some(window) = session.windows.get_mut(&index) else {
                    return fail(format!("can't find window: {}", target));
                };
                window.panes.push(FakePane { id, path: dir });
                window.active = window.panes.len() - 1;
                let out = if has(args, "-P") {
                    let session = &state.sessions[si];
                    let window = &session.windows[&index];
                    format!("{}\n", render(format, session, index, window, window.active))
                } else {
                    String::new()
                };
                CommandOutput::success(out)
            }
            "select-layout" => {
                let target = value(args, "-t").unwrap_or("");
                let Some((si, index)) = state.window_key(target) else {
                    return fail(format!("can't find window: {}", target));
                };
                let Some(layout) = args.last().and_then(|l| l.parse::<Layout>().ok()) else {
                    return fail("invalid layout".into());
                };
                match state.sessions[si].windows.get_mut(&index) {
                    Some(window) => {
                        window.layout = Some(layout);
                        CommandOutput::success("")
                    }
                    None => fail(format!("can't find window: {}", target)),
                }
            }
            "kill-session" => {
                let target = value(args, "-t").unwrap_or("");
                match state.session_index(target) {
                    Some(si) => {
                        state.sessions.remove(si);
                        CommandOutput::success("")
                    }
                    None => fail(format!("can't find session: {}", target)),
                }
            }
            "list-sessions" => {
                if state.sessions.is_empty() {
                    return fail("no server running on /tmp/tmux-1000/default".into());
                }
                let out: String = state
                    .sessions
                    .iter()
                    .filter_map(|s| {
                        let (index, w) = s.windows.iter().next()?;
                        Some(format!("{}\n", render(format, s, *index, w, w.active)))
                    })
                    .collect();
                CommandOutput::success(out)
            }
            "list-windows" => {
                let target = value(args, "-t").unwrap_or("");
                let Some(si) = state.session_index(target) else {
                    return fail(format!("can't find session: {}", target));
                };
                let session = &state.sessions[si];
                let out: String = session
                    .windows
                    .iter()
                    .map(|(index, w)| format!("{}\n", render(format, session, *index, w, w.active)))
                    .collect();
                CommandOutput::success(out)
            }
            "list-panes" => {
                let target = value(args, "-t").unwrap_or("");
                let mut out = String::new();
                for session in &state.sessions {
                    for (index, window) in &session.windows {
                        let selected = if has(args, "-a") {
                            true
                        } else if has(args, "-s") {
                            session.name == target.trim_start_matches('=')
                        } else {
                            target == format!("@{}", window.id)
                        };
                        if !selected {
                            continue;
                        }
                        for pane in 0..window.panes.len() {
                            out.push_str(&render(format, session, *index, window, pane));
                            out.push('\n');
                        }
                    }
                }
                CommandOutput::success(out)
            }
            other => fail(format!("unknown command: {}", other)),
        }
    }
}

impl CommandRunner for FakeTmux {
    fn run(&self, _socket: &Socket, command: &TmuxCommand) -> Result<CommandOutput> {
        Ok(self.dispatch(command.args()))
    }

    fn exec(&self, _socket: &Socket, command: &TmuxCommand) -> Result<Infallible> {
        self.state.lock().log.push(command.args().to_vec());
        Err(TmuxkitError::Exec {
            command: command.subcommand().to_string(),
            source: io::Error::new(io::ErrorKind::Unsupported, "no terminal"),
        })
    }

    fn inside_client(&self) -> bool {
        false
    }
}
