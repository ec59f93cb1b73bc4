use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use medibot_core::transcript::{self, ANALYZING, DISCLAIMER, GREETING, NO_KEY_TIP, THINKING};
use medibot_core::{Assistant, Message, Reply, Role};
use medibot_store::{CheckHistory, LocalCart};

use crate::completion;
use crate::completion_worker::{self, CompletionEvent, CompletionRequest};
use crate::config::Config;
use crate::state;

const TYPING: &str = "MediBot is typing...";

struct ChatLog {
    path: PathBuf,
}

impl ChatLog {
    fn open_today() -> Result<Self> {
        let dir = state::ensure_medibot_home()?.join("chat");
        std::fs::create_dir_all(&dir)?;
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        Ok(Self {
            path: dir.join(format!("{today}.md")),
        })
    }

    fn append_message(&mut self, m: &Message) {
        let role = match m.role {
            Role::User => "user",
            Role::Bot => "bot",
            Role::Error => "error",
        };
        self.append(role, &m.content);
    }

    /// Transcript logging never interrupts the chat.
    fn append(&mut self, role: &str, msg: &str) {
        if let Err(e) = self.try_append(role, msg) {
            tracing::warn!(error = %e, path = %self.path.display(), "chat log write failed");
        }
    }

    fn try_append(&mut self, role: &str, msg: &str) -> io::Result<()> {
        use std::io::Write;
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            f,
            "- {} [{}] {}",
            chrono::Utc::now().to_rfc3339(),
            role,
            msg.replace('\n', " ")
        )
    }
}

/// Releases queued bot messages one at a time, `delay` apart.
struct Pacer {
    delay: Duration,
    queue: VecDeque<(Message, &'static str)>,
    ready_at: Instant,
}

impl Pacer {
    fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            queue: VecDeque::new(),
            ready_at: now,
        }
    }

    fn push(&mut self, message: Message, indicator: &'static str, now: Instant) {
        if self.queue.is_empty() {
            self.ready_at = now + self.delay;
        }
        self.queue.push_back((message, indicator));
    }

    fn release(&mut self, now: Instant) -> Option<Message> {
        if self.queue.is_empty() || now < self.ready_at {
            return None;
        }
        let (message, _) = self.queue.pop_front()?;
        self.ready_at = now + self.delay;
        Some(message)
    }

    /// What to show while the next message is pending.
    fn indicator(&self) -> Option<&'static str> {
        self.queue.front().map(|(_, label)| *label)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Slash {
    Help,
    Symptoms,
    Cart,
    Buy(usize),
    Reset,
    Usage(&'static str),
    Unknown(String),
}

fn parse_slash(input: &str) -> Option<Slash> {
    let s = input.trim();
    let rest = s.strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next();
    Some(match cmd.as_str() {
        "help" => Slash::Help,
        "symptoms" => Slash::Symptoms,
        "cart" => Slash::Cart,
        "reset" => Slash::Reset,
        "buy" => match arg.and_then(|a| a.trim_start_matches('[').trim_end_matches(']').parse().ok()) {
            Some(n) => Slash::Buy(n),
            None => Slash::Usage("Usage: /buy <number> (the [n] shown next to a medicine)"),
        },
        _ => Slash::Unknown(s.to_string()),
    })
}

fn slash_help() -> String {
    "Commands:\n\
- /help\n\
- /symptoms (what I can check)\n\
- /buy <n> (add medicine [n] of the last recommendation to your cart)\n\
- /cart\n\
- /reset (stop the current check)\n\
\nShortcuts: Enter=send, Esc=quit, PgUp/PgDn=scroll\n\
Between checks, q on an empty line quits and ? toggles help."
        .to_string()
}

struct ChatApp {
    assistant: Assistant<LocalCart, CheckHistory>,
    messages: Vec<Message>,
    pacer: Pacer,
    log: ChatLog,
    requests: mpsc::UnboundedSender<CompletionRequest>,
    events: std::sync::mpsc::Receiver<CompletionEvent>,
    next_request_id: u64,
    pending: usize,
}

impl ChatApp {
    fn show_now(&mut self, m: Message) {
        self.log.append_message(&m);
        self.messages.push(m);
    }

    fn slash(&mut self, cmd: Slash) {
        let reply = match cmd {
            Slash::Help => slash_help(),
            Slash::Symptoms => transcript::help_message(),
            Slash::Cart => match self.assistant.cart().summary() {
                Ok(s) => s,
                Err(e) => return self.show_now(Message::error(format!("Could not read cart: {e:#}"))),
            },
            Slash::Buy(n) => match self.assistant.add_to_cart(n) {
                Ok(s) => s,
                Err(e) => return self.show_now(Message::error(format!("Could not update cart: {e:#}"))),
            },
            Slash::Reset => self.assistant.reset(),
            Slash::Usage(u) => u.to_string(),
            Slash::Unknown(s) => format!("Unknown command {s}. Try /help"),
        };
        self.show_now(Message::bot(reply));
    }

    fn submit(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(cmd) = parse_slash(trimmed) {
            self.log.append("user", trimmed);
            return self.slash(cmd);
        }

        self.show_now(Message::user(trimmed));
        let now = Instant::now();
        for reply in self.assistant.respond(trimmed) {
            match reply {
                Reply::Bot(s) | Reply::Help(s) => self.pacer.push(Message::bot(s), TYPING, now),
                Reply::Recommendation(r) => self.pacer.push(Message::bot(r.render()), ANALYZING, now),
                Reply::Disclaimer(d) => self.pacer.push(Message::bot(d), TYPING, now),
                Reply::Delegate { utterance, history } => {
                    let request_id = self.next_request_id;
                    self.next_request_id += 1;
                    let req = CompletionRequest {
                        request_id,
                        utterance,
                        history,
                    };
                    if self.requests.send(req).is_err() {
                        self.show_now(Message::error("AI worker is not running."));
                    } else {
                        self.pending += 1;
                    }
                }
            }
        }
    }

    fn poll_events(&mut self) {
        let now = Instant::now();
        while let Ok(ev) = self.events.try_recv() {
            match ev {
                CompletionEvent::Started { request_id } => {
                    tracing::debug!(request_id, "completion started");
                }
                CompletionEvent::Completed { text, .. } => {
                    self.pending = self.pending.saturating_sub(1);
                    let m = Message::bot(text);
                    self.assistant.record_reply(m.clone());
                    self.pacer.push(m, TYPING, now);
                }
                CompletionEvent::Failed { message, .. } => {
                    self.pending = self.pending.saturating_sub(1);
                    let m = Message::error(message);
                    self.assistant.record_reply(m.clone());
                    self.pacer.push(m, TYPING, now);
                }
            }
        }
        while let Some(m) = self.pacer.release(now) {
            self.show_now(m);
        }
    }

    fn status(&self) -> Option<&'static str> {
        self.pacer
            .indicator()
            .or(if self.pending > 0 { Some(THINKING) } else { None })
    }
}

pub fn run_chat(cfg: &Config) -> Result<()> {
    let store = state::open_store()?;
    let client = completion::configured_client(&cfg.completion).map(Arc::new);

    let assistant = Assistant::new(LocalCart::new(store.clone()), CheckHistory::new(store))
        .with_history_window(cfg.chat.max_turns_context)
        .with_delegation(client.is_some());

    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (ev_tx, ev_rx) = std::sync::mpsc::channel();
    tokio::spawn(completion_worker::run_worker(client.clone(), req_rx, ev_tx));

    let mut app = ChatApp {
        assistant,
        messages: Vec::new(),
        pacer: Pacer::new(Duration::from_millis(cfg.chat.typing_delay_ms), Instant::now()),
        log: ChatLog::open_today()?,
        requests: req_tx,
        events: ev_rx,
        next_request_id: 1,
        pending: 0,
    };
    app.log.append("system", "session_start");
    app.show_now(Message::bot(GREETING));
    if client.is_none() {
        app.show_now(Message::bot(NO_KEY_TIP));
    }
    tracing::info!(delegation = client.is_some(), "chat session started");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = chat_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    app.log.append("system", "session_end");
    res
}

fn message_lines(m: &Message) -> Vec<Line<'static>> {
    let (tag, color) = match m.role {
        Role::User => ("you", Color::Cyan),
        Role::Bot => ("medibot", Color::Magenta),
        Role::Error => ("error", Color::Red),
    };
    let body_style = match m.role {
        Role::Error => Style::default().fg(Color::Red),
        _ if m.content == DISCLAIMER => Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        _ => Style::default(),
    };

    let mut lines = Vec::new();
    for (i, text) in m.content.lines().enumerate() {
        let prefix = if i == 0 {
            Span::styled(format!("{tag}: "), Style::default().fg(color))
        } else {
            Span::raw("  ")
        };
        lines.push(Line::from(vec![prefix, Span::styled(text.to_string(), body_style)]));
    }
    lines.push(Line::raw(""));
    lines
}

/// Rows `lines` occupy once wrapped to `width` columns.
fn wrapped_rows(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines.iter().map(|l| l.width().max(1).div_ceil(width)).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    ToggleHelp,
    ScrollUp,
    ScrollDown,
    Submit,
    Backspace,
    Insert(char),
    Ignore,
}

/// Bare `q` and `?` act as shortcuts only when `shortcuts` is set (empty
/// input, no check running); otherwise they are typed like any other key.
fn key_action(key: &KeyEvent, shortcuts: bool) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') if shortcuts => KeyAction::Quit,
        KeyCode::Char('?') if shortcuts => KeyAction::ToggleHelp,
        KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::PageDown => KeyAction::ScrollDown,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) => KeyAction::Insert(c),
        _ => KeyAction::Ignore,
    }
}

fn chat_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut ChatApp) -> Result<()> {
    let mut input = String::new();
    let mut show_help = true;
    let mut scroll_back: usize = 0;

    loop {
        app.poll_events();

        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Min(5), Constraint::Length(3)])
                .split(size);

            let splash = Paragraph::new(Text::from(vec![
                Line::from(Span::styled(
                    "MediBot",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw("")),
                Line::from(Span::styled(">_ medibot chat", Style::default().fg(Color::Cyan))),
                Line::from(Span::styled(
                    "type /help or ? for shortcuts",
                    Style::default().fg(Color::Gray),
                )),
            ]))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(splash, chunks[0]);

            let mut lines: Vec<Line> = Vec::new();
            if show_help {
                lines.push(Line::from(Span::styled(
                    "Shortcuts: Enter=send, Esc=quit, PgUp/PgDn=scroll (q/? between checks)",
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::raw("Commands: /help /symptoms /buy <n> /cart /reset"));
                lines.push(Line::raw(""));
            }
            for m in &app.messages {
                lines.extend(message_lines(m));
            }
            if let Some(status) = app.status() {
                lines.push(Line::from(Span::styled(
                    status,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )));
            }

            let inner_width = chunks[1].width.saturating_sub(2);
            let inner_height = usize::from(chunks[1].height.saturating_sub(2));
            let bottom = wrapped_rows(&lines, inner_width).saturating_sub(inner_height);
            scroll_back = scroll_back.min(bottom);
            let offset = u16::try_from(bottom - scroll_back).unwrap_or(u16::MAX);

            let history = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title("conversation"))
                .wrap(Wrap { trim: false })
                .scroll((offset, 0));
            f.render_widget(history, chunks[1]);

            let input_widget = Paragraph::new(input.as_str())
                .block(Block::default().borders(Borders::ALL).title("message"))
                .style(Style::default().fg(Color::White));
            f.render_widget(input_widget, chunks[2]);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let shortcuts = input.is_empty() && !app.assistant.session().is_diagnosing();
                match key_action(&key, shortcuts) {
                    KeyAction::Quit => break,
                    KeyAction::ToggleHelp => show_help = !show_help,
                    KeyAction::ScrollUp => scroll_back += 5,
                    KeyAction::ScrollDown => scroll_back = scroll_back.saturating_sub(5),
                    KeyAction::Submit => {
                        app.submit(&input);
                        input.clear();
                        scroll_back = 0;
                    }
                    KeyAction::Backspace => {
                        input.pop();
                    }
                    KeyAction::Insert(c) => input.push(c),
                    KeyAction::Ignore => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slash_commands() {
        assert_eq!(parse_slash("hello"), None);
        assert_eq!(parse_slash("/help"), Some(Slash::Help));
        assert_eq!(parse_slash(" /CART "), Some(Slash::Cart));
        assert_eq!(parse_slash("/buy 2"), Some(Slash::Buy(2)));
        assert_eq!(parse_slash("/buy [3]"), Some(Slash::Buy(3)));
        assert!(matches!(parse_slash("/buy"), Some(Slash::Usage(_))));
        assert!(matches!(parse_slash("/buy two"), Some(Slash::Usage(_))));
        assert_eq!(parse_slash("/reset"), Some(Slash::Reset));
        assert_eq!(parse_slash("/nope"), Some(Slash::Unknown("/nope".to_string())));
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_and_question_mark_are_typed_during_a_check() {
        let mut a: Assistant = Assistant::default();
        a.respond("I have a headache");
        let shortcuts = !a.session().is_diagnosing();
        assert!(!shortcuts);

        assert_eq!(key_action(&press(KeyCode::Char('q')), shortcuts), KeyAction::Insert('q'));
        assert_eq!(key_action(&press(KeyCode::Char('?')), shortcuts), KeyAction::Insert('?'));
        assert_eq!(key_action(&press(KeyCode::Esc), shortcuts), KeyAction::Quit);
    }

    #[test]
    fn test_shortcuts_between_checks() {
        assert_eq!(key_action(&press(KeyCode::Char('q')), true), KeyAction::Quit);
        assert_eq!(key_action(&press(KeyCode::Char('?')), true), KeyAction::ToggleHelp);
        assert_eq!(key_action(&press(KeyCode::Char('q')), false), KeyAction::Insert('q'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(&ctrl_c, false), KeyAction::Quit);
        assert_eq!(key_action(&press(KeyCode::Char('c')), false), KeyAction::Insert('c'));
        assert_eq!(key_action(&press(KeyCode::Enter), false), KeyAction::Submit);
    }

    #[test]
    fn test_pacer_spaces_messages_by_delay() {
        let t0 = Instant::now();
        let mut p = Pacer::new(Duration::from_millis(600), t0);
        assert!(p.release(t0).is_none());

        p.push(Message::bot("one"), TYPING, t0);
        p.push(Message::bot("two"), ANALYZING, t0);
        assert_eq!(p.indicator(), Some(TYPING));
        assert!(p.release(t0 + Duration::from_millis(599)).is_none());

        let t1 = t0 + Duration::from_millis(600);
        assert_eq!(p.release(t1).map(|m| m.content), Some("one".to_string()));
        assert_eq!(p.indicator(), Some(ANALYZING));
        assert!(p.release(t1).is_none());
        assert_eq!(
            p.release(t1 + Duration::from_millis(600)).map(|m| m.content),
            Some("two".to_string())
        );
        assert_eq!(p.indicator(), None);
    }

    #[test]
    fn test_pacer_with_zero_delay_releases_everything() {
        let t0 = Instant::now();
        let mut p = Pacer::new(Duration::ZERO, t0);
        p.push(Message::bot("a"), TYPING, t0);
        p.push(Message::error("b"), TYPING, t0);
        assert_eq!(p.release(t0).map(|m| m.role), Some(Role::Bot));
        assert_eq!(p.release(t0).map(|m| m.role), Some(Role::Error));
        assert!(p.release(t0).is_none());
    }

    #[test]
    fn test_multiline_messages_are_split_and_wrapped() {
        let lines = message_lines(&Message::bot("📋 Fever:\n• Rest"));
        assert_eq!(lines.len(), 3);
        assert_eq!(wrapped_rows(&[Line::raw("x".repeat(25))], 10), 3);
        assert_eq!(wrapped_rows(&[Line::raw("")], 10), 1);
    }
}
