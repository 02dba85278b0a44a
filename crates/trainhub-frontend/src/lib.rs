//! Interactive console frontend for the training portal.
//!
//! Deliberately chrome-free: it renders the committed content and the live
//! editor's draft as plain text, reads commands from stdin, and talks to the
//! backend exclusively through bridge messages. The language toggle is
//! session state here, just like the editor's draft is backend state.

mod render;

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;

use tokio::sync::mpsc::{Receiver, Sender};
use trainhub_bridge::{MessageFromBackend, MessageToBackend};
use trainhub_content::editor::{LocaleField, TranslationKey};
use trainhub_content::model::{ContentBundle, Lang};
use trainhub_content::path::ContentPath;

/// What the console currently knows about backend state.
#[derive(Debug, Default)]
struct ViewState {
    content: Option<ContentBundle>,
    draft: Option<ContentBundle>,
    dirty: bool,
    editing: bool,
    lang: Lang,
}

type SharedView = Arc<Mutex<ViewState>>;

/// One parsed console command.
#[derive(Debug)]
enum Action {
    Help,
    ShowHome,
    ShowProcess(usize),
    ShowDraft,
    ToggleLang,
    Unlock,
    Send(MessageToBackend),
    Quit,
    Invalid(String),
}

/// Console positions are 1-based; bridge positions are 0-based.
fn parse_position(token: &str) -> Option<usize> {
    token.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_line(line: &str) -> Action {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return Action::Help;
    };

    match command {
        "help" => Action::Help,
        "show" => Action::ShowHome,
        "view" => match args.first().and_then(|token| parse_position(token)) {
            Some(index) => Action::ShowProcess(index),
            None => Action::Invalid("usage: view <process-number>".to_string()),
        },
        "draft" => Action::ShowDraft,
        "lang" => Action::ToggleLang,
        "edit" => Action::Unlock,
        "set" => match args.split_first() {
            Some((path, value)) => Action::Send(MessageToBackend::EditField {
                path: ContentPath::parse(path),
                value: value.join(" "),
            }),
            None => Action::Invalid("usage: set <path> [text...]".to_string()),
        },
        "add-process" => Action::Send(MessageToBackend::AddProcess),
        "del-process" => match args.first().and_then(|token| parse_position(token)) {
            Some(index) => Action::Send(MessageToBackend::DeleteProcess(index)),
            None => Action::Invalid("usage: del-process <process-number>".to_string()),
        },
        "add-video" => match args.first().and_then(|token| parse_position(token)) {
            Some(process) => Action::Send(MessageToBackend::AddVideo(process)),
            None => Action::Invalid("usage: add-video <process-number>".to_string()),
        },
        "del-video" => match args {
            [process, video] => match (parse_position(process), parse_position(video)) {
                (Some(process), Some(video)) => {
                    Action::Send(MessageToBackend::DeleteVideo { process, video })
                }
                _ => Action::Invalid("usage: del-video <process-number> <video-number>".to_string()),
            },
            _ => Action::Invalid("usage: del-video <process-number> <video-number>".to_string()),
        },
        "translate" => match args {
            [target] => match target.rsplit_once('.') {
                Some((entity, field)) => match LocaleField::parse(field) {
                    Some(field) => Action::Send(MessageToBackend::TranslateField(
                        TranslationKey::new(ContentPath::parse(entity), field),
                    )),
                    None => Action::Invalid(format!(
                        "`{field}` is not translatable; fields: title, description, subtitle, siteName"
                    )),
                },
                None => Action::Invalid("usage: translate <path>.<field>".to_string()),
            },
            _ => Action::Invalid(
                "usage: translate <path>.<field>  (e.g. translate siteConfig.title)".to_string(),
            ),
        },
        "save" => Action::Send(MessageToBackend::SaveRequest),
        "discard" => Action::Send(MessageToBackend::DiscardRequest),
        "close" => Action::Send(MessageToBackend::CloseEditorRequest),
        "quit" | "exit" => Action::Quit,
        other => Action::Invalid(format!("unknown command `{other}`; try `help`")),
    }
}

/// A blank entry, including end of input, cancels the unlock attempt
/// instead of being submitted as a passcode.
fn parse_passcode(entry: &str) -> Option<String> {
    let passcode = entry.trim();
    if passcode.is_empty() {
        None
    } else {
        Some(passcode.to_string())
    }
}

fn print_help() {
    println!("Browsing:");
    println!("  show                      render the home page");
    println!("  view <n>                  open the n-th process's playlist");
    println!("  lang                      toggle Vietnamese / Thai display");
    println!("Editing (requires `edit` + passcode):");
    println!("  draft                     list the draft's editable paths");
    println!("  set <path> [text...]      overwrite a text leaf, e.g. set siteConfig.title.vi Cổng Mới");
    println!("  translate <path>.<field>  fill the Thai side from the Vietnamese text");
    println!("  add-process / del-process <n>");
    println!("  add-video <n> / del-video <n> <m>");
    println!("  save | discard | close");
    println!("Other:");
    println!("  help | quit");
}

/// Applies backend events to the shared view and narrates them on stdout.
fn consume_backend_messages(mut rx: Receiver<MessageFromBackend>, view: SharedView) {
    while let Some(message) = rx.blocking_recv() {
        log::debug!("Got a backend message: {message:?}");
        let mut view = view.lock().expect("view state lock poisoned");
        match message {
            MessageFromBackend::ContentResponse(bundle) => {
                let first_load = view.content.is_none();
                view.content = Some(bundle);
                if first_load {
                    if let Some(bundle) = &view.content {
                        render::home(bundle, view.lang);
                    }
                } else {
                    println!("[INFO] Content saved.");
                }
            }
            MessageFromBackend::EditorOpened(draft) => {
                view.editing = true;
                view.dirty = false;
                view.draft = Some(draft);
                println!("[INFO] Live editor unlocked. Use `draft` to list editable paths.");
            }
            MessageFromBackend::UnlockRejected { message } => {
                println!("[WARN] {message}");
            }
            MessageFromBackend::DraftStateUpdate { draft, dirty } => {
                view.draft = Some(draft);
                view.dirty = dirty;
                if dirty {
                    println!("[INFO] Draft updated (unsaved changes).");
                } else {
                    println!("[INFO] Draft matches the saved content.");
                }
            }
            MessageFromBackend::TranslationStarted(key) => {
                println!("[INFO] Translating {key}...");
            }
            MessageFromBackend::TranslationFinished { key, ok } => {
                if ok {
                    println!("[INFO] Translation for {key} finished.");
                } else {
                    println!("[WARN] Translation for {key} failed.");
                }
            }
            MessageFromBackend::EditorClosed => {
                view.editing = false;
                view.dirty = false;
                view.draft = None;
                println!("[INFO] Live editor closed.");
            }
        }
    }
}

/// Runs the console until `quit` or end of input.
pub fn run(
    rx: Receiver<MessageFromBackend>,
    tx: Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let view: SharedView = Arc::new(Mutex::new(ViewState::default()));

    let printer_view = view.clone();
    let printer = thread::spawn(move || consume_backend_messages(rx, printer_view));

    tx.blocking_send(MessageToBackend::ContentRequest)?;
    println!("[INFO] Training portal console. Type `help` for commands.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Action::Help => print_help(),
            Action::ShowHome => {
                let view = view.lock().expect("view state lock poisoned");
                match &view.content {
                    Some(bundle) => render::home(bundle, view.lang),
                    None => println!("[INFO] Content has not loaded yet."),
                }
            }
            Action::ShowProcess(index) => {
                let view = view.lock().expect("view state lock poisoned");
                match view.content.as_ref().and_then(|bundle| bundle.training_data.get(index)) {
                    Some(process) => render::process(process, view.lang),
                    None => println!("[WARN] No process at {}.", index + 1),
                }
            }
            Action::ShowDraft => {
                let view = view.lock().expect("view state lock poisoned");
                match (&view.draft, view.editing) {
                    (Some(draft), true) => {
                        render::draft_overview(draft);
                        if view.dirty {
                            println!("[WARN] Bạn có thay đổi chưa lưu!");
                        }
                    }
                    _ => println!("[INFO] The editor is closed; unlock it with `edit`."),
                }
            }
            Action::ToggleLang => {
                let mut view = view.lock().expect("view state lock poisoned");
                view.lang = view.lang.toggle();
                println!("[INFO] Display language: {}", view.lang);
            }
            Action::Unlock => {
                print!("Mật khẩu: ");
                std::io::stdout().flush()?;
                let mut entry = String::new();
                stdin.read_line(&mut entry)?;
                match parse_passcode(&entry) {
                    Some(passcode) => {
                        tx.blocking_send(MessageToBackend::UnlockRequest(passcode))?;
                    }
                    None => println!("[INFO] Unlock cancelled."),
                }
            }
            Action::Send(message) => tx.blocking_send(message)?,
            Action::Quit => break,
            Action::Invalid(reason) => println!("[WARN] {reason}"),
        }
    }

    // Closing our side of the bridge shuts the backend loop down; the
    // printer thread then drains and exits once the backend's sender drops.
    drop(tx);
    let _ = printer.join();
    Ok(())
}
