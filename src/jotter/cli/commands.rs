use super::render::{
    print_messages, render_full_notes, render_note_list, render_text_list, ListView, LINE_WIDTH,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use jotter::api::{CmdMessage, ConfigAction, JotterApi};
use jotter::config::JotterConfig;
use jotter::editor::{edit_content, EditorContent};
use jotter::error::Result;
use jotter::init::initialize;
use jotter::model::NoteId;
use jotter::session::Session;
use jotter::store::fs::FileStorage;
use std::io::{IsTerminal, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext {
    api: JotterApi<FileStorage>,
    config: JotterConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    colored::control::set_override(console::colors_enabled());

    let jotter = initialize(cli.data_dir.as_deref())?;
    let mut ctx = AppContext {
        api: jotter.api,
        config: jotter.config,
    };

    match cli.command {
        Some(Commands::List { search, tag }) => handle_list(&ctx, search, tag),
        Some(Commands::New {
            title,
            content,
            tags,
            no_editor,
        }) => handle_new(&mut ctx, title, content, tags, no_editor),
        Some(Commands::Edit {
            id,
            title,
            content,
            tags,
            untag,
        }) => handle_edit(&mut ctx, id, title, content, tags, untag),
        Some(Commands::View { ids }) => handle_view(&ctx, &ids),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, None),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jotter=debug,jot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jotter=warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| (cols as usize).min(LINE_WIDTH))
        .unwrap_or(LINE_WIDTH)
}

fn handle_list(ctx: &AppContext, search: Option<String>, tag: Option<String>) -> Result<()> {
    let query = search.unwrap_or_default();
    let tag = tag.unwrap_or_default();
    let result = ctx.api.list_notes(&query, &tag)?;

    let output = render_note_list(&ListView {
        notes: &result.listed_notes,
        tags: &result.tags,
        selected_tag: &tag,
        empty_state: result.empty_state,
        preview_chars: ctx.config.preview_chars,
        width: terminal_width(),
    });
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

/// Content piped on stdin, if any.
fn read_piped_input() -> Option<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    let mut buffer = String::new();
    match stdin.read_to_string(&mut buffer) {
        Ok(_) if !buffer.trim().is_empty() => Some(buffer),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "could not read stdin");
            None
        }
    }
}

fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    tags: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let piped = if content.is_none() {
        read_piped_input()
    } else {
        None
    };

    let (title, content) = match (title, content, piped) {
        (title, Some(content), _) => (title.unwrap_or_default(), content),
        // A piped buffer without a title is read the way the editor buffer is
        (None, None, Some(buffer)) => {
            let parsed = EditorContent::from_buffer(&buffer);
            (parsed.title, parsed.content)
        }
        (Some(title), None, Some(buffer)) => (title, buffer.trim().to_string()),
        (title, None, None) if no_editor => (title.unwrap_or_default(), String::new()),
        (title, None, None) => {
            let edited = edit_content(&EditorContent::new(
                title.unwrap_or_default(),
                String::new(),
            ))?;
            (edited.title, edited.content)
        }
    };

    let mut session = Session::new();
    session.new_note();
    session.set_title(title);
    session.set_content(content);
    if let Some(tags) = tags {
        session.set_tag_input(tags);
    }

    let result = session.save(ctx.api.store_mut())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
    tags: Option<String>,
    untag: Vec<String>,
) -> Result<()> {
    let mut session = Session::new();
    if !session.edit_note(ctx.api.store(), id) {
        print_messages(&[CmdMessage::warning(format!("Note {} not found", id))]);
        return Ok(());
    }

    let has_field_flags =
        title.is_some() || content.is_some() || tags.is_some() || !untag.is_empty();

    if has_field_flags {
        if let Some(title) = title {
            session.set_title(title);
        }
        if let Some(content) = content {
            session.set_content(content);
        }
        if let Some(tags) = tags {
            session.set_tag_input(tags);
            session.commit_tag_input();
        }
        for tag in &untag {
            session.remove_tag(tag);
        }
    } else {
        let initial = session
            .editor()
            .map(|state| EditorContent::new(state.draft.title.clone(), state.draft.content.clone()));
        if let Some(initial) = initial {
            let edited = edit_content(&initial)?;
            session.set_title(edited.title);
            session.set_content(edited.content);
        }
    }

    let result = session.save(ctx.api.store_mut())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[NoteId]) -> Result<()> {
    let result = ctx.api.view_notes(ids)?;
    print!("{}", render_full_notes(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[NoteId]) -> Result<()> {
    let result = ctx.api.delete_notes(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tags()?;
    if !result.tags.is_empty() {
        print!("{}", render_text_list(&result.tags, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .list_all()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
