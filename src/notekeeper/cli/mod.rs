mod print;

use crate::args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use notekeeper::api::{CmdResult, ConfigAction, NoteListing, NotesApi};
use notekeeper::config::NotekeeperConfig;
use notekeeper::error::{NotekeeperError, Result};
use notekeeper::model::{DraftField, Page, TrashScope};
use notekeeper::store::fs_backend::FsBackend;
use print::{print_draft, print_messages, print_notes};
use std::path::PathBuf;

struct AppContext {
    api: NotesApi<FsBackend>,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New) => report(ctx.api.compose()?),
        Some(Commands::Open { id }) => handle_open(&mut ctx, &id),
        Some(Commands::Title { value }) => handle_edit(&mut ctx, DraftField::Title, value),
        Some(Commands::Text { value }) => handle_edit(&mut ctx, DraftField::Text, value),
        Some(Commands::Theme { value }) => handle_edit(&mut ctx, DraftField::Theme, value),
        Some(Commands::Font { value }) => handle_edit(&mut ctx, DraftField::Font, value),
        Some(Commands::Preset { value }) => handle_edit(&mut ctx, DraftField::Preset, value),
        Some(Commands::Fav) => {
            require_open_note(&ctx)?;
            report(ctx.api.toggle_favourite()?)
        }
        Some(Commands::Exit { page }) => handle_exit(&mut ctx, page),
        Some(Commands::Trash) => {
            require_open_note(&ctx)?;
            report(ctx.api.move_to_trash()?)
        }
        Some(Commands::Restore) => {
            require_open_note(&ctx)?;
            report(ctx.api.restore_from_trash()?)
        }
        Some(Commands::EmptyTrash { scope }) => handle_empty_trash(&mut ctx, &scope),
        Some(Commands::List {
            favourites,
            trashed,
        }) => handle_list(&ctx, favourites, trashed),
        Some(Commands::Show) => {
            print_draft(ctx.api.draft());
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "notekeeper", "notekeeper")
            .ok_or_else(|| NotekeeperError::Api("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = match NotekeeperConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
            NotekeeperConfig::default()
        }
    };

    let api = NotesApi::open(FsBackend::new(data_dir.clone()), &config)?;
    log::debug!("using snapshot at {}", api.slot_path().display());

    Ok(AppContext { api, data_dir })
}

fn report(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, id: &str) -> Result<()> {
    ctx.api.open_note(id)?;
    print_draft(ctx.api.draft());
    Ok(())
}

fn require_open_note(ctx: &AppContext) -> Result<()> {
    if !ctx.api.draft().is_note_dialog_visible {
        return Err(NotekeeperError::Api(
            "No note is open. Use `new` or `open <id>` first.".into(),
        ));
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, field: DraftField, value: String) -> Result<()> {
    require_open_note(ctx)?;
    report(ctx.api.edit(field, value)?)
}

fn handle_exit(ctx: &mut AppContext, page: Option<String>) -> Result<()> {
    require_open_note(ctx)?;
    let page = match page {
        Some(page) => {
            let Ok(page) = page.parse::<Page>();
            page
        }
        None => ctx.api.current_page(),
    };
    report(ctx.api.exit_note(&page)?)
}

fn handle_empty_trash(ctx: &mut AppContext, scope: &str) -> Result<()> {
    let scope: TrashScope = scope.parse()?;
    report(ctx.api.empty_trash(scope)?)
}

fn handle_list(ctx: &AppContext, favourites: bool, trashed: bool) -> Result<()> {
    let listing = if trashed {
        NoteListing::Trashed
    } else if favourites {
        NoteListing::Favourites
    } else {
        NoteListing::Active
    };
    let result = ctx.api.list(listing)?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = NotesApi::<FsBackend>::config(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("slot = {}", config.slot);
            println!("pretty = {}", config.pretty);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
