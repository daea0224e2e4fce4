//! # CLI Dispatch
//!
//! - `run()`: parses arguments, builds the context and dispatches (called by `main.rs`)
//! - `init_context()`: logging, data directory, API, first-run seeding
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Handlers never contain business logic; anything beyond argument shaping and
//! printing belongs in `roster::commands`.

use super::render::{
    print_messages, render_cards, render_stats, render_summary, render_table, terminal_width,
};
use super::setup::{AddArgs, Cli, Commands, EditArgs, FilterArgs};
use clap::Parser;
use roster::api::{CmdResult, ConfigAction, RosterApi, RosterView};
use roster::config::{RosterConfig, ViewMode};
use roster::error::{Result, RosterError};
use roster::export::ExportScope;
use roster::init::initialize;
use roster::logging::init_logging;
use roster::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: RosterApi<FileStore>,
    config: RosterConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            filters,
            archived,
            view,
        }) => handle_list(&mut ctx, &filters, archived, view),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Edit(args)) => handle_edit(&mut ctx, &args),
        Some(Commands::View { ids }) => handle_view(&mut ctx, &ids),
        Some(Commands::Archive { ids }) => handle_archive(&mut ctx, &ids),
        Some(Commands::Restore { ids }) => handle_restore(&mut ctx, &ids),
        Some(Commands::Export {
            filters,
            archived,
            all,
            output,
        }) => handle_export(&mut ctx, &filters, view_for(archived), all, output),
        Some(Commands::Stats {
            filters,
            archived,
            all,
        }) => handle_stats(&mut ctx, &filters, view_for(archived), all),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&mut ctx, &FilterArgs::default(), false, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.as_deref())?;
    let mut ctx = AppContext {
        api: ctx.api,
        config: ctx.config,
    };

    // Maintenance commands see the store exactly as it is.
    let seeds = !matches!(
        cli.command,
        Some(Commands::Init | Commands::Clear { .. } | Commands::Config { .. })
    );
    if seeds && ctx.api.seed_if_empty()? {
        debug!("seeded empty roster with sample employees");
    }
    Ok(ctx)
}

fn view_for(archived: bool) -> RosterView {
    if archived {
        RosterView::Archived
    } else {
        RosterView::Active
    }
}

fn scope_for(all: bool) -> ExportScope {
    if all {
        ExportScope::All
    } else {
        ExportScope::Filtered
    }
}

fn print_employees(ctx: &AppContext, result: &CmdResult, mode: ViewMode) {
    let output = match mode {
        ViewMode::Table => render_table(&result.listed_employees, terminal_width()),
        ViewMode::Cards => render_cards(&result.listed_employees, ctx.api.today()),
    };
    print!("{}", output);
}

fn handle_list(
    ctx: &mut AppContext,
    filters: &FilterArgs,
    archived: bool,
    view: Option<ViewMode>,
) -> Result<()> {
    let result = ctx.api.list_employees(view_for(archived), &filters.to_spec())?;
    if let Some(summary) = &result.summary {
        print!("{}", render_summary(summary));
    }
    print_employees(ctx, &result, view.unwrap_or(ctx.config.view_mode));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let result = ctx.api.add_employee(args.into())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, args: &EditArgs) -> Result<()> {
    let result = ctx.api.edit_employee(&args.id, &args.to_update())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.view_employees(ids)?;
    print_employees(ctx, &result, ViewMode::Cards);
    print_messages(&result.messages);
    Ok(())
}

fn handle_archive(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.archive_employees(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.restore_employees(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &mut AppContext,
    filters: &FilterArgs,
    view: RosterView,
    all: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let result = ctx
        .api
        .export_employees(view, scope_for(all), filters.to_spec(), output)?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(
    ctx: &mut AppContext,
    filters: &FilterArgs,
    view: RosterView,
    all: bool,
) -> Result<()> {
    let result = ctx.api.stats(view, scope_for(all), &filters.to_spec())?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        println!("This will permanently remove all stored employees, archived ones included.");
        print!("[Y] To clear: ");
        io::stdout().flush().map_err(RosterError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(RosterError::Io)?;
        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (k, v) in config.entries() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
