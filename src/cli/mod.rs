pub mod context;
pub mod forms;
pub mod list_commands;
pub mod record_commands;

use serde::Serialize;
use tracing::info;

use crate::api::{EnvToken, HttpApi, MemoryApi, RecordApi};
use crate::config::{Config, ResourceKind};
use crate::error::MktResult;
use crate::model::{Campaign, Contact};
use crate::ops::Collection;
use crate::view::CollectionView;
use context::CLIContext;
use forms::Form;

/// Run the interactive REPL.
pub fn run(config: &Config) -> MktResult<()> {
    println!("Marketeer");
    println!("Type 'help' for commands, 'exit' to quit.");

    match config.resource {
        ResourceKind::Campaigns => run_collection::<Campaign>(config),
        ResourceKind::Contacts => run_collection::<Contact>(config),
    }
}

fn run_collection<R>(config: &Config) -> MktResult<()>
where
    R: Form + 'static,
    R::Draft: Serialize,
{
    let api: Box<dyn RecordApi<R>> = match &config.api_url {
        Some(url) => {
            info!(%url, resource = R::PATH, "using remote API");
            Box::new(HttpApi::new(
                url,
                Box::new(EnvToken::new(config.token_var.clone())),
                config.timeout,
            ))
        }
        None => {
            info!(resource = R::PATH, "offline, using demo data");
            println!("(offline: demo data, changes are not saved)");
            Box::new(MemoryApi::<R>::seeded(R::demo_drafts()))
        }
    };

    let view = CollectionView::new(config.page_size)?;
    let mut collection = Collection::new(view, api);
    if let Err(e) = collection.reload() {
        println!("Could not load {}: {}", config.resource.display_name(), e);
        println!("Use 'refresh' to try again.");
    }

    let mut ctx = CLIContext::new(collection, config.resource.display_name());
    repl_loop(&mut ctx);
    Ok(())
}

fn repl_loop<R: Form, A: RecordApi<R>>(ctx: &mut CLIContext<R, A>) {
    loop {
        if ctx.take_stale() {
            list_commands::render(ctx);
        }

        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Viewing
            "list" | "ls" => ctx.mark_stale(),
            "next" | "n" => list_commands::next(ctx),
            "prev" | "p" => list_commands::prev(ctx),
            "page" => list_commands::page(ctx, args),
            "search" | "find" => list_commands::search(ctx, args),
            "filter" => list_commands::filter(ctx, args),
            "sort" => list_commands::sort(ctx),

            // Changes
            "add" => record_commands::add(ctx, args),
            "delete" | "rm" => record_commands::delete(ctx, args),
            "copy" => record_commands::copy(ctx, args),
            "toggle" => record_commands::toggle(ctx, args),
            "refresh" => record_commands::refresh(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Viewing:
    list                    Show the current page
    next / prev             Move one page
    page <n>                Jump to a page
    search [text]           Search names and details (no text clears it)
    filter <tab>            all, visible (expanded) or hidden (collapsed)
    sort                    Toggle A-Z / Z-A

  Changes:
    add [name]              Create a record (interactive)
    delete <id>             Delete a record
    copy <id>               Duplicate a record
    toggle <id>             Expand or collapse a record
    refresh                 Reload from the server

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Search is case-insensitive and matches partial words
  - Rows marked '-' are expanded, '+' are collapsed"#);
}
