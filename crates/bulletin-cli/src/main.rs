//! Bulletin CLI - keep a local collection of rich-text news posts
//!
//! The command-line interface over `bulletin-core`: list, search, sort and
//! page through posts, and publish, edit, pin or delete them.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod template;
mod ui;

use app::AppContext;
use cli::{Cli, Commands, ConfigCommand, ListArgs};
use errors::CliError;
use ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(err) = run(&ctx) {
        let ui = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        let code = match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                print_error(&ui, cli_err.message(), cli_err.hint());
                cli_err.exit_code()
            }
            None => {
                print_error(&ui, &format!("{:#}", err), None);
                1
            }
        };
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::New(args)) => commands::handle_new(ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(ctx, args),
        Some(Commands::Pin(args)) => commands::handle_pin(ctx, args, true),
        Some(Commands::Unpin(args)) => commands::handle_pin(ctx, args, false),
        Some(Commands::Delete(args)) => commands::handle_delete(ctx, args),
        Some(Commands::Config(ConfigCommand::Init { force })) => {
            commands::handle_config_init(ctx, *force)
        }
        Some(Commands::Config(ConfigCommand::Show { json })) => {
            commands::handle_config_show(ctx, *json)
        }
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
        None => commands::handle_list(ctx, &ListArgs::default()),
    }
}
