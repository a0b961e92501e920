use clap::Parser;

mod cli;
mod exits;
mod logging;
mod terminal;
mod tui;

fn main() -> anyhow::Result<()> {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args = cli::Args::parse();
    logging::init(&args.log_filter, args.log_file.as_deref(), !args.is_one_shot())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        if args.is_one_shot() {
            cli::run(args).await
        } else {
            tui::run(args).await
        }
    })
}
