use clap::Parser;
use miette::Result;
use storyreq::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head` causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    storyreq::cli::logging::init(global.verbose);

    match cli.command {
        Commands::Analyze(args) => storyreq::cli::commands::analyze::run(args, &global),
        Commands::Catalog(args) => storyreq::cli::commands::catalog::run(args, &global),
        Commands::Validate(args) => storyreq::cli::commands::validate::run(args, &global),
        Commands::Schema => storyreq::cli::commands::schema::run(),
        Commands::Completions(args) => storyreq::cli::commands::completions::run(args),
    }
}
