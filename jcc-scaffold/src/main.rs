use clap::Parser;
use jcc_scaffold::logging::init_tracing;
use jcc_scaffold::pipeline::{report, Scaffolder};
use jcc_scaffold::prompt::DialoguerPrompter;
use jcc_scaffold::runner::SystemRunner;
use jcc_scaffold::ScaffoldConfig;

#[derive(Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Create a new jcc-express-mvc project from a starter template"
)]
struct Cli {
    /// Project name (letters, digits, '-' and '_'); prompted for when omitted
    project_name: Option<String>,

    /// Git executable used to fetch the template
    #[arg(long, env = "SCAFFOLD_GIT", default_value = "git")]
    git: String,

    /// Package manager used to install the template's dependencies
    #[arg(long, env = "SCAFFOLD_PACKAGE_MANAGER", default_value = "npm")]
    package_manager: String,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = ScaffoldConfig::with_tools(cli.git, cli.package_manager);
    let result = Scaffolder::in_current_dir(config, SystemRunner).and_then(|scaffolder| {
        let outcome = scaffolder.run(cli.project_name.as_deref(), &mut DialoguerPrompter)?;
        report(&mut std::io::stdout().lock(), &outcome, scaffolder.config())?;
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
