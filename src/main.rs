use anyhow::Result;
use clap::Parser;
use std::io;

use semver_bump::{
    bump_version_with, config, input, logging, ui, BumpKind, PromotionPolicy, VersionSource,
};

mod exit_codes;

#[derive(clap::Parser)]
#[command(
    name = "semver-bump",
    version,
    about = "Compute the next semantic version"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version to bump, with optional v/V prefix; read from stdin when omitted or '-'"
    )]
    input: Option<String>,

    #[arg(short, long, help = "Kind of version bump [major | minor | patch]")]
    kind: Option<String>,

    #[arg(short, long, help = "Increment the prerelease, or start a new rc.1 prerelease")]
    prerelease: bool,

    #[arg(long, value_enum, help = "How an existing prerelease is promoted to a release")]
    promotion: Option<PromotionPolicy>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    if let Err(err) = run(args) {
        ui::display_error(&err.to_string());
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let kind = args
        .kind
        .as_deref()
        .map(str::parse::<BumpKind>)
        .transpose()?;
    let options = config.bump_options(kind, args.prerelease, args.promotion);

    let source = VersionSource::from_arg(args.input.as_deref());
    let raw = input::resolve_version(&source, io::stdin().lock())?;

    let next = bump_version_with(&raw, &options)?;
    ui::write_version(&mut io::stdout().lock(), &next)?;

    Ok(())
}
