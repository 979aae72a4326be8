use clap::Parser;

use probe_bench::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let summary = probe_bench::run(&args)?;

    println!();
    println!("{summary}");
    Ok(())
}
