use crate::cli::args::InitArgs;
use crate::exit_codes;
use viva_core::config;

pub fn run(args: InitArgs) -> anyhow::Result<i32> {
    if args.out.exists() && !args.force {
        println!("Skipped {} (exists, pass --force to overwrite)", args.out.display());
        return Ok(exit_codes::SUCCESS);
    }
    config::write_sample_config(&args.out)?;
    println!("Created {}", args.out.display());
    println!("Edit the persona and tests, then try 'viva run --provider fake'.");
    Ok(exit_codes::SUCCESS)
}
