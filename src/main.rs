use clap::Parser;
use field_delegate::cli::commands::{build_tracer, cmd_check, cmd_read, cmd_resolve};
use field_delegate::cli::config::{
    Cli, Commands, load_config, resolve_format, resolve_output_path, resolve_trace_path,
};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Dispatch a subcommand. `Ok(false)` means it ran but something failed validation.
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref());
    let tracer = build_tracer(resolve_trace_path(cli.trace.as_deref(), &config));

    match cli.command {
        Commands::Read {
            field,
            image_id,
            text_id,
        } => {
            let value = cmd_read(
                &field,
                image_id.as_deref(),
                text_id.as_deref(),
                cli.verbose,
                &tracer,
            )?;
            println!("{}", value);
            Ok(true)
        }
        Commands::Resolve {
            layout,
            format,
            output,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            let output = resolve_output_path(output.as_deref(), &config);
            cmd_resolve(&layout, format, output, cli.verbose, &tracer)
        }
        Commands::Check { layout } => cmd_check(&layout, cli.verbose, &tracer),
    }
}
