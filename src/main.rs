//! pdf-creator CLI: create a document from a JSON job file

use clap::Parser;
use pdf_creator::{DocumentCreator, Job, Output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf-creator")]
#[command(version)]
#[command(about = "Create a PDF from a JSON job file", long_about = None)]
struct Cli {
    /// Job file describing the output file, page setup and content
    #[arg(value_name = "JOB")]
    job: PathBuf,

    /// Print the result as JSON instead of the file name
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> pdf_creator::Result<Output> {
    let text = std::fs::read_to_string(&cli.job)?;
    let job = Job::from_json(&text)?;
    let creator: DocumentCreator = DocumentCreator::default();
    creator.run(&job)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) if cli.json => match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Ok(Output {
            success: true,
            file_name: Some(path),
        }) => println!("{}", path.display()),
        Ok(_) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
