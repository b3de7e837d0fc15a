use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use prisma_casefix::{run_recase, RecaseOptions, RecaseVariant};

#[derive(Parser)]
#[command(name = "prisma-casefix")]
#[command(author, version, about = "Recase table names in generated Prisma SQL migrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Replace occurrences of model names parsed from the schema file
    Schema,
    /// Capitalize backtick-quoted identifiers following a TABLE keyword
    Inline,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite table name casing in .sql migration files
    Recase {
        /// Path to the Prisma schema file (schema variant only)
        #[arg(short, long, default_value = "./prisma/schema.prisma")]
        schema: PathBuf,

        /// Root directory of the generated migrations
        #[arg(short, long, default_value = "./prisma/migrations")]
        migrations: PathBuf,

        /// Substitution rule to apply
        #[arg(long, value_enum, default_value = "schema")]
        variant: VariantArg,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recase {
            schema,
            migrations,
            variant,
            verbose,
        } => {
            let options = RecaseOptions {
                schema_path: schema,
                migrations_root: migrations,
                variant: match variant {
                    VariantArg::Schema => RecaseVariant::SchemaDriven,
                    VariantArg::Inline => RecaseVariant::InlineCapitalize,
                },
                verbose,
            };

            let report = run_recase(options)?;

            if !report.model_names.is_empty() {
                println!("Models: {}", report.model_names.join(", "));
            }
            println!(
                "Visited {} files, changed {} ({} matches)",
                report.files_visited, report.files_changed, report.matches_found
            );
        }
    }

    Ok(())
}
