use clap::{Parser, Subcommand};
use poxls::cli;
use poxls::error::PoxlsResult;
use poxls::types::{CommentKind, ExportOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poxls")]
#[command(about = "Convert gettext PO translation catalogs to XLSX spreadsheets and back")]
#[command(long_about = "poxls - PO ↔ XLSX translation catalog converter

Hands a set of gettext catalogs to translators as a spreadsheet and turns
the edited spreadsheet back into catalogs.

COMMANDS:
  export  - PO catalogs to one .xlsx workbook (one column per locale)
  import  - one locale column of a .xlsx workbook back to a .po catalog

EXAMPLES:
  poxls export locales/nl.po locales/fr.po -o messages.xlsx
  poxls export nl:locales/nl/mydomain.po -c all
  poxls import nl messages.xlsx locales/nl.po")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert PO catalogs to an XLSX workbook.

The locale naming each translation column is guessed from the \"Language\"
key in the PO metadata, falling back to the file name. It can also be given
manually by prefixing the path with \"<locale>:\".
For example: \"nl:locales/nl/mydomain.po\".

The workbook gets a bold, frozen header row, fixed column widths, and
fuzzy translations styled in italic. With --lock, the sheet is protected
and only the translation cells stay editable.")]
    /// Convert PO catalogs to an XLSX workbook
    Export {
        /// PO catalogs, optionally prefixed with "<locale>:"
        #[arg(required = true)]
        catalogs: Vec<String>,

        /// Output workbook path
        #[arg(short, long, default_value = "messages.xlsx")]
        output: PathBuf,

        /// Comment columns to include in the spreadsheet
        #[arg(short, long, value_enum, default_values_t = [CommentKind::Notes])]
        comments: Vec<CommentKind>,

        /// Width of the message context column
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(..=200))]
        width_context: u16,

        /// Width of the message id column
        #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(..=200))]
        width_msgid: u16,

        /// Width of the comment columns
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(..=200))]
        width_comments: u16,

        /// Width of the locale columns
        #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(..=200))]
        width_locale: u16,

        /// Do not wrap text in the message id column
        #[arg(long)]
        no_wrap_msgid: bool,

        /// Do not wrap text in the locale columns
        #[arg(long)]
        no_wrap_locale: bool,

        /// Wrap text in the comment columns (default: shrink to fit)
        #[arg(long)]
        wrap_comments: bool,

        /// Always write the message context column
        #[arg(long)]
        with_context: bool,

        /// Protect the sheet, leaving only translation cells editable
        #[arg(long)]
        lock: bool,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Convert one locale column of an XLSX workbook to a PO catalog.

Every sheet in the workbook is scanned. The header row recovers the column
mapping by name; rows without a message id are skipped, and non-text cells
are coerced to text with a warning.

When the output catalog already exists, its metadata headers are carried
over so project information survives the round-trip (disable with
--no-copy-metadata). The PO-Revision-Date is taken from the workbook.")]
    /// Convert one locale column of an XLSX workbook to a PO catalog
    Import {
        /// Locale column to extract (e.g. "nl", "zh_CN")
        locale: String,

        /// Input workbook (.xlsx)
        input: PathBuf,

        /// Output catalog (.po)
        output: PathBuf,

        /// Do not carry metadata over from an existing output catalog
        #[arg(long)]
        no_copy_metadata: bool,

        /// Show verbose import steps
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> PoxlsResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            catalogs,
            output,
            comments,
            width_context,
            width_msgid,
            width_comments,
            width_locale,
            no_wrap_msgid,
            no_wrap_locale,
            wrap_comments,
            with_context,
            lock,
            verbose,
        } => {
            let options = ExportOptions {
                width_context,
                width_msgid,
                width_comments,
                width_locale,
                wrap_msgid: !no_wrap_msgid,
                wrap_comments,
                wrap_locale: !no_wrap_locale,
                always_write_context: with_context,
                lock_sheet: lock,
                ..Default::default()
            };
            cli::export(&catalogs, &output, &comments, options, verbose)
        }

        Commands::Import {
            locale,
            input,
            output,
            no_copy_metadata,
            verbose,
        } => cli::import(&locale, &input, &output, !no_copy_metadata, verbose),
    }
}
