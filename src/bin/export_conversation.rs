//! Export a conversation (JSON) or a markdown file to PDF.
//!
//! Usage:
//!   cargo run --release --bin export_conversation -- chat.json
//!   cargo run --release --bin export_conversation -- notes.md --output-dir out --product Claude
//!
//! Options:
//!   --output-dir DIR   Directory for the PDF (default: current directory)
//!   --product NAME     Product name for the title, labels and file name
//!   --markdown         Treat the input as markdown regardless of extension
//!   --compress         Deflate content streams

use convo_pdf::api::{export_conversation, export_markdown, export_tree, Conversation, Export};
use convo_pdf::config::ExportConfig;
use convo_pdf::converters::ContentNode;
use std::fs;
use std::path::{Path, PathBuf};

struct CliArgs {
    input: PathBuf,
    output_dir: PathBuf,
    product: Option<String>,
    markdown: bool,
    compress: bool,
}

impl CliArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output_dir = PathBuf::from(".");
        let mut product = None;
        let mut markdown = false;
        let mut compress = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output-dir" => {
                    i += 1;
                    let dir = args.get(i).ok_or("--output-dir needs a value")?;
                    output_dir = PathBuf::from(dir);
                },
                "--product" => {
                    i += 1;
                    let name = args.get(i).ok_or("--product needs a value")?;
                    product = Some(name.clone());
                },
                "--markdown" => markdown = true,
                "--compress" => compress = true,
                other if other.starts_with("--") => {
                    return Err(format!("unknown option {}", other));
                },
                other => input = Some(PathBuf::from(other)),
            }
            i += 1;
        }

        let input = input.ok_or("missing input file")?;
        Ok(Self {
            input,
            output_dir,
            product,
            markdown,
            compress,
        })
    }

    fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::default().with_compress(self.compress);
        if let Some(product) = &self.product {
            config = config
                .with_product(product.as_str())
                .with_assistant_label(product.as_str());
        }
        config
    }

    fn is_markdown(&self) -> bool {
        self.markdown
            || matches!(
                self.input.extension().and_then(|e| e.to_str()),
                Some("md") | Some("markdown")
            )
    }
}

fn export_file(args: &CliArgs, config: &ExportConfig) -> convo_pdf::Result<Export> {
    let input = fs::read_to_string(&args.input)?;
    if args.is_markdown() {
        return export_markdown(&input, config);
    }

    match serde_json::from_str::<Conversation>(&input) {
        Ok(conversation) => export_conversation(&conversation, config),
        Err(e) => {
            log::debug!("Not a conversation ({}), trying a bare content tree", e);
            let tree: ContentNode = serde_json::from_str(&input)?;
            export_tree(&tree, config)
        },
    }
}

fn run(args: &CliArgs) -> convo_pdf::Result<PathBuf> {
    let config = args.export_config();
    let export = export_file(args, &config)?;
    fs::create_dir_all(&args.output_dir)?;
    export.save_to(&args.output_dir)
}

fn usage(program: &Path) {
    eprintln!(
        "Usage: {} <input.json|input.md> [--output-dir DIR] [--product NAME] [--markdown] [--compress]",
        program.display()
    );
}

fn main() {
    env_logger::init();

    let args = match CliArgs::from_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            let program = std::env::args().next().unwrap_or_default();
            usage(Path::new(&program));
            std::process::exit(2);
        },
    };

    match run(&args) {
        Ok(path) => println!("Saved {}", path.display()),
        Err(e) => {
            eprintln!("Failed to export {}: {}", args.input.display(), e);
            std::process::exit(1);
        },
    }
}
