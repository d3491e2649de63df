//! docshift CLI - Command-line interface library
//!
//! This library provides the conversion entry point and the CLI built on it:
//! - Convert: `.md` → `.docx`, `.docx` → `.md`, `.xlsx` → `.md`
//! - Info: show which conversion applies to a file
//!
//! # Library Usage
//!
//! ```no_run
//! use std::path::Path;
//! use docshift_cli::{convert, spawn_conversion, ConversionEvent};
//!
//! // Convert on the current thread
//! let output = convert(Path::new("notes.md"), Path::new("out"), &mut |p: u8| {
//!     println!("{}%", p);
//! })?;
//!
//! // Or on a background worker
//! for event in spawn_conversion("report.docx".into(), "out".into()) {
//!     if let ConversionEvent::Done { output } = event {
//!         println!("wrote {}", output.display());
//!     }
//! }
//! # Ok::<(), docshift_cli::ConversionError>(())
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Markdown to Word, into the Downloads folder
//! docshift convert notes.md
//!
//! # Excel to Markdown with machine-readable progress
//! docshift convert data.xlsx --output result/ --format json
//!
//! # Which conversion applies?
//! docshift info report.docx
//! ```

pub mod app;
pub mod config;
pub mod convert;
pub mod worker;

// Re-export main entry point and types
pub use app::{convert_command, info_command, init_tracing, run_cli, OutputFormat};
pub use config::{default_output_dir, Settings};
pub use convert::{convert, describe, output_path, ConversionError, ConversionKind};
pub use worker::{spawn_conversion, ConversionEvent};
