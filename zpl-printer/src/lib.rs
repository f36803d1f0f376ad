//! # zpl-printer
//!
//! Raw-socket label printing - transport only.
//!
//! ## Scope
//!
//! This crate handles HOW a job reaches the printer:
//! - TCP transport to the raw printing port (9100)
//! - Per-phase deadlines (connect, write)
//! - Reachability probing
//!
//! What to print (ZPL generation, label layout) stays in application
//! code; the payload is an opaque byte blob here and is forwarded
//! verbatim.
//!
//! ## Example
//!
//! ```ignore
//! use zpl_printer::{NetworkPrinter, Printer, RAW_PRINT_PORT};
//!
//! let zpl = "^XA\n^FO20,105^A0N,36,36^FDBHCS 1/4\"-20x3\"^FS\n^XZ\n";
//!
//! let printer = NetworkPrinter::new("10.50.10.92", RAW_PRINT_PORT);
//! printer.print(zpl.as_bytes()).await?;
//! ```

mod error;
mod printer;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use printer::{DEFAULT_TIMEOUT, NetworkPrinter, Printer, RAW_PRINT_PORT};
