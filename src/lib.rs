//! Hexlish - Hexadecimal / Hexlish Stream Transcoder
//!
//! A line-oriented transcoder between hexadecimal text and Hexlish, a fixed
//! 16-letter alphabet substituted for the hex digits:
//!
//! ```text
//! Hexlish:  A C E H I J L M N O P R S T U V
//! Hex:      0 1 2 3 4 5 6 7 8 9 A B C D E F
//! ```
//!
//! Input is read one line at a time and each line is rewritten under the
//! selected mode. Encoding folds letter case (both `a` and `A` become `P`),
//! so decoding always yields upper-case hex. Space, tab, CR and LF are
//! dropped from lines; any other character without a mapping passes through
//! unchanged.
//!
//! ## Example
//!
//! ```
//! use hexlish::{transcode_stream, Mode};
//!
//! let mut output = Vec::new();
//! transcode_stream(&b"DEADBEEF\n"[..], &mut output, Mode::Encode).unwrap();
//! assert_eq!(output, b"TUPTRUUV\n");
//!
//! let mut hex = Vec::new();
//! transcode_stream(&output[..], &mut hex, Mode::Decode).unwrap();
//! assert_eq!(hex, b"DEADBEEF\n");
//! ```

pub mod alphabet;
pub mod error;
pub mod transcode;

pub use alphabet::{translate, Mode};
pub use error::{HexlishError, Result};
pub use transcode::{transcode_line, transcode_stream, MAX_LINE_BYTES};
