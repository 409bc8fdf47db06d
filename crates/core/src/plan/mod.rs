//! Incremental parsing of a streamed, newline-delimited content plan.

mod decode;
mod parser;
mod sanitize;

pub use decode::{DecodeError, JsonLineDecoder, LineDecoder};
pub use parser::{LineParser, ParseStats, Rejection};
pub use sanitize::{
    ArrayWrapperSanitizer, FenceSanitizer, LineSanitizer, NoopSanitizer, SanitizerChain,
};
