/// Character sources feeding the scanner.
pub mod source;
/// Text sinks for debug dumps and diagnostics.
pub mod sink;

pub use self::{
    sink::{BufferSink, ConsoleSink, OutputSink, Segment},
    source::CharSource,
};
