use crate::{error::Error, io::OutputSink};

/// Placeholder highlighted when an error points past the last character.
const END_OF_INPUT: &str = "<end of input>";

/// Renders `error` against `source` into `sink`.
///
/// The source before the failing span is written plainly, the span itself is
/// written error-styled, and the message chain follows on its own lines, one
/// message per layer with deeper causes indented further. The remaining source
/// text is reproduced after the messages.
///
/// # Example
/// ```
/// use sprig::{
///     error::{Error, diagnostic::render},
///     io::BufferSink,
///     util::span::Span,
/// };
///
/// let source = "print(x)";
/// let error = Error::runtime("variable `x` is not declared", Span::new(6, 7));
/// let mut sink = BufferSink::new();
///
/// render(source, &error, &mut sink);
///
/// assert_eq!(sink.text(), "print(x\nruntime error: variable `x` is not declared\n)");
/// ```
pub fn render(source: &str, error: &Error, sink: &mut dyn OutputSink) {
    let range = error.span.clamp(source.len());
    let (before, highlighted, after) = match (source.get(..range.start),
                                              source.get(range.clone()),
                                              source.get(range.end..))
    {
        (Some(before), Some(highlighted), Some(after)) => (before, highlighted, after),
        _ => (source, "", ""),
    };

    sink.write(before);
    if highlighted.is_empty() {
        sink.write_error(END_OF_INPUT);
    } else {
        sink.write_error(highlighted);
    }
    sink.write("\n");

    for (depth, message) in error.chain().enumerate() {
        let indent = "  ".repeat(depth);
        sink.write_error(&format!("{indent}{} error: {message}\n", error.kind));
    }

    sink.write(after);
}
