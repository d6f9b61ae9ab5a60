/// A pull-based feed of characters.
///
/// The scanner asks for one character at a time until the source reports end
/// of input. Sources never rewind; the scanner buffers what it needs.
///
/// Every `Iterator<Item = char>` is a source, so `"var a".chars()` can be
/// scanned directly.
pub trait CharSource {
    /// Produces the next character, or `None` at end of input.
    fn next_char(&mut self) -> Option<char>;

    /// Drains the remaining characters into a string.
    fn read_all(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.next_char() {
            text.push(c);
        }
        text
    }
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}
