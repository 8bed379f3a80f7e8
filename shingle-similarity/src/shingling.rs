/// Iterator over the `window_size`-character substrings of a text.
///
/// `offsets` holds the byte offset of every character followed by the text length,
/// so a window of `w` characters starting at character `i` spans
/// `offsets[i]..offsets[i + w]`.
///
/// Yielded windows borrow only the text, not the offsets.
pub struct ShingleIter<'t, 'o> {
    text: &'t str,
    offsets: &'o [usize],
    window_size: usize,
    position: usize,
}

impl<'t, 'o> ShingleIter<'t, 'o> {
    pub fn new(text: &'t str, offsets: &'o [usize], window_size: usize) -> Self {
        debug_assert_eq!(offsets.last().copied(), Some(text.len()));
        Self {
            text,
            offsets,
            window_size,
            position: 0,
        }
    }
}

impl<'t, 'o> Iterator for ShingleIter<'t, 'o> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offsets.len() <= self.position + self.window_size {
            return None;
        }
        let start = self.offsets[self.position];
        let end = self.offsets[self.position + self.window_size];
        self.position += 1;
        Some(&self.text[start..end])
    }
}

/// Fills `offsets` with the character boundaries of `text`, including the end.
pub fn char_offsets(text: &str, offsets: &mut Vec<usize>) {
    offsets.clear();
    offsets.extend(text.char_indices().map(|(i, _)| i));
    offsets.push(text.len());
}
