//! Letter counting helpers shared by the rankers.

use wordle_greedy::Word;

/// The number of times each letter, `a` through `z`, appears in the Wordle
/// guess word list.
pub const OCCURRENCES: [u32; 26] = [
    5990, 1627, 2028, 2453, 6662, 1115, 1644, 1760, 3759, 291, 1505, 3371, 1976, 2952, 4438, 2019,
    112, 4158, 6665, 3295, 2511, 694, 1039, 288, 2074, 434,
];

/// Returns the index of a lowercase ascii letter into a 26 letter table.
pub fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter - b'a') as usize)
}

/// Returns the number of times a lowercase ascii letter appears in the Wordle
/// guess word list, or `None` for anything else.
pub fn occurrences(letter: u8) -> Option<u32> {
    letter_index(letter).map(|i| OCCURRENCES[i])
}

/// Counts every letter of every word, repeated letters included.
pub fn letter_occurrences<'a>(words: impl IntoIterator<Item = &'a Word>) -> [u32; 26] {
    let mut counts = [0; 26];

    words
        .into_iter()
        .flat_map(|word| word.letters().iter().copied())
        .filter_map(letter_index)
        .for_each(|i| counts[i] += 1);

    counts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_lookups() {
        assert_eq!(occurrences(b'a'), Some(5990));
        assert_eq!(occurrences(b's'), Some(6665));
        assert_eq!(occurrences(b'z'), Some(434));
        assert_eq!(occurrences(b'A'), None);
        assert_eq!(occurrences(b'!'), None);
    }

    #[test]
    fn counting() {
        let words = [
            Word::from_str("speed").unwrap(),
            Word::from_str("sheep").unwrap(),
        ];
        let counts = letter_occurrences(&words);
        assert_eq!(counts[letter_index(b'e').unwrap()], 4);
        assert_eq!(counts[letter_index(b's').unwrap()], 2);
        assert_eq!(counts[letter_index(b'z').unwrap()], 0);
        assert_eq!(counts.iter().sum::<u32>(), 10);
    }
}
