//! Splitting text into individually animated units.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SplitMode {
    #[default]
    Chars,
    Words,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Segment {
    /// An animated unit and its position in the stagger order.
    Unit { text: String, index: usize },
    /// Whitespace kept between units; it is never animated.
    Gap(String),
}

pub fn split(text: &str, mode: SplitMode) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut index = 0;
    let mut gap = String::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_whitespace() {
            flush_word(&mut segments, &mut word, &mut index);
            gap.push(ch);
            continue;
        }

        if !gap.is_empty() {
            segments.push(Segment::Gap(std::mem::take(&mut gap)));
        }

        match mode {
            SplitMode::Chars => {
                segments.push(Segment::Unit {
                    text: ch.to_string(),
                    index,
                });
                index += 1;
            }
            SplitMode::Words => word.push(ch),
        }
    }

    flush_word(&mut segments, &mut word, &mut index);
    if !gap.is_empty() {
        segments.push(Segment::Gap(gap));
    }
    segments
}

fn flush_word(segments: &mut Vec<Segment>, word: &mut String, index: &mut usize) {
    if word.is_empty() {
        return;
    }
    segments.push(Segment::Unit {
        text: std::mem::take(word),
        index: *index,
    });
    *index += 1;
}

pub fn unit_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|segment| matches!(segment, Segment::Unit { .. }))
        .count()
}

/// Start offset of unit `index` relative to the first unit.
pub fn stagger_delay_ms(index: usize, delay_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(text: &str, index: usize) -> Segment {
        Segment::Unit {
            text: text.to_string(),
            index,
        }
    }

    #[test]
    fn chars_skip_whitespace_when_numbering() {
        let segments = split("ab c", SplitMode::Chars);
        assert_eq!(
            segments,
            vec![
                unit("a", 0),
                unit("b", 1),
                Segment::Gap(" ".to_string()),
                unit("c", 2),
            ]
        );
    }

    #[test]
    fn words_keep_runs_of_whitespace_as_one_gap() {
        let segments = split("Full  Stack Dev ", SplitMode::Words);
        assert_eq!(
            segments,
            vec![
                unit("Full", 0),
                Segment::Gap("  ".to_string()),
                unit("Stack", 1),
                Segment::Gap(" ".to_string()),
                unit("Dev", 2),
                Segment::Gap(" ".to_string()),
            ]
        );
        assert_eq!(unit_count(&segments), 3);
    }

    #[test]
    fn three_units_are_offset_by_multiples_of_the_delay() {
        let segments = split("xyz", SplitMode::Chars);
        assert_eq!(unit_count(&segments), 3);

        for delay in [0, 1, 10, 250, 1_000] {
            let starts: Vec<u32> = segments
                .iter()
                .filter_map(|segment| match segment {
                    Segment::Unit { index, .. } => Some(stagger_delay_ms(*index, delay)),
                    Segment::Gap(_) => None,
                })
                .collect();
            for (i, start) in starts.iter().enumerate() {
                assert_eq!(start - starts[0], i as u32 * delay);
            }
        }
    }

    #[test]
    fn multibyte_characters_split_on_char_boundaries() {
        let segments = split("Olá", SplitMode::Chars);
        assert_eq!(segments.last(), Some(&unit("á", 2)));
    }

    #[test]
    fn empty_text_has_no_units() {
        assert!(split("", SplitMode::Words).is_empty());
        assert_eq!(unit_count(&split("   ", SplitMode::Chars)), 0);
    }
}
