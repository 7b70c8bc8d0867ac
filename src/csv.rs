use crate::models::WordPair;

/// Split one `english,japanese` row. Either field may be double-quoted, which
/// is how a translation list containing ASCII commas survives; `""` inside a
/// quoted field is a literal quote. Anything after the second field is ignored.
pub fn parse_word_line(line: &str) -> Option<(String, String)> {
    let mut fields = [String::new(), String::new()];
    let mut field = 0;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                fields[field].push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                if field == 1 {
                    break;
                }
                field = 1;
            }
            _ => fields[field].push(c),
        }
    }

    if field == 0 {
        return None;
    }
    let [english, japanese] = fields;
    Some((english.trim().to_string(), japanese.trim().to_string()))
}

fn is_header(english: &str, japanese: &str) -> bool {
    english.eq_ignore_ascii_case("english") && japanese.eq_ignore_ascii_case("japanese")
}

/// Rows without both fields are skipped and counted.
pub fn parse_word_csv(content: &str) -> (Vec<WordPair>, usize) {
    let mut words = Vec::new();
    let mut skipped = 0;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_word_line(line) {
            Some((english, japanese)) if index == 0 && is_header(&english, &japanese) => {}
            Some((english, japanese)) if !english.is_empty() && !japanese.is_empty() => {
                words.push(WordPair { english, japanese });
            }
            _ => skipped += 1,
        }
    }

    (words, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_row() {
        let (english, japanese) = parse_word_line("dog,犬").unwrap();
        assert_eq!(english, "dog");
        assert_eq!(japanese, "犬");
    }

    #[test]
    fn test_parse_quoted_translation_list() {
        let (english, japanese) = parse_word_line("\"cat\",\"猫, ねこ\"").unwrap();
        assert_eq!(english, "cat");
        assert_eq!(japanese, "猫, ねこ");
    }

    #[test]
    fn test_japanese_comma_needs_no_quotes() {
        let (_, japanese) = parse_word_line("cat,猫、ねこ").unwrap();
        assert_eq!(japanese, "猫、ねこ");
    }

    #[test]
    fn test_parse_escaped_quotes() {
        let (english, _) = parse_word_line("\"say \"\"hi\"\"\",こんにちは").unwrap();
        assert_eq!(english, "say \"hi\"");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let (english, japanese) = parse_word_line("dog,犬,noun").unwrap();
        assert_eq!(english, "dog");
        assert_eq!(japanese, "犬");
    }

    #[test]
    fn test_single_field_row_rejected() {
        assert!(parse_word_line("dog").is_none());
    }

    #[test]
    fn test_parse_csv_skips_header_and_blank_rows() {
        let content = "english,japanese\ndog,犬\n\n\"cat\",\"猫, ねこ\"\n,空\nbird,\nfish\n";
        let (words, skipped) = parse_word_csv(content);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], WordPair::new("dog", "犬"));
        assert_eq!(words[1], WordPair::new("cat", "猫, ねこ"));
        assert_eq!(skipped, 3);
    }
}
