//! Member list input: plain rosters and chat-log extraction.

use crate::classifier::AdminKeywords;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::io::BufRead;

/// `<digits>-<field>-<rest>`, the usual roster nickname layout.
static ROSTER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+-[^-]+-.*").expect("roster pattern is a valid regex")
});

/// One member per line. Lines are trimmed; blank lines are skipped.
pub fn read_members<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut members = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            members.push(trimmed.to_string());
        }
    }
    Ok(members)
}

/// Drop repeated members, keeping the first occurrence in place.
pub fn dedup_preserving_order(members: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(members.len());
    members
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

/// Pull member names out of exported chat lines.
///
/// A line is kept when it follows the roster layout or mentions an admin
/// keyword. The result is trimmed and deduplicated.
pub fn extract_from_chat_lines<I, S>(lines: I, admin_keywords: &AdminKeywords) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let members = lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref();
            if ROSTER_LINE.is_match(line) || admin_keywords.matches(line) {
                let trimmed = line.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            } else {
                None
            }
        })
        .collect();
    dedup_preserving_order(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_members_skips_blank_lines() {
        let input = "002-广州-李四\n\n   \n  纽约-Tom  \r\n某某";
        let members = read_members(Cursor::new(input)).unwrap();
        assert_eq!(members, vec!["002-广州-李四", "纽约-Tom", "某某"]);
    }

    #[test]
    fn test_dedup_preserving_order() {
        let members = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedup_preserving_order(members), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_extract_from_chat_lines() {
        let keywords = AdminKeywords::new(["马哥"]);
        let lines = [
            "002-广州-李四",
            "今天天气不错",
            "马哥教育-小助手",
            "abc-广州-李四",
            "002-广州-李四",
            "15-沪-王五 ",
        ];
        assert_eq!(
            extract_from_chat_lines(lines, &keywords),
            vec!["002-广州-李四", "马哥教育-小助手", "15-沪-王五"]
        );
    }

    #[test]
    fn test_roster_pattern_requires_three_fields() {
        assert!(ROSTER_LINE.is_match("1-a-"));
        assert!(!ROSTER_LINE.is_match("1-a"));
        assert!(!ROSTER_LINE.is_match("1--b"));
    }
}
