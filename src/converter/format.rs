use crate::converter::tokenizer::{clean_word, split_words, Boundary, DigitPolicy};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // kebab-case rewrites the raw string, so it keeps digits and punctuation
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[\s_.]+").unwrap();
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").unwrap();
}

fn cleaned_words(input: &str, boundary: Boundary, digits: DigitPolicy) -> Vec<String> {
    split_words(input, boundary)
        .into_iter()
        .map(|word| clean_word(word, digits))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Format as camelCase. Separator-only input yields an empty string.
pub fn camel(input: &str, digits: DigitPolicy) -> String {
    let mut result = String::with_capacity(input.len());

    for (index, word) in cleaned_words(input, Boundary::LowerUpper, digits)
        .iter()
        .enumerate()
    {
        let word = word.to_ascii_lowercase();
        if index == 0 {
            result.push_str(&word);
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

/// Format as kebab-case.
///
/// Fails with [`Error::EmptyInput`] when the input is blank or consists only
/// of separators.
pub fn kebab(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let hyphenated = SEPARATOR_RUN.replace_all(trimmed, "-");
    let split = CASE_BOUNDARY.replace_all(&hyphenated, "${1}-${2}");
    let lowered = split.to_lowercase();
    let collapsed = HYPHEN_RUN.replace_all(&lowered, "-");
    let result = collapsed.trim_matches('-');

    if result.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(result.to_string())
}

/// Format as dot.case. Separator-only input yields an empty string.
pub fn dot(input: &str, digits: DigitPolicy) -> String {
    cleaned_words(input, Boundary::EveryUpper, digits)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel() {
        let strip = DigitPolicy::Strip;
        assert_eq!(camel("hello world", strip), "helloWorld");
        assert_eq!(camel("my-awesome-function", strip), "myAwesomeFunction");
        assert_eq!(camel("user_profile_name", strip), "userProfileName");
        assert_eq!(camel("HelloWorld", strip), "helloWorld");
        assert_eq!(camel("helloWorld", strip), "helloWorld");
        assert_eq!(camel("hello-world_test", strip), "helloWorldTest");
        assert_eq!(camel("XML HTTP REQUEST", strip), "xmlHttpRequest");
        assert_eq!(camel("XML-HTTP-REQUEST", strip), "xmlHttpRequest");
        assert_eq!(camel("HTML-to-XML", strip), "htmlToXml");
        assert_eq!(camel("SCREEN_NAME", strip), "screenName");
        assert_eq!(camel("first name", strip), "firstName");
    }

    #[test]
    fn test_camel_edge_cases() {
        let strip = DigitPolicy::Strip;
        assert_eq!(camel("", strip), "");
        assert_eq!(camel("   ", strip), "");
        assert_eq!(camel("hello123world", strip), "helloworld");
        assert_eq!(camel("123 hello", strip), "hello");
        assert_eq!(camel("hello!!! world?", strip), "helloWorld");
    }

    #[test]
    fn test_camel_keeps_digits_when_asked() {
        assert_eq!(camel("hello123world", DigitPolicy::Keep), "hello123world");
        assert_eq!(camel("user id 2", DigitPolicy::Keep), "userId2");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(kebab("HelloWorld").unwrap(), "hello-world");
        assert_eq!(kebab("camelCaseString").unwrap(), "camel-case-string");
        assert_eq!(kebab("PascalCaseString").unwrap(), "pascal-case-string");
        assert_eq!(kebab("snake_case_string").unwrap(), "snake-case-string");
        assert_eq!(kebab("String with spaces").unwrap(), "string-with-spaces");
        assert_eq!(kebab("  --Hello__World--  ").unwrap(), "hello-world");
        assert_eq!(kebab("dot.case.words").unwrap(), "dot-case-words");
        assert_eq!(kebab("version2Update").unwrap(), "version2update");
    }

    #[test]
    fn test_kebab_lowercases_non_ascii_letters() {
        assert_eq!(kebab("Café Au").unwrap(), "café-au");
        assert_eq!(kebab("ÜBER_Straße").unwrap(), "über-straße");
    }

    #[test]
    fn test_kebab_rejects_empty_input() {
        assert_eq!(kebab(""), Err(Error::EmptyInput));
        assert_eq!(kebab(" \t\n"), Err(Error::EmptyInput));
        assert_eq!(kebab("-_.-"), Err(Error::EmptyInput));
    }

    #[test]
    fn test_dot() {
        let strip = DigitPolicy::Strip;
        assert_eq!(dot("hello world", strip), "hello.world");
        assert_eq!(dot("hello-world", strip), "hello.world");
        assert_eq!(dot("hello_world", strip), "hello.world");
        assert_eq!(dot("helloWorld", strip), "hello.world");
        assert_eq!(dot("HelloWorld", strip), "hello.world");
        assert_eq!(dot("XMLHttpRequest", strip), "x.m.l.http.request");
        assert_eq!(dot("hello.world.test", strip), "hello.world.test");
        assert_eq!(dot("hello-world_test", strip), "hello.world.test");
    }

    #[test]
    fn test_dot_edge_cases() {
        let strip = DigitPolicy::Strip;
        assert_eq!(dot("", strip), "");
        assert_eq!(dot("   ", strip), "");
        assert_eq!(dot("hello123world", strip), "helloworld");
        assert_eq!(dot("hello123world", DigitPolicy::Keep), "hello123world");
        assert_eq!(dot("HTTP_STATUS", strip), "http.status");
    }
}
