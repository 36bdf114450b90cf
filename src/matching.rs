//! # Abbreviation Matching
//!
//! Commands, options and enum members are all resolved with the same rule:
//! every candidate whose primary or alternate name starts with the token
//! (ignoring case) is collected. A single candidate wins outright. When
//! several match, the one whose name *equals* the token wins; if none does the
//! match is ambiguous.
//!
//! The empty token is a prefix of every name, so it resolves to the only
//! candidate when there is one and is ambiguous otherwise.

/// Something that can be matched by name.
pub trait Named {
    /// The primary name, also used when listing ambiguous candidates.
    fn primary_name(&self) -> &str;

    /// An optional alternate (usually short) name.
    fn alt_name(&self) -> Option<&str> {
        None
    }
}

impl Named for str {
    fn primary_name(&self) -> &str {
        self
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn primary_name(&self) -> &str {
        (**self).primary_name()
    }

    fn alt_name(&self) -> Option<&str> {
        (**self).alt_name()
    }
}

/// Outcome of resolving a token against a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<K> {
    /// Exactly one candidate matched, or an exact name broke the tie.
    Unique(K),
    /// No candidate starts with the token.
    Unknown,
    /// Several candidates start with the token; holds their primary names.
    Ambiguous(Vec<String>),
}

/// Resolves `token` against `(key, named)` candidates, returning the key of
/// the winner.
pub fn resolve_partial<K, N, I>(candidates: I, token: &str) -> Resolution<K>
where
    I: IntoIterator<Item = (K, N)>,
    N: Named,
{
    let mut matches: Vec<(K, N)> = candidates
        .into_iter()
        .filter(|(_, named)| {
            starts_with_ignore_case(named.primary_name(), token)
                || named
                    .alt_name()
                    .is_some_and(|alt| starts_with_ignore_case(alt, token))
        })
        .collect();

    if matches.len() > 1 {
        let exact = matches.iter().position(|(_, named)| {
            eq_ignore_case(named.primary_name(), token)
                || named.alt_name().is_some_and(|alt| eq_ignore_case(alt, token))
        });

        return match exact {
            Some(index) => Resolution::Unique(matches.swap_remove(index).0),
            None => Resolution::Ambiguous(
                matches
                    .iter()
                    .map(|(_, named)| named.primary_name().to_string())
                    .collect(),
            ),
        };
    }

    match matches.pop() {
        Some((key, _)) => Resolution::Unique(key),
        None => Resolution::Unknown,
    }
}

/// Case-insensitive equality, with the same case fold as
/// [`starts_with_ignore_case`].
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive `starts_with`.
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Candidate {
        name: &'static str,
        alt: Option<&'static str>,
    }

    impl Named for Candidate {
        fn primary_name(&self) -> &str {
            self.name
        }

        fn alt_name(&self) -> Option<&str> {
            self.alt
        }
    }

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate { name: "project", alt: None },
            Candidate { name: "props", alt: None },
            Candidate { name: "help", alt: Some("?") },
            Candidate { name: "tags", alt: None },
            Candidate { name: "tag", alt: None },
        ]
    }

    fn resolve(token: &str) -> Resolution<&'static str> {
        let candidates = candidates();
        resolve_partial(candidates.iter().map(|c| (c.name, c)), token)
    }

    #[test]
    fn test_unique_prefix() {
        assert_eq!(resolve("proj"), Resolution::Unique("project"));
        assert_eq!(resolve("h"), Resolution::Unique("help"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(resolve("PROJ"), Resolution::Unique("project"));
        assert_eq!(resolve("Help"), Resolution::Unique("help"));
    }

    #[test]
    fn test_alt_name_matches() {
        assert_eq!(resolve("?"), Resolution::Unique("help"));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(resolve("verbose"), Resolution::Unknown);
    }

    #[test]
    fn test_ambiguous_lists_candidates_in_order() {
        assert_eq!(
            resolve("pro"),
            Resolution::Ambiguous(vec!["project".to_string(), "props".to_string()])
        );
    }

    #[test]
    fn test_exact_name_breaks_tie() {
        assert_eq!(resolve("tag"), Resolution::Unique("tag"));
        assert_eq!(resolve("TAGS"), Resolution::Unique("tags"));
    }

    #[test]
    fn test_empty_token_is_ambiguous_across_many() {
        match resolve("") {
            Resolution::Ambiguous(names) => assert_eq!(names.len(), 5),
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_token_with_single_candidate() {
        let only = [Candidate { name: "version", alt: None }];
        assert_eq!(
            resolve_partial(only.iter().map(|c| (c.name, c)), ""),
            Resolution::Unique("version")
        );
    }

    #[test]
    fn test_case_fold_covers_non_ascii() {
        assert!(eq_ignore_case("Überprüfen", "überPRÜFEN"));
        assert!(starts_with_ignore_case("Überprüfen", "ÜB"));
        assert!(!eq_ignore_case("über", "uber"));
    }

    #[test]
    fn test_plain_strings_are_named() {
        let members = ["Minimal", "Maximal", "Normal"];
        assert_eq!(
            resolve_partial(members.iter().enumerate().map(|(i, m)| (i, *m)), "min"),
            Resolution::Unique(0)
        );
        assert_eq!(
            resolve_partial(members.iter().enumerate().map(|(i, m)| (i, *m)), "m"),
            Resolution::Ambiguous(vec!["Minimal".to_string(), "Maximal".to_string()])
        );
    }
}
