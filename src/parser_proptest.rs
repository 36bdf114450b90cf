//! Property-based tests for command resolution, option resolution and
//! binding.
//!
//! These tests use proptest to generate argument vectors, registries and
//! abbreviations and verify that the resolver's and binder's invariants hold
//! for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::error::CommandLineError;
    use crate::matching::{eq_ignore_case, resolve_partial, starts_with_ignore_case, Named, Resolution};
    use crate::options::options_of;
    use crate::parser::extract_options;
    use crate::registry::CommandRegistry;
    use crate::testing::{NamedCommand, SampleCommand};
    use proptest::prelude::*;

    const VOCABULARY: &[&str] = &[
        "-tags", "a;b", "-props", "k=v", "-v", "-verbose-", "pos", "-mode", "min", "-m", "text",
        "-count", "3", "-pro", "-tag", "x", "-release", "2.0.0", "--",
    ];

    const COMMANDS: &[(&str, Option<&str>)] = &[
        ("version", Some("v")),
        ("verify", None),
        ("help", Some("?")),
        ("somecmd", None),
        ("pack", Some("p")),
        ("package", None),
        ("push", None),
        ("list", Some("l")),
        ("locals", None),
    ];

    fn matches_prefix((name, alt): (&str, Option<&str>), prefix: &str) -> bool {
        starts_with_ignore_case(name, prefix)
            || alt.is_some_and(|alt| starts_with_ignore_case(alt, prefix))
    }

    fn bind(tokens: &[String]) -> Result<SampleCommand, CommandLineError> {
        let mut command = SampleCommand::default();
        let mut args = tokens.iter().cloned();
        extract_options(&mut command, &mut args)?;
        Ok(command)
    }

    fn tokens() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(VOCABULARY).prop_map(str::to_string),
            0..12,
        )
    }

    proptest! {
        /// Property: binding the same argv onto fresh commands gives the same result
        #[test]
        fn binding_is_idempotent(args in tokens()) {
            prop_assert_eq!(bind(&args), bind(&args));
        }

        /// Property: tokens without a leading dash are kept as arguments, in order
        #[test]
        fn positional_tokens_are_preserved(args in prop::collection::vec("[a-z0-9;=]{1,8}", 0..8)) {
            let command = bind(&args).unwrap();
            prop_assert_eq!(command.arguments, args);
        }

        /// Property: a resolved abbreviation always names an option it is a prefix of
        #[test]
        fn resolved_prefix_names_matching_option(
            index in 0..SampleCommand::OPTION_NAMES.len(),
            len in 1usize..10,
            upper in any::<bool>()
        ) {
            let name = SampleCommand::OPTION_NAMES[index];
            let mut prefix: String = name.chars().take(len).collect();
            if upper {
                prefix = prefix.to_uppercase();
            }

            let entries = options_of(&mut SampleCommand::default()).unwrap();
            match resolve_partial(entries.iter().map(|entry| (entry, entry)), &prefix) {
                Resolution::Unique(entry) => {
                    prop_assert!(
                        starts_with_ignore_case(entry.primary_name(), &prefix)
                            || entry.alt_name().is_some_and(|alt| starts_with_ignore_case(alt, &prefix))
                    );
                }
                Resolution::Ambiguous(candidates) => {
                    prop_assert!(candidates.len() > 1);
                    prop_assert!(candidates.iter().any(|candidate| candidate == name));
                    for candidate in &candidates {
                        prop_assert!(!eq_ignore_case(candidate, &prefix));
                    }
                }
                Resolution::Unknown => prop_assert!(false, "prefix '{}' matched nothing", prefix),
            }
        }

        /// Property: every option is reachable by its full name, in any case
        #[test]
        fn full_name_always_resolves(index in 0..SampleCommand::OPTION_NAMES.len(), upper in any::<bool>()) {
            let name = SampleCommand::OPTION_NAMES[index];
            let token = if upper { name.to_uppercase() } else { name.to_string() };

            let entries = options_of(&mut SampleCommand::default()).unwrap();
            let resolved = resolve_partial(entries.iter().map(|entry| (entry.descriptor.name, entry)), &token);
            prop_assert_eq!(resolved, Resolution::Unique(name));
        }

        /// Property: a command prefix only resolves to a command it is a prefix of,
        /// and a prefix no other command shares always resolves to its own command
        #[test]
        fn command_prefix_resolves_within_its_matches(
            commands in prop::sample::subsequence(COMMANDS.to_vec(), 1..=COMMANDS.len()),
            pick in any::<prop::sample::Index>(),
            len in 0usize..9,
            upper in any::<bool>()
        ) {
            let mut registry = CommandRegistry::new();
            for (name, alt) in &commands {
                prop_assert_eq!(registry.register(Box::new(NamedCommand::new(*name, *alt))), Ok(true));
            }

            let (name, _) = commands[pick.index(commands.len())];
            let mut prefix: String = name.chars().take(len).collect();
            if upper {
                prefix = prefix.to_uppercase();
            }
            let matching: Vec<&str> = commands
                .iter()
                .filter(|command| matches_prefix(**command, &prefix))
                .map(|(name, _)| *name)
                .collect();

            match registry.resolve(&prefix) {
                Ok(command) => {
                    let resolved = command.metadata().unwrap().name;
                    prop_assert!(matching.contains(&resolved));
                    if matching.len() == 1 {
                        prop_assert_eq!(resolved, name);
                    }
                }
                Err(CommandLineError::AmbiguousCommand { candidates, .. }) => {
                    prop_assert_eq!(candidates, matching.iter().map(|m| m.to_string()).collect::<Vec<_>>());
                    prop_assert!(matching.len() > 1);
                    prop_assert!(matching.contains(&name));
                }
                Err(other) => prop_assert!(false, "prefix '{}' failed with {:?}", prefix, other),
            }
        }
    }
}
