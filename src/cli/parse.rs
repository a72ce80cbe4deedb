use super::CliFlags;
use crate::error::{Error, Result};
use crate::pass::{CharacterClass, MAX_LENGTH};

/// Parse a length argument: a whole number within the slider range.
pub fn parse_length(s: &str) -> Result<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|&len| len <= MAX_LENGTH)
        .ok_or_else(|| Error::InvalidLength(s.to_string()))
}

/// Most passwords one `-n` may ask for.
pub const MAX_PASSWORDS: usize = 10_000;
/// Most draws one `--audit` may ask for.
pub const MAX_AUDIT_DRAWS: usize = 100_000_000;

fn parse_count(s: &str, min: usize, max: usize) -> Result<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| Error::InvalidNumber(s.to_string()))
}

fn class_for(c: char) -> Option<CharacterClass> {
    match c {
        'U' => Some(CharacterClass::Uppercase),
        'L' => Some(CharacterClass::Lowercase),
        'N' => Some(CharacterClass::Numbers),
        'S' => Some(CharacterClass::Symbols),
        _ => None,
    }
}

/// Expand clustered class flags such as `-ULN`.
fn class_cluster(arg: &str) -> Option<Vec<CharacterClass>> {
    let body = arg.strip_prefix('-')?;
    if body.is_empty() || body.starts_with('-') {
        return None;
    }
    body.chars().map(class_for).collect()
}

pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    let value = |i: &mut usize, flag: &str| -> Result<String> {
        *i += 1;
        args.get(*i)
            .cloned()
            .ok_or_else(|| Error::MissingValue(flag.to_string()))
    };

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-t" | "--strength" => flags.strength = true,
            "-u" | "--urandom" => flags.urandom = true,
            "--save" => flags.save = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--upper" => flags.classes.uppercase = true,
            "--lower" => flags.classes.lowercase = true,
            "--numbers" => flags.classes.numbers = true,
            "--symbols" => flags.classes.symbols = true,
            flag @ ("-l" | "--length") => {
                flags.length = Some(parse_length(&value(&mut i, flag)?)?);
            }
            flag @ ("-n" | "--number") => {
                flags.number = Some(parse_count(&value(&mut i, flag)?, 0, MAX_PASSWORDS)?);
            }
            flag @ "--audit" => {
                flags.audit = Some(parse_count(&value(&mut i, flag)?, 1, MAX_AUDIT_DRAWS)?);
            }
            arg => match class_cluster(arg) {
                Some(classes) => classes
                    .into_iter()
                    .for_each(|class| flags.classes.set(class, true)),
                None => return Err(Error::UnknownArg(arg.to_string())),
            },
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Selection;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help && !flags.clipboard);
        assert_eq!(flags.length, None);
        assert!(!flags.has_class_flags());
    }

    #[test]
    fn length_and_classes() {
        let flags = parse(&args(&["-l", "16", "-U", "--numbers", "-t"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert!(flags.strength);
        assert_eq!(
            flags.classes,
            Selection {
                uppercase: true,
                lowercase: false,
                numbers: true,
                symbols: false,
            }
        );
    }

    #[test]
    fn clustered_class_flags() {
        let flags = parse(&args(&["-ULNS"])).unwrap();
        assert_eq!(flags.classes, Selection::ALL);
    }

    #[test]
    fn length_bounds() {
        assert_eq!(parse_length("0").unwrap(), 0);
        assert_eq!(parse_length("30").unwrap(), 30);
        assert!(matches!(parse_length("31"), Err(Error::InvalidLength(_))));
        assert!(matches!(parse_length("-3"), Err(Error::InvalidLength(_))));
        assert!(matches!(parse_length("7.5"), Err(Error::InvalidLength(_))));
    }

    #[test]
    fn missing_value() {
        assert!(matches!(
            parse(&args(&["-l"])),
            Err(Error::MissingValue(flag)) if flag == "-l"
        ));
    }

    #[test]
    fn unknown_argument() {
        assert!(matches!(
            parse(&args(&["--frobnicate"])),
            Err(Error::UnknownArg(arg)) if arg == "--frobnicate"
        ));
        assert!(matches!(parse(&args(&["-ULX"])), Err(Error::UnknownArg(_))));
    }

    #[test]
    fn counts() {
        let flags = parse(&args(&["-n", "3", "--audit", "10000"])).unwrap();
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.audit, Some(10_000));
        assert!(matches!(
            parse(&args(&["-n", "many"])),
            Err(Error::InvalidNumber(_))
        ));
    }

    #[test]
    fn counts_are_bounded() {
        let max = u64::MAX.to_string();
        assert!(matches!(
            parse(&args(&["-n", &max])),
            Err(Error::InvalidNumber(_))
        ));
        assert!(matches!(
            parse(&args(&["--audit", &max])),
            Err(Error::InvalidNumber(_))
        ));

        let over = (MAX_PASSWORDS + 1).to_string();
        assert!(matches!(
            parse(&args(&["-n", &over])),
            Err(Error::InvalidNumber(_))
        ));
        let at_cap = MAX_PASSWORDS.to_string();
        assert_eq!(parse(&args(&["-n", &at_cap])).unwrap().number, Some(MAX_PASSWORDS));
    }

    #[test]
    fn audit_needs_at_least_one_draw() {
        assert!(matches!(
            parse(&args(&["--audit", "0"])),
            Err(Error::InvalidNumber(_))
        ));
        assert_eq!(parse(&args(&["--audit", "1"])).unwrap().audit, Some(1));
    }
}
