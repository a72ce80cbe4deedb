//! Character classes and alphabet construction.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Numbers => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }
}

/// Which character classes feed the alphabet. All-false is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Selection {
    pub const NONE: Selection = Selection {
        uppercase: false,
        lowercase: false,
        numbers: false,
        symbols: false,
    };

    pub const ALL: Selection = Selection {
        uppercase: true,
        lowercase: true,
        numbers: true,
        symbols: true,
    };

    pub fn only(class: CharacterClass) -> Self {
        let mut selection = Self::NONE;
        selection.set(class, true);
        selection
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.symbols)
    }

    /// Enabled reference sets concatenated lowercase → uppercase → numbers →
    /// symbols.
    pub fn alphabet(&self) -> Vec<u8> {
        CharacterClass::ALL
            .iter()
            .filter(|&&class| self.contains(class))
            .flat_map(|class| class.chars().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_set_sizes() {
        assert_eq!(CharacterClass::Lowercase.chars().len(), 26);
        assert_eq!(CharacterClass::Uppercase.chars().len(), 26);
        assert_eq!(CharacterClass::Numbers.chars().len(), 10);
        assert_eq!(CharacterClass::Symbols.chars(), b"!@#$%^&*()_+[]{}|;:,.<>?");
        assert_eq!(CharacterClass::Symbols.chars().len(), 24);
    }

    #[test]
    fn alphabet_follows_fixed_order() {
        let alphabet = Selection::ALL.alphabet();
        let expected: Vec<u8> = [LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS].concat();
        assert_eq!(alphabet, expected);
    }

    #[test]
    fn order_ignores_flag_declaration_order() {
        let selection = Selection {
            uppercase: true,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        let alphabet = selection.alphabet();
        assert_eq!(&alphabet[..26], UPPERCASE);
        assert_eq!(&alphabet[26..], NUMBERS);
    }

    #[test]
    fn empty_selection_has_empty_alphabet() {
        assert!(Selection::NONE.is_empty());
        assert!(Selection::NONE.alphabet().is_empty());
        assert!(!Selection::only(CharacterClass::Symbols).is_empty());
    }

    #[test]
    fn toggle_flips_one_flag() {
        let mut selection = Selection::NONE;
        selection.toggle(CharacterClass::Numbers);
        assert_eq!(selection, Selection::only(CharacterClass::Numbers));
        selection.toggle(CharacterClass::Numbers);
        assert_eq!(selection, Selection::NONE);
    }
}
