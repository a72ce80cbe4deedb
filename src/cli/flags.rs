use crate::pass::Selection;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub strength: bool,
    pub urandom: bool,
    pub save: bool,
    pub interactive: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub audit: Option<usize>,
    /// Classes switched on by flags. Empty means "use saved selection".
    pub classes: Selection,
}

impl CliFlags {
    pub fn has_class_flags(&self) -> bool {
        !self.classes.is_empty()
    }
}
