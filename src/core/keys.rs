use super::sections::Section;

/// Page-level action bound to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Close the demo modal and the quick navigation overlay.
    Dismiss,
    OpenQuickNav,
    JumpTo(Section),
}

/// Modifier state relevant to the shortcuts. Ctrl and Meta are treated
/// alike so the quick-nav chord works on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    #[inline]
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

pub fn command_for_key(key: &str, mods: Modifiers) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::Dismiss),
        "k" | "K" if mods.command() => Some(KeyCommand::OpenQuickNav),
        // digits stay free while the command modifier is held
        _ if !mods.command() => Section::for_digit(key).map(KeyCommand::JumpTo),
        _ => None,
    }
}
