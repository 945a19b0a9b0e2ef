/// The four fixed jump targets reachable from the keyboard and the quick
/// navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Features,
    Team,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::Team,
        Section::Contact,
    ];

    /// Element id of the section in the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::Team => "team",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Digit shortcut shown in the overlay.
    pub fn digit(self) -> &'static str {
        match self {
            Section::Home => "1",
            Section::Features => "2",
            Section::Team => "3",
            Section::Contact => "4",
        }
    }

    #[inline]
    pub fn for_digit(key: &str) -> Option<Self> {
        match key {
            "1" => Some(Section::Home),
            "2" => Some(Section::Features),
            "3" => Some(Section::Team),
            "4" => Some(Section::Contact),
            _ => None,
        }
    }

    /// Overlay label, in the site's language.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "หน้าแรก",
            Section::Features => "คุณสมบัติ",
            Section::Team => "ทีมงาน",
            Section::Contact => "ติดต่อ",
        }
    }
}
