use crate::content::{ProfileEntry, EDUCATION, EXPERIENCE};

/// Which list the profile tabs show. Education is selected on first render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveProfile {
    #[default]
    Education,
    Experience,
}

impl ActiveProfile {
    pub const ALL: [ActiveProfile; 2] = [ActiveProfile::Education, ActiveProfile::Experience];

    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "EDUCATION",
            Self::Experience => "EXPERIENCE",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Education => "Where I'm learning",
            Self::Experience => "Where I've built things",
        }
    }

    pub fn tab_id(self) -> &'static str {
        match self {
            Self::Education => "tab-education",
            Self::Experience => "tab-experience",
        }
    }

    pub fn entries(self) -> &'static [ProfileEntry] {
        match self {
            Self::Education => EDUCATION,
            Self::Experience => EXPERIENCE,
        }
    }

    /// Switches to `next`. Returns whether anything changed, so reselecting the active tab
    /// triggers no update.
    pub fn select(&mut self, next: ActiveProfile) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}
