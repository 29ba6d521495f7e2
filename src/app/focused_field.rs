#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    #[default]
    Candidates,
    Count,
}

impl FocusedField {
    // Only two fields, so next and prev both flip.
    pub fn next(self) -> Self {
        match self {
            FocusedField::Candidates => FocusedField::Count,
            FocusedField::Count => FocusedField::Candidates,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }

    pub fn title(self) -> &'static str {
        match self {
            FocusedField::Candidates => " Candidates ",
            FocusedField::Count => " Count ",
        }
    }
}
