/// Which half of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Search
    UpdateResults(String), // Full current query text

    // Navigation
    NextPhoto,
    PreviousPhoto,
    SetFocus(Focus),

    // Links
    OpenUri(String),

    // App control
    Quit,
    None,
}
