//! Navigation
//!
//! Named routes and a push/back history stack.

/// Screens reachable in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Pantry,
    Scanner,
    Notifications,
    /// Chat, optionally opened from a recipe card
    Chat { recipe: Option<String> },
    Account,
    Preferences,
    ProfileEdit,
}

impl Route {
    /// Bottom-tab roots
    pub const TABS: [Route; 4] = [
        Route::Pantry,
        Route::Notifications,
        Route::Chat { recipe: None },
        Route::Account,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Pantry => "My Pantry",
            Route::Scanner => "Scanner",
            Route::Notifications => "Notifications",
            Route::Chat { .. } => "Chat",
            Route::Account => "Account",
            Route::Preferences => "Food Preferences",
            Route::ProfileEdit => "Edit Profile",
        }
    }

    /// The tab this route lives under
    pub fn tab(&self) -> Route {
        match self {
            Route::Pantry | Route::Scanner => Route::Pantry,
            Route::Notifications => Route::Notifications,
            Route::Chat { .. } => Route::Chat { recipe: None },
            Route::Account | Route::Preferences | Route::ProfileEdit => Route::Account,
        }
    }
}

/// History of visited routes; never empty
#[derive(Debug, Clone, PartialEq)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Route::Pantry)
    }
}

impl NavStack {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        if self.current() != &route {
            self.stack.push(route);
        }
    }

    /// Pop one route. Returns false (and stays put) on the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Switch to a tab, dropping the history of the previous one
    pub fn select_tab(&mut self, tab: Route) {
        self.stack.clear();
        self.stack.push(tab);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
