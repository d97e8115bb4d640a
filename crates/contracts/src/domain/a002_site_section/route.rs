use super::content::Section;

pub const GITHUB_PROFILE_URL: &str = "https://github.com";

/// In-page pseudo-routes reachable from the navigation links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    #[default]
    About,
    Skills,
    Experience,
    Archive,
    GitHub,
}

/// Result of following a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Show(Section),
    External(&'static str),
}

impl Route {
    pub fn all() -> [Route; 6] {
        [
            Route::Home,
            Route::About,
            Route::Skills,
            Route::Experience,
            Route::Archive,
            Route::GitHub,
        ]
    }

    pub fn from_href(href: &str) -> Option<Route> {
        Route::all().into_iter().find(|r| r.href() == href)
    }

    pub fn href(&self) -> &'static str {
        match self {
            Route::Home => "#home",
            Route::About => "#about",
            Route::Skills => "#skills",
            Route::Experience => "#experience",
            Route::Archive => "#archive",
            Route::GitHub => "#github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Skills => "Skills",
            Route::Experience => "Experience",
            Route::Archive => "Archive",
            Route::GitHub => "GitHub",
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.navigation(), Navigation::External(_))
    }

    pub fn navigation(&self) -> Navigation {
        match self {
            Route::Home | Route::About => Navigation::Show(Section::About),
            Route::Skills => Navigation::Show(Section::Skills),
            Route::Experience => Navigation::Show(Section::Experience),
            Route::Archive => Navigation::Show(Section::Archive),
            Route::GitHub => Navigation::External(GITHUB_PROFILE_URL),
        }
    }
}

/// Resolve an in-page `#id`. Unknown ids show the About content.
pub fn navigate(href: &str) -> (Route, Navigation) {
    let route = Route::from_href(href).unwrap_or_default();
    (route, route.navigation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(navigate("#skills"), (Route::Skills, Navigation::Show(Section::Skills)));
        assert_eq!(navigate("#home"), (Route::Home, Navigation::Show(Section::About)));
        assert_eq!(
            navigate("#github"),
            (Route::GitHub, Navigation::External(GITHUB_PROFILE_URL))
        );
    }

    #[test]
    fn test_unknown_route_falls_back_to_about() {
        assert_eq!(navigate("#nope"), (Route::About, Navigation::Show(Section::About)));
        assert_eq!(navigate(""), (Route::About, Navigation::Show(Section::About)));
    }

    #[test]
    fn test_href_round_trip_and_externals() {
        for route in Route::all() {
            assert_eq!(Route::from_href(route.href()), Some(route));
        }
        let external: Vec<Route> = Route::all().into_iter().filter(Route::is_external).collect();
        assert_eq!(external, vec![Route::GitHub]);
    }
}
