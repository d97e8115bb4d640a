pub mod left;
pub mod navbar;
pub mod sidebar;
pub mod skills_tabs;

pub use left::Left;
pub use navbar::NavLinks;
pub use sidebar::Sidebar;
pub use skills_tabs::SkillsTabs;
