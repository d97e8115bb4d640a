pub mod content;
pub mod menu;
pub mod route;
pub mod skills;
pub mod switcher;
pub mod topic;

pub use content::{ContentBlock, ContentState, Section};
pub use menu::{MenuEvent, MobileMenuState};
pub use route::{Navigation, Route};
pub use skills::{SkillTab, SkillsTabsState};
pub use switcher::{Pane, PaneStyle, SwitcherState};
pub use topic::{Topic, TopicAction};
