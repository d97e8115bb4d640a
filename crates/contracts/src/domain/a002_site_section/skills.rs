//! Sidebar skills tabs: one tab per skill area, exactly one panel shown.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillTab {
    #[default]
    Cloud,
    DevOps,
    Languages,
    Tools,
}

impl SkillTab {
    pub fn all() -> [SkillTab; 4] {
        [
            SkillTab::Cloud,
            SkillTab::DevOps,
            SkillTab::Languages,
            SkillTab::Tools,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillTab::Cloud => "Cloud",
            SkillTab::DevOps => "DevOps",
            SkillTab::Languages => "Languages",
            SkillTab::Tools => "Tools",
        }
    }

    pub fn tab_id(&self) -> &'static str {
        match self {
            SkillTab::Cloud => "skills-tab-cloud",
            SkillTab::DevOps => "skills-tab-devops",
            SkillTab::Languages => "skills-tab-languages",
            SkillTab::Tools => "skills-tab-tools",
        }
    }

    /// Id of the panel this tab controls (`aria-controls`).
    pub fn panel_id(&self) -> &'static str {
        match self {
            SkillTab::Cloud => "skills-panel-cloud",
            SkillTab::DevOps => "skills-panel-devops",
            SkillTab::Languages => "skills-panel-languages",
            SkillTab::Tools => "skills-panel-tools",
        }
    }

    pub fn panel_html(&self) -> &'static str {
        match self {
            SkillTab::Cloud => "<p>Amazon Web Services: EC2, S3, Lambda, CloudFormation. AWS Certified Cloud Practitioner.</p>",
            SkillTab::DevOps => "<p>Docker, CI/CD pipelines, infrastructure as code and automated deployments.</p>",
            SkillTab::Languages => "<p>Java, Python, JavaScript and shell scripting.</p>",
            SkillTab::Tools => "<p>Git, build automation, testing frameworks and monitoring.</p>",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillsTabsState {
    selected: SkillTab,
}

impl SkillsTabsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SkillTab {
        self.selected
    }

    pub fn select(&mut self, tab: SkillTab) {
        self.selected = tab;
    }

    pub fn is_selected(&self, tab: SkillTab) -> bool {
        self.selected == tab
    }

    pub fn panel_hidden(&self, tab: SkillTab) -> bool {
        !self.is_selected(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_panels(state: &SkillsTabsState) -> Vec<&'static str> {
        SkillTab::all()
            .into_iter()
            .filter(|tab| !state.panel_hidden(*tab))
            .map(|tab| tab.panel_id())
            .collect()
    }

    #[test]
    fn test_first_tab_selected_initially() {
        let state = SkillsTabsState::new();
        assert_eq!(state.selected(), SkillTab::Cloud);
        assert_eq!(shown_panels(&state), vec!["skills-panel-cloud"]);
    }

    #[test]
    fn test_selecting_any_tab_shows_exactly_its_panel() {
        let mut state = SkillsTabsState::new();
        for tab in SkillTab::all() {
            state.select(tab);
            assert!(state.is_selected(tab));
            assert_eq!(shown_panels(&state), vec![tab.panel_id()]);
            let selected = SkillTab::all()
                .into_iter()
                .filter(|t| state.is_selected(*t))
                .count();
            assert_eq!(selected, 1);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = SkillTab::all()
            .into_iter()
            .flat_map(|tab| [tab.tab_id(), tab.panel_id()])
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
