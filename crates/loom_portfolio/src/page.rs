//! Page view state: which section is showing, the open modal, the about text.
//!
//! The host translates clicks and key presses into [`PageEvent`]s and applies
//! whatever [`PageEffect`] comes back.

use crate::project::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Major,
    Minor,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 3] = [Section::About, Section::Major, Section::Minor];

    pub fn label(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Major => "Major Projects",
            Self::Minor => "Minor Projects",
        }
    }

    /// Category listed by a project section
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::About => None,
            Self::Major => Some(Category::Major),
            Self::Minor => Some(Category::Minor),
        }
    }

    pub fn shows_projects(&self) -> bool {
        self.category().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Navigate(Section),
    /// Card clicked; catalogue index of the project
    OpenProject(usize),
    /// Close button or backdrop
    CloseModal,
    Escape,
    /// Avatar clicked
    ToggleAbout,
}

/// What the host has to redo after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    RenderProjects,
    ShowModal(usize),
    HideModal,
    AboutVisible(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub section: Section,
    pub modal: Option<usize>,
    pub about_visible: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            section: Section::About,
            modal: None,
            about_visible: true,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_showing(&self, section: Section) -> bool {
        self.section == section
    }

    pub fn handle(&mut self, event: PageEvent) -> Option<PageEffect> {
        match event {
            PageEvent::Navigate(section) => {
                self.section = section;
                section.shows_projects().then_some(PageEffect::RenderProjects)
            }
            PageEvent::OpenProject(index) => {
                self.modal = Some(index);
                Some(PageEffect::ShowModal(index))
            }
            PageEvent::CloseModal | PageEvent::Escape => {
                self.modal.take().map(|_| PageEffect::HideModal)
            }
            PageEvent::ToggleAbout => {
                self.about_visible = !self.about_visible;
                Some(PageEffect::AboutVisible(self.about_visible))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_about() {
        let page = PageState::new();
        assert!(page.is_showing(Section::About));
        assert!(page.about_visible);
        assert_eq!(page.modal, None);
    }

    #[test]
    fn test_navigation_renders_only_project_sections() {
        let mut page = PageState::new();
        assert_eq!(page.handle(PageEvent::Navigate(Section::Major)), Some(PageEffect::RenderProjects));
        assert!(page.is_showing(Section::Major));
        assert_eq!(page.handle(PageEvent::Navigate(Section::Minor)), Some(PageEffect::RenderProjects));
        assert_eq!(page.handle(PageEvent::Navigate(Section::About)), None);
        assert!(page.is_showing(Section::About));
    }

    #[test]
    fn test_modal_open_and_close() {
        let mut page = PageState::new();
        assert_eq!(page.handle(PageEvent::OpenProject(2)), Some(PageEffect::ShowModal(2)));
        assert_eq!(page.modal, Some(2));
        assert_eq!(page.handle(PageEvent::CloseModal), Some(PageEffect::HideModal));
        assert_eq!(page.modal, None);
        // Nothing open, nothing to do
        assert_eq!(page.handle(PageEvent::CloseModal), None);
    }

    #[test]
    fn test_escape_closes_modal() {
        let mut page = PageState::new();
        page.handle(PageEvent::OpenProject(0));
        assert_eq!(page.handle(PageEvent::Escape), Some(PageEffect::HideModal));
        assert_eq!(page.handle(PageEvent::Escape), None);
    }

    #[test]
    fn test_avatar_toggles_about_text() {
        let mut page = PageState::new();
        assert_eq!(page.handle(PageEvent::ToggleAbout), Some(PageEffect::AboutVisible(false)));
        assert_eq!(page.handle(PageEvent::ToggleAbout), Some(PageEffect::AboutVisible(true)));
    }

    #[test]
    fn test_section_categories() {
        assert_eq!(Section::Major.category(), Some(Category::Major));
        assert!(!Section::About.shows_projects());
        assert_eq!(Section::ALL.len(), 3);
    }
}
