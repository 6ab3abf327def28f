pub mod card;
pub mod catalogue;
pub mod error;
pub mod page;
pub mod project;

pub use card::{LinkKind, ModalContent, ProjectCard, ProjectLink, TechTag};
pub use catalogue::{Catalogue, ProjectGrids};
pub use error::CatalogueError;
pub use page::{PageEffect, PageEvent, PageState, Section};
pub use project::{Category, Project};
