use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use loom_portfolio::{
    Catalogue, Category, ModalContent, PageEffect, PageEvent, PageState, ProjectCard,
    ProjectGrids, ProjectLink, Section, TechTag,
};
use loom_sim::field::ThreadField;
use loom_sim::state::AppState;

use crate::canvas::{InteractionHint, hint_text};

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Portfolio>()
            .add_event::<PageInput>()
            .add_systems(OnEnter(AppState::Running), spawn_page)
            .add_systems(
                Update,
                (page_buttons, apply_page_input, sync_sections, reveal_cards)
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}

/// Project data plus what the page is currently showing
#[derive(Resource, Default)]
pub struct Portfolio {
    pub catalogue: Catalogue,
    pub grids: ProjectGrids,
    pub page: PageState,
}

impl Portfolio {
    pub fn set_catalogue(&mut self, catalogue: Catalogue) {
        self.grids = catalogue.grids();
        self.catalogue = catalogue;
    }
}

/// A page event raised by the UI
#[derive(Event, Debug, Clone, Copy)]
pub struct PageInput(pub PageEvent);

// --- Markers ---

#[derive(Component)]
struct NavButton(Section);

#[derive(Component)]
struct SectionPanel(Section);

#[derive(Component)]
struct ProjectGrid(Category);

#[derive(Component)]
struct CardButton {
    project: usize,
}

/// Card stays hidden until the timer runs out
#[derive(Component)]
struct Reveal(Timer);

#[derive(Component)]
struct AvatarButton;

#[derive(Component)]
struct AboutText;

/// Full-screen backdrop; a click on it closes the modal
#[derive(Component)]
struct ModalRoot;

#[derive(Component)]
struct ModalClose;

#[derive(Component)]
struct ModalBody;

const ACCENT: f32 = 200.0;

fn text(value: impl Into<String>, size: f32, colour: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(colour),
    )
}

fn category_colour(category: Category) -> Color {
    match category {
        Category::Major => Color::hsla(ACCENT, 0.7, 0.6, 1.0),
        Category::Minor => Color::hsla(260.0, 0.6, 0.65, 1.0),
        Category::Other => Color::hsla(0.0, 0.0, 0.6, 1.0),
    }
}

/// Stable hue per technology, inside the thread palette
fn tag_hue(key: &str) -> f32 {
    let sum: u32 = key.bytes().map(u32::from).sum();
    180.0 + (sum % 60) as f32
}

fn nav_colour(active: bool) -> Color {
    if active {
        Color::hsla(ACCENT, 0.7, 0.45, 0.9)
    } else {
        Color::srgba(1.0, 1.0, 1.0, 0.06)
    }
}

fn display_for(visible: bool) -> Display {
    if visible { Display::Flex } else { Display::None }
}

// --- Layout ---

fn spawn_page(mut commands: Commands, portfolio: Res<Portfolio>, field: Res<ThreadField>) {
    let page = &portfolio.page;

    let mut major_grid = None;
    let mut minor_grid = None;

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(24.0)),
            row_gap: Val::Px(24.0),
            overflow: Overflow::clip(),
            ..default()
        })
        .with_children(|root| {
            // Navigation
            root.spawn(Node {
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|nav| {
                for section in Section::ALL {
                    nav.spawn((
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                            ..default()
                        },
                        BorderRadius::all(Val::Px(18.0)),
                        BackgroundColor(nav_colour(page.is_showing(section))),
                        NavButton(section),
                    ))
                    .with_children(|btn| {
                        btn.spawn(text(section.label(), 18.0, Color::WHITE));
                    });
                }
            });

            // About
            root.spawn((
                Node {
                    display: display_for(page.is_showing(Section::About)),
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(24.0),
                    max_width: Val::Px(760.0),
                    ..default()
                },
                SectionPanel(Section::About),
            ))
            .with_children(|about| {
                about.spawn((
                    Button,
                    Node {
                        width: Val::Px(96.0),
                        height: Val::Px(96.0),
                        flex_shrink: 0.0,
                        ..default()
                    },
                    BorderRadius::MAX,
                    BackgroundColor(Color::hsla(ACCENT, 0.7, 0.6, 0.8)),
                    AvatarButton,
                ));
                about.spawn((
                    text(
                        "I build software that is fast, careful and a little playful. \
                         The threads behind this page react to your cursor; the projects \
                         above are the things I have woven so far.",
                        18.0,
                        Color::srgba(0.85, 0.9, 1.0, 0.9),
                    ),
                    if page.about_visible {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    },
                    AboutText,
                ));
            });

            // Project sections
            for section in [Section::Major, Section::Minor] {
                let Some(category) = section.category() else {
                    continue;
                };
                root.spawn((
                    Node {
                        display: display_for(page.is_showing(section)),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(16.0),
                        ..default()
                    },
                    SectionPanel(section),
                ))
                .with_children(|panel| {
                    panel.spawn(text(section.label(), 28.0, category_colour(category)));
                    let grid = panel
                        .spawn((
                            Node {
                                flex_wrap: FlexWrap::Wrap,
                                column_gap: Val::Px(16.0),
                                row_gap: Val::Px(16.0),
                                ..default()
                            },
                            ProjectGrid(category),
                        ))
                        .id();
                    match category {
                        Category::Major => major_grid = Some(grid),
                        _ => minor_grid = Some(grid),
                    }
                });
            }

            root.spawn((
                text(
                    hint_text(field.policy),
                    14.0,
                    Color::srgba(1.0, 1.0, 1.0, 0.5),
                ),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(16.0),
                    left: Val::Px(24.0),
                    ..default()
                },
                InteractionHint,
            ));
        });

    for (grid, category) in [(major_grid, Category::Major), (minor_grid, Category::Minor)] {
        if let Some(grid) = grid {
            fill_grid(&mut commands, grid, portfolio.grids.for_category(category));
        }
    }

    spawn_modal(&mut commands);
    info!(
        "Page ready: {} major, {} minor projects",
        portfolio.grids.major.len(),
        portfolio.grids.minor.len()
    );
}

fn spawn_modal(commands: &mut Commands) {
    commands
        .spawn((
            Button,
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GlobalZIndex(10),
            ModalRoot,
        ))
        .with_children(|backdrop| {
            // Panel swallows clicks so only the backdrop itself closes the modal
            backdrop
                .spawn((
                    Node {
                        width: Val::Px(640.0),
                        max_width: Val::Percent(90.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(28.0)),
                        row_gap: Val::Px(14.0),
                        ..default()
                    },
                    BorderRadius::all(Val::Px(12.0)),
                    BackgroundColor(Color::srgb(0.06, 0.08, 0.14)),
                    Interaction::default(),
                    FocusPolicy::Block,
                ))
                .with_children(|panel| {
                    panel
                        .spawn((
                            Button,
                            Node {
                                align_self: AlignSelf::FlexEnd,
                                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                                ..default()
                            },
                            ModalClose,
                        ))
                        .with_children(|btn| {
                            btn.spawn(text("×", 24.0, Color::WHITE));
                        });
                    panel.spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(14.0),
                            ..default()
                        },
                        ModalBody,
                    ));
                });
        });
}

fn fill_grid(commands: &mut Commands, grid: Entity, cards: &[ProjectCard]) {
    commands
        .entity(grid)
        .despawn_descendants()
        .with_children(|grid| {
            for card in cards {
                spawn_card(grid, card);
            }
        });
}

fn spawn_card(grid: &mut ChildBuilder, card: &ProjectCard) {
    grid.spawn((
        Button,
        Node {
            width: Val::Px(300.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(16.0)),
            row_gap: Val::Px(10.0),
            border: UiRect::left(Val::Px(3.0)),
            ..default()
        },
        BorderColor(category_colour(card.category)),
        BorderRadius::all(Val::Px(8.0)),
        BackgroundColor(Color::srgba(0.08, 0.1, 0.18, 0.85)),
        Visibility::Hidden,
        Reveal(Timer::new(card.reveal_delay(), TimerMode::Once)),
        CardButton {
            project: card.project,
        },
    ))
    .with_children(|c| {
        c.spawn(text(card.title.clone(), 20.0, Color::WHITE));
        c.spawn(text(
            card.description.clone(),
            14.0,
            Color::srgba(0.8, 0.85, 0.95, 0.85),
        ));
        spawn_tags(c, &card.tags);
        spawn_links(c, &card.links);
    });
}

fn spawn_tags(parent: &mut ChildBuilder, tags: &[TechTag]) {
    parent
        .spawn(Node {
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|row| {
            for tag in tags {
                let hue = tag_hue(&tag.key);
                row.spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(8.0), Val::Px(2.0)),
                        ..default()
                    },
                    BorderRadius::all(Val::Px(10.0)),
                    BackgroundColor(Color::hsla(hue, 0.7, 0.6, 0.15)),
                ))
                .with_children(|chip| {
                    chip.spawn(text(tag.label.clone(), 12.0, Color::hsla(hue, 0.7, 0.7, 1.0)));
                });
            }
        });
}

fn spawn_links(parent: &mut ChildBuilder, links: &[ProjectLink]) {
    for link in links {
        parent.spawn(text(
            format!("{}: {}", link.label, link.url),
            13.0,
            Color::hsla(ACCENT, 0.8, 0.7, 1.0),
        ));
    }
}

fn fill_modal(commands: &mut Commands, body: Entity, content: &ModalContent) {
    commands
        .entity(body)
        .despawn_descendants()
        .with_children(|b| {
            b.spawn(text(content.title.clone(), 30.0, Color::WHITE));
            b.spawn(text(
                content.category.name(),
                14.0,
                category_colour(content.category),
            ));
            b.spawn(text(
                content.description.clone(),
                16.0,
                Color::srgba(0.85, 0.9, 1.0, 0.9),
            ));
            spawn_tags(b, &content.tags);
            spawn_links(b, &content.links);
        });
}

// --- Systems ---

/// Turn clicks and key presses into page events
fn page_buttons(
    nav_q: Query<(&Interaction, &NavButton), Changed<Interaction>>,
    card_q: Query<(&Interaction, &CardButton), Changed<Interaction>>,
    avatar_q: Query<&Interaction, (Changed<Interaction>, With<AvatarButton>)>,
    close_q: Query<&Interaction, (Changed<Interaction>, Or<(With<ModalClose>, With<ModalRoot>)>)>,
    keys: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<PageInput>,
) {
    for (interaction, nav) in &nav_q {
        if *interaction == Interaction::Pressed {
            events.send(PageInput(PageEvent::Navigate(nav.0)));
        }
    }
    for (interaction, card) in &card_q {
        if *interaction == Interaction::Pressed {
            events.send(PageInput(PageEvent::OpenProject(card.project)));
        }
    }
    for interaction in &avatar_q {
        if *interaction == Interaction::Pressed {
            events.send(PageInput(PageEvent::ToggleAbout));
        }
    }
    for interaction in &close_q {
        if *interaction == Interaction::Pressed {
            events.send(PageInput(PageEvent::CloseModal));
        }
    }
    if keys.just_pressed(KeyCode::Escape) {
        events.send(PageInput(PageEvent::Escape));
    }
}

fn apply_page_input(
    mut commands: Commands,
    mut inputs: EventReader<PageInput>,
    mut portfolio: ResMut<Portfolio>,
    grid_q: Query<(Entity, &ProjectGrid)>,
    body_q: Query<Entity, With<ModalBody>>,
    mut modal_q: Query<&mut Node, With<ModalRoot>>,
    mut about_q: Query<&mut Visibility, With<AboutText>>,
) {
    for input in inputs.read() {
        let Some(effect) = portfolio.page.handle(input.0) else {
            continue;
        };

        match effect {
            PageEffect::RenderProjects => {
                for (grid, ProjectGrid(category)) in &grid_q {
                    fill_grid(&mut commands, grid, portfolio.grids.for_category(*category));
                }
            }
            PageEffect::ShowModal(index) => {
                let Some(project) = portfolio.catalogue.get(index) else {
                    warn!("No project at index {index}");
                    continue;
                };
                if let Ok(body) = body_q.get_single() {
                    fill_modal(&mut commands, body, &ModalContent::new(project));
                }
                for mut node in &mut modal_q {
                    node.display = Display::Flex;
                }
            }
            PageEffect::HideModal => {
                for mut node in &mut modal_q {
                    node.display = Display::None;
                }
            }
            PageEffect::AboutVisible(visible) => {
                for mut visibility in &mut about_q {
                    *visibility = if visible {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    };
                }
            }
        }
    }
}

/// Show the active section and highlight its nav button
fn sync_sections(
    portfolio: Res<Portfolio>,
    mut panel_q: Query<(&SectionPanel, &mut Node)>,
    mut nav_q: Query<(&NavButton, &mut BackgroundColor)>,
) {
    if !portfolio.is_changed() {
        return;
    }
    let page = &portfolio.page;

    for (SectionPanel(section), mut node) in &mut panel_q {
        let display = display_for(page.is_showing(*section));
        if node.display != display {
            node.display = display;
        }
    }
    for (NavButton(section), mut colour) in &mut nav_q {
        colour.0 = nav_colour(page.is_showing(*section));
    }
}

fn reveal_cards(
    mut commands: Commands,
    time: Res<Time>,
    mut cards: Query<(Entity, &mut Reveal, &mut Visibility)>,
) {
    for (entity, mut reveal, mut visibility) in &mut cards {
        if reveal.0.tick(time.delta()).finished() {
            *visibility = Visibility::Inherited;
            commands.entity(entity).remove::<Reveal>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_portfolio::Project;

    #[test]
    fn test_tag_hue_is_stable_and_in_palette() {
        let hue = tag_hue("rust");
        assert_eq!(hue, tag_hue("rust"));
        assert!((180.0..240.0).contains(&hue));
        assert!((180.0..240.0).contains(&tag_hue("")));
    }

    #[test]
    fn test_set_catalogue_rebuilds_grids() {
        let mut portfolio = Portfolio::default();
        portfolio.set_catalogue(Catalogue::new(vec![
            Project {
                title: "A".into(),
                category: Category::Minor,
                ..Default::default()
            },
            Project {
                title: "B".into(),
                category: Category::Other,
                ..Default::default()
            },
        ]));
        assert_eq!(portfolio.catalogue.len(), 2);
        assert_eq!(portfolio.grids.minor.len(), 1);
        assert!(portfolio.grids.major.is_empty());
    }
}
