use serde::{Deserialize, Serialize};

use crate::controller::{Controller, LoadStatus, ViewMode};
use crate::error::LoadError;
use crate::filter::NONE_VALUE;
use crate::record::Record;
use crate::{REGION_PLACEHOLDER, SUB_REGION_PLACEHOLDER};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub state: ViewState,
    pub error: Option<UserFacingError>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewState {
    Idle,
    Loading,
    Failed,
    Ready(Box<BrowseView>),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BrowseView {
    pub view_mode: ViewMode,
    pub region_menu: FilterMenu,
    pub sub_region_menu: FilterMenu,
    pub pagination: PaginationView,
    pub content: PageContent,
    /// Bumped on every page change; the shell scrolls the main content into
    /// view when it differs from the last one it saw.
    pub scroll_generation: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FilterMenu {
    pub placeholder: MenuOption,
    pub options: Vec<MenuOption>,
    pub selected: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MenuOption {
    pub value: String,
    pub label: String,
}

impl MenuOption {
    fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    fn placeholder(label: &str) -> Self {
        Self {
            value: NONE_VALUE.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub items: Vec<PageItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PageItem {
    pub number: usize,
    pub is_current: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum PageContent {
    Empty,
    List(Vec<ListItem>),
    Table(Vec<TableRow>),
    Card(Vec<CardItem>),
}

impl PageContent {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::List(items) => items.len(),
            Self::Table(rows) => rows.len(),
            Self::Card(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListItem {
    pub region: String,
    pub sub_region: String,
    pub name: String,
    pub link: Option<String>,
    pub image_url: String,
    pub description_preview: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableRow {
    /// Position in the whole filtered set, starting at 1.
    pub number: usize,
    pub region: String,
    pub sub_region: String,
    pub name: String,
    pub link: Option<String>,
    pub address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CardItem {
    pub image_url: String,
    pub region: String,
    pub sub_region: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserFacingError {
    pub message: String,
    pub error_code: String,
}

impl From<&LoadError> for UserFacingError {
    fn from(e: &LoadError) -> Self {
        Self {
            message: e.user_facing_message(),
            error_code: e.code().to_string(),
        }
    }
}

/// Projects controller state into the render instruction set. Pure; reads
/// nothing but its arguments.
#[must_use]
pub fn project(
    controller: &Controller,
    description_preview_len: usize,
    scroll_generation: u64,
) -> ViewModel {
    match controller.status() {
        LoadStatus::Idle => ViewModel {
            state: ViewState::Idle,
            error: None,
        },
        LoadStatus::Pending => ViewModel {
            state: ViewState::Loading,
            error: None,
        },
        LoadStatus::Failed(e) => ViewModel {
            state: ViewState::Failed,
            error: Some(e.into()),
        },
        LoadStatus::Loaded(_) => ViewModel {
            state: ViewState::Ready(Box::new(browse_view(
                controller,
                description_preview_len,
                scroll_generation,
            ))),
            error: None,
        },
    }
}

fn browse_view(
    controller: &Controller,
    description_preview_len: usize,
    scroll_generation: u64,
) -> BrowseView {
    let page = controller.page_state();

    BrowseView {
        view_mode: page.view_mode,
        region_menu: region_menu(controller),
        sub_region_menu: sub_region_menu(controller),
        pagination: PaginationView {
            current_page: page.current_page,
            total_pages: page.total_pages,
            items: (1..=page.total_pages)
                .map(|number| PageItem {
                    number,
                    is_current: number == page.current_page,
                })
                .collect(),
        },
        content: page_content(
            &controller.current_page_records(),
            page.view_mode,
            (page.current_page.saturating_sub(1)) * page.page_size,
            description_preview_len,
        ),
        scroll_generation,
    }
}

fn region_menu(controller: &Controller) -> FilterMenu {
    let options: Vec<MenuOption> = controller
        .catalog()
        .map(|c| c.geography().regions().map(MenuOption::named).collect())
        .unwrap_or_default();

    FilterMenu {
        placeholder: MenuOption::placeholder(REGION_PLACEHOLDER),
        options,
        selected: controller
            .selection()
            .region()
            .unwrap_or(NONE_VALUE)
            .to_string(),
        enabled: true,
    }
}

fn sub_region_menu(controller: &Controller) -> FilterMenu {
    let selection = controller.selection();
    let options: Vec<MenuOption> = match (controller.catalog(), selection.region()) {
        (Some(catalog), Some(region)) => catalog
            .geography()
            .sub_regions(region)
            .iter()
            .map(|s| MenuOption::named(s))
            .collect(),
        _ => Vec::new(),
    };

    FilterMenu {
        placeholder: MenuOption::placeholder(SUB_REGION_PLACEHOLDER),
        options,
        selected: selection.sub_region().unwrap_or(NONE_VALUE).to_string(),
        enabled: selection.region().is_some(),
    }
}

fn page_content(
    records: &[&Record],
    mode: ViewMode,
    offset: usize,
    description_preview_len: usize,
) -> PageContent {
    if records.is_empty() {
        return PageContent::Empty;
    }

    match mode {
        ViewMode::List => PageContent::List(
            records
                .iter()
                .map(|r| ListItem {
                    region: r.region.clone(),
                    sub_region: r.sub_region.clone(),
                    name: r.name.clone(),
                    link: r.link().map(str::to_string),
                    image_url: r.image_url.clone(),
                    description_preview: r.description_preview(description_preview_len),
                    description: r.description.clone(),
                })
                .collect(),
        ),
        ViewMode::Table => PageContent::Table(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| TableRow {
                    number: offset + i + 1,
                    region: r.region.clone(),
                    sub_region: r.sub_region.clone(),
                    name: r.name.clone(),
                    link: r.link().map(str::to_string),
                    address: r.address.clone(),
                })
                .collect(),
        ),
        ViewMode::Card => PageContent::Card(
            records
                .iter()
                .map(|r| CardItem {
                    image_url: r.image_url.clone(),
                    region: r.region.clone(),
                    sub_region: r.sub_region.clone(),
                    name: r.name.clone(),
                    description: r.description.clone(),
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::scenario_records;
    use crate::{DESCRIPTION_PREVIEW_LENGTH, PAGE_SIZE};

    fn loaded() -> Controller {
        let mut controller = Controller::new(PAGE_SIZE);
        controller.begin_load();
        controller.on_load_succeeded(scenario_records());
        controller
    }

    fn ready(controller: &Controller) -> BrowseView {
        match project(controller, DESCRIPTION_PREVIEW_LENGTH, 0).state {
            ViewState::Ready(view) => *view,
            other => panic!("expected ready view, got {other:?}"),
        }
    }

    #[test]
    fn unloaded_phases() {
        let mut controller = Controller::new(PAGE_SIZE);
        assert_eq!(project(&controller, 100, 0).state, ViewState::Idle);

        controller.begin_load();
        assert_eq!(project(&controller, 100, 0).state, ViewState::Loading);

        controller.on_load_failed(LoadError::Transport {
            message: "offline".into(),
        });
        let vm = project(&controller, 100, 0);
        assert_eq!(vm.state, ViewState::Failed);
        assert_eq!(vm.error.unwrap().error_code, "NETWORK_ERROR");
    }

    #[test]
    fn menus_follow_selection() {
        let mut controller = loaded();
        let view = ready(&controller);
        assert_eq!(view.region_menu.selected, NONE_VALUE);
        assert_eq!(view.region_menu.options.len(), 2);
        assert!(!view.sub_region_menu.enabled);
        assert!(view.sub_region_menu.options.is_empty());
        assert_eq!(view.sub_region_menu.placeholder.value, NONE_VALUE);

        controller.select_region(Some("Taipei".into()));
        let view = ready(&controller);
        assert_eq!(view.region_menu.selected, "Taipei");
        assert!(view.sub_region_menu.enabled);
        let subs: Vec<_> = view
            .sub_region_menu
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(subs, ["Xinyi", "Daan"]);
    }

    #[test]
    fn pagination_marks_current_page() {
        let mut controller = loaded();
        controller.select_page(2);
        let view = ready(&controller);
        assert_eq!(view.pagination.total_pages, 3);
        let current: Vec<_> = view
            .pagination
            .items
            .iter()
            .filter(|i| i.is_current)
            .map(|i| i.number)
            .collect();
        assert_eq!(current, [2]);
    }

    #[test]
    fn table_rows_number_across_pages() {
        let mut controller = loaded();
        controller.select_view_mode(ViewMode::Table);
        controller.select_page(3);
        let PageContent::Table(rows) = ready(&controller).content else {
            panic!("expected table content");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].number, 21);
        assert_eq!(rows[4].number, 25);
        assert_eq!(rows[0].address, "Daan Rd. 0");
        assert_eq!(rows[0].link.as_deref(), Some("https://example.org/daan/0"));
    }

    #[test]
    fn list_items_carry_preview() {
        let mut records = scenario_records();
        records[0].description = "a".repeat(150);
        let mut controller = Controller::new(PAGE_SIZE);
        controller.begin_load();
        controller.on_load_succeeded(records);

        let PageContent::List(items) = ready(&controller).content else {
            panic!("expected list content");
        };
        assert_eq!(items[0].description_preview.chars().count(), 103);
        assert!(items[0].description_preview.ends_with("..."));
        assert_eq!(items[0].description.len(), 150);
    }

    #[test]
    fn card_mode_and_empty_state() {
        let mut controller = Controller::new(PAGE_SIZE);
        controller.begin_load();
        controller.on_load_succeeded(Vec::new());
        let view = ready(&controller);
        assert_eq!(view.content, PageContent::Empty);
        assert!(view.pagination.items.is_empty());

        let mut controller = loaded();
        controller.select_view_mode(ViewMode::Card);
        assert!(matches!(ready(&controller).content, PageContent::Card(ref c) if c.len() == 10));
    }
}
