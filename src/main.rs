use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod state;
mod ui;

use state::config::BrowserConfig;
use state::controller::ControlPanelController;
use state::ops;
use state::store::{AssetStore, FolderStore};

/// Main application state
struct AssetBrowser {
    /// Selection, star filter, and grid projection all live here
    controller: ControlPanelController<FolderStore>,
    /// Persisted settings (thumbnail size, pinned work folders)
    config: BrowserConfig,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Open Folder" button
    OpenFolderDialog,
    /// Open a specific folder (work folder button or special folder tile)
    OpenFolderPath(PathBuf),
    /// Background folder scan completed
    FolderScanned(Result<FolderStore, String>),
    /// 'Select All' button
    SelectAllClicked,
    /// 'Deselect All' button
    DeselectAllClicked,
    /// A star in the filter row was clicked (1-6)
    StarFilterClicked(u8),
    /// A tile's checkbox was toggled
    TileToggled(String, bool),
    /// A star on a tile was clicked to rate that asset
    AssetRated(String, u8),
    /// 'Move Selected' button
    MoveSelected,
    /// 'Delete Selected' button
    DeleteSelected,
    /// Thumbnail size slider moved
    ThumbnailSizeChanged(u16),
    /// Persist the current config
    SaveConfig,
}

impl AssetBrowser {
    fn new() -> (Self, Task<Message>) {
        let config = BrowserConfig::load();
        println!("🎨 Asset Browser initialized");

        (
            AssetBrowser {
                controller: ControlPanelController::new(FolderStore::closed()),
                config,
                status: "Ready. Open a folder to browse assets.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolderDialog => {
                let folder = FileDialog::new()
                    .set_title("Select Asset Folder")
                    .pick_folder();

                match folder {
                    Some(path) => self.scan_folder(path),
                    None => Task::none(),
                }
            }
            Message::OpenFolderPath(path) => self.scan_folder(path),
            Message::FolderScanned(Ok(store)) => {
                let count = store.all_assets().len();
                self.controller.on_folder_changed(store);
                self.status = format!("✅ Loaded {} records.", count);
                Task::none()
            }
            Message::FolderScanned(Err(err)) => {
                eprintln!("⚠️  Folder scan failed: {}", err);
                self.status = format!("⚠️ Could not open folder: {}", err);
                Task::none()
            }
            Message::SelectAllClicked => {
                let added = self.controller.on_select_all_clicked();
                self.status = format!("Selected {} more assets.", added);
                Task::none()
            }
            Message::DeselectAllClicked => {
                self.controller.on_deselect_all_clicked();
                self.status = "Selection cleared.".to_string();
                Task::none()
            }
            Message::StarFilterClicked(rating) => {
                self.controller.on_star_filter_clicked(rating);
                self.status = match self.controller.active_filter() {
                    0 => "Star filter off, showing all assets.".to_string(),
                    threshold => format!("Showing assets with {}+ stars.", threshold),
                };
                Task::none()
            }
            Message::TileToggled(id, checked) => {
                self.controller.on_tile_toggled(&id, checked);
                Task::none()
            }
            Message::AssetRated(id, rating) => {
                // clicking the current rating clears it
                let current = self
                    .controller
                    .projection()
                    .tiles()
                    .iter()
                    .find(|t| t.id() == id)
                    .map(|t| t.record.effective_stars())
                    .unwrap_or(0);
                let stars = if current == rating { 0 } else { rating };
                self.controller.on_asset_rated(&id, stars);
                Task::none()
            }
            Message::MoveSelected => {
                if !self.controller.action_states().move_selected {
                    return Task::none();
                }
                let Some(folder) = self.controller.current_folder() else {
                    return Task::none();
                };
                let destination = FileDialog::new()
                    .set_title("Move Selected Assets To…")
                    .pick_folder();
                let Some(destination) = destination else {
                    return Task::none();
                };

                let records = self.controller.selected_full_records();
                let report = ops::move_assets(&folder, &records, &destination);
                self.status = format!(
                    "📦 Moved {} assets ({} failed).",
                    report.succeeded, report.failed
                );
                // rescan so the grid reflects what is left
                self.scan_folder(folder)
            }
            Message::DeleteSelected => {
                if !self.controller.action_states().delete_selected {
                    return Task::none();
                }
                let Some(folder) = self.controller.current_folder() else {
                    return Task::none();
                };

                let records = self.controller.selected_full_records();
                let report = ops::delete_assets(&folder, &records);
                self.status = format!(
                    "🗑️ Deleted {} assets ({} failed).",
                    report.succeeded, report.failed
                );
                self.scan_folder(folder)
            }
            Message::ThumbnailSizeChanged(size) => {
                self.config.thumbnail_size = size;
                Task::none()
            }
            Message::SaveConfig => {
                if let Err(err) = self.config.save() {
                    eprintln!("⚠️  Could not save config: {}", err);
                }
                Task::none()
            }
        }
    }

    /// Launch an async scan of `path`; the result arrives as FolderScanned
    fn scan_folder(&mut self, path: PathBuf) -> Task<Message> {
        self.status = format!("Scanning {}…", path.display());
        Task::perform(open_folder_async(path), Message::FolderScanned)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let panel = ui::control_panel::control_panel(
            self.controller.action_states(),
            self.controller.active_filter(),
            &self.config,
        );

        let body: Element<Message> = if self.controller.has_working_folder() {
            ui::gallery::gallery(self.controller.projection(), self.config.thumbnail_size)
        } else {
            container(text("Open a folder to browse assets.").size(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        };

        let status_bar = text(format!(
            "{}  |  Selected {} of {} visible",
            self.status,
            self.controller.visible_selected_count(),
            self.controller.projection().visible_normal_count(),
        ))
        .size(14);

        column![panel, body, status_bar]
            .spacing(12)
            .padding(16)
            .align_x(Alignment::Start)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Asset Browser", AssetBrowser::update, AssetBrowser::view)
        .theme(AssetBrowser::theme)
        .centered()
        .run_with(AssetBrowser::new)
}

/// Scan a folder off the UI thread so big folders don't block input
async fn open_folder_async(path: PathBuf) -> Result<FolderStore, String> {
    tokio::task::spawn_blocking(move || {
        FolderStore::open(&path).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}
