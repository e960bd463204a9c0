/// The control panel: folder actions, selection actions, star filter row
///
/// Buttons are enabled strictly from the derived `ActionStates`; the
/// star row lights stars 1..=threshold to mirror the active filter.

use iced::widget::{button, row, slider, text};
use iced::{Alignment, Element};

use crate::state::actions::ActionStates;
use crate::state::config::BrowserConfig;
use crate::state::data::MAX_STARS;
use crate::Message;

pub fn control_panel(
    actions: ActionStates,
    active_filter: u8,
    config: &BrowserConfig,
) -> Element<'static, Message> {
    let mut panel = row![
        button("Open Folder").on_press(Message::OpenFolderDialog).padding(8),
        button("Select All")
            .on_press_maybe(actions.select_all.then_some(Message::SelectAllClicked))
            .padding(8),
        button("Deselect All")
            .on_press_maybe(actions.deselect_all.then_some(Message::DeselectAllClicked))
            .padding(8),
        button("Move Selected")
            .on_press_maybe(actions.move_selected.then_some(Message::MoveSelected))
            .padding(8),
        button("Delete Selected")
            .on_press_maybe(actions.delete_selected.then_some(Message::DeleteSelected))
            .padding(8),
        star_filter_row(active_filter),
        text("Size:").size(14),
        slider(96..=512u16, config.thumbnail_size, Message::ThumbnailSizeChanged)
            .on_release(Message::SaveConfig)
            .width(140),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    // quick-access buttons for pinned work folders
    for folder in config.usable_work_folders() {
        panel = panel.push(
            button(text(folder.name.clone()).size(14))
                .on_press(Message::OpenFolderPath(folder.path.clone()))
                .padding(6),
        );
    }

    panel.into()
}

/// Six clickable stars; clicking the active one clears the filter
fn star_filter_row(active_filter: u8) -> Element<'static, Message> {
    let mut stars = row![].spacing(2).align_y(Alignment::Center);
    for rating in 1..=MAX_STARS {
        let lit = rating <= active_filter;
        stars = stars.push(
            button(text(if lit { "★" } else { "☆" }).size(20))
                .style(button::text)
                .padding(2)
                .on_press(Message::StarFilterClicked(rating)),
        );
    }
    stars.into()
}
