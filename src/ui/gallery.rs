/// The asset gallery: a scrollable, wrapped grid of tiles
///
/// Each tile is bound to one record from the grid projection. Normal
/// tiles get a checkbox (selection) and a clickable rating row; special
/// folders render as navigation buttons.

use iced::widget::{button, checkbox, column, container, scrollable, text};
use iced::widget::row;
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{AssetRecord, MAX_STARS};
use crate::state::grid::{GridProjection, Tile};
use crate::Message;

pub fn gallery(projection: &GridProjection, tile_size: u16) -> Element<'static, Message> {
    if projection.is_empty() {
        return container(text("No assets in this folder.").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let tiles: Vec<Element<'static, Message>> = projection
        .tiles()
        .iter()
        .map(|tile| asset_tile(tile, tile_size))
        .collect();

    scrollable(
        Wrap::with_elements(tiles)
            .spacing(8.0)
            .line_spacing(8.0),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn asset_tile(tile: &Tile, size: u16) -> Element<'static, Message> {
    let width = Length::Fixed(size as f32);

    match &tile.record {
        AssetRecord::SpecialFolder { id, path } => button(
            column![text("📁").size(40), text(id.clone()).size(14)]
                .spacing(6)
                .align_x(Alignment::Center),
        )
        .on_press(Message::OpenFolderPath(path.clone()))
        .width(width)
        .padding(12)
        .into(),

        record => {
            let id = record.id().to_string();
            let toggle_id = id.clone();

            let name_check = checkbox(id.clone(), tile.checked)
                .on_toggle(move |checked| Message::TileToggled(toggle_id.clone(), checked))
                .size(16);

            let detail: Element<'static, Message> = match record {
                AssetRecord::Full(data) => text(format!("{:.1} MB", data.size_mb))
                    .size(12)
                    .into(),
                // a stub survived a failed resolution; show it anyway
                _ => text("metadata unavailable").size(12).into(),
            };

            container(
                column![
                    name_check,
                    rating_row(&id, record.effective_stars()),
                    detail,
                ]
                .spacing(6),
            )
            .style(container::rounded_box)
            .width(width)
            .padding(10)
            .into()
        }
    }
}

/// Per-tile rating stars; clicking the current rating clears it
fn rating_row(id: &str, stars: u8) -> Element<'static, Message> {
    let mut stars_row = row![].spacing(1);
    for rating in 1..=MAX_STARS {
        let lit = rating <= stars;
        stars_row = stars_row.push(
            button(text(if lit { "★" } else { "☆" }).size(14))
                .style(button::text)
                .padding(1)
                .on_press(Message::AssetRated(id.to_string(), rating)),
        );
    }
    stars_row.into()
}
