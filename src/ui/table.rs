/// Results preview table
/// Renders the exported table with fixed-width cells inside a two-way scrollable
use iced::widget::{column, container, horizontal_rule, scrollable, text, Column, Row};
use iced::{Element, Length};

use crate::export::Table;
use crate::Message;

/// Width of every cell; columns must be fixed inside a horizontal scrollable
const CELL_WIDTH: f32 = 150.0;
/// Height of the visible table area
const TABLE_HEIGHT: f32 = 360.0;

fn table_row<'a>(cells: &'a [String], size: f32) -> Element<'a, Message> {
    Row::with_children(cells.iter().map(|cell| {
        text(cell.as_str())
            .size(size)
            .width(Length::Fixed(CELL_WIDTH))
            .into()
    }))
    .spacing(8)
    .into()
}

pub fn results_table(table: &Table) -> Element<'_, Message> {
    let body = Column::with_children(table.rows.iter().map(|row| table_row(row, 13.0))).spacing(4);

    let content = column![table_row(&table.header, 14.0), horizontal_rule(1), body].spacing(6);

    container(
        scrollable(content)
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::new(),
                horizontal: scrollable::Scrollbar::new(),
            })
            .width(Length::Fill)
            .height(Length::Fixed(TABLE_HEIGHT)),
    )
    .padding(10)
    .into()
}
