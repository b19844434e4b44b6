//! Generic table renderer. Every tabular view feeds its rows, column specs,
//! and table state through `show`; sorting, selection, and paging behave
//! identically everywhere because they are this one implementation.

use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

use crate::table::{SortDirection, TableRow, TableState};
use crate::utils::format;

/// One column of a table view: header label, optional sort binding, and the
/// cell painter. Plain function pointers keep `ColumnSpec` const-friendly.
pub struct ColumnSpec<R: TableRow> {
    pub header: &'static str,
    pub sort_field: Option<R::Field>,
    pub min_width: f32,
    pub cell: fn(&mut Ui, &R),
}

/// Per-view chrome around the shared renderer.
pub struct TableConfig {
    pub id: &'static str,
    pub empty_message: &'static str,
}

pub fn show<R: TableRow>(
    ui: &mut Ui,
    state: &mut TableState<R>,
    rows: &[R],
    columns: &[ColumnSpec<R>],
    config: &TableConfig,
    loading: bool,
) {
    if rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            if loading {
                ui.spinner();
                ui.add_space(8.0);
                ui.label("Loading...");
            } else {
                ui.label(config.empty_message);
            }
        });
        return;
    }

    let visible = state.visible(rows);
    let visible_ids: Vec<&str> = visible.iter().map(|row| row.id()).collect();
    let offset = state.page_offset();
    let total_rows = rows.len();

    egui::TopBottomPanel::bottom(egui::Id::new(config.id).with("footer"))
        .show_inside(ui, |ui| {
            ui.add_space(4.0);
            render_footer(ui, state, visible_ids.len(), total_rows);
            ui.add_space(2.0);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(config.id)
            .show(ui, |ui| {
                render_table(ui, state, &visible, &visible_ids, offset, columns);
            });
    });
}

fn render_table<R: TableRow>(
    ui: &mut Ui,
    state: &mut TableState<R>,
    visible: &[&R],
    visible_ids: &[&str],
    offset: usize,
    columns: &[ColumnSpec<R>],
) {
    let all_selected = state.selection.all_selected(visible_ids);
    let indeterminate = state.selection.indeterminate(visible_ids);

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(28.0)) // select
        .column(Column::auto().at_least(44.0)); // ref

    for (i, spec) in columns.iter().enumerate() {
        let column = if i + 1 == columns.len() {
            Column::remainder().at_least(spec.min_width)
        } else {
            Column::auto().at_least(spec.min_width).resizable(true)
        };
        builder = builder.column(column);
    }

    builder
        .header(22.0, |mut header| {
            header.col(|ui| {
                let icon = if all_selected {
                    icons::CHECK_SQUARE
                } else if indeterminate {
                    icons::MINUS_SQUARE
                } else {
                    icons::SQUARE
                };
                if ui.add(egui::Button::new(icon).frame(false)).clicked() {
                    state.selection.toggle_all(visible_ids);
                }
            });
            header.col(|ui| {
                ui.strong("Ref");
            });
            for spec in columns {
                header.col(|ui| match spec.sort_field {
                    Some(field) => {
                        let arrow = match state.sort.direction_of(field) {
                            Some(SortDirection::Ascending) => icons::ARROW_UP,
                            Some(SortDirection::Descending) => icons::ARROW_DOWN,
                            None => icons::ARROWS_DOWN_UP,
                        };
                        let label = RichText::new(format!("{} {}", spec.header, arrow)).strong();
                        if ui.add(egui::Button::new(label).frame(false)).clicked() {
                            state.sort.toggle(field);
                        }
                    }
                    None => {
                        ui.strong(spec.header);
                    }
                });
            }
        })
        .body(|mut body| {
            // Tall enough for the two-line primary cells (name + email).
            let row_height = 36.0;

            for (i, row) in visible.iter().enumerate() {
                let selected = state.selection.contains(row.id());

                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        let mut checked = selected;
                        if ui.checkbox(&mut checked, "").changed() {
                            state.selection.set(row.id(), checked);
                        }
                    });
                    table_row.col(|ui| {
                        ui.weak(format::ref_number(offset + i + 1));
                    });
                    for spec in columns {
                        table_row.col(|ui| (spec.cell)(ui, row));
                    }
                });
            }
        });
}

fn render_footer<R: TableRow>(
    ui: &mut Ui,
    state: &mut TableState<R>,
    visible_count: usize,
    total_rows: usize,
) {
    ui.horizontal(|ui| {
        ui.weak(format!(
            "{} of {} row(s) selected",
            state.selection.len(),
            visible_count
        ));

        if let Some(pager) = &mut state.pager {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let at_first = pager.is_first();
                let at_last = pager.is_last(total_rows);

                if ui
                    .add_enabled(!at_last, egui::Button::new(icons::CARET_DOUBLE_RIGHT))
                    .clicked()
                {
                    pager.last(total_rows);
                }
                if ui
                    .add_enabled(!at_last, egui::Button::new(icons::CARET_RIGHT))
                    .clicked()
                {
                    pager.next(total_rows);
                }
                ui.label(format!(
                    "Page {} of {}",
                    pager.page(),
                    pager.total_pages(total_rows)
                ));
                if ui
                    .add_enabled(!at_first, egui::Button::new(icons::CARET_LEFT))
                    .clicked()
                {
                    pager.prev(total_rows);
                }
                if ui
                    .add_enabled(!at_first, egui::Button::new(icons::CARET_DOUBLE_LEFT))
                    .clicked()
                {
                    pager.first();
                }
            });
        }
    });
}
