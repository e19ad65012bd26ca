mod common;

use biotope_lib::model::Cell;
use common::FieldBuilder;

#[test]
fn test_single_row_write_back_propagates_east() {
    let mut field = FieldBuilder::new().row("~**").eat_rate(1.0).build();
    field.process_all_cells();
    assert_field!(field, ["~~~"]);
}

#[test]
fn test_single_column_write_back_propagates_south() {
    let mut field = FieldBuilder::new()
        .row("~")
        .row("*")
        .row("*")
        .eat_rate(1.0)
        .build();
    field.process_all_cells();
    assert_field!(field, ["~", "~", "~"]);
}

#[test]
fn test_row_major_sweep_two_by_two() {
    let mut field = FieldBuilder::new()
        .row("$.")
        .row(".*")
        .eat_rate(1.0)
        .build();
    field.process_all_cells();
    assert_field!(field, ["$*", "**"]);
}

#[test]
fn test_fungus_turns_plant_into_food() {
    let mut field = FieldBuilder::new().row("%$$").eat_rate(1.0).build();
    field.process_all_cells();
    assert_field!(field, ["%.$"]);
}

#[test]
fn test_process_cell_rewrites_each_neighbor_once() {
    let mut field = FieldBuilder::new()
        .row(" $ ")
        .row("$*$")
        .row(" $ ")
        .eat_rate(1.0)
        .build();
    field.process_cell(1, 1);
    assert_field!(field, [" * ", "***", " * "]);
}

#[test]
fn test_no_rates_means_no_change() {
    let mut field = FieldBuilder::new()
        .row("$.*~%")
        .row("%~*.$")
        .row(".....")
        .build();
    let before = common::snapshot(&field);
    for _ in 0..100 {
        assert!(field.process_all_cells().is_none());
    }
    assert_eq!(common::snapshot(&field), before);
}

#[test]
fn test_one_by_one_field_only_changes_by_spawn() {
    let mut field = FieldBuilder::new().row("$").eat_rate(1.0).build();
    for _ in 0..100 {
        field.process_all_cells();
    }
    assert_field!(field, ["$"]);

    let mut field = FieldBuilder::new()
        .row(" ")
        .eat_rate(1.0)
        .spawn_rate(1.0)
        .build();
    let spawn = field.process_all_cells().expect("spawn rate 1 always spawns");
    assert_eq!((spawn.row, spawn.col), (0, 0));
    assert_eq!(field.get(0, 0), Some(spawn.cell));
    assert_no_dead!(field);
}

#[test]
fn test_spawn_overwrites_exactly_one_cell() {
    let mut field = FieldBuilder::new()
        .filled(6, 4, Cell::Dead)
        .spawn_rate(1.0)
        .build();
    let spawn = field.process_all_cells().unwrap();
    assert_eq!(field.census().count(Cell::Dead), 23);
    assert_eq!(field.census().count(spawn.cell), 1);
}

#[test]
fn test_dimensions_survive_many_epochs() {
    let mut field = FieldBuilder::new()
        .filled(13, 7, Cell::Food)
        .eat_rate(0.5)
        .spawn_rate(0.5)
        .build();
    for _ in 0..200 {
        field.process_all_cells();
    }
    assert_eq!(field.width(), 13);
    assert_eq!(field.height(), 7);
    assert_eq!(field.rows().len(), 7);
    assert!(field.rows().all(|row| row.len() == 13));
}
