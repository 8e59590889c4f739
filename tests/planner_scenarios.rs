//! End-to-end planner scenarios over the public API.
//!
//! These tests exercise the search through `OccupancyGrid` exactly as a
//! consumer would: build a grid, plan, inspect the returned route.

use marga_plan::{
    search, BlockedQuery, CellPoint, NodeList, OccupancyGrid, PlanningError, SearchNode,
};

fn cell(x: f32, y: f32) -> CellPoint {
    CellPoint::new(x, y)
}

#[test]
fn empty_grid_route_is_manhattan_plus_one() {
    let grid = OccupancyGrid::new(25, 14);
    let start = cell(3.0, 3.0);
    let target = cell(15.0, 7.0);

    let route = search(&grid, start, target).unwrap();

    assert_eq!(route.len() as f32, start.manhattan(&target) + 1.0);
    assert_eq!(route.first(), Some(target));
    assert_eq!(route.last(), Some(start));

    // Consecutive route cells are 4-neighbors.
    let cells = route.cells();
    for pair in cells.windows(2) {
        assert!((pair[0].manhattan(&pair[1]) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn start_equals_target_yields_single_cell() {
    let grid = OccupancyGrid::new(25, 14);
    let route = search(&grid, cell(9.0, 9.0), cell(9.0, 9.0)).unwrap();

    assert_eq!(route.len(), 1);
    assert_eq!(route.first(), Some(cell(9.0, 9.0)));
}

#[test]
fn straight_line_cells_in_target_to_start_order() {
    let grid = OccupancyGrid::new(5, 5);
    let route = search(&grid, cell(0.0, 0.0), cell(3.0, 0.0)).unwrap();

    assert_eq!(
        route.cells(),
        vec![
            cell(3.0, 0.0),
            cell(2.0, 0.0),
            cell(1.0, 0.0),
            cell(0.0, 0.0)
        ]
    );
}

#[test]
fn single_block_forces_detour() {
    let mut grid = OccupancyGrid::new(5, 5);
    grid.set_blocked(1, 0);

    let route = search(&grid, cell(0.0, 0.0), cell(2.0, 0.0)).unwrap();

    assert_eq!(route.len(), 5);
    assert!(!route.contains(cell(1.0, 0.0)));
    assert_eq!(route.first(), Some(cell(2.0, 0.0)));
    assert_eq!(route.last(), Some(cell(0.0, 0.0)));
}

#[test]
fn walled_in_target_reports_no_path() {
    let mut grid = OccupancyGrid::new(9, 9);
    grid.set_blocked(4, 3);
    grid.set_blocked(4, 5);
    grid.set_blocked(3, 4);
    grid.set_blocked(5, 4);

    let result = search(&grid, cell(0.0, 0.0), cell(4.0, 4.0));
    assert_eq!(result.unwrap_err(), PlanningError::NoPathFound);
}

#[test]
fn ascii_map_detour_avoids_every_wall() {
    let grid = OccupancyGrid::from_ascii(
        ".....#....\n\
         .....#....\n\
         .....#....\n\
         ..........\n\
         .....#....\n\
         .....#....\n",
    )
    .unwrap();

    let start = cell(1.0, 1.0);
    let target = cell(8.0, 1.0);
    let route = search(&grid, start, target).unwrap();

    for step in route.cells() {
        assert!(!grid.is_blocked(step));
    }
    // Wall column x=5 is open only at y=3: detour adds 2 cells each way.
    assert_eq!(route.len() as f32, start.manhattan(&target) + 4.0 + 1.0);
    assert!(route.contains(cell(5.0, 3.0)));
}

#[test]
fn no_path_is_an_error_not_an_empty_route() {
    let mut grid = OccupancyGrid::new(3, 1);
    grid.set_blocked(1, 0);

    let result = search(&grid, cell(0.0, 0.0), cell(2.0, 0.0));
    assert!(matches!(result, Err(PlanningError::NoPathFound)));
}

#[test]
fn route_surrenders_its_container() {
    let grid = OccupancyGrid::new(5, 5);
    let route = search(&grid, cell(0.0, 0.0), cell(2.0, 0.0)).unwrap();

    let steps: NodeList<SearchNode> = route.into_steps();
    assert_eq!(steps.len(), 3);
    // Path nodes carry (pos, g, h) copies with no parent links.
    for node in steps.iter() {
        assert!(node.parent().is_none());
    }
}
