use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use veer_core::{Cell, CellKind, Grid, Heading};
use veer_paths::{CostModel, CostTable, Query, State, cells_on_optimal_paths, minimum_cost};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A bordered maze with random interior walls and distinct start and goal.
fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, wall_chance: f64) -> Grid {
    let mut kinds = vec![CellKind::Wall; rows * cols];
    let mut open = Vec::new();
    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            if !rng.random_bool(wall_chance) {
                kinds[r * cols + c] = CellKind::Empty;
                open.push(r * cols + c);
            }
        }
    }
    while open.len() < 2 {
        let i = rng.random_range(1..rows - 1) * cols + rng.random_range(1..cols - 1);
        if kinds[i] == CellKind::Wall {
            kinds[i] = CellKind::Empty;
            open.push(i);
        }
    }
    let s = rng.random_range(0..open.len());
    let mut e = rng.random_range(0..open.len() - 1);
    if e >= s {
        e += 1;
    }
    kinds[open[s]] = CellKind::Start;
    kinds[open[e]] = CellKind::Goal;
    Grid::new(rows, cols, kinds).unwrap()
}

/// Forward Dijkstra from `start`: cheapest cost to reach every state.
fn forward_costs(grid: &Grid, costs: CostModel, start: State) -> HashMap<State, u64> {
    let mut dist = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(start, 0);
    heap.push(Reverse((0u64, start)));
    let mut buf = Vec::new();
    while let Some(Reverse((d, s))) = heap.pop() {
        if dist.get(&s).is_some_and(|&best| d > best) {
            continue;
        }
        buf.clear();
        s.successors(grid, costs, &mut buf);
        for &(next, step) in &buf {
            let nd = d + step;
            if dist.get(&next).is_none_or(|&best| nd < best) {
                dist.insert(next, nd);
                heap.push(Reverse((nd, next)));
            }
        }
    }
    dist
}

/// Cells with some heading whose forward + backward cost equals the optimum.
fn brute_force_optimal_cells(grid: &Grid, costs: CostModel) -> BTreeSet<Cell> {
    let start = State::new(grid.start(), Heading::East);
    let table = CostTable::propagate(grid, grid.goal(), costs);
    let Some(best) = table.get(start) else {
        return BTreeSet::new();
    };
    forward_costs(grid, costs, start)
        .into_iter()
        .filter(|&(s, d)| table.get(s).is_some_and(|rest| d + rest == best))
        .map(|(s, _)| s.cell)
        .collect()
}

/// Assert every finite entry satisfies one-step Bellman optimality and every
/// missing entry has no finite successor.
fn assert_fixed_point(grid: &Grid, costs: CostModel, table: &CostTable) {
    let mut buf = Vec::new();
    for cell in grid.bounds() {
        for h in Heading::ALL {
            let s = State::new(cell, h);
            let entry = table.get(s);
            if cell == grid.goal() {
                assert_eq!(entry, Some(0), "goal {s}");
                continue;
            }
            if !grid.is_open(cell) {
                assert_eq!(entry, None, "wall {s}");
                continue;
            }
            buf.clear();
            s.successors(grid, costs, &mut buf);
            let relaxed = buf
                .iter()
                .filter_map(|&(next, step)| table.get(next).map(|rest| step + rest))
                .min();
            assert_eq!(entry, relaxed, "state {s}");
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn corridor_with_two_turns() {
    // 15x15, corridor along row 1 east, column 13 south, row 13 west.
    let n = 15;
    let mut kinds = vec![CellKind::Wall; n * n];
    let mut corridor = BTreeSet::new();
    for c in 1..=13 {
        corridor.insert(Cell::new(1, c));
        corridor.insert(Cell::new(13, c));
    }
    for r in 1..=13 {
        corridor.insert(Cell::new(r, 13));
    }
    for cell in &corridor {
        kinds[cell.row as usize * n + cell.col as usize] = CellKind::Empty;
    }
    kinds[n + 1] = CellKind::Start;
    kinds[13 * n + 1] = CellKind::Goal;
    let grid = Grid::new(n, n, kinds).unwrap();

    let advances = corridor.len() as u64 - 1;
    assert_eq!(advances, 36);
    assert_eq!(minimum_cost(&grid), Some(advances + 2000));
    assert_eq!(cells_on_optimal_paths(&grid), corridor);
}

#[test]
fn two_disjoint_equal_routes_are_unioned() {
    let grid = Grid::parse(
        "\
#######
#.....#
#S###E#
#.....#
#######",
    )
    .unwrap();
    assert_eq!(minimum_cost(&grid), Some(3006));

    let cells = cells_on_optimal_paths(&grid);
    let single_route = 7;
    assert_eq!(cells.len(), 12);
    assert!(cells.len() > single_route);
    assert!(cells.contains(&Cell::new(1, 3)));
    assert!(cells.contains(&Cell::new(3, 3)));
}

#[test]
fn enclosed_start_is_unreachable() {
    let grid = Grid::parse(
        "\
#######
#.###.#
##S#..#
#.###E#
#######",
    )
    .unwrap();
    let solution = Query::new(&grid).run();
    assert_eq!(solution.minimum_cost(), None);
    assert!(solution.optimal_cells().is_empty());
    assert!(solution.table().best_at(Cell::new(2, 4)).is_some());
}

// ---------------------------------------------------------------------------
// Properties over random mazes
// ---------------------------------------------------------------------------

#[test]
fn table_is_a_fixed_point() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..40 {
        let grid = random_grid(&mut rng, 9, 11, 0.3);
        for costs in [CostModel::default(), CostModel::new(3, 2).unwrap()] {
            let table = CostTable::propagate(&grid, grid.goal(), costs);
            assert_fixed_point(&grid, costs, &table);
            assert_eq!(table.stats().settled, table.reached());
        }
    }
}

#[test]
fn optimal_cells_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(16);
    for round in 0..60 {
        let grid = random_grid(&mut rng, 10, 10, 0.25);
        for costs in [CostModel::default(), CostModel::new(1, 1).unwrap()] {
            let expected = brute_force_optimal_cells(&grid, costs);
            let got = Query::new(&grid).with_costs(costs).run().optimal_cells();
            assert_eq!(got, expected, "round {round}, {costs}\n{grid}");
        }
    }
}

#[test]
fn optimal_cells_are_open_and_include_endpoints() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..30 {
        let grid = random_grid(&mut rng, 12, 8, 0.2);
        let cells = cells_on_optimal_paths(&grid);
        if cells.is_empty() {
            assert_eq!(minimum_cost(&grid), None);
            continue;
        }
        assert!(cells.contains(&grid.start()));
        assert!(cells.contains(&grid.goal()));
        assert!(cells.iter().all(|&c| grid.is_open(c)));
    }
}

#[test]
fn raising_turn_cost_never_lowers_minimum() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let grid = random_grid(&mut rng, 9, 9, 0.25);
        let mut previous: Option<(u64, u64, u64)> = None;
        // Turn costs exceed any simple route's advance count, so a total
        // decodes uniquely into (turns, advances).
        for turn in [100u32, 1_000, 10_000] {
            let costs = CostModel::new(1, turn).unwrap();
            let Some(total) = Query::new(&grid).with_costs(costs).run().minimum_cost() else {
                break;
            };
            let turns = total / turn as u64;
            let advances = total % turn as u64;
            if let Some((prev_total, prev_turns, prev_advances)) = previous {
                assert!(total >= prev_total);
                assert!(turns <= prev_turns, "{grid}");
                assert!(advances >= prev_advances, "{grid}");
            }
            previous = Some((total, turns, advances));
        }
    }
}
