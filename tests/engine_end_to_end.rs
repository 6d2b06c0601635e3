// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Algoscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Algoscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use tokio::task::{spawn_local, LocalSet};
use tokio::time::sleep;

use algoscope::exec::{Controller, Speed};
use algoscope::model::{CellKind, Coord, ElementStatus, Grid, Maze, SortArray, SortCounters};
use algoscope::pathfinding::{self, Algorithm, Outcome, SearchView};
use algoscope::session::{PathSession, SortSession};
use algoscope::sorting::{self, SortAlgorithm, SortView};

#[derive(Default)]
struct Trail {
    visits: Vec<Coord>,
    traces: Vec<Coord>,
    distance: Option<i64>,
}

impl SearchView for Trail {
    fn visit(&mut self, cell: Coord) {
        self.visits.push(cell);
    }

    fn trace(&mut self, cell: Coord, _progress: f64) {
        self.traces.push(cell);
    }

    fn visited_count(&mut self, _count: usize) {}

    fn stop_timer(&mut self) {}

    fn path_distance(&mut self, distance: i64) {
        self.distance = Some(distance);
    }
}

#[derive(Default)]
struct Tally {
    counters: SortCounters,
}

impl SortView for Tally {
    fn update(&mut self, _index: usize, _status: ElementStatus, _value: Option<u32>) {}

    fn swap(&mut self, _i: usize, _j: usize) {}

    fn counters(&mut self, counters: &SortCounters) {
        self.counters = *counters;
    }
}

fn endpoints(grid: &Grid) -> (Option<Coord>, Option<Coord>) {
    (grid.find(CellKind::Start), grid.find(CellKind::End))
}

#[rstest]
#[case(Algorithm::Dijkstra)]
#[case(Algorithm::AStar)]
#[case(Algorithm::DepthFirst)]
#[case(Algorithm::Bidirectional)]
#[tokio::test(start_paused = true)]
async fn every_search_walks_a_connected_path_through_the_spiral(#[case] algorithm: Algorithm) {
    let grid = Maze::Spiral.grid();
    let (start, end) = endpoints(&grid);
    let mut trail = Trail::default();
    let ctl = Controller::with_delay(Duration::from_millis(5));

    let outcome = pathfinding::run(algorithm, &grid, start, end, &mut trail, &ctl).await;
    let Outcome::Completed(result) = outcome else {
        panic!("search should complete, got {outcome:?}");
    };

    assert!(result.success);
    assert_eq!(result.path.first().copied(), start);
    assert_eq!(result.path.last().copied(), end);
    for pair in result.path.windows(2) {
        assert!(grid.neighbors(pair[0]).contains(&pair[1]), "{} -> {} is not a step", pair[0], pair[1]);
    }
    let unique: HashSet<_> = result.path.iter().collect();
    assert_eq!(unique.len(), result.path.len());
    assert_eq!(trail.distance, Some(46));
    assert_eq!(trail.traces.len(), result.path.len() - 2);
    assert!(trail.visits.iter().all(|&cell| grid.kind(cell) != Some(CellKind::Wall)));
}

#[rstest]
#[case(SortAlgorithm::Bubble)]
#[case(SortAlgorithm::Selection)]
#[case(SortAlgorithm::Shaker)]
#[case(SortAlgorithm::Merge)]
#[tokio::test(start_paused = true)]
async fn every_sort_orders_duplicates_and_reports_its_counters(#[case] algorithm: SortAlgorithm) {
    let values = [42, 7, 42, 300, 10, 7, 150, 11];
    let mut tally = Tally::default();
    let ctl = Controller::with_delay(Duration::from_millis(1));

    let report = sorting::run(algorithm, &values, &mut tally, &ctl).await.expect("not cancelled");

    assert_eq!(report.values, vec![7, 7, 10, 11, 42, 42, 150, 300]);
    assert!(report.verified);
    assert_eq!(tally.counters, report.counters);
    assert!(report.counters.comparisons > 0);
    assert!(!ctl.running().is_running());
}

#[tokio::test(start_paused = true)]
async fn sessions_share_one_local_set_like_the_tui() {
    LocalSet::new()
        .run_until(async {
            let mut path = PathSession::with_grid(Maze::Barriers.grid(), Duration::from_millis(10));
            path.select_algorithm(Algorithm::AStar);
            let mut sort = SortSession::with_array(
                SortArray::from_values([9, 4, 7, 1]),
                Speed::Fast,
                Duration::from_millis(100),
                StdRng::seed_from_u64(5),
            );

            let search = spawn_local(path.start().expect("maze has both endpoints"));
            let sorted = spawn_local(sort.start().expect("idle session"));
            sleep(Duration::from_millis(50)).await;
            assert!(path.is_running());
            assert!(sort.state().is_sorting());

            let outcome = search.await.expect("search task");
            let report = sorted.await.expect("sort task").expect("not cancelled");

            assert_eq!(outcome.result().map(|r| r.path_distance()), Some(22));
            assert_eq!(path.state().stats().path_distance, 22);
            assert_eq!(report.values, vec![1, 4, 7, 9]);
            assert_eq!(sort.state().array().values(), vec![1, 4, 7, 9]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn rerunning_after_reset_reproduces_the_same_search() {
    let mut session = PathSession::with_grid(Maze::Barriers.grid(), Duration::from_millis(10));

    let first = session.start().expect("endpoints placed").await;
    let painted = session.state().grid().to_ascii();
    session.reset();
    assert!(!session.state().grid().has_visited_or_path());
    let second = session.start().expect("endpoints placed").await;

    assert_eq!(first, second);
    assert_eq!(session.state().grid().to_ascii(), painted);
}
