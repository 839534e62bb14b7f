//! End-to-end scenarios through the loader, the solver and the Monte
//! Carlo orchestration.

use viamonte_core::prelude::*;

const SCENARIO: &str = "\
100
a b 10
b c 10
a c 30

a b 10
b c 10
a c 10
a
c
";

fn config(execution: Execution) -> SimulationConfig {
    SimulationConfig {
        trials: 50,
        execution,
        sampling: SpeedSampling::Recorded,
    }
}

#[test]
fn fixed_speeds_rank_detour_before_direct_street() {
    let scenario = read_scenario(SCENARIO.as_bytes()).unwrap();

    let ranked = run_simulation(
        scenario.network.graph(),
        &scenario.source,
        &scenario.destination,
        &config(Execution::Sequential),
    )
    .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].path, vec!["a", "b", "c"]);
    assert!((ranked[0].mean_minutes - 120.0).abs() < 1e-9);
    assert_eq!(ranked[1].path, vec!["a", "c"]);
    assert!((ranked[1].mean_minutes - 180.0).abs() < 1e-9);
}

#[test]
fn parallel_and_sequential_agree_under_fixed_speeds() {
    let scenario = read_scenario(SCENARIO.as_bytes()).unwrap();
    let graph = scenario.network.graph();

    let sequential = run_simulation(
        graph,
        &scenario.source,
        &scenario.destination,
        &config(Execution::Sequential),
    )
    .unwrap();
    let parallel = run_simulation(
        graph,
        &scenario.source,
        &scenario.destination,
        &config(Execution::Parallel {
            workers: 4,
            batch: 5,
        }),
    )
    .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn absent_destination_is_fatal_after_all_trials() {
    let scenario = read_scenario(SCENARIO.as_bytes()).unwrap();

    let result = run_simulation(
        scenario.network.graph(),
        &scenario.source,
        &"nowhere".to_owned(),
        &config(Execution::Sequential),
    );

    assert!(matches!(
        result,
        Err(Error::NoPathFound { source, destination })
            if source == "a" && destination == "nowhere"
    ));
}

#[test]
fn randomized_speeds_keep_path_times_within_bounds() {
    // one street, two possible speeds: every trial must land on one of the
    // two exact times, and the mean must sit between them
    let mut network = StreetNetwork::new(80.0);
    network.add_street("a", "b", 20.0, None);
    network.record_speeds("a", "b", [20.0, 40.0]).unwrap();

    let ranked = run_simulation(
        network.graph(),
        &"a".to_owned(),
        &"b".to_owned(),
        &SimulationConfig {
            trials: 300,
            execution: Execution::Sequential,
            sampling: SpeedSampling::Recorded,
        },
    )
    .unwrap();

    assert_eq!(ranked.len(), 1);
    let fast = 20.0 / 40.0 * 60.0; // 30 min
    let slow = 20.0 / 20.0 * 60.0; // 60 min
    assert!(ranked[0].mean_minutes >= fast && ranked[0].mean_minutes <= slow);
}
