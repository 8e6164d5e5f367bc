use ekin::{search, validate_size, NewMax, SearchConfig, SearchError};
use std::io;

fn collect(config: SearchConfig) -> (Vec<(i8, usize)>, ekin::SearchSummary) {
    let mut rows = Vec::new();
    let summary = search(&config, |m: NewMax| {
        rows.push((m.new_max, m.iteration));
        Ok(())
    })
    .unwrap();
    (rows, summary)
}

#[test]
fn single_element_state_exhausts_quickly() {
    let (rows, summary) = collect(SearchConfig {
        size: 1,
        max_iterations: 100,
    });

    assert_eq!(rows, vec![(1, 0)]);
    assert!(summary.exhausted);
    assert_eq!(summary.iterations, 2);
    assert_eq!(summary.states_seen, 3);
    assert_eq!(summary.last_max, 1);
}

#[test]
fn two_element_state_first_maxima() {
    let (rows, summary) = collect(SearchConfig {
        size: 2,
        max_iterations: 3,
    });

    assert_eq!(rows, vec![(1, 0), (2, 2)]);
    assert!(!summary.exhausted);
    assert_eq!(summary.iterations, 3);
    assert_eq!(summary.last_max, 2);
}

#[test]
fn zero_iterations_records_nothing() {
    let (rows, summary) = collect(SearchConfig {
        size: 3,
        max_iterations: 0,
    });

    assert!(rows.is_empty());
    assert!(!summary.exhausted);
    assert_eq!(summary.states_seen, 1);
}

#[test]
fn maxima_strictly_increase() {
    let (rows, _) = collect(SearchConfig {
        size: 3,
        max_iterations: 12,
    });

    assert!(!rows.is_empty());
    for pair in rows.windows(2) {
        assert!(pair[1].0 > pair[0].0, "{:?}", rows);
        assert!(pair[1].1 >= pair[0].1, "{:?}", rows);
    }
}

#[test]
fn output_does_not_depend_on_thread_count() {
    let config = SearchConfig {
        size: 3,
        max_iterations: 10,
    };
    let run_with = |threads: usize| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
            .install(|| collect(config))
    };

    let single = run_with(1);
    let multi = run_with(4);

    assert_eq!(single, multi);
    assert_eq!(single, collect(config));
}

#[test]
fn invalid_sizes_are_rejected() {
    for size in [0, 17] {
        let err = search(
            &SearchConfig {
                size,
                max_iterations: 1,
            },
            |_| Ok(()),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidSize(s) if s == size));
    }
}

#[test]
fn record_failure_stops_search() {
    let mut calls = 0;
    let err = search(
        &SearchConfig {
            size: 2,
            max_iterations: 10,
        },
        |_| {
            calls += 1;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        },
    )
    .unwrap_err();

    assert!(matches!(err, SearchError::Record(_)));
    assert_eq!(calls, 1);
}

#[test]
fn size_validation_matches_search() {
    for size in [0, 17] {
        assert!(matches!(validate_size(size), Err(SearchError::InvalidSize(s)) if s == size));
    }
    for size in [1, 3, 16] {
        assert!(validate_size(size).is_ok());
    }
}
