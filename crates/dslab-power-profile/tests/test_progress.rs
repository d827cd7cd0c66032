use dslab_power_profile::progress::Progress;
use dslab_power_profile::schedule::Schedule;

#[test]
fn test_inclusive_bounds() {
    let schedule = Schedule::new(1, vec![2.], vec![5.], vec![0]);
    let power = vec![3.];
    let progress = Progress::new(&power[..], &schedule);

    assert_eq!(progress.get(2.), vec![3.]);
    assert_eq!(progress.get(3.5), vec![3.]);
    assert_eq!(progress.get(5.), vec![3.]);
    assert_eq!(progress.get(5.0001), vec![0.]);
    assert_eq!(progress.get(1.9999), vec![0.]);
}

#[test]
fn test_first_task_wins_at_shared_boundary() {
    let schedule = Schedule::new(1, vec![0., 2.], vec![2., 4.], vec![0, 0]);
    let progress = Progress::new(vec![1., 2.], &schedule);
    assert_eq!(progress.get(2.), vec![1.]);

    let schedule = Schedule::new(1, vec![2., 0.], vec![4., 2.], vec![0, 0]);
    let progress = Progress::new(vec![2., 1.], &schedule);
    assert_eq!(progress.get(2.), vec![2.]);
}

#[test]
fn test_several_cores() {
    let schedule = Schedule::new(3, vec![0., 1., 3.], vec![3., 2., 4.], vec![0, 1, 0]);
    let progress = Progress::new(vec![5., 7., 9.], &schedule);
    assert_eq!(progress.cores(), 3);

    let mut power = vec![-1.; 3];
    progress.compute(1.5, &mut power);
    assert_eq!(power, vec![5., 7., 0.]);
    progress.compute(3.5, &mut power);
    assert_eq!(power, vec![9., 0., 0.]);
    progress.compute(10., &mut power);
    assert_eq!(power, vec![0., 0., 0.]);
}

#[test]
fn test_concurrent_queries() {
    let schedule = Schedule::new(2, vec![0., 0.], vec![10., 5.], vec![0, 1]);
    let progress = Progress::new(vec![1., 2.], &schedule);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let progress = &progress;
                s.spawn(move || {
                    let mut power = vec![0.; 2];
                    progress.compute(i as f64 * 3., &mut power);
                    power
                })
            })
            .collect();
        let results: Vec<Vec<f64>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![vec![1., 2.], vec![1., 2.], vec![1., 0.], vec![1., 0.]]);
    });
}
